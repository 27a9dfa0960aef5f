pub mod backup;
pub mod config;
pub mod detection;
pub mod dogs;
pub mod ledger;
pub mod log;
pub mod rotation;
pub mod seed;
