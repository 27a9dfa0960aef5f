pub mod attempt;
pub mod backup;
pub mod clips;
pub mod config;
pub mod db;
pub mod dog;
pub mod export;
pub mod init;
pub mod log;
pub mod next;
pub mod seed;
pub mod session;
pub mod status;
pub mod validated;
