pub mod attempt;
pub mod clip;
pub mod detection;
pub mod dog;
pub mod outcome;
pub mod posture;
pub mod session;
pub mod validated;
