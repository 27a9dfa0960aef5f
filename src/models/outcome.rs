use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of showing one reference clip, as classified by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Fail,
}

impl Outcome {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Fail => "fail",
        }
    }

    pub fn from_db_str(s: &str) -> AppResult<Self> {
        match s {
            "success" => Ok(Outcome::Success),
            "fail" => Ok(Outcome::Fail),
            other => Err(AppError::InvalidOutcome(other.to_string())),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_db_str())
    }
}
