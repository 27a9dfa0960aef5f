use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target body positions a dog can be validated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum Posture {
    #[serde(rename = "assis")]
    #[value(name = "assis")]
    Assis,
    #[serde(rename = "debout")]
    #[value(name = "debout")]
    Debout,
    #[serde(rename = "a_pieds")]
    #[value(name = "a_pieds")]
    APieds,
}

impl Posture {
    pub const ALL: [Posture; 3] = [Posture::Assis, Posture::Debout, Posture::APieds];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Posture::Assis => "assis",
            Posture::Debout => "debout",
            Posture::APieds => "a_pieds",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "assis" => Some(Posture::Assis),
            "debout" => Some(Posture::Debout),
            "a_pieds" => Some(Posture::APieds),
            _ => None,
        }
    }

    /// Lenient parsing for user and detector input ("Assis", "à pieds", "a-pieds").
    pub fn from_label(label: &str) -> AppResult<Self> {
        let normalized = label
            .trim()
            .to_lowercase()
            .replace('à', "a")
            .replace(['-', ' '], "_");

        Posture::from_db_str(&normalized).ok_or_else(|| AppError::InvalidPosture(label.to_string()))
    }
}

impl fmt::Display for Posture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_db_str())
    }
}
