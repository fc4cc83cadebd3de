//! ICAO station identifier
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Station identifier parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("station identifier should be 4 character long")]
    InvalidLength,
    #[error("station identifier should start with a letter")]
    InvalidPrefix,
    #[error("non alphanumeric station identifier")]
    NonAlphanumeric,
}

/// ICAO 4 character station identifier, like "KSAN".
/// First character is always a letter, the other three
/// are uppercase letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationId(String);

impl StationId {
    /// Returns station code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for StationId {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 {
            return Err(Error::InvalidLength);
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return Err(Error::NonAlphanumeric);
        }
        if !s.starts_with(|c: char| c.is_ascii_uppercase()) {
            return Err(Error::InvalidPrefix);
        }
        Ok(Self(s.to_string()))
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
