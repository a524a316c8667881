/// ID types for Staffboard entities
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Job posting identifier
///
/// Assigned by the record store as one more than the current maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    /// Create a job ID from its numeric value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` once the id space is exhausted
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// User identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Create a user ID from its numeric value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
