//! Identifier and value types for the milestone entity.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Store-assigned primary key for a milestone document.
///
/// Backed by the store's BIGSERIAL key, but opaque to clients: every API
/// response renders it as a string, and path parameters are parsed back
/// through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(i64);

impl DocumentId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DocumentId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Milestone priority. Closed set; anything else is rejected at
/// deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Percent complete, bounded to `0..=100` at the type level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const MAX: u8 = 100;

    pub fn new(percent: u8) -> Result<Self, CoreError> {
        Self::try_from(percent)
    }

    /// Saturating constructor for trusted callers (fixtures, defaults).
    pub fn clamp(percent: u8) -> Self {
        Self(percent.min(Self::MAX))
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Progress {
    type Error = CoreError;

    fn try_from(percent: u8) -> Result<Self, Self::Error> {
        if percent <= Self::MAX {
            Ok(Self(percent))
        } else {
            Err(CoreError::Validation(format!(
                "progress must be between 0 and {}, got {percent}",
                Self::MAX
            )))
        }
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}
