//! Moderation label value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Final moderation outcome for a piece of content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationLabel {
    /// Content may be published as-is
    Allowed,
    /// Content should be surfaced for human review
    Flag,
    /// Content must not be published
    Block,
}

impl ModerationLabel {
    /// String form used on the wire
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Allowed => "allowed",
            Self::Flag => "flag",
            Self::Block => "block",
        }
    }
}

impl fmt::Display for ModerationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allowed" => Ok(Self::Allowed),
            "flag" => Ok(Self::Flag),
            "block" => Ok(Self::Block),
            other => Err(DomainError::InvalidLabel(other.to_string())),
        }
    }
}
