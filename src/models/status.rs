//! Expiry status of a completed training
//!
//! Derived from a completion's expiry date and a reference date; never stored.

use serde::Serialize;

/// How close a completion is to lapsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExpiryStatus {
    /// The expiry date is before the reference date
    #[serde(rename = "Expired")]
    Expired,
    /// The expiry date falls within one calendar month of the reference date
    #[serde(rename = "Expires soon")]
    ExpiringSoon,
    /// No expiry date, or it lies further out
    #[serde(rename = "Not expired")]
    NotExpired,
}

impl ExpiryStatus {
    /// Label written to reports
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::ExpiringSoon => "Expires soon",
            Self::NotExpired => "Not expired",
        }
    }

    /// Whether this status belongs in the expiry report
    #[must_use]
    pub const fn needs_attention(self) -> bool {
        !matches!(self, Self::NotExpired)
    }
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
