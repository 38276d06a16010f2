//! Error type shared by the pipeline stages.

use std::fmt;

/// Hard failures of the boundary pipeline.
///
/// Malformed input lines and a missing precession capability are not errors;
/// they are tolerated and logged.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryError {
    InvalidConfig { reason: String },
    Source { reason: String },
}

impl BoundaryError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Wrap a failure reported by a `BoundarySource` implementation.
    pub fn source(reason: impl Into<String>) -> Self {
        Self::Source {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid pipeline config: {reason}"),
            Self::Source { reason } => write!(f, "boundary source unreadable: {reason}"),
        }
    }
}

impl std::error::Error for BoundaryError {}
