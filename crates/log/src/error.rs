//! Error handling for runval-log

/// Result type for logger setup
pub type LogResult<T> = Result<T, LogError>;

/// Why the logger could not be set up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// Filter directives did not parse.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// Offending directives
        filter: String,
        /// Parser message
        reason: String,
    },

    /// Unrecognized output format name.
    #[error("unknown log format: {0}")]
    UnknownFormat(String),

    /// A global subscriber was already installed.
    #[error("failed to install global subscriber: {0}")]
    Init(String),
}

impl LogError {
    /// Creates a [`Filter`](Self::Filter) error.
    pub fn filter(filter: impl Into<String>, reason: impl ToString) -> Self {
        Self::Filter {
            filter: filter.into(),
            reason: reason.to_string(),
        }
    }
}
