use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the scanner's input and output boundaries.
///
/// Probe failures are deliberately absent: a refused or timed out connection
/// is a closed port, not an error.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid network '{input}': {reason}")]
    InvalidNetwork { input: String, reason: String },

    #[error("invalid port '{token}': {reason}")]
    InvalidPort { token: String, reason: String },

    #[error("could not write scan report to {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn invalid_network(input: &str, reason: impl ToString) -> Self {
        Self::InvalidNetwork {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_port(token: &str, reason: impl ToString) -> Self {
        Self::InvalidPort {
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }
}
