//! Shared models, parsing and configuration for the `netscan` workspace.
//!
//! Everything here is free of live network I/O except the local interface
//! lookup in [`network::interface`].

pub mod config;
pub mod error;
pub mod network;
pub mod report;
pub mod utils;

pub use tracing;

/// Logs a neutral status line.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Logs a completed step. Rendered with its own symbol by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "netscan::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
