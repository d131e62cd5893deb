//! # Safe-Area Error Types
//!
//! Misconfiguration surfaces here. Numerically degenerate input (a zero-sized
//! resolution) is not an error: it propagates into the anchors as-is.

use thiserror::Error;

use crate::tree::NodeId;

/// Errors that can occur while mapping a safe area.
#[derive(Error, Debug)]
pub enum SafeAreaError {
    /// A mapping pass ran with no target rectangle-transform assigned.
    #[error("no target rect transform assigned")]
    MissingTarget,

    /// A node id does not exist in the layout tree.
    #[error("node not found in layout tree: {0}")]
    UnknownNode(NodeId),

    /// Invalid configuration or device profile.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for safe-area operations.
pub type SafeAreaResult<T> = Result<T, SafeAreaError>;
