//! Error types for pavolume
//!
//! Module-specific error types using thiserror for clear error propagation.
//! Every failure is fatal: the binary reports it on stderr and exits 1.

use thiserror::Error;

/// Convenience Result type using the pavolume Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pavolume
#[derive(Error, Debug)]
pub enum Error {
    /// Mainloop or context setup / server connection errors
    #[error("Could not connect to PulseAudio: {0}")]
    Connect(String),

    /// Mainloop iteration errors (including an unexpected quit)
    #[error("PulseAudio mainloop error: {0}")]
    Mainloop(String),

    /// Server reports no default sink
    #[error("No default sink configured on the server")]
    NoDefaultSink,

    /// Sink lookup by name returned nothing
    #[error("No such sink: {0}")]
    SinkNotFound(String),

    /// A server operation was cancelled or rejected
    #[error("PulseAudio operation failed: {0}")]
    Operation(String),

    /// Malformed volume argument
    #[error("Invalid volume argument: {0}")]
    InvalidVolume(String),

    /// Configuration file loading or validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}
