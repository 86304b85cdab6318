//! Error types shared across the combcheck core library.
//!
//! All core operations are pure deterministic computations or single
//! external tool invocations; every failure is caused by invalid input or
//! a failing tool, never by a transient condition, so there is no retry
//! machinery here. Operations validate their inputs up front and fail
//! before producing any partial output.

use std::process::ExitStatus;
use thiserror::Error;

/// Custom error types for combcheck
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid frame rate: {0}")]
    InvalidRate(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Malformed flagged sequence: {0}")]
    MalformedSequence(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Failed waiting for command '{0}': {1}")]
    CommandWait(String, #[source] std::io::Error),

    #[error("Command '{cmd}' failed (status {status}): {stderr}")]
    CommandFailed {
        cmd: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("Video info error: {0}")]
    VideoInfoError(String),

    #[error("Invalid path: {0}")]
    PathError(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for combcheck core operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Creates a `CommandStart` error for the given tool.
pub fn command_start_error(cmd: impl Into<String>, error: std::io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), error)
}

/// Creates a `CommandWait` error for the given tool.
pub fn command_wait_error(cmd: impl Into<String>, error: std::io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), error)
}

/// Creates a `CommandFailed` error for the given tool.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed {
        cmd: cmd.into(),
        status,
        stderr: stderr.into(),
    }
}
