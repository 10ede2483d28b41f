//! Error types for the editing session.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

use crate::buffer::BufferId;

/// Errors from buffer and session operations.
#[derive(Debug, Error)]
pub enum EditorError {
	/// Error reading or writing a file.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path of the file involved.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The buffer has no path to write to.
	#[error("buffer {0} has no file name")]
	NoPath(BufferId),

	/// No buffer with this id is open.
	#[error("no buffer {0}")]
	UnknownBuffer(BufferId),

	/// The plugin config file is not valid TOML.
	#[error("invalid config {path}: {error}")]
	Config {
		/// Path of the config file.
		path: PathBuf,
		/// The underlying parse error.
		error: toml::de::Error,
	},
}

/// Why a header resolver produced no text.
#[derive(Debug, Error)]
pub enum ResolveError {
	/// The resolver program is not on `PATH`.
	#[error("resolver {program:?} not found: {error}")]
	NotFound {
		/// Program name looked up.
		program: String,
		/// The underlying lookup error.
		error: which::Error,
	},

	/// The resolver process could not be started.
	#[error("failed to start {program}: {error}")]
	Spawn {
		/// Program that failed to start.
		program: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Reading output or waiting for the process failed.
	#[error("resolver I/O error: {0}")]
	Io(#[from] std::io::Error),

	/// The resolver exited unsuccessfully.
	#[error("{program} exited with {status}")]
	Exit {
		/// Program that failed.
		program: PathBuf,
		/// Its exit status.
		status: ExitStatus,
	},

	/// The resolver did not finish in time and was killed.
	#[error("{program} timed out after {after:?}")]
	Timeout {
		/// Program that hung.
		program: PathBuf,
		/// The timeout that elapsed.
		after: Duration,
	},

	/// The resolver wrote something that is not UTF-8.
	#[error("resolver output is not UTF-8")]
	Utf8(#[from] std::string::FromUtf8Error),

	/// Any other failure reported by an in-process resolver.
	#[error("{0}")]
	Other(String),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, EditorError>;
