//! Error types for header generation and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration or rewriting files.
#[derive(Debug, Error)]
pub enum HeaderError {
	/// Error reading or writing a file.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path of the file involved.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A JSON config file could not be parsed or serialized.
	#[error("invalid config {path}: {error}")]
	Json {
		/// Path of the config file.
		path: PathBuf,
		/// The underlying serde error.
		error: serde_json::Error,
	},

	/// The global config has not been created yet.
	#[error("no global config at {0}; run `headerize init` first")]
	Uninitialized(PathBuf),

	/// The repository has no `.headerize.config` and setup cannot prompt.
	#[error("repository at {0} is not set up; run `headerize` in a terminal to configure it")]
	RepoNotConfigured(PathBuf),

	/// The default company names a profile that does not exist.
	#[error("default company {0:?} has no profile")]
	MissingProfile(String),

	/// The home directory could not be determined.
	#[error("could not determine home directory")]
	NoHome,

	/// Interactive input ended before setup finished.
	#[error("input closed during setup")]
	InputClosed,

	/// An exclusion glob failed to compile.
	#[error("bad exclusion pattern: {0}")]
	Pattern(#[from] globset::Error),
}

impl HeaderError {
	pub(crate) fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			error,
		}
	}

	pub(crate) fn json(path: impl Into<PathBuf>, error: serde_json::Error) -> Self {
		Self::Json {
			path: path.into(),
			error,
		}
	}
}

/// Result type for header operations.
pub type Result<T> = std::result::Result<T, HeaderError>;
