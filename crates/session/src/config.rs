//! Plugin options for the insertion trigger.
//!
//! Read from `~/.config/headerize/editor.toml`. Every key is optional:
//!
//! ```toml
//! enabled = true
//! resolver = "headerize"
//! filename-flag = "--filetype"
//! timeout-ms = 2000
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};

/// File name of the plugin config inside `~/.config/headerize`.
pub const CONFIG_FILE: &str = "editor.toml";

/// Options controlling header insertion on new buffers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TriggerConfig {
	/// Whether new buffers get headers at all.
	pub enabled: bool,
	/// Resolver program, looked up on `PATH` when not a path.
	pub resolver: String,
	/// Flag that puts the resolver in single-file mode.
	pub filename_flag: String,
	/// Upper bound on a resolver run, in milliseconds.
	pub timeout_ms: u64,
}

impl Default for TriggerConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			resolver: "headerize".to_string(),
			filename_flag: "--filetype".to_string(),
			timeout_ms: 2000,
		}
	}
}

impl TriggerConfig {
	/// Parses TOML text.
	pub fn parse(input: &str, origin: &Path) -> Result<Self> {
		toml::from_str(input).map_err(|error| EditorError::Config {
			path: origin.to_path_buf(),
			error,
		})
	}

	/// Loads `path`; a missing file yields the defaults.
	pub fn load(path: &Path) -> Result<Self> {
		match fs::read_to_string(path) {
			Ok(text) => Self::parse(&text, path),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
			Err(error) => Err(EditorError::Io {
				path: path.to_path_buf(),
				error,
			}),
		}
	}

	/// `~/.config/headerize/editor.toml`, when a home directory exists.
	pub fn default_path() -> Option<PathBuf> {
		dirs::home_dir().map(|home| home.join(".config").join("headerize").join(CONFIG_FILE))
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}
}
