//! Profile configuration.
//!
//! Two JSON files drive who a header credits:
//!
//! - the global config at `~/.config/headerize/config.json`, holding every
//!   company profile and which one is the default;
//! - a per-repository `.headerize.config` at the git root, holding the
//!   identity chosen for that repository.
//!
//! Files outside a git repository use the default profile.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{HeaderError, Result};

/// Directory name under `~/.config`.
pub const APP_NAME: &str = "headerize";
/// Global config file name inside the config directory.
pub const GLOBAL_CONFIG_FILE: &str = "config.json";
/// Repository config file name at the git root.
pub const REPO_CONFIG_FILE: &str = ".headerize.config";

/// Who a header credits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
	/// Company named in the copyright line.
	pub company_name: String,
	/// Author name.
	pub author_name: String,
	/// Author email.
	pub author_email: String,
}

/// A saved company profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
	/// Company named in the copyright line.
	pub company_name: String,
	/// Author used when the profile is selected.
	pub default_author_name: String,
	/// Email used when the profile is selected.
	pub default_author_email: String,
}

impl Profile {
	/// The identity this profile stamps by default.
	pub fn identity(&self) -> Identity {
		Identity {
			company_name: self.company_name.clone(),
			author_name: self.default_author_name.clone(),
			author_email: self.default_author_email.clone(),
		}
	}
}

/// Contents of the global config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
	/// Key into `profiles` used outside repositories.
	pub default_company: String,
	/// Profiles keyed by company name.
	pub profiles: BTreeMap<String, Profile>,
}

impl GlobalConfig {
	/// Creates a config with a single profile that is also the default.
	pub fn with_default(profile: Profile) -> Self {
		let key = profile.company_name.clone();
		Self {
			default_company: key.clone(),
			profiles: BTreeMap::from([(key, profile)]),
		}
	}

	/// The default profile.
	pub fn default_profile(&self) -> Result<&Profile> {
		self.profiles
			.get(&self.default_company)
			.ok_or_else(|| HeaderError::MissingProfile(self.default_company.clone()))
	}
}

/// Outcome of looking up the identity for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	/// The repository's saved identity.
	Repo(Identity),
	/// Outside any repository; the default profile.
	Default(Identity),
	/// Inside a repository that has no `.headerize.config` yet.
	NeedsRepoSetup {
		/// Repository root.
		git_root: PathBuf,
	},
}

/// Locates and reads configuration files.
#[derive(Debug, Clone)]
pub struct ConfigStore {
	dir: PathBuf,
}

impl ConfigStore {
	/// Store rooted at `~/.config/headerize`.
	pub fn from_home() -> Result<Self> {
		let home = dirs::home_dir().ok_or(HeaderError::NoHome)?;
		Ok(Self::new(home.join(".config").join(APP_NAME)))
	}

	/// Store rooted at an explicit directory.
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	/// Directory holding the global config.
	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// Path of the global config file.
	pub fn global_path(&self) -> PathBuf {
		self.dir.join(GLOBAL_CONFIG_FILE)
	}

	/// Reads the global config, or `None` on first run.
	pub fn load_global(&self) -> Result<Option<GlobalConfig>> {
		read_json(&self.global_path())
	}

	/// Writes the global config, creating the directory if needed.
	pub fn save_global(&self, config: &GlobalConfig) -> Result<()> {
		fs::create_dir_all(&self.dir).map_err(|e| HeaderError::io(&self.dir, e))?;
		write_json(&self.global_path(), config)
	}

	/// Reads the global config, failing if it has not been created.
	pub fn require_global(&self) -> Result<GlobalConfig> {
		self.load_global()?
			.ok_or_else(|| HeaderError::Uninitialized(self.global_path()))
	}

	/// Works out which identity applies to a file at `path`.
	///
	/// Never prompts: a repository without a saved identity is reported as
	/// [`Resolution::NeedsRepoSetup`].
	pub fn identity_for(&self, path: &Path) -> Result<Resolution> {
		self.identity_in(path.parent().unwrap_or(Path::new(".")))
	}

	/// Like [`ConfigStore::identity_for`], for files inside directory `dir`.
	pub fn identity_in(&self, dir: &Path) -> Result<Resolution> {
		let global = self.require_global()?;

		let Some(git_root) = find_git_root(dir) else {
			debug!(default = %global.default_company, "outside git repository; using default profile");
			return Ok(Resolution::Default(global.default_profile()?.identity()));
		};

		match read_json::<Identity>(&git_root.join(REPO_CONFIG_FILE))? {
			Some(identity) => Ok(Resolution::Repo(identity)),
			None => Ok(Resolution::NeedsRepoSetup { git_root }),
		}
	}
}

/// Walks up from `start` to the nearest directory containing a `.git`
/// directory.
pub fn find_git_root(start: &Path) -> Option<PathBuf> {
	let start = if start.as_os_str().is_empty() {
		Path::new(".")
	} else {
		start
	};
	let absolute = start
		.canonicalize()
		.or_else(|_| std::path::absolute(start))
		.ok()?;
	absolute
		.ancestors()
		.find(|dir| dir.join(".git").is_dir())
		.map(Path::to_path_buf)
}

pub(crate) fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Option<T>> {
	let text = match fs::read_to_string(path) {
		Ok(text) => text,
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
		Err(e) => return Err(HeaderError::io(path, e)),
	};
	serde_json::from_str(&text)
		.map(Some)
		.map_err(|e| HeaderError::json(path, e))
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(value).map_err(|e| HeaderError::json(path, e))?;
	fs::write(path, text).map_err(|e| HeaderError::io(path, e))
}
