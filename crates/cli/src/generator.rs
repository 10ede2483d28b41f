//! In-process header resolver.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use headerize_header::{ConfigStore, header_for_name};
use headerize_session::{HeaderResolver, ResolveError};

/// Resolves headers with the generator linked into this binary instead of
/// spawning `headerize --filetype`.
#[derive(Debug, Clone)]
pub struct GeneratorResolver {
	store: ConfigStore,
	dir: PathBuf,
	today: NaiveDate,
}

impl GeneratorResolver {
	/// Resolver for files created inside `dir`.
	pub fn new(store: ConfigStore, dir: impl Into<PathBuf>, today: NaiveDate) -> Self {
		Self {
			store,
			dir: dir.into(),
			today,
		}
	}
}

impl HeaderResolver for GeneratorResolver {
	fn resolve(&self, file_name: &str) -> Result<String, ResolveError> {
		header_for_name(file_name, &self.dir, &self.store, self.today)
			.map(Option::unwrap_or_default)
			.map_err(|e| ResolveError::Other(e.to_string()))
	}
}

/// Nearest ancestor of `path` that exists, for use as a working directory.
pub fn existing_dir(path: &Path) -> PathBuf {
	path.ancestors()
		.skip(1)
		.find(|dir| !dir.as_os_str().is_empty() && dir.is_dir())
		.map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
