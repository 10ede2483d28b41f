//! Resolver mode: header text for a single file name, without prompting.

use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::{ConfigStore, Resolution};
use crate::error::{HeaderError, Result};
use crate::filetype::comment_style;
use crate::header::{DEFAULT_DESCRIPTION, generate_header};

/// Produces the header a new file called `name` in `cwd` should start with.
///
/// `Ok(None)` means the file gets no header: dotfiles and unsupported types.
/// Configuration that would need interactive setup is an error.
pub fn header_for_name(
	name: &str,
	cwd: &Path,
	store: &ConfigStore,
	today: NaiveDate,
) -> Result<Option<String>> {
	let path = Path::new(name);
	let is_dotfile = path
		.file_name()
		.and_then(|n| n.to_str())
		.is_some_and(|n| n.starts_with('.'));
	if is_dotfile || comment_style(path).is_none() {
		debug!(name, "no header for this file type");
		return Ok(None);
	}

	let identity = match store.identity_for(&cwd.join(path))? {
		Resolution::Repo(identity) | Resolution::Default(identity) => identity,
		Resolution::NeedsRepoSetup { git_root } => {
			return Err(HeaderError::RepoNotConfigured(git_root));
		}
	};
	Ok(generate_header(path, &identity, today, DEFAULT_DESCRIPTION))
}
