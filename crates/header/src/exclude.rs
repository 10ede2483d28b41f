//! Files and folders batch mode never touches.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::Result;

/// Folder names skipped anywhere in a path, compared case-insensitively.
///
/// Any folder whose name starts with a dot is skipped as well.
pub const EXCLUDED_FOLDERS: &[&str] = &[
	".git",
	".svn",
	".hg",
	"node_modules",
	"vendor",
	"target",
	"build",
	"dist",
	"bin",
	"out",
	".idea",
	".vscode",
	"__pycache__",
	"venv",
	"coverage",
	"docs",
];

/// File name globs that are never rewritten.
pub const EXCLUDED_FILE_PATTERNS: &[&str] = &[
	"*.log",
	"*.dat",
	"*.bak",
	"*.zip",
	"*.rar",
	"*.tar",
	"*.gz",
	"*.iml",
	"*.swp",
	"*~",
	".DS_Store",
	"Thumbs.db",
	".Spotlight-V100",
	"*.pyc",
	"*.class",
	"*.o",
	"*.a",
	"*.so",
	"*.dll",
	"*.exe",
	"*.bin",
	".*",
];

/// Compiled exclusion rules.
#[derive(Debug, Clone)]
pub struct Exclusions {
	files: GlobSet,
}

impl Exclusions {
	/// Builds the default rule set.
	pub fn new() -> Result<Self> {
		let mut builder = GlobSetBuilder::new();
		for pattern in EXCLUDED_FILE_PATTERNS {
			builder.add(Glob::new(pattern)?);
		}
		Ok(Self {
			files: builder.build()?,
		})
	}

	/// Whether a file name matches an excluded pattern.
	pub fn is_excluded_file(&self, name: &str) -> bool {
		self.files.is_match(name)
	}

	/// Whether a single folder name is excluded.
	pub fn is_excluded_folder(&self, name: &str) -> bool {
		(name.starts_with('.') && name != "." && name != "..") || is_named_folder(name)
	}

	/// Whether any directory component of `path` is excluded.
	pub fn in_excluded_folder(&self, path: &Path) -> bool {
		path.parent().is_some_and(|dir| {
			dir.components()
				.filter_map(|c| c.as_os_str().to_str())
				.any(|name| self.is_excluded_folder(name))
		})
	}

	/// Whether a file given directly on the command line should be skipped.
	///
	/// Only the named folders apply here: an absolute path may well pass
	/// through dot-folders such as `~/.config`.
	pub fn is_excluded_target(&self, path: &Path) -> bool {
		let excluded_name = path
			.file_name()
			.and_then(|n| n.to_str())
			.is_some_and(|name| self.is_excluded_file(name));
		excluded_name
			|| path.parent().is_some_and(|dir| {
				dir.components()
					.filter_map(|c| c.as_os_str().to_str())
					.any(is_named_folder)
			})
	}

	/// Whether `path`, relative to a walk root, should be skipped entirely.
	pub fn is_excluded(&self, path: &Path) -> bool {
		let excluded_name = path
			.file_name()
			.and_then(|n| n.to_str())
			.is_some_and(|name| self.is_excluded_file(name));
		excluded_name || self.in_excluded_folder(path)
	}
}

fn is_named_folder(name: &str) -> bool {
	EXCLUDED_FOLDERS
		.iter()
		.any(|folder| folder.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dotfiles_and_binaries_are_excluded() {
		let rules = Exclusions::new().unwrap();
		for name in [".env", ".bashrc", "app.log", "core.o", "notes.txt~", "Thumbs.db"] {
			assert!(rules.is_excluded_file(name), "{name} should be excluded");
		}
		assert!(!rules.is_excluded_file("main.rs"));
	}

	#[test]
	fn folders_match_case_insensitively() {
		let rules = Exclusions::new().unwrap();
		assert!(rules.in_excluded_folder(Path::new("proj/Node_Modules/x/index.js")));
		assert!(rules.in_excluded_folder(Path::new("proj/.cache/tool.py")));
		assert!(!rules.in_excluded_folder(Path::new("proj/src/main.rs")));
	}

	#[test]
	fn direct_targets_ignore_dot_folders_in_their_path() {
		let rules = Exclusions::new().unwrap();
		assert!(!rules.is_excluded_target(Path::new("/home/ada/.config/tool/main.rs")));
		assert!(rules.is_excluded_target(Path::new("/home/ada/proj/vendor/lib.rs")));
		assert!(rules.is_excluded_target(Path::new("/home/ada/proj/.envrc")));
	}

	#[test]
	fn relative_prefixes_are_not_dot_folders() {
		let rules = Exclusions::new().unwrap();
		assert!(!rules.is_excluded(Path::new("./src/main.rs")));
		assert!(!rules.is_excluded(Path::new("../other/src/main.rs")));
	}
}
