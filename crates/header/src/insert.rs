//! Batch mode: adding headers to files that already exist.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::config::Identity;
use crate::error::{HeaderError, Result};
use crate::exclude::Exclusions;
use crate::filetype::comment_style;
use crate::header::{DEFAULT_DESCRIPTION, generate_header};

/// Number of leading lines searched for an existing copyright notice.
const HEADER_SCAN_LINES: usize = 10;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
	/// Header written.
	Inserted,
	/// A copyright line is already near the top.
	AlreadyHasHeader,
	/// The file type has no comment style.
	Unsupported,
	/// Matches an exclusion rule.
	Excluded,
}

/// Totals for a tree walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
	/// Files that received a header.
	pub inserted: usize,
	/// Files skipped because they already had one.
	pub already_had_header: usize,
	/// Files that could not be read or written.
	pub failed: usize,
}

/// Whether `text` already carries a copyright notice in its first lines.
pub fn has_copyright(text: &str) -> bool {
	text.split_inclusive('\n')
		.take(HEADER_SCAN_LINES)
		.any(|line| line.to_lowercase().contains("copyright"))
}

/// Returns `text` with `header` placed on top.
///
/// An existing shebang stays on the first line. Files of a type with a
/// shebang convention that lack one get it added.
pub fn splice_header(text: &str, header: &str, shebang: Option<&str>) -> String {
	let mut out = String::with_capacity(text.len() + header.len() + 32);
	if text.starts_with("#!") {
		let split = text.find('\n').map_or(text.len(), |i| i + 1);
		let (first, rest) = text.split_at(split);
		out.push_str(first);
		if !first.ends_with('\n') {
			out.push('\n');
		}
		out.push_str(header);
		out.push_str(rest);
	} else {
		if let Some(shebang) = shebang {
			out.push_str(shebang);
			out.push('\n');
		}
		out.push_str(header);
		out.push_str(text);
	}
	out
}

/// Adds a header to one file unless it already has one.
pub fn process_file(path: &Path, identity: &Identity, today: NaiveDate) -> Result<FileOutcome> {
	let Some(style) = comment_style(path) else {
		return Ok(FileOutcome::Unsupported);
	};

	let text = fs::read_to_string(path).map_err(|e| HeaderError::io(path, e))?;
	if has_copyright(&text) {
		info!(path = %path.display(), "already has a header; skipping");
		return Ok(FileOutcome::AlreadyHasHeader);
	}

	let Some(header) = generate_header(path, identity, today, DEFAULT_DESCRIPTION) else {
		return Ok(FileOutcome::Unsupported);
	};
	let updated = splice_header(&text, &header, style.shebang);
	fs::write(path, updated).map_err(|e| HeaderError::io(path, e))?;

	info!(path = %path.display(), "inserted header");
	Ok(FileOutcome::Inserted)
}

/// Adds headers to every eligible file under `root`.
///
/// Per-file failures are logged and counted rather than aborting the walk.
pub fn process_tree(
	root: &Path,
	identity: &Identity,
	today: NaiveDate,
	rules: &Exclusions,
) -> TreeSummary {
	let mut summary = TreeSummary::default();
	let walker = WalkBuilder::new(root)
		.standard_filters(false)
		.filter_entry({
			let rules = rules.clone();
			move |entry| {
				let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
				!(is_dir
					&& entry.depth() > 0
					&& entry
						.file_name()
						.to_str()
						.is_some_and(|name| rules.is_excluded_folder(name)))
			}
		})
		.build();

	for entry in walker {
		let entry = match entry {
			Ok(entry) => entry,
			Err(e) => {
				warn!(error = %e, "walk error");
				summary.failed += 1;
				continue;
			}
		};
		if !entry.file_type().is_some_and(|t| t.is_file()) {
			continue;
		}

		let path = entry.path();
		if rules.is_excluded(path.strip_prefix(root).unwrap_or(path)) {
			debug!(path = %path.display(), "excluded");
			continue;
		}

		match process_file(path, identity, today) {
			Ok(FileOutcome::Inserted) => summary.inserted += 1,
			Ok(FileOutcome::AlreadyHasHeader) => summary.already_had_header += 1,
			Ok(FileOutcome::Unsupported | FileOutcome::Excluded) => {}
			Err(e) => {
				warn!(error = %e, "could not process file");
				summary.failed += 1;
			}
		}
	}
	summary
}

/// Single-file entry point that applies the exclusion rules first.
pub fn process_single(
	path: &Path,
	identity: &Identity,
	today: NaiveDate,
	rules: &Exclusions,
) -> Result<FileOutcome> {
	if rules.is_excluded_target(path) {
		info!(path = %path.display(), "matches an exclusion rule; ignoring");
		return Ok(FileOutcome::Excluded);
	}
	process_file(path, identity, today)
}
