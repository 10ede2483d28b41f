//! Comment syntax per file type.

use std::path::Path;

/// How a file type writes comments, plus the shebang new files of that type
/// should start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
	/// Single-line comment marker.
	pub line: &'static str,
	/// Opening marker of a block comment.
	pub block_start: &'static str,
	/// Closing marker of a block comment.
	pub block_end: &'static str,
	/// Interpreter line for script types.
	pub shebang: Option<&'static str>,
}

impl CommentStyle {
	const fn hash(shebang: Option<&'static str>) -> Self {
		Self {
			line: "#",
			block_start: "#",
			block_end: "#",
			shebang,
		}
	}

	const C_LIKE: Self = Self {
		line: "//",
		block_start: "/*",
		block_end: "*/",
		shebang: None,
	};

	const PYTHON: Self = Self {
		line: "#",
		block_start: "\"\"\"",
		block_end: "\"\"\"",
		shebang: Some("#!/usr/bin/env python3"),
	};

	/// Whether the header is written as a run of line comments rather than a
	/// block comment.
	pub fn uses_line_comments(&self) -> bool {
		self.block_start == self.line
	}
}

/// Extension-less file names that still get a `#` header.
const BARE_NAMES: &[&str] = &["README", "LICENSE", "INSTALL", "MAKEFILE"];

/// Looks up the comment style for `path`.
///
/// Returns `None` for file types headerize does not handle.
pub fn comment_style(path: &Path) -> Option<CommentStyle> {
	let name = path.file_name()?.to_str()?;

	let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
		if name.contains('.') {
			return None;
		}
		let upper = name.to_ascii_uppercase();
		return BARE_NAMES
			.contains(&upper.as_str())
			.then(|| CommentStyle::hash(None));
	};

	let style = match ext.to_ascii_lowercase().as_str() {
		"py" => CommentStyle::PYTHON,
		"sh" | "bash" => CommentStyle::hash(Some("#!/usr/bin/env bash")),
		"c" | "bsv" | "rs" | "cpp" | "h" | "hpp" | "java" | "cs" | "go" | "js" | "ts" => {
			CommentStyle::C_LIKE
		}
		"yaml" | "yml" => CommentStyle::hash(None),
		_ => return None,
	};
	Some(style)
}
