//! Buffer: an open document as an ordered sequence of lines.
//!
//! Text is stored in a [`Rope`] and exposed line-wise with rope line
//! semantics: an empty buffer holds one empty line, and text ending in a
//! line break has a trailing empty line.

use std::fmt;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};

use ropey::Rope;

/// Identifies a buffer within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferId(pub u64);

impl fmt::Display for BufferId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Zero-based insertion point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
	/// Line index.
	pub line: usize,
	/// Column in chars.
	pub column: usize,
}

/// An open, editable document.
#[derive(Debug, Clone)]
pub struct Buffer {
	id: BufferId,
	text: Rope,
	path: Option<PathBuf>,
	cursor: Cursor,
	modified: bool,
}

impl Buffer {
	/// Creates an empty buffer.
	pub fn new(id: BufferId, path: Option<PathBuf>) -> Self {
		Self::from_rope(id, path, Rope::new())
	}

	/// Creates a buffer holding `text`.
	pub fn from_text(id: BufferId, path: Option<PathBuf>, text: &str) -> Self {
		Self::from_rope(id, path, Rope::from_str(text))
	}

	/// Creates a buffer from already loaded content.
	pub fn from_rope(id: BufferId, path: Option<PathBuf>, text: Rope) -> Self {
		Self {
			id,
			text,
			path,
			cursor: Cursor::default(),
			modified: false,
		}
	}

	pub fn id(&self) -> BufferId {
		self.id
	}

	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	pub fn set_path(&mut self, path: Option<PathBuf>) {
		self.path = path;
	}

	/// Base name of the associated path, without any directory.
	pub fn file_name(&self) -> Option<&str> {
		self.path
			.as_deref()?
			.file_name()?
			.to_str()
			.filter(|name| !name.is_empty())
	}

	pub fn cursor(&self) -> Cursor {
		self.cursor
	}

	/// Whether the content changed since it was loaded or last written.
	pub fn is_modified(&self) -> bool {
		self.modified
	}

	pub fn set_modified(&mut self, modified: bool) {
		self.modified = modified;
	}

	pub fn line_count(&self) -> usize {
		self.text.len_lines()
	}

	/// Whether the buffer is a single empty line, i.e. has no content at all.
	pub fn is_blank(&self) -> bool {
		self.text.len_chars() == 0
	}

	/// Content of line `idx` without its line break.
	pub fn line(&self, idx: usize) -> Option<String> {
		if idx >= self.line_count() {
			return None;
		}
		let mut line = self.text.line(idx).to_string();
		strip_line_break(&mut line);
		Some(line)
	}

	/// All lines in order, without line breaks.
	pub fn lines(&self) -> Vec<String> {
		self.text
			.lines()
			.map(|slice| {
				let mut line = slice.to_string();
				strip_line_break(&mut line);
				line
			})
			.collect()
	}

	/// Whole buffer content.
	pub fn text(&self) -> String {
		self.text.to_string()
	}

	/// Replaces lines `range` with `lines`, in order.
	///
	/// The range is clamped to the buffer. Lines after the range keep their
	/// position relative to the replacement.
	pub fn replace_lines<S: AsRef<str>>(&mut self, range: Range<usize>, lines: &[S]) {
		let total = self.line_count();
		let start = range.start.min(total);
		let end = range.end.clamp(start, total);

		let start_char = self.line_char(start);
		let end_char = self.line_char(end);

		let mut replacement = lines
			.iter()
			.map(AsRef::as_ref)
			.collect::<Vec<_>>()
			.join("\n");
		if end < total && !lines.is_empty() {
			replacement.push('\n');
		}

		self.text.remove(start_char..end_char);
		self.text.insert(start_char, &replacement);
		self.modified = true;
		self.clamp_cursor();
	}

	/// Inserts an empty line after `line` and moves the cursor onto it.
	pub fn open_line_below(&mut self, line: usize) {
		let line = line.min(self.line_count() - 1);
		let content_len = self.line(line).map_or(0, |l| l.chars().count());
		let at = self.text.line_to_char(line) + content_len;

		self.text.insert_char(at, '\n');
		self.modified = true;
		self.cursor = Cursor {
			line: line + 1,
			column: 0,
		};
	}

	/// Writes the content to `writer`.
	pub fn write_to<W: io::Write>(&self, writer: W) -> io::Result<()> {
		self.text.write_to(writer)
	}

	/// Char index where line `idx` starts; `line_count()` maps to the end.
	fn line_char(&self, idx: usize) -> usize {
		if idx >= self.line_count() {
			self.text.len_chars()
		} else {
			self.text.line_to_char(idx)
		}
	}

	fn clamp_cursor(&mut self) {
		let last = self.line_count() - 1;
		if self.cursor.line > last {
			self.cursor = Cursor {
				line: last,
				column: 0,
			};
		}
	}
}

fn strip_line_break(line: &mut String) {
	if line.ends_with('\n') {
		line.pop();
		if line.ends_with('\r') {
			line.pop();
		}
	} else if line.ends_with('\r') {
		line.pop();
	}
}
