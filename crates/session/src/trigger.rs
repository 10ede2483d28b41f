//! Header insertion on new, empty buffers.
//!
//! The trigger runs once per [`HookEvent::BufferNew`]. It only ever touches a
//! buffer that is a single empty line, asks its [`HeaderResolver`] for text
//! keyed on the buffer's file name, and splices that text in with the cursor
//! on a fresh line below it.
//!
//! Insertion is fail-open: every way it can fail ends in
//! [`TriggerOutcome::Skipped`] with the buffer untouched, and nothing is
//! reported to the user beyond a debug log line.

use std::fmt;

use tracing::debug;

use crate::buffer::Buffer;
use crate::hooks::{HookEvent, HookHandle, HookRegistry, HookResult};
use crate::resolver::HeaderResolver;

/// Hook name used when the trigger is registered.
pub const HOOK_NAME: &str = "insert_header";
/// Priority the trigger registers at; runs before default-priority hooks.
pub const HOOK_PRIORITY: i16 = 50;

/// Why no header was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
	/// The buffer already has content.
	NotEligible,
	/// The buffer has no file name to key the header on.
	NoFilename,
	/// The resolver failed; treated as producing no header.
	ResolverUnavailable,
	/// The resolver produced no text.
	EmptyHeader,
}

impl SkipReason {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::NotEligible => "not-eligible",
			Self::NoFilename => "no-filename",
			Self::ResolverUnavailable => "resolver-unavailable",
			Self::EmptyHeader => "empty-header",
		}
	}
}

impl fmt::Display for SkipReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Result of one trigger run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
	/// The header was inserted.
	Inserted {
		/// Number of header lines, not counting the cursor line.
		lines: usize,
	},
	/// The buffer was left as it was.
	Skipped(SkipReason),
}

/// Inserts resolver output into new, empty buffers.
#[derive(Debug, Clone)]
pub struct InsertionTrigger<R> {
	resolver: R,
}

impl<R: HeaderResolver> InsertionTrigger<R> {
	pub fn new(resolver: R) -> Self {
		Self { resolver }
	}

	pub fn resolver(&self) -> &R {
		&self.resolver
	}

	/// Runs the trigger against `buffer`.
	///
	/// Never fails: any problem leaves the buffer untouched and is reported
	/// as [`TriggerOutcome::Skipped`].
	pub fn run(&self, buffer: &mut Buffer) -> TriggerOutcome {
		match self.insert(buffer) {
			Ok(lines) => {
				debug!(buffer = %buffer.id(), lines, "header inserted");
				TriggerOutcome::Inserted { lines }
			}
			Err(reason) => {
				debug!(buffer = %buffer.id(), %reason, "header insertion skipped");
				TriggerOutcome::Skipped(reason)
			}
		}
	}

	fn insert(&self, buffer: &mut Buffer) -> Result<usize, SkipReason> {
		if !buffer.is_blank() {
			return Err(SkipReason::NotEligible);
		}
		let file_name = buffer.file_name().ok_or(SkipReason::NoFilename)?.to_owned();

		// Fail-open: a broken resolver must never get in the way of editing.
		let output = self.resolver.resolve(&file_name).map_err(|error| {
			debug!(file = %file_name, %error, "header resolver failed");
			SkipReason::ResolverUnavailable
		})?;

		let lines = header_lines(&output).ok_or(SkipReason::EmptyHeader)?;
		buffer.replace_lines(0..1, &lines);
		// The rope may break lines on more than `\n` (lone `\r`, U+2028, ...),
		// so count header lines as the buffer sees them.
		let count = buffer.line_count();
		buffer.open_line_below(count - 1);
		Ok(count)
	}

	/// Subscribes the trigger to [`HookEvent::BufferNew`] on `hooks`.
	pub fn register(self, hooks: &mut HookRegistry) -> HookHandle
	where
		R: 'static,
	{
		hooks.subscribe(HOOK_NAME, HookEvent::BufferNew, HOOK_PRIORITY, move |ctx| {
			self.run(ctx.buffer);
			HookResult::Continue
		})
	}
}

/// Splits resolver output into buffer lines.
///
/// At most one trailing line break is dropped so the header does not end in
/// a spurious blank line. Returns `None` when nothing but whitespace is left.
pub fn header_lines(output: &str) -> Option<Vec<&str>> {
	let trimmed = output
		.strip_suffix('\n')
		.map(|s| s.strip_suffix('\r').unwrap_or(s))
		.unwrap_or(output);
	if trimmed.trim().is_empty() {
		return None;
	}
	Some(
		trimmed
			.split('\n')
			.map(|line| line.strip_suffix('\r').unwrap_or(line))
			.collect(),
	)
}
