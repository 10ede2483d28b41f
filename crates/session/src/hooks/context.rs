//! Hook context passed to handlers.

use super::HookEvent;
use crate::buffer::Buffer;

/// Event data handed to each hook.
///
/// Hooks receive the buffer mutably so they can edit it in place; the
/// session owns persistence.
pub struct HookContext<'a> {
	/// The event being processed.
	pub event: HookEvent,
	/// Buffer the event concerns.
	pub buffer: &'a mut Buffer,
}

impl<'a> HookContext<'a> {
	pub fn new(event: HookEvent, buffer: &'a mut Buffer) -> Self {
		Self { event, buffer }
	}
}
