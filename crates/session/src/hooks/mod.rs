//! Hook system for session events.
//!
//! Hooks let integrations react to buffer lifecycle events. Unlike a global
//! autocommand table, hooks are subscribed explicitly on a [`HookRegistry`]
//! owned by a session, and each subscription yields a [`HookHandle`] that can
//! later be passed to [`HookRegistry::unsubscribe`]:
//!
//! ```ignore
//! let handle = session.hooks_mut().subscribe("log_new", HookEvent::BufferNew, 100, |ctx| {
//!     tracing::info!(buffer = %ctx.buffer.id(), "new buffer");
//!     HookResult::Continue
//! });
//! ```

mod context;

use std::fmt;

pub use context::HookContext;
use tracing::{debug, trace};

/// Session events hooks can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
	/// A buffer was created for a file that does not exist yet, or without
	/// any file.
	BufferNew,
	/// A buffer was loaded from an existing file.
	BufferRead,
	/// A buffer was written to disk.
	BufferWrite,
}

impl HookEvent {
	/// Stable event name used in logs.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::BufferNew => "buffer:new",
			Self::BufferRead => "buffer:read",
			Self::BufferWrite => "buffer:write",
		}
	}
}

impl fmt::Display for HookEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Result of a hook execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookResult {
	/// Let later hooks run.
	#[default]
	Continue,
	/// Stop running hooks for this event.
	Cancel,
}

/// Token returned by [`HookRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookHandle(u64);

type HookFn = Box<dyn FnMut(&mut HookContext<'_>) -> HookResult>;

struct Subscription {
	handle: HookHandle,
	name: &'static str,
	event: HookEvent,
	priority: i16,
	handler: HookFn,
}

/// Ordered set of hook subscriptions.
///
/// Hooks run in ascending priority; equal priorities run in subscription
/// order.
#[derive(Default)]
pub struct HookRegistry {
	subscriptions: Vec<Subscription>,
	next_handle: u64,
}

impl HookRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Subscribes `handler` to `event`.
	pub fn subscribe<F>(
		&mut self,
		name: &'static str,
		event: HookEvent,
		priority: i16,
		handler: F,
	) -> HookHandle
	where
		F: FnMut(&mut HookContext<'_>) -> HookResult + 'static,
	{
		let handle = HookHandle(self.next_handle);
		self.next_handle += 1;

		let pos = self
			.subscriptions
			.partition_point(|s| s.priority <= priority);
		self.subscriptions.insert(
			pos,
			Subscription {
				handle,
				name,
				event,
				priority,
				handler: Box::new(handler),
			},
		);
		debug!(hook = name, %event, priority, "hook subscribed");
		handle
	}

	/// Removes a subscription. Returns `false` if it was already gone.
	pub fn unsubscribe(&mut self, handle: HookHandle) -> bool {
		let Some(pos) = self.subscriptions.iter().position(|s| s.handle == handle) else {
			return false;
		};
		let removed = self.subscriptions.remove(pos);
		debug!(hook = removed.name, event = %removed.event, "hook unsubscribed");
		true
	}

	/// Runs every hook subscribed to the context's event.
	///
	/// Returns [`HookResult::Cancel`] if any hook cancels; later hooks are
	/// skipped in that case.
	pub fn emit(&mut self, ctx: &mut HookContext<'_>) -> HookResult {
		let event = ctx.event;
		for sub in self.subscriptions.iter_mut().filter(|s| s.event == event) {
			trace!(hook = sub.name, %event, "running hook");
			if (sub.handler)(ctx) == HookResult::Cancel {
				debug!(hook = sub.name, %event, "hook cancelled event");
				return HookResult::Cancel;
			}
		}
		HookResult::Continue
	}

	/// Number of hooks subscribed to `event`.
	pub fn count_for(&self, event: HookEvent) -> usize {
		self.subscriptions.iter().filter(|s| s.event == event).count()
	}

	pub fn len(&self) -> usize {
		self.subscriptions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.subscriptions.is_empty()
	}
}

impl fmt::Debug for HookRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list()
			.entries(
				self.subscriptions
					.iter()
					.map(|s| (s.name, s.event, s.priority)),
			)
			.finish()
	}
}

#[cfg(test)]
mod tests;
