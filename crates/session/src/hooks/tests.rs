use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::buffer::{Buffer, BufferId};

fn recorder(
	log: &Rc<RefCell<Vec<&'static str>>>,
	tag: &'static str,
	result: HookResult,
) -> impl FnMut(&mut HookContext<'_>) -> HookResult + 'static {
	let log = Rc::clone(log);
	move |_| {
		log.borrow_mut().push(tag);
		result
	}
}

#[test]
fn hooks_run_in_priority_then_subscription_order() {
	let log = Rc::new(RefCell::new(Vec::new()));
	let mut hooks = HookRegistry::new();
	hooks.subscribe("late", HookEvent::BufferNew, 200, recorder(&log, "late", HookResult::Continue));
	hooks.subscribe("early", HookEvent::BufferNew, 10, recorder(&log, "early", HookResult::Continue));
	hooks.subscribe("late2", HookEvent::BufferNew, 200, recorder(&log, "late2", HookResult::Continue));
	hooks.subscribe("other", HookEvent::BufferWrite, 0, recorder(&log, "other", HookResult::Continue));

	let mut buffer = Buffer::new(BufferId(1), None);
	let result = hooks.emit(&mut HookContext::new(HookEvent::BufferNew, &mut buffer));

	assert_eq!(result, HookResult::Continue);
	assert_eq!(*log.borrow(), vec!["early", "late", "late2"]);
	assert_eq!(hooks.count_for(HookEvent::BufferNew), 3);
}

#[test]
fn cancel_stops_later_hooks() {
	let log = Rc::new(RefCell::new(Vec::new()));
	let mut hooks = HookRegistry::new();
	hooks.subscribe("stop", HookEvent::BufferRead, 1, recorder(&log, "stop", HookResult::Cancel));
	hooks.subscribe("never", HookEvent::BufferRead, 2, recorder(&log, "never", HookResult::Continue));

	let mut buffer = Buffer::new(BufferId(1), None);
	let result = hooks.emit(&mut HookContext::new(HookEvent::BufferRead, &mut buffer));

	assert_eq!(result, HookResult::Cancel);
	assert_eq!(*log.borrow(), vec!["stop"]);
}

#[test]
fn unsubscribed_hooks_no_longer_run() {
	let log = Rc::new(RefCell::new(Vec::new()));
	let mut hooks = HookRegistry::new();
	let handle = hooks.subscribe("once", HookEvent::BufferNew, 0, recorder(&log, "once", HookResult::Continue));

	assert!(hooks.unsubscribe(handle));
	assert!(!hooks.unsubscribe(handle));
	assert!(hooks.is_empty());

	let mut buffer = Buffer::new(BufferId(1), None);
	hooks.emit(&mut HookContext::new(HookEvent::BufferNew, &mut buffer));
	assert!(log.borrow().is_empty());
}

#[test]
fn hooks_can_edit_the_buffer() {
	let mut hooks = HookRegistry::new();
	hooks.subscribe("stamp", HookEvent::BufferNew, 0, |ctx| {
		ctx.buffer.replace_lines(0..1, &["stamped"]);
		HookResult::Continue
	});

	let mut buffer = Buffer::new(BufferId(1), None);
	hooks.emit(&mut HookContext::new(HookEvent::BufferNew, &mut buffer));
	assert_eq!(buffer.text(), "stamped");
}
