use std::cell::Cell;
use std::fs;
use std::rc::Rc;

use headerize_session::{
	EditorError, HeaderResolver, HookEvent, HookResult, InsertionTrigger, ResolveError, Session,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

struct Stamp;

impl HeaderResolver for Stamp {
	fn resolve(&self, file_name: &str) -> Result<String, ResolveError> {
		Ok(match file_name.rsplit_once('.') {
			Some((_, "go")) => format!("// Copyright 2024\n// {file_name}\n"),
			_ => String::new(),
		})
	}
}

fn session_with_trigger() -> Session {
	let mut session = Session::new();
	InsertionTrigger::new(Stamp).register(session.hooks_mut());
	session
}

#[test]
fn new_file_gets_header_and_is_written() {
	let tmp = TempDir::new().unwrap();
	let path = tmp.path().join("cmd/tool/main.go");
	let mut session = session_with_trigger();

	let id = session.open(&path).unwrap();
	let buffer = session.buffer(id).unwrap();
	assert_eq!(buffer.lines(), vec!["// Copyright 2024", "// main.go", ""]);
	assert!(buffer.is_modified());

	session.write(id).unwrap();
	assert_eq!(
		fs::read_to_string(&path).unwrap(),
		"// Copyright 2024\n// main.go\n"
	);
	assert!(!session.buffer(id).unwrap().is_modified());
}

#[test]
fn existing_empty_file_is_not_treated_as_new() {
	let tmp = TempDir::new().unwrap();
	let path = tmp.path().join("empty.go");
	fs::write(&path, "").unwrap();
	let mut session = session_with_trigger();

	let id = session.open(&path).unwrap();
	assert!(session.buffer(id).unwrap().is_blank());
}

#[test]
fn existing_content_is_loaded_verbatim() {
	let tmp = TempDir::new().unwrap();
	let path = tmp.path().join("main.go");
	fs::write(&path, "package main\n").unwrap();
	let mut session = session_with_trigger();

	let id = session.open(&path).unwrap();
	assert_eq!(session.buffer(id).unwrap().lines(), vec!["package main", ""]);
}

#[test]
fn unsupported_type_stays_empty() {
	let tmp = TempDir::new().unwrap();
	let mut session = session_with_trigger();

	let id = session.open(tmp.path().join("notes.txt")).unwrap();
	assert_eq!(session.buffer(id).unwrap().lines(), vec![""]);
}

#[test]
fn scratch_buffer_cannot_be_written() {
	let mut session = session_with_trigger();
	let id = session.new_buffer(None);

	assert!(session.buffer(id).unwrap().is_blank());
	assert!(matches!(session.write(id), Err(EditorError::NoPath(_))));
}

#[test]
fn write_hooks_fire_after_saving() {
	let tmp = TempDir::new().unwrap();
	let writes = Rc::new(Cell::new(0));
	let mut session = Session::new();
	let counter = Rc::clone(&writes);
	session
		.hooks_mut()
		.subscribe("count_writes", HookEvent::BufferWrite, 0, move |ctx| {
			assert!(!ctx.buffer.is_modified());
			counter.set(counter.get() + 1);
			HookResult::Continue
		});

	let id = session.open(tmp.path().join("a.rs")).unwrap();
	session.write(id).unwrap();
	session.write(id).unwrap();
	assert_eq!(writes.get(), 2);
}

#[test]
fn unknown_buffer_is_an_error() {
	let mut session = Session::new();
	let id = session.new_buffer(None);
	session.close(id);

	assert!(matches!(session.write(id), Err(EditorError::UnknownBuffer(_))));
	assert_eq!(session.buffer_count(), 0);
}
