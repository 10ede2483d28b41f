//! Headless editing session: owns buffers and the hooks that react to them.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use ropey::Rope;
use tracing::{debug, info};

use crate::buffer::{Buffer, BufferId};
use crate::error::{EditorError, Result};
use crate::hooks::{HookContext, HookEvent, HookRegistry};

/// Open buffers plus the hook registry that observes them.
#[derive(Debug, Default)]
pub struct Session {
	buffers: BTreeMap<BufferId, Buffer>,
	hooks: HookRegistry,
	next_id: u64,
}

impl Session {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn hooks(&self) -> &HookRegistry {
		&self.hooks
	}

	pub fn hooks_mut(&mut self) -> &mut HookRegistry {
		&mut self.hooks
	}

	/// Creates an empty buffer and emits [`HookEvent::BufferNew`].
	pub fn new_buffer(&mut self, path: Option<PathBuf>) -> BufferId {
		let id = self.insert(|id| Buffer::new(id, path));
		self.emit(HookEvent::BufferNew, id);
		id
	}

	/// Opens `path`.
	///
	/// An existing file is loaded and emits [`HookEvent::BufferRead`]; a
	/// missing one becomes a new buffer as with [`Session::new_buffer`].
	pub fn open(&mut self, path: impl Into<PathBuf>) -> Result<BufferId> {
		let path = path.into();
		let file = match File::open(&path) {
			Ok(file) => file,
			Err(e) if e.kind() == io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "new file");
				return Ok(self.new_buffer(Some(path)));
			}
			Err(error) => return Err(EditorError::Io { path, error }),
		};

		let rope = Rope::from_reader(BufReader::new(file)).map_err(|error| EditorError::Io {
			path: path.clone(),
			error,
		})?;
		debug!(path = %path.display(), len = rope.len_bytes(), "file loaded");

		let id = self.insert(|id| Buffer::from_rope(id, Some(path), rope));
		self.emit(HookEvent::BufferRead, id);
		Ok(id)
	}

	pub fn buffer(&self, id: BufferId) -> Option<&Buffer> {
		self.buffers.get(&id)
	}

	pub fn buffer_mut(&mut self, id: BufferId) -> Option<&mut Buffer> {
		self.buffers.get_mut(&id)
	}

	/// Closes a buffer without writing it.
	pub fn close(&mut self, id: BufferId) -> Option<Buffer> {
		self.buffers.remove(&id)
	}

	pub fn buffer_count(&self) -> usize {
		self.buffers.len()
	}

	/// Writes a buffer to its path and emits [`HookEvent::BufferWrite`].
	///
	/// Parent directories are created as needed.
	pub fn write(&mut self, id: BufferId) -> Result<()> {
		let buffer = self.buffers.get(&id).ok_or(EditorError::UnknownBuffer(id))?;
		let path = buffer.path().ok_or(EditorError::NoPath(id))?.to_path_buf();
		let io_err = |error| EditorError::Io {
			path: path.clone(),
			error,
		};

		if let Some(parent) = path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(io_err)?;
		}
		let mut writer = BufWriter::new(File::create(&path).map_err(io_err)?);
		buffer.write_to(&mut writer).map_err(io_err)?;
		writer.flush().map_err(io_err)?;

		if let Some(buffer) = self.buffers.get_mut(&id) {
			buffer.set_modified(false);
		}
		info!(path = %path.display(), "written");
		self.emit(HookEvent::BufferWrite, id);
		Ok(())
	}

	fn insert(&mut self, make: impl FnOnce(BufferId) -> Buffer) -> BufferId {
		let id = BufferId(self.next_id);
		self.next_id += 1;
		self.buffers.insert(id, make(id));
		id
	}

	fn emit(&mut self, event: HookEvent, id: BufferId) {
		let Some(buffer) = self.buffers.get_mut(&id) else {
			return;
		};
		self.hooks.emit(&mut HookContext::new(event, buffer));
	}
}
