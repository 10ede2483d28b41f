//! Header resolvers: where header text comes from.
//!
//! The trigger only sees [`HeaderResolver`]. [`ProcessResolver`] is the
//! production implementation and runs an external program; tests substitute
//! deterministic fakes.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::TriggerConfig;
use crate::error::ResolveError;

/// Maps a file name to the header text a new file of that name starts with.
pub trait HeaderResolver {
	/// Returns header text for `file_name`, or an empty string when there is
	/// no header for this kind of file.
	fn resolve(&self, file_name: &str) -> Result<String, ResolveError>;
}

impl<R: HeaderResolver + ?Sized> HeaderResolver for &R {
	fn resolve(&self, file_name: &str) -> Result<String, ResolveError> {
		(**self).resolve(file_name)
	}
}

impl<R: HeaderResolver + ?Sized> HeaderResolver for Box<R> {
	fn resolve(&self, file_name: &str) -> Result<String, ResolveError> {
		(**self).resolve(file_name)
	}
}

/// Polling interval while waiting for the child to exit.
const WAIT_POLL: Duration = Duration::from_millis(10);

/// Runs `<program> <flag> <file name>` and captures stdout.
///
/// Stdin is closed and stderr discarded. The child is killed if it has not
/// finished within the timeout.
#[derive(Debug, Clone)]
pub struct ProcessResolver {
	program: PathBuf,
	flag: String,
	timeout: Duration,
	current_dir: Option<PathBuf>,
}

impl ProcessResolver {
	/// Flag the `headerize` binary uses for single-file mode.
	pub const DEFAULT_FLAG: &'static str = "--filetype";
	pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

	pub fn new(program: impl Into<PathBuf>) -> Self {
		Self {
			program: program.into(),
			flag: Self::DEFAULT_FLAG.to_string(),
			timeout: Self::DEFAULT_TIMEOUT,
			current_dir: None,
		}
	}

	/// Resolves `name` on `PATH`.
	pub fn locate(name: &str) -> Result<Self, ResolveError> {
		which::which(name)
			.map(Self::new)
			.map_err(|error| ResolveError::NotFound {
				program: name.to_string(),
				error,
			})
	}

	/// Builds a resolver from plugin options.
	pub fn from_config(config: &TriggerConfig) -> Self {
		Self::new(&config.resolver)
			.with_flag(&config.filename_flag)
			.with_timeout(config.timeout())
	}

	pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
		self.flag = flag.into();
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Directory the program runs in; defaults to the current one.
	pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.current_dir = Some(dir.into());
		self
	}

	pub fn program(&self) -> &Path {
		&self.program
	}

	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	fn timed_out(&self, child: &mut std::process::Child) -> ResolveError {
		if let Err(e) = child.kill() {
			warn!(program = %self.program.display(), error = %e, "failed to kill resolver");
		}
		let _ = child.wait();
		ResolveError::Timeout {
			program: self.program.clone(),
			after: self.timeout,
		}
	}
}

impl HeaderResolver for ProcessResolver {
	fn resolve(&self, file_name: &str) -> Result<String, ResolveError> {
		let started = Instant::now();
		let deadline = started + self.timeout;

		let mut command = Command::new(&self.program);
		command
			.arg(&self.flag)
			.arg(file_name)
			.stdin(Stdio::null())
			.stdout(Stdio::piped())
			.stderr(Stdio::null());
		if let Some(dir) = &self.current_dir {
			command.current_dir(dir);
		}

		let mut child = command.spawn().map_err(|error| ResolveError::Spawn {
			program: self.program.clone(),
			error,
		})?;
		let Some(mut stdout) = child.stdout.take() else {
			let _ = child.kill();
			return Err(std::io::Error::other("resolver stdout was not captured").into());
		};

		// Read on a helper thread so a silent, hung child cannot block us
		// past the deadline.
		let (tx, rx) = mpsc::channel();
		thread::spawn(move || {
			let mut bytes = Vec::new();
			let result = stdout.read_to_end(&mut bytes).map(|_| bytes);
			let _ = tx.send(result);
		});

		let bytes = match rx.recv_timeout(self.timeout) {
			Ok(result) => result?,
			Err(_) => return Err(self.timed_out(&mut child)),
		};

		let status = loop {
			if let Some(status) = child.try_wait()? {
				break status;
			}
			if Instant::now() >= deadline {
				return Err(self.timed_out(&mut child));
			}
			thread::sleep(WAIT_POLL);
		};

		debug!(
			program = %self.program.display(),
			file = file_name,
			%status,
			elapsed_ms = started.elapsed().as_millis() as u64,
			"resolver finished"
		);
		if !status.success() {
			return Err(ResolveError::Exit {
				program: self.program.clone(),
				status,
			});
		}
		Ok(String::from_utf8(bytes)?)
	}
}
