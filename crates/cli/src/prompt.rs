//! Terminal-backed setup prompts.

use std::io::{self, BufRead, Write};

use headerize_header::Prompter;

/// Asks questions on stdout and reads answers from stdin.
pub struct StdioPrompter<R> {
	input: R,
}

impl StdioPrompter<io::StdinLock<'static>> {
	pub fn stdin() -> Self {
		Self::new(io::stdin().lock())
	}
}

impl<R: BufRead> StdioPrompter<R> {
	pub fn new(input: R) -> Self {
		Self { input }
	}
}

impl<R: BufRead> Prompter for StdioPrompter<R> {
	fn ask(&mut self, question: &str) -> Option<String> {
		let mut stdout = io::stdout().lock();
		let _ = write!(stdout, "{question}");
		let _ = stdout.flush();

		let mut line = String::new();
		match self.input.read_line(&mut line) {
			Ok(0) | Err(_) => None,
			Ok(_) => Some(line.trim().to_string()),
		}
	}

	fn say(&mut self, message: &str) {
		println!("{message}");
	}
}
