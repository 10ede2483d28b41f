//! Header text generation.

use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::config::Identity;
use crate::filetype::comment_style;

/// Description written when the caller has nothing better.
pub const DEFAULT_DESCRIPTION: &str = "A brief description of the file's purpose.";

/// Copyright statement stamped into headers and `COPYRIGHT.md`.
pub fn copyright_line(company: &str, year: i32) -> String {
	format!("Copyright (c) {year} {company}. All rights reserved.")
}

/// Builds the header comment for `path`.
///
/// Returns `None` when the file type has no known comment style. The text
/// always ends with a newline.
pub fn generate_header(
	path: &Path,
	identity: &Identity,
	today: NaiveDate,
	description: &str,
) -> Option<String> {
	let style = comment_style(path)?;

	let body = [
		format!(
			"Copyright: {}",
			copyright_line(&identity.company_name, today.year())
		),
		format!(
			"Author: {} <{}>",
			identity.author_name, identity.author_email
		),
		format!("Created on: {}", today.format("%Y-%m-%d")),
		format!("Description: {description}"),
	];

	let mut out = String::new();
	if style.uses_line_comments() {
		let marker = style.line;
		out.push_str(marker);
		out.push('\n');
		for line in &body {
			out.push_str(&format!("{marker} {line}\n"));
		}
		out.push_str(marker);
		out.push('\n');
	} else {
		out.push_str(style.block_start);
		out.push('\n');
		for line in &body {
			out.push_str(&format!(" {line}\n"));
		}
		out.push_str(style.block_end);
		out.push('\n');
	}
	Some(out)
}
