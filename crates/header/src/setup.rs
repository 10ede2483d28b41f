//! Interactive first-run and repository setup.
//!
//! Prompting goes through [`Prompter`] so the flows can be driven by a script
//! in tests and by the terminal in the binary.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::config::{ConfigStore, GlobalConfig, Identity, Profile, REPO_CONFIG_FILE, write_json};
use crate::error::{HeaderError, Result};
use crate::header::copyright_line;

/// Source of answers for setup questions.
pub trait Prompter {
	/// Asks `question` and returns the trimmed answer.
	///
	/// Returns `None` once input is exhausted.
	fn ask(&mut self, question: &str) -> Option<String>;

	/// Shows an informational line.
	fn say(&mut self, message: &str);
}

/// What to do for a repository that has no saved identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoChoice {
	/// Use one of the saved profiles.
	Existing(String),
	/// Create a profile and use it.
	AddNew,
	/// Enter an identity for this run only.
	WithoutCompany,
}

/// Comment line written above the `.gitignore` entry.
pub const GITIGNORE_COMMENT: &str = "# Ignore headerize private config";
/// File created at the repository root.
pub const COPYRIGHT_FILE: &str = "COPYRIGHT.md";

fn required(prompter: &mut impl Prompter, question: &str) -> Result<String> {
	prompter.ask(question).ok_or(HeaderError::InputClosed)
}

/// Asks for the default company and writes the first global config.
pub fn init_global(store: &ConfigStore, prompter: &mut impl Prompter) -> Result<GlobalConfig> {
	prompter.say(&format!(
		"First run: creating global config at {}",
		store.global_path().display()
	));
	let company_name = required(
		prompter,
		"Enter the name for your default company/profile (e.g., Acme Corp): ",
	)?;
	let default_author_name = required(prompter, "Enter your default Author Name: ")?;
	let default_author_email = required(prompter, "Enter your default Author Email: ")?;

	let config = GlobalConfig::with_default(Profile {
		company_name,
		default_author_name,
		default_author_email,
	});
	store.save_global(&config)?;
	info!(path = %store.global_path().display(), "global config saved");
	Ok(config)
}

/// Loads the global config, running first-run setup when it is missing.
pub fn load_or_init_global(
	store: &ConfigStore,
	prompter: &mut impl Prompter,
) -> Result<GlobalConfig> {
	match store.load_global()? {
		Some(config) => Ok(config),
		None => init_global(store, prompter),
	}
}

/// Menu entries in display order: saved profiles, then the two extra choices.
pub fn repo_choices(global: &GlobalConfig) -> Vec<RepoChoice> {
	global
		.profiles
		.keys()
		.cloned()
		.map(RepoChoice::Existing)
		.chain([RepoChoice::AddNew, RepoChoice::WithoutCompany])
		.collect()
}

fn choice_label(choice: &RepoChoice) -> &str {
	match choice {
		RepoChoice::Existing(name) => name,
		RepoChoice::AddNew => "Add New Company",
		RepoChoice::WithoutCompany => "Continue Without Company",
	}
}

fn pick_choice(global: &GlobalConfig, prompter: &mut impl Prompter) -> Result<RepoChoice> {
	let mut choices = repo_choices(global);
	prompter.say("Please select a company profile for this repository:");
	for (i, choice) in choices.iter().enumerate() {
		prompter.say(&format!("[{}] {}", i + 1, choice_label(choice)));
	}

	let question = format!("Enter choice (1-{}): ", choices.len());
	loop {
		let answer = required(prompter, &question)?;
		match answer.parse::<usize>() {
			Ok(n) if (1..=choices.len()).contains(&n) => return Ok(choices.swap_remove(n - 1)),
			_ => prompter.say("Invalid choice. Please try again."),
		}
	}
}

fn ask_with_default(prompter: &mut impl Prompter, label: &str, default: &str) -> Result<String> {
	let answer = required(prompter, &format!("Enter {label} (Default: {default}): "))?;
	Ok(if answer.is_empty() {
		default.to_string()
	} else {
		answer
	})
}

/// Runs repository setup for `git_root` and returns the identity to use.
///
/// Saving a choice writes `.headerize.config`, registers it in an existing
/// `.gitignore` and creates `COPYRIGHT.md`. Continuing without a company
/// saves nothing.
pub fn setup_repo(
	store: &ConfigStore,
	global: &mut GlobalConfig,
	git_root: &Path,
	today: NaiveDate,
	prompter: &mut impl Prompter,
) -> Result<Identity> {
	prompter.say(&format!("Repository setup at {}", git_root.display()));

	let identity = match pick_choice(global, prompter)? {
		RepoChoice::WithoutCompany => {
			let default = global.default_profile()?.clone();
			let company_name = required(prompter, "Enter Company Name for Copyright: ")?;
			let author_name =
				ask_with_default(prompter, "Author Name", &default.default_author_name)?;
			let author_email =
				ask_with_default(prompter, "Author Email", &default.default_author_email)?;
			return Ok(Identity {
				company_name,
				author_name,
				author_email,
			});
		}
		RepoChoice::AddNew => {
			let profile = Profile {
				company_name: required(prompter, "Enter NEW Company Name: ")?,
				default_author_name: required(prompter, "Enter Author Name: ")?,
				default_author_email: required(prompter, "Enter Author Email: ")?,
			};
			let identity = profile.identity();
			global
				.profiles
				.insert(profile.company_name.clone(), profile);
			store.save_global(global)?;
			info!(company = %identity.company_name, "added company profile");
			identity
		}
		RepoChoice::Existing(key) => {
			let profile = global
				.profiles
				.get(&key)
				.ok_or_else(|| HeaderError::MissingProfile(key.clone()))?;
			prompter.say(&format!("Selected existing profile: {key}"));
			profile.identity()
		}
	};

	save_repo_identity(git_root, &identity, today)?;
	prompter.say(&format!(
		"Repository config saved to {REPO_CONFIG_FILE}. Do not check this file into Git."
	));
	Ok(identity)
}

/// Persists `identity` for the repository and adds the companion files.
pub fn save_repo_identity(git_root: &Path, identity: &Identity, today: NaiveDate) -> Result<()> {
	write_json(&git_root.join(REPO_CONFIG_FILE), identity)?;
	ignore_repo_config(git_root)?;
	write_copyright_notice(git_root, &identity.company_name, today)?;
	Ok(())
}

fn ignore_repo_config(git_root: &Path) -> Result<()> {
	let path = git_root.join(".gitignore");
	let content = match fs::read_to_string(&path) {
		Ok(content) => content,
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
		Err(e) => return Err(HeaderError::io(&path, e)),
	};
	if content.contains(REPO_CONFIG_FILE) {
		return Ok(());
	}

	let mut file = fs::OpenOptions::new()
		.append(true)
		.open(&path)
		.map_err(|e| HeaderError::io(&path, e))?;
	write!(file, "\n{GITIGNORE_COMMENT}\n{REPO_CONFIG_FILE}\n").map_err(|e| HeaderError::io(&path, e))
}

fn write_copyright_notice(git_root: &Path, company: &str, today: NaiveDate) -> Result<()> {
	let path = git_root.join(COPYRIGHT_FILE);
	if path.exists() {
		return Ok(());
	}
	let text = format!(
		"# Copyright Notice\n\n{}\n",
		copyright_line(company, today.year())
	);
	fs::write(&path, text).map_err(|e| HeaderError::io(&path, e))?;
	info!(path = %path.display(), "created copyright notice");
	Ok(())
}

#[cfg(test)]
mod tests;
