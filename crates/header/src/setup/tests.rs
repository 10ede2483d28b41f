use std::collections::VecDeque;
use std::fs;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;
use crate::config::read_json;

/// Answers questions from a fixed script and records everything shown.
#[derive(Default)]
struct Script {
	answers: VecDeque<&'static str>,
	shown: Vec<String>,
}

impl Script {
	fn new(answers: &[&'static str]) -> Self {
		Self {
			answers: answers.iter().copied().collect(),
			shown: Vec::new(),
		}
	}
}

impl Prompter for Script {
	fn ask(&mut self, question: &str) -> Option<String> {
		self.shown.push(question.to_string());
		self.answers.pop_front().map(str::to_string)
	}

	fn say(&mut self, message: &str) {
		self.shown.push(message.to_string());
	}
}

fn day() -> NaiveDate {
	NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
}

fn seeded_store(tmp: &TempDir) -> (ConfigStore, GlobalConfig) {
	let store = ConfigStore::new(tmp.path().join("cfg"));
	let mut script = Script::new(&["Acme", "Ada", "ada@acme.test"]);
	let global = init_global(&store, &mut script).unwrap();
	(store, global)
}

#[test]
fn init_global_writes_single_default_profile() {
	let tmp = TempDir::new().unwrap();
	let (store, global) = seeded_store(&tmp);

	assert_eq!(global.default_company, "Acme");
	assert_eq!(store.load_global().unwrap(), Some(global));
}

#[test]
fn init_global_fails_when_input_runs_out() {
	let tmp = TempDir::new().unwrap();
	let store = ConfigStore::new(tmp.path().join("cfg"));
	let mut script = Script::new(&["Acme"]);

	assert!(matches!(
		init_global(&store, &mut script),
		Err(HeaderError::InputClosed)
	));
	assert!(!store.global_path().exists());
}

#[test]
fn existing_profile_is_saved_for_repository() {
	let tmp = TempDir::new().unwrap();
	let (store, mut global) = seeded_store(&tmp);
	let repo = tmp.path().join("repo");
	fs::create_dir_all(&repo).unwrap();
	fs::write(repo.join(".gitignore"), "target/\n").unwrap();

	let mut script = Script::new(&["9", "1"]);
	let identity = setup_repo(&store, &mut global, &repo, day(), &mut script).unwrap();

	assert_eq!(identity.company_name, "Acme");
	assert!(script.shown.iter().any(|l| l == "Invalid choice. Please try again."));
	assert_eq!(
		read_json::<Identity>(&repo.join(REPO_CONFIG_FILE)).unwrap(),
		Some(identity)
	);
	assert_eq!(
		fs::read_to_string(repo.join(".gitignore")).unwrap(),
		"target/\n\n# Ignore headerize private config\n.headerize.config\n"
	);
	assert_eq!(
		fs::read_to_string(repo.join(COPYRIGHT_FILE)).unwrap(),
		"# Copyright Notice\n\nCopyright (c) 2025 Acme. All rights reserved.\n"
	);
}

#[test]
fn gitignore_entry_is_added_once() {
	let tmp = TempDir::new().unwrap();
	let repo = tmp.path();
	fs::write(repo.join(".gitignore"), ".headerize.config\n").unwrap();
	let identity = Identity {
		company_name: "Acme".into(),
		author_name: "Ada".into(),
		author_email: "ada@acme.test".into(),
	};

	save_repo_identity(repo, &identity, day()).unwrap();
	save_repo_identity(repo, &identity, day()).unwrap();

	assert_eq!(
		fs::read_to_string(repo.join(".gitignore")).unwrap(),
		".headerize.config\n"
	);
}

#[test]
fn missing_gitignore_is_not_created() {
	let tmp = TempDir::new().unwrap();
	let (store, mut global) = seeded_store(&tmp);
	let repo = tmp.path().join("repo");
	fs::create_dir_all(&repo).unwrap();

	setup_repo(&store, &mut global, &repo, day(), &mut Script::new(&["1"])).unwrap();

	assert!(!repo.join(".gitignore").exists());
	assert!(repo.join(COPYRIGHT_FILE).exists());
}

#[test]
fn add_new_company_updates_global_config() {
	let tmp = TempDir::new().unwrap();
	let (store, mut global) = seeded_store(&tmp);
	let repo = tmp.path().join("repo");
	fs::create_dir_all(&repo).unwrap();

	// Menu: [1] Acme, [2] Add New Company, [3] Continue Without Company.
	let mut script = Script::new(&["2", "Initech", "Peter", "peter@initech.test"]);
	let identity = setup_repo(&store, &mut global, &repo, day(), &mut script).unwrap();

	assert_eq!(identity.company_name, "Initech");
	let saved = store.load_global().unwrap().unwrap();
	assert_eq!(saved.default_company, "Acme");
	assert!(saved.profiles.contains_key("Initech"));
}

#[test]
fn continue_without_company_saves_nothing() {
	let tmp = TempDir::new().unwrap();
	let (store, mut global) = seeded_store(&tmp);
	let repo = tmp.path().join("repo");
	fs::create_dir_all(&repo).unwrap();

	let mut script = Script::new(&["3", "Contractor Ltd", "", "me@contractor.test"]);
	let identity = setup_repo(&store, &mut global, &repo, day(), &mut script).unwrap();

	assert_eq!(
		identity,
		Identity {
			company_name: "Contractor Ltd".into(),
			author_name: "Ada".into(),
			author_email: "me@contractor.test".into(),
		}
	);
	assert!(!repo.join(REPO_CONFIG_FILE).exists());
	assert!(!repo.join(COPYRIGHT_FILE).exists());
}

#[test]
fn menu_lists_profiles_then_extra_choices() {
	let tmp = TempDir::new().unwrap();
	let (_, global) = seeded_store(&tmp);
	assert_eq!(
		repo_choices(&global),
		vec![
			RepoChoice::Existing("Acme".into()),
			RepoChoice::AddNew,
			RepoChoice::WithoutCompany,
		]
	);
}
