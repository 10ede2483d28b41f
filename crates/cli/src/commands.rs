//! Command handlers.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::NaiveDate;
use headerize_header::{
	ConfigStore, Exclusions, FileOutcome, Identity, Prompter, Resolution, header_for_name,
	init_global, load_or_init_global, process_single, process_tree, setup_repo,
};
use headerize_session::{
	HeaderResolver, InsertionTrigger, ProcessResolver, Session, TriggerConfig,
};
use tracing::{debug, info};

use crate::generator::{GeneratorResolver, existing_dir};

/// Current local date, used for copyright years.
pub fn today() -> NaiveDate {
	chrono::Local::now().date_naive()
}

/// Prints the header for `name` to stdout; prints nothing when the file gets
/// no header.
pub fn filetype(store: &ConfigStore, name: &str, today: NaiveDate) -> anyhow::Result<()> {
	let cwd = std::env::current_dir().context("cannot read working directory")?;
	if let Some(header) = header_for_name(name, &cwd, store, today)? {
		print!("{header}");
	}
	Ok(())
}

/// Adds headers to `path`, a file or a directory tree.
pub fn batch(
	store: &ConfigStore,
	path: &Path,
	today: NaiveDate,
	prompter: &mut impl Prompter,
) -> anyhow::Result<()> {
	if !path.exists() {
		bail!("path not found: {}", path.display());
	}

	let mut global = load_or_init_global(store, prompter)?;
	let resolution = if path.is_dir() {
		store.identity_in(path)?
	} else {
		store.identity_for(path)?
	};
	let identity: Identity = match resolution {
		Resolution::Repo(identity) | Resolution::Default(identity) => identity,
		Resolution::NeedsRepoSetup { git_root } => {
			setup_repo(store, &mut global, &git_root, today, prompter)?
		}
	};
	debug!(company = %identity.company_name, author = %identity.author_name, "using identity");

	let rules = Exclusions::new()?;
	if path.is_dir() {
		println!("Processing directory {}", path.display());
		let summary = process_tree(path, &identity, today, &rules);
		println!(
			"Done: {} header(s) added, {} file(s) already had one, {} failed.",
			summary.inserted, summary.already_had_header, summary.failed
		);
	} else {
		let message = match process_single(path, &identity, today, &rules)? {
			FileOutcome::Inserted => "header added",
			FileOutcome::AlreadyHasHeader => "already has a copyright header",
			FileOutcome::Unsupported => "unsupported file type",
			FileOutcome::Excluded => "excluded",
		};
		println!("{}: {message}", path.display());
	}
	Ok(())
}

/// Creates the global config, asking for the default company profile.
pub fn init(store: &ConfigStore, force: bool, prompter: &mut impl Prompter) -> anyhow::Result<()> {
	if !force && store.load_global()?.is_some() {
		println!(
			"Global config already exists at {} (use --force to replace it)",
			store.global_path().display()
		);
		return Ok(());
	}
	init_global(store, prompter)?;
	Ok(())
}

/// Options for [`new_file`].
#[derive(Debug, Default)]
pub struct NewFile {
	pub file: PathBuf,
	pub external: bool,
	pub resolver: Option<String>,
	pub config: Option<PathBuf>,
}

/// Opens `file` in a session with the insertion trigger registered and
/// writes it out if it did not exist.
pub fn new_file(store: ConfigStore, opts: NewFile, today: NaiveDate) -> anyhow::Result<()> {
	let config_path = opts.config.or_else(TriggerConfig::default_path);
	let mut config = match config_path {
		Some(path) => TriggerConfig::load(&path)?,
		None => TriggerConfig::default(),
	};
	if let Some(program) = opts.resolver {
		config.resolver = program;
	}

	let dir = existing_dir(&opts.file);
	let mut session = Session::new();
	if config.enabled {
		if opts.external {
			let resolver = ProcessResolver::from_config(&config).with_current_dir(&dir);
			debug!(program = %resolver.program().display(), "using external resolver");
			register(&mut session, resolver);
		} else {
			register(&mut session, GeneratorResolver::new(store, dir, today));
		}
	} else {
		info!("header insertion disabled by config");
	}

	let existed = opts.file.exists();
	let id = session.open(&opts.file)?;
	if existed {
		println!("{}: already exists, left untouched", opts.file.display());
		return Ok(());
	}

	session.write(id)?;
	let lines = session.buffer(id).map_or(0, |buffer| buffer.line_count());
	println!("{}: created ({lines} line(s))", opts.file.display());
	Ok(())
}

fn register<R: HeaderResolver + 'static>(session: &mut Session, resolver: R) {
	InsertionTrigger::new(resolver).register(session.hooks_mut());
}
