//! headerize: copyright header insertion.
//!
//! - `headerize [PATH]` adds headers to existing files
//! - `headerize --filetype NAME` prints the header for a new file to stdout
//! - `headerize new FILE` creates a file starting with its header

mod cli;
mod commands;
mod generator;
mod prompt;

use cli::{Cli, Command};
use headerize_header::ConfigStore;
use tracing_subscriber::EnvFilter;

use crate::commands::NewFile;
use crate::prompt::StdioPrompter;

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "HEADERIZE_LOG";

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse_compat(std::env::args_os()).unwrap_or_else(|e| e.exit());
	init_tracing(&cli);

	let store = ConfigStore::from_home()?;
	let today = commands::today();

	if let Some(name) = cli.filetype.as_deref() {
		return commands::filetype(&store, name, today);
	}

	match cli.command {
		None => commands::batch(&store, &cli.path, today, &mut StdioPrompter::stdin()),
		Some(Command::Init { force }) => commands::init(&store, force, &mut StdioPrompter::stdin()),
		Some(Command::New {
			file,
			external,
			resolver,
			config,
		}) => commands::new_file(
			store,
			NewFile {
				file,
				external,
				resolver,
				config,
			},
			today,
		),
	}
}

/// Logs go to stderr. Resolver mode stays quiet by default because editors
/// capture everything the process prints.
fn init_tracing(cli: &Cli) {
	let default = if cli.verbose {
		"debug"
	} else if cli.filetype.is_some() {
		"warn"
	} else {
		"info"
	};
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
