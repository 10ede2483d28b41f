use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "headerize")]
#[command(about = "Automated boilerplate copyright header insertion tool")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
/// Command-line arguments.
pub struct Cli {
	/// File or directory to process
	#[arg(default_value = ".")]
	pub path: PathBuf,

	/// Print the header for a file name (e.g., script.py) to stdout and exit
	#[arg(short = 'f', long = "filetype", visible_alias = "ft", value_name = "FILENAME")]
	pub filetype: Option<String>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Create the global config with a default company profile
	Init {
		/// Replace an existing global config
		#[arg(long)]
		force: bool,
	},
	/// Create a file, starting it with the header for its type
	New {
		/// File to create
		file: PathBuf,

		/// Ask an external resolver program instead of generating in-process
		#[arg(long)]
		external: bool,

		/// Resolver program to run with --external (overrides editor.toml)
		#[arg(long, value_name = "PROGRAM", requires = "external")]
		resolver: Option<String>,

		/// Plugin config file (defaults to ~/.config/headerize/editor.toml)
		#[arg(long, value_name = "PATH")]
		config: Option<PathBuf>,
	},
}

impl Cli {
	/// Parses `args`, accepting the single-dash `-ft NAME` spelling editor
	/// integrations pass for `--filetype NAME`.
	pub fn parse_compat<I, T>(args: I) -> Result<Self, clap::Error>
	where
		I: IntoIterator<Item = T>,
		T: Into<OsString>,
	{
		Self::try_parse_from(rewrite_short_filetype(args))
	}
}

/// Rewrites `-ft` and `-ft=NAME` to `--filetype`, up to a `--` separator.
fn rewrite_short_filetype<I, T>(args: I) -> Vec<OsString>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString>,
{
	let mut positional_only = false;
	args.into_iter()
		.map(Into::into)
		.map(|arg| {
			if positional_only {
				return arg;
			}
			match arg.to_str() {
				Some("--") => {
					positional_only = true;
					arg
				}
				Some("-ft") => OsString::from("--filetype"),
				Some(s) => match s.strip_prefix("-ft=") {
					Some(name) => OsString::from(format!("--filetype={name}")),
					None => arg,
				},
				None => arg,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_valid() {
		Cli::command().debug_assert();
	}

	#[test]
	fn bare_invocation_processes_current_directory() {
		let cli = Cli::try_parse_from(["headerize"]).unwrap();
		assert_eq!(cli.path, PathBuf::from("."));
		assert!(cli.filetype.is_none());
		assert!(cli.command.is_none());
	}

	#[test]
	fn filetype_flag_accepts_short_form() {
		let cli = Cli::try_parse_from(["headerize", "-f", "main.go"]).unwrap();
		assert_eq!(cli.filetype.as_deref(), Some("main.go"));
	}

	#[test]
	fn single_dash_ft_is_the_filetype_flag() {
		let cli = Cli::parse_compat(["headerize", "-ft", "main.go"]).unwrap();
		assert_eq!(cli.filetype.as_deref(), Some("main.go"));
		assert_eq!(cli.path, PathBuf::from("."));

		let cli = Cli::parse_compat(["headerize", "-ft=lib.rs"]).unwrap();
		assert_eq!(cli.filetype.as_deref(), Some("lib.rs"));
	}

	#[test]
	fn ft_after_separator_stays_positional() {
		let cli = Cli::parse_compat(["headerize", "--", "-ft"]).unwrap();
		assert_eq!(cli.path, PathBuf::from("-ft"));
		assert!(cli.filetype.is_none());
	}

	#[test]
	fn resolver_requires_external() {
		assert!(Cli::try_parse_from(["headerize", "new", "a.rs", "--resolver", "x"]).is_err());
		let cli =
			Cli::try_parse_from(["headerize", "new", "a.rs", "--external", "--resolver", "x"])
				.unwrap();
		assert!(matches!(
			cli.command,
			Some(Command::New { external: true, .. })
		));
	}
}
