//! Header generation for headerize.
//!
//! This crate knows how each supported file type writes comments, builds the
//! copyright header for a file, and keeps track of which company and author
//! a header credits:
//!
//! - [`filetype`]: extension to [`CommentStyle`] table
//! - [`header`]: header text for a path and [`Identity`]
//! - [`config`]: global profiles and per-repository identity
//! - [`setup`]: interactive first-run and repository setup
//! - [`resolve`]: non-interactive lookup used by editor integrations
//! - [`insert`] and [`exclude`]: batch insertion into existing files

pub mod config;
pub mod error;
pub mod exclude;
pub mod filetype;
pub mod header;
pub mod insert;
pub mod resolve;
pub mod setup;

pub use config::{ConfigStore, GlobalConfig, Identity, Profile, Resolution, find_git_root};
pub use error::{HeaderError, Result};
pub use exclude::Exclusions;
pub use filetype::{CommentStyle, comment_style};
pub use header::{DEFAULT_DESCRIPTION, copyright_line, generate_header};
pub use insert::{FileOutcome, TreeSummary, process_file, process_single, process_tree};
pub use resolve::header_for_name;
pub use setup::{Prompter, RepoChoice, init_global, load_or_init_global, setup_repo};
