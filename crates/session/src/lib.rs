//! Editing session and header insertion for headerize.
//!
//! A [`Session`] owns [`Buffer`]s and a [`HookRegistry`]. Creating a buffer
//! for a file that does not exist yet emits [`HookEvent::BufferNew`]; an
//! [`InsertionTrigger`] registered on that event fills the empty buffer with
//! whatever its [`HeaderResolver`] returns for the file name.
//!
//! ```ignore
//! let mut session = Session::new();
//! InsertionTrigger::new(ProcessResolver::locate("headerize")?).register(session.hooks_mut());
//! let id = session.open("src/new_module.rs")?;
//! session.write(id)?;
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod hooks;
pub mod resolver;
mod session;
pub mod trigger;

pub use buffer::{Buffer, BufferId, Cursor};
pub use config::TriggerConfig;
pub use error::{EditorError, ResolveError, Result};
pub use hooks::{HookContext, HookEvent, HookHandle, HookRegistry, HookResult};
pub use resolver::{HeaderResolver, ProcessResolver};
pub use session::Session;
pub use trigger::{InsertionTrigger, SkipReason, TriggerOutcome, header_lines};
