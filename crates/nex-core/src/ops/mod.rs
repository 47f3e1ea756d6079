//! Package lifecycle operations.
//!
//! Each operation takes the engine [`Context`](crate::Context) and runs one
//! serial pipeline: nothing here spawns background work.

pub mod install;
pub mod remove;
pub mod resolve;
pub mod run;
pub mod search;
pub mod update;

pub use install::{HookStatus, InstallOutcome, install, is_installed};
pub use remove::remove;
pub use resolve::{resolve, resolve_installed};
pub use run::{Invocation, execute, prepare};
pub use search::search;
pub use update::{UpdateOutcome, update};
