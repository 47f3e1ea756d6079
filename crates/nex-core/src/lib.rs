//! Nex engine.
//!
//! The package lifecycle lives here: resolving a short name against the
//! registry, cloning and recording installs, and dispatching a package's
//! commands to the right runtime. The CLI builds one [`Context`] in `main`
//! and threads it through every operation; nothing in this crate keeps
//! process-wide state.
//!
//! # Directory Layout
//!
//! ```text
//! ~/.nex/
//! ├── config.json           # user settings
//! ├── aliases.json          # shortcut -> author.name
//! ├── installed.json        # list of LocalInstallation
//! └── packages/
//!     └── <author.name>/    # cloned working tree
//!         └── manifest.json # verbatim registry manifest
//! ```

pub mod context;
pub mod error;
pub mod git;
pub mod http;
pub mod ops;
pub mod paths;
pub mod probe;
pub mod process;
pub mod registry;
pub mod reporter;
pub mod store;

pub use context::Context;
pub use error::{NexError, Result};
pub use paths::NexPaths;
pub use reporter::{NullReporter, Reporter};

/// User Agent string sent with every registry request
pub const USER_AGENT: &str = concat!("nex/", env!("CARGO_PKG_VERSION"));

/// Registry used when `registry_url` is not configured.
pub const DEFAULT_REGISTRY_URL: &str = "https://raw.githubusercontent.com/nexhq/nex/main/registry";
