//! # runval-log
//!
//! Subscriber setup for runval binaries. Libraries in the workspace only
//! emit `tracing` events; this crate decides where they go.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use runval_log::{Config, Format};
//!
//! fn main() -> runval_log::LogResult<()> {
//!     runval_log::init_with(Config {
//!         level: "runval_validator=debug".into(),
//!         format: Format::Json,
//!         ..Config::default()
//!     })?;
//!
//!     runval_log::info!(rules = 3, "validator ready");
//!     Ok(())
//! }
//! ```
//!
//! ## Environment
//!
//! - `RUNVAL_LOG` (falling back to `RUST_LOG`): filter directives
//! - `RUNVAL_LOG_FORMAT`: `pretty`, `compact` or `json`

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format};
pub use error::{LogError, LogResult};

pub use tracing::{debug, error, info, trace, warn};

/// Environment variable holding the filter directives.
pub const LEVEL_ENV: &str = "RUNVAL_LOG";
/// Environment variable holding the output format.
pub const FORMAT_ENV: &str = "RUNVAL_LOG_FORMAT";

// ============================================================================
// Initialization Functions
// ============================================================================

/// Picks a configuration from the environment and build profile.
///
/// An explicit filter in the environment wins; otherwise debug builds get
/// [`Config::development`] and release builds [`Config::production`].
pub fn auto_init() -> LogResult<()> {
    let explicit = std::env::var_os(LEVEL_ENV).is_some() || std::env::var_os("RUST_LOG").is_some();
    if explicit {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Installs the default configuration.
pub fn init() -> LogResult<()> {
    init_with(Config::default())
}

/// Installs `config` as the global subscriber.
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}
