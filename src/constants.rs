//! App-wide constants.
//!
//! Centralises the tool name, config paths and environment variable names
//! so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "opdispatch";

/// Crate version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.opdispatch.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".opdispatch.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "opdispatch";

/// Log filter used when neither `OPDISPATCH_LOG` nor `--verbose` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "OPDISPATCH_FORMAT";
pub const ENV_FILTER_FROM: &str = "OPDISPATCH_FILTER_FROM";
pub const ENV_FILTER_TO: &str = "OPDISPATCH_FILTER_TO";
pub const ENV_LOG: &str = "OPDISPATCH_LOG";
