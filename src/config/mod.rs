//! Configuration loading and merging
//!
//! The side configuration (assignee exclusion list, alternate identities,
//! internal domain) is read once from a YAML or TOML file and then overridden
//! by CLI arguments (CLI > File > Defaults).

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};
