//! Configuration file loading for tokinfo
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TOKINFO_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./tokinfo.toml` or `./.tokinfo.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/tokinfo/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileGuidelinesConfig,
};
pub use loader::ConfigLoader;
