//! `.clarity.toml` configuration.
//!
//! The nearest config file at or above the working directory is used; every
//! section is optional and falls back to built-in defaults.

mod core;
mod loader;

pub use self::core::{
    BenchmarksConfig, CalculatorsConfig, ClarityConfig, OutputConfig, RiskConfig, CONFIG_FILE_NAME,
    DEFAULT_BENCHMARKS_PATH, DEFAULT_CONFIG_TOML, DEFAULT_EBITDA_MARGIN,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config,
};
