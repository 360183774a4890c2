//! Settings for the tessera mesh tools.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the
//! command line. Unknown or missing fields fall back to defaults so older and
//! newer config files keep loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, CubeSphereConfig, DebugConfig, ExportConfig, GridConfig, SplineConfig,
    default_config_dir,
};
pub use error::ConfigError;
