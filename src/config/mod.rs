#[cfg(feature = "cli")]
pub mod cli;
pub mod rules;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliArgs, Command};
pub use rules::{BrandRule, RuleSet};
pub use toml_config::{LogFormat, UtilsConfig};
