pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::commands::CommandRunner;
#[cfg(feature = "cli")]
pub use config::{CliArgs, Command};
pub use config::{LogFormat, UtilsConfig};

pub use core::brand::{create_brand, BrandDescriptor, BrandTag, Branded, Unbrand, Unbranded};
pub use domain::model::Unknown;
pub use domain::ports::RandomSource;
pub use utils::error::{Result, UtilsError};
