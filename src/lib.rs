pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::JsonFileStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::session::{Outcome, Session};
pub use domain::model::{Registry, Volume};
pub use domain::ports::Storage;
pub use utils::error::{ConverterError, ErrorSeverity, Result};
