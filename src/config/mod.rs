pub mod cli;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};

pub const DEFAULT_STORE_PATH: &str = "substances.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "substance-converter")]
#[command(about = "Convert a mass of a named substance into a volume")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_STORE_PATH, help = "Path of the substance database")]
    pub store: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("store", &self.store)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["substance-converter"]);
        assert_eq!(config.store, "substances.json");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_store_rejected() {
        let config = CliConfig::parse_from(["substance-converter", "--store", ""]);
        assert!(config.validate().is_err());
    }
}
