use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    /// Only produced for free-form unit tokens; parsed `add` commands always
    /// carry a known unit.
    #[error("Unsupported density unit: {unit}")]
    UnsupportedDensityUnit { unit: String },

    #[error("Invalid density value: {literal:?}")]
    InvalidDensityValue { literal: String },

    #[error("Density unit not found")]
    UnitNotFound,

    #[error("Invalid format for adding substance")]
    InvalidAddFormat,

    #[error("Invalid query format")]
    InvalidQueryFormat,

    #[error("Invalid mass value: {literal:?}")]
    InvalidMassValue { literal: String },

    #[error("Substance not found: {name}")]
    SubstanceNotFound { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error at {path}: {source}")]
    StorageError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt storage at {path}: {source}")]
    CorruptStorage {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad user input; the session keeps running.
    Low,
    High,
    Critical,
}

impl ConverterError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnsupportedDensityUnit { .. }
            | Self::InvalidDensityValue { .. }
            | Self::UnitNotFound
            | Self::InvalidAddFormat
            | Self::InvalidQueryFormat
            | Self::InvalidMassValue { .. }
            | Self::SubstanceNotFound { .. } => ErrorSeverity::Low,
            Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_)
            | Self::SerializationError(_)
            | Self::StorageError { .. }
            | Self::CorruptStorage { .. } => ErrorSeverity::Critical,
        }
    }

    /// The line printed back to the user at the prompt.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UnsupportedDensityUnit { .. } => "Unsupported density unit.".to_string(),
            Self::InvalidDensityValue { .. } => "Invalid density value.".to_string(),
            Self::UnitNotFound => "Density unit not found.".to_string(),
            Self::InvalidAddFormat => "Invalid format for adding substance.".to_string(),
            Self::InvalidQueryFormat => {
                "Invalid input format. Please use the format '250mg salt' or 'add substance density'."
                    .to_string()
            }
            Self::InvalidMassValue { literal } => format!(
                "Invalid mass value '{}'. Please use whole milligrams such as '250mg salt'.",
                literal
            ),
            Self::SubstanceNotFound { name } => {
                format!("Substance '{}' not found in the database.", name)
            }
            Self::IoError(e) => format!("Console I/O failed: {}", e),
            Self::SerializationError(e) => format!("Could not encode the database: {}", e),
            Self::StorageError { path, .. } => {
                format!("Could not access the substance database at '{}'.", path)
            }
            Self::CorruptStorage { path, .. } => {
                format!("The substance database at '{}' is not valid JSON.", path)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting for {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::UnsupportedDensityUnit { .. } | Self::UnitNotFound => {
                "Use one of g/mL, kg/L, oz/fl oz or lb/gal"
            }
            Self::InvalidDensityValue { .. } => "Write the density as a number, e.g. 'add salt 2.16g/mL'",
            Self::InvalidAddFormat => "Use 'add <substance> <density><unit>'",
            Self::InvalidQueryFormat | Self::InvalidMassValue { .. } => {
                "Use '<mass>mg <substance>', e.g. '250mg salt'"
            }
            Self::SubstanceNotFound { .. } => "Add it first with 'add <substance> <density><unit>'",
            Self::IoError(_) => "Check that standard input and output are available",
            Self::SerializationError(_) => "Check the densities held in memory",
            Self::StorageError { .. } => "Check that the database path exists and is writable",
            Self::CorruptStorage { .. } => {
                "Fix or remove the database file; it must be a JSON object of name to number"
            }
            Self::InvalidConfigValueError { .. } => "Check the command-line arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_recoverable() {
        assert_eq!(ConverterError::UnitNotFound.severity(), ErrorSeverity::Low);
        assert_eq!(
            ConverterError::SubstanceNotFound { name: "salt".to_string() }.severity(),
            ErrorSeverity::Low
        );

        let io = ConverterError::StorageError {
            path: "substances.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_user_friendly_messages() {
        assert_eq!(
            ConverterError::SubstanceNotFound { name: "sugar".to_string() }.user_friendly_message(),
            "Substance 'sugar' not found in the database."
        );
        assert_eq!(
            ConverterError::UnsupportedDensityUnit { unit: "stone".to_string() }
                .user_friendly_message(),
            "Unsupported density unit."
        );
        assert_eq!(
            ConverterError::InvalidAddFormat.user_friendly_message(),
            "Invalid format for adding substance."
        );
    }
}
