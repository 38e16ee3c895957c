use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Invalid configuration for {unit}: {reason}")]
    InvalidConfiguration { unit: &'static str, reason: String },

    #[error("Index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },

    #[error("No case study found for '{slug}'")]
    NotFound { slug: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate project id: {id}")]
    DuplicateProjectError { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl FolioError {
    pub fn invalid_configuration(unit: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            unit,
            reason: reason.into(),
        }
    }

    /// Whether the caller can retry with different input against the same unit.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::NotFound { .. })
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidConfiguration { .. } => {
                "Supply at least one item and a non-zero interval".to_string()
            }
            Self::OutOfRange { len, .. } => {
                format!("Choose an index between 0 and {}", len.saturating_sub(1))
            }
            Self::NotFound { .. } => "Run `folio slugs` to list known case studies".to_string(),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the portfolio file", field)
            }
            Self::DuplicateProjectError { .. } => "Give every project a unique id".to_string(),
            Self::IoError(_) => "Check that the portfolio file exists and is readable".to_string(),
            Self::TomlError(_) => "Check the portfolio file for TOML syntax errors".to_string(),
            Self::SerializationError(_) => "Retry without --json".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read portfolio file: {}", e),
            Self::TomlError(_) => "Portfolio file is not valid TOML".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
