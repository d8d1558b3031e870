use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Duplicate talent id: {id}")]
    DuplicateId { id: String },

    #[error("Duplicate talent slug: {slug}")]
    DuplicateSlug { slug: String },

    #[error("Invalid talent data in record '{record}', field '{field}' = '{value}': {reason}")]
    InvalidStaticData {
        record: String,
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid birth date '{value}': {source}")]
    InvalidBirthDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("No talent found with slug '{slug}'")]
    NotFound { slug: String },

    #[error("Roster parsing error: {message}")]
    RosterParseError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl RosterError {
    /// Authoring defects in the roster data, as opposed to runtime or lookup failures.
    pub fn is_data_defect(&self) -> bool {
        matches!(
            self,
            RosterError::DuplicateId { .. }
                | RosterError::DuplicateSlug { .. }
                | RosterError::InvalidStaticData { .. }
                | RosterError::InvalidBirthDate { .. }
                | RosterError::RosterParseError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::DuplicateId { id } => {
                format!("Two roster entries share the id '{}'", id)
            }
            RosterError::DuplicateSlug { slug } => {
                format!("Two roster entries share the slug '{}'", slug)
            }
            RosterError::InvalidStaticData { record, field, .. } => {
                format!("Roster entry '{}' has an invalid '{}' field", record, field)
            }
            RosterError::InvalidBirthDate { value, .. } => {
                format!("'{}' is not a valid birth date", value)
            }
            RosterError::NotFound { slug } => format!("Talent '{}' not found", slug),
            RosterError::RosterParseError { .. } => "The roster file could not be read".to_string(),
            RosterError::ConfigError { message } => format!("Configuration problem: {}", message),
            RosterError::IoError(e) => format!("File access failed: {}", e),
            RosterError::SerializationError(_) | RosterError::CsvError(_) => {
                "Could not write the output".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RosterError::DuplicateId { .. } | RosterError::DuplicateSlug { .. } => {
                "Give every [[talent]] entry a unique id and slug"
            }
            RosterError::InvalidStaticData { .. } => "Fix the highlighted field in the roster file",
            RosterError::InvalidBirthDate { .. } => "Use the YYYY-MM-DD format for birth dates",
            RosterError::NotFound { .. } => "Run with --slugs to list the available talent",
            RosterError::RosterParseError { .. } => {
                "Check the roster file for TOML syntax errors and unknown enum values"
            }
            RosterError::ConfigError { .. } => "Run with --help to see the accepted options",
            RosterError::IoError(_) => "Make sure the file exists and is readable",
            RosterError::SerializationError(_) | RosterError::CsvError(_) => {
                "Try another --format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
