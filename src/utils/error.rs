use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Invalid value for {field}: {value:?} ({reason})")]
    Validation {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Record {index} failed validation: {source}")]
    RecordValidation {
        index: usize,
        #[source]
        source: Box<RegistrarError>,
    },

    #[error("File format error: {0}")]
    Format(#[from] serde_json::Error),

    #[error("File access error: {0}")]
    FileAccess(#[from] std::io::Error),
}

impl RegistrarError {
    pub fn validation(field: &str, value: &str, reason: impl Into<String>) -> Self {
        RegistrarError::Validation {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistrarError::Validation { field, reason, .. } => {
                format!("The {} is not valid: {}.", field, reason)
            }
            RegistrarError::RecordValidation { index, source } => format!(
                "Record {} in the file is invalid. {}",
                index,
                source.user_friendly_message()
            ),
            RegistrarError::Format(_) => {
                "The data file does not match the expected JSON format.".to_string()
            }
            RegistrarError::FileAccess(_) => {
                "The data file could not be opened. Check that it exists and is not locked by another program."
                    .to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
