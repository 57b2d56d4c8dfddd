/// Shared error type used across all mccron crates.
///
/// Classifying and encoding a single field never fails; these variants
/// cover the layers around the codec (expressions, validation, preview,
/// configuration).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("expected {expected} fields ({layout}), got {found}")]
    FieldCount {
        layout: String,
        expected: usize,
        found: usize,
    },

    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("unsupported: {0}")]
    Unsupported(String),

    #[error("config: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
