use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttributeError {
    /// A declared-required attribute is absent from the node or empty.
    #[error("Attribute {name} is required for tag {tag_type}")]
    MissingRequired {
        name: String,
        tag_type: &'static str,
    },

    /// A parser rejected the raw value of an attribute.
    #[error("Invalid value {value:?} for attribute {name}: {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl AttributeError {
    pub fn invalid_value(name: &str, value: &str, reason: impl Into<String>) -> Self {
        AttributeError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AttributeError>;
