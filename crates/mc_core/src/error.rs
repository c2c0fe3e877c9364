use std::fmt;

#[derive(Debug)]
pub enum CoreError {
    InvalidMatchIndex { index: usize, len: usize },
    SerializationError(String),
    DeserializationError(String),
    DataError(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CoreError::InvalidMatchIndex { index, len } => {
                write!(f, "Invalid match index: {} (active fixture set has {} matches)", index, len)
            }
            CoreError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            CoreError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
            CoreError::DataError(msg) => write!(f, "Data error: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            CoreError::DeserializationError(err.to_string())
        } else {
            CoreError::SerializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
