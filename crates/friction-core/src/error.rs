use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("question {0} does not exist")]
    UnknownQuestion(usize),

    #[error("option {label:?} is not offered by question {index}")]
    UnknownOption { index: usize, label: String },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
