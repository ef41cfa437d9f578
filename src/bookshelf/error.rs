use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Book not found: {0}")]
    NotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed storage file: {0}")]
    Format(String),

    #[error("Unknown book status code: {0}")]
    InvalidStatus(i64),

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("No book ids left to assign")]
    IdsExhausted,

    #[error("Menu stack is empty")]
    EmptyStack,

    #[error("Input closed")]
    InputClosed,

    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    /// Errors a menu handler can report to the user and carry on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ShelfError::NotFound(_)
                | ShelfError::IdsExhausted
                | ShelfError::Io(_)
                | ShelfError::Serialization(_)
                | ShelfError::Pattern(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
