use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Group already exists: {0}")]
    GroupAlreadyExists(String),

    #[error("No such group: {0}")]
    GroupNotFound(String),

    #[error("Group {group} has no bookmark titled {title:?}")]
    BookmarkNotFound { group: String, title: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, VaultError>;
