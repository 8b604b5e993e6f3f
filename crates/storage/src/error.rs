use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Store unavailable")]
    Unavailable,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Roster file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown operative: {0}")]
    UnknownOperative(String),

    #[error("Submitter name must not be empty")]
    EmptySubmitterName,

    #[error("Evidence payload must not be empty")]
    EmptyEvidence,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True for intake rejections caused by the submitted data itself,
    /// as opposed to store-level failures.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            StorageError::UnknownOperative(_)
                | StorageError::EmptySubmitterName
                | StorageError::EmptyEvidence
        )
    }
}
