use crate::EntityKind;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("{kind}/{id} not found")]
    NotFound { kind: EntityKind, id: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("invalid document: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl From<StoreError> for menowell_shared::Error {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound { kind, id } => {
                menowell_shared::Error::NotFound(format!("{kind}/{id}"))
            }
            other => menowell_shared::Error::Unknown(other.into()),
        }
    }
}
