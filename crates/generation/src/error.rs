#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The provider rejected or timed out on the request.
    #[error("generation provider failed: {0}")]
    Provider(String),

    /// The provider answered, but not in the requested shape.
    #[error("invalid generation response: {0}")]
    InvalidResponse(String),

    /// A generation batch produced too few usable recipes to be worth
    /// keeping. Surfaced to the user as a hard failure, never auto-retried.
    #[error("only {produced} recipes were generated, more than {minimum} are required")]
    TooFewRecipes { produced: usize, minimum: usize },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Store(#[from] menowell_store::StoreError),
}

impl From<GenerationError> for menowell_shared::Error {
    fn from(value: GenerationError) -> Self {
        match value {
            GenerationError::TooFewRecipes { .. } => {
                menowell_shared::Error::User(value.to_string())
            }
            other => menowell_shared::Error::Server(other.to_string()),
        }
    }
}
