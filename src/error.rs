#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    #[error("Invalid dataset: {0}")]
    Dataset(String),
}

impl CalcError {
    /// `true` for errors caused by the caller's input rather than the dataset
    /// or the environment.
    pub fn is_validation(&self) -> bool {
        matches!(self, CalcError::InvalidArgument(_) | CalcError::UnknownPeriod(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
