use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindError {
    #[error("Setup parse error: {0}")]
    Parse(String),

    #[error("Profile schema error: {0}")]
    Schema(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WindResult<T> = Result<T, WindError>;
