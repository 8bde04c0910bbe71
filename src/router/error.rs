#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("path must be a non-empty string")]
    InvalidPath,

    #[error("unsupported http method: {0:?}")]
    UnsupportedMethod(String),

    #[error("path pattern already registered: {0:?}")]
    DuplicatePath(String),

    #[error("capture name appears more than once: {0:?}")]
    DuplicateParam(String),

    #[error("failed to build path matcher")]
    InvalidPattern(#[from] regex::Error),
}
