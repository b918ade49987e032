use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("request parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type OrderResult<T> = Result<T, OrderError>;
