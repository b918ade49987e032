use lift_core::LiftError;
use lift_orders::OrderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Lift(#[from] LiftError),

    #[error("scenario error: {0}")]
    Orders(#[from] OrderError),

    #[error("driver error: {0}")]
    Driver(String),
}

pub type SimResult<T> = Result<T, SimError>;
