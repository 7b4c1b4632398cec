use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Origin and Destination cannot be the same.")]
    SameOriginAndDestination,
}

pub type BookingResult<T> = Result<T, BookingError>;
