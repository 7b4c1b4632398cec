//! Domain crate for the Trip API
//!
//! Holds the business side of the two HTTP services: the sum calculator and
//! the simulated flight booking. Everything here is transport agnostic; the
//! HTTP layer lives in `tripapi-api`.

pub mod booking;
pub mod calculator;

// Re-export booking types
pub use booking::{
    BookingError, BookingId, BookingRequest, BookingResponse, BookingResult, BookingService,
    FixedRandomSource, Passenger, RandomSource, SeatClass, ThreadRngSource,
};

// Re-export calculator types
pub use calculator::{SumRequest, SumResponse, compute_sum};
