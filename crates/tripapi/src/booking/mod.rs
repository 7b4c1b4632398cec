pub mod error;
pub mod model;
pub mod random;
pub mod service;

pub use error::{BookingError, BookingResult};
pub use model::{BookingId, BookingRequest, BookingResponse, Passenger, SeatClass};
pub use random::{FixedRandomSource, RandomSource, ThreadRngSource};
pub use service::BookingService;
