use std::sync::Arc;

use super::{
    BookingError, BookingId, BookingRequest, BookingResponse, BookingResult, RandomSource,
};

/// Fare before the seat class multiplier is applied
pub const BASE_FARE: f64 = 150.0;

/// Two-letter carrier code prefixed to every flight number
pub const CARRIER_CODE: &str = "AZ";

pub const CONFIRMED_STATUS: &str = "confirmed";

pub const CONFIRMATION_MESSAGE: &str = "Flight booked successfully!";

/// Service layer for flight bookings
#[derive(Clone)]
pub struct BookingService {
    random: Arc<dyn RandomSource>,
}

impl BookingService {
    /// Create a new BookingService drawing its randomized fields from `random`
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Confirm a booking.
    ///
    /// The request is expected to have passed schema validation already;
    /// the only rule checked here is that origin and destination differ.
    pub fn create_booking(&self, request: BookingRequest) -> BookingResult<BookingResponse> {
        if request.has_same_endpoints() {
            return Err(BookingError::SameOriginAndDestination);
        }

        let booking_id = BookingId::from_reference(self.random.reference_id());
        let flight_number = format!("{}{}", CARRIER_CODE, self.random.flight_suffix());
        let price = BASE_FARE * request.seat_class.price_multiplier();
        let seat = format!("{}{}", self.random.seat_row(), self.random.seat_letter());

        Ok(BookingResponse {
            booking_id,
            status: CONFIRMED_STATUS.to_string(),
            flight_number,
            seat,
            price,
            message: CONFIRMATION_MESSAGE.to_string(),
            request_details: request,
        })
    }
}
