use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::Display;

/// Booking reference in the form `BLK-XXXXXXXX` (uppercase hex)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(String);

impl BookingId {
    pub const PREFIX: &'static str = "BLK-";

    /// Build a reference from the first 8 hex digits of a random identifier
    pub fn from_reference(reference: uuid::Uuid) -> Self {
        let hex = reference.simple().to_string();
        Self(format!("{}{}", Self::PREFIX, hex[..8].to_uppercase()))
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fare tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SeatClass {
    #[default]
    Economy,
    Business,
    First,
}

impl SeatClass {
    /// Factor applied to the base fare
    pub fn price_multiplier(&self) -> f64 {
        match self {
            SeatClass::Economy => 1.0,
            SeatClass::Business => 2.5,
            SeatClass::First => 4.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A booking as submitted by the caller, already shape-checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub origin: String, // IATA code
    pub destination: String,
    pub date: NaiveDate,
    pub passenger: Passenger,
    #[serde(default)]
    pub seat_class: SeatClass,
}

impl BookingRequest {
    /// Origin and destination name the same airport, ignoring case
    pub fn has_same_endpoints(&self) -> bool {
        self.origin.to_uppercase() == self.destination.to_uppercase()
    }
}

/// Fabricated confirmation returned for a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub status: String,
    pub flight_number: String,
    pub seat: String,
    pub price: f64,
    pub message: String,
    pub request_details: BookingRequest,
}
