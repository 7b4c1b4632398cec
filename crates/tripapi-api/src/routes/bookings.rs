use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tripapi::{BookingRequest, BookingResponse, Passenger, SeatClass};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::AppState;
use crate::error::{ApiError, ErrorResponse, ValidationErrorResponse};
use crate::extract::ValidatedJson;

/// Fare tier DTO
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SeatClassDto {
    #[default]
    Economy,
    Business,
    First,
}

impl From<SeatClassDto> for SeatClass {
    fn from(dto: SeatClassDto) -> Self {
        match dto {
            SeatClassDto::Economy => SeatClass::Economy,
            SeatClassDto::Business => SeatClass::Business,
            SeatClassDto::First => SeatClass::First,
        }
    }
}

impl From<SeatClass> for SeatClassDto {
    fn from(seat_class: SeatClass) -> Self {
        match seat_class {
            SeatClass::Economy => SeatClassDto::Economy,
            SeatClass::Business => SeatClassDto::Business,
            SeatClass::First => SeatClassDto::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct PassengerDto {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    #[schema(example = "Ada", min_length = 1)]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    #[schema(example = "Lovelace", min_length = 1)]
    pub last_name: String,
    #[validate(
        email(message = "value is not a valid email address"),
        custom(function = "validate_email_domain")
    )]
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// The domain part must be a dotted name; `user@localhost` style addresses
/// are refused. Addresses without `@` are left to the `email` rule.
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        let mut error = ValidationError::new("email");
        error.message =
            Some("value is not a valid email address: the domain must contain a period".into());
        return Err(error);
    }

    Ok(())
}

impl From<PassengerDto> for Passenger {
    fn from(dto: PassengerDto) -> Self {
        Passenger {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
        }
    }
}

impl From<Passenger> for PassengerDto {
    fn from(passenger: Passenger) -> Self {
        Self {
            first_name: passenger.first_name,
            last_name: passenger.last_name,
            email: passenger.email,
        }
    }
}

/// Request to book a flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct BookingRequestDto {
    /// IATA code of the departure airport
    #[validate(length(equal = 3, message = "origin must be exactly 3 characters"))]
    #[schema(example = "JFK", min_length = 3, max_length = 3)]
    pub origin: String,
    /// IATA code of the arrival airport
    #[validate(length(equal = 3, message = "destination must be exactly 3 characters"))]
    #[schema(example = "LHR", min_length = 3, max_length = 3)]
    pub destination: String,
    #[schema(example = "2025-12-24")]
    pub date: NaiveDate,
    #[validate(nested)]
    pub passenger: PassengerDto,
    #[serde(default)]
    pub seat_class: SeatClassDto,
}

impl From<BookingRequestDto> for BookingRequest {
    fn from(dto: BookingRequestDto) -> Self {
        BookingRequest {
            origin: dto.origin,
            destination: dto.destination,
            date: dto.date,
            passenger: dto.passenger.into(),
            seat_class: dto.seat_class.into(),
        }
    }
}

impl From<BookingRequest> for BookingRequestDto {
    fn from(request: BookingRequest) -> Self {
        Self {
            origin: request.origin,
            destination: request.destination,
            date: request.date,
            passenger: request.passenger.into(),
            seat_class: request.seat_class.into(),
        }
    }
}

/// Booking confirmation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingResponseDto {
    #[schema(example = "BLK-1A2B3C4D", pattern = "^BLK-[0-9A-F]{8}$")]
    pub booking_id: String,
    #[schema(example = "confirmed")]
    pub status: String,
    #[schema(example = "AZ417", pattern = "^AZ[1-9][0-9]{2}$")]
    pub flight_number: String,
    #[schema(example = "12C")]
    pub seat: String,
    #[schema(example = 375.0)]
    pub price: f64,
    pub message: String,
    pub request_details: BookingRequestDto,
}

impl From<BookingResponse> for BookingResponseDto {
    fn from(response: BookingResponse) -> Self {
        Self {
            booking_id: response.booking_id.to_string(),
            status: response.status,
            flight_number: response.flight_number,
            seat: response.seat,
            price: response.price,
            message: response.message,
            request_details: response.request_details.into(),
        }
    }
}

/// Book a flight
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = BookingRequestDto,
    responses(
        (status = 201, description = "Booking confirmed", body = BookingResponseDto),
        (status = 400, description = "Origin and destination are the same", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ValidationErrorResponse)
    ),
    tag = "bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<BookingRequestDto>,
) -> Result<(StatusCode, Json<BookingResponseDto>), ApiError> {
    let response = state
        .booking_service
        .create_booking(request.into())
        .map_err(|e| {
            warn!("Booking rejected: {}", e);
            ApiError::from(e)
        })?;

    info!(
        "Booking {} confirmed: {} -> {} on {}, flight {}, {} seat {}",
        response.booking_id,
        response.request_details.origin,
        response.request_details.destination,
        response.request_details.date,
        response.flight_number,
        response.request_details.seat_class,
        response.seat
    );

    Ok((StatusCode::CREATED, Json(response.into())))
}

/// Routes for booking endpoints
pub fn routes() -> Router<AppState> {
    Router::new().route("/bookings", post(create_booking))
}
