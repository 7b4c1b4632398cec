use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tripapi::{SumRequest, SumResponse, compute_sum};
use utoipa::ToSchema;
use validator::Validate;

use crate::AppState;
use crate::error::ValidationErrorResponse;
use crate::extract::ValidatedJson;

/// Two numbers to add
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, Validate)]
pub struct CalculationRequest {
    #[schema(example = 2.5)]
    pub value1: f64,
    #[schema(example = 3.5)]
    pub value2: f64,
}

impl From<CalculationRequest> for SumRequest {
    fn from(dto: CalculationRequest) -> Self {
        SumRequest {
            value1: dto.value1,
            value2: dto.value2,
        }
    }
}

/// Sum of both values. JSON has no encoding for infinities, so a sum that
/// overflows `f64` is written as `null`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct CalculationResponse {
    #[schema(example = 6.0, nullable)]
    pub value3: f64,
}

impl From<SumResponse> for CalculationResponse {
    fn from(response: SumResponse) -> Self {
        Self {
            value3: response.value3,
        }
    }
}

/// Add two numbers. Also served at `/calculate/`.
///
/// The addition never fails. A result outside the finite `f64` range is
/// still a 200, with `value3` set to `null`.
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "Sum of both values", body = CalculationResponse),
        (status = 422, description = "Invalid request body", body = ValidationErrorResponse)
    ),
    tag = "calculator"
)]
pub async fn calculate_sum(
    ValidatedJson(request): ValidatedJson<CalculationRequest>,
) -> Json<CalculationResponse> {
    let response = compute_sum(request.into());
    tracing::debug!("{} + {} = {}", request.value1, request.value2, response.value3);
    if !response.value3.is_finite() {
        tracing::warn!(
            "Sum {} + {} is not finite; value3 serializes as null",
            request.value1,
            request.value2
        );
    }
    Json(response.into())
}

/// Both path forms are bound to the same handler; neither redirects.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate_sum))
        .route("/calculate/", post(calculate_sum))
}
