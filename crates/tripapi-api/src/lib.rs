use axum::Router;
use axum::http::HeaderValue;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tripapi::{BookingService, RandomSource, ThreadRngSource};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

pub use config::{ApiConfig, ConfigOverrides, CorsConfig};
pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub booking_service: BookingService,
}

impl AppState {
    /// Create state whose bookings draw from the given randomness source
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self {
            booking_service: BookingService::new(random),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngSource::new()))
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::root,
        crate::routes::health::health_check,
        crate::routes::calculate::calculate_sum,
        crate::routes::bookings::create_booking,
    ),
    components(
        schemas(
            crate::routes::health::MessageResponse,
            crate::routes::health::HealthResponse,
            crate::routes::calculate::CalculationRequest,
            crate::routes::calculate::CalculationResponse,
            crate::routes::bookings::SeatClassDto,
            crate::routes::bookings::PassengerDto,
            crate::routes::bookings::BookingRequestDto,
            crate::routes::bookings::BookingResponseDto,
            crate::error::FieldError,
            crate::error::ValidationErrorResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "calculator", description = "Arithmetic endpoints"),
        (name = "bookings", description = "Simulated flight booking")
    )
)]
pub struct ApiDoc;

/// Build the CORS layer. Any-origin mode mirrors the caller's origin so that
/// credentials stay allowed.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allow_any_origin {
        return CorsLayer::very_permissive();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            // a literal wildcard cannot be combined with credentials
            Ok(value) if origin != "*" => Some(value),
            _ => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build API application
pub fn build_app(state: AppState, config: &ApiConfig) -> Router {
    let mut router = Router::new().merge(routes::routes());

    if config.enable_swagger {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
