use crate::AppState;
use axum::Router;

pub mod bookings;
pub mod calculate;
pub mod health;

/// Merge all routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(calculate::routes())
        .merge(bookings::routes())
}
