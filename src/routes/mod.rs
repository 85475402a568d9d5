pub mod users;

use std::time::Duration;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::{cors::{AllowOrigin, CorsLayer}, trace::TraceLayer};
use crate::state::AppState;

/// Local frontend dev servers allowed to call the API.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:5174"];

/// Preflight cache lifetime.
pub const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(users::routes())
}

pub fn cors_layer() -> CorsLayer {
    let origins = ALLOWED_ORIGINS.map(HeaderValue::from_static);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

/// Full application: API under `/api`, CORS and request tracing applied.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_router())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
