use axum::{Router, routing::get};
use crate::state::AppState;
use crate::handlers::user::get_users;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
}
