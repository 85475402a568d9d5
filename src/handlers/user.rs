// src/handlers/user.rs
use axum::{extract::State, Json};
use chrono::Local;
use tracing::{error, info, instrument};

use crate::error::AppError;
use crate::models::user::User;
use crate::records::build_users;
use crate::state::AppState;
use crate::workbook::read_first_sheet;

// GET /api/users - Accounts from the first sheet of the workbook
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let path = state.workbook_path().to_path_buf();

    // Workbook I/O is blocking; the file is reopened on every request.
    let users = tokio::task::spawn_blocking(move || {
        read_first_sheet(&path).map(|rows| build_users(&rows, Local::now))
    })
    .await
    .map_err(|e| {
        error!(?e, "Workbook task failed");
        AppError::internal(format!("Workbook task failed: {e}"))
    })?
    .map_err(|e| {
        error!(error = %e, "Failed to read workbook");
        AppError::from(e)
    })?;

    info!(count = users.len(), "Returning users");
    Ok(Json(users))
}
