// src/state.rs
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Workbook read when no `USERS_WORKBOOK` is set.
pub const DEFAULT_WORKBOOK: &str = "data/Spec for IAM, Service users.xlsx";

#[derive(Clone)]
pub struct AppState {
    workbook_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(workbook_path: impl Into<PathBuf>) -> Self {
        Self {
            workbook_path: Arc::new(workbook_path.into()),
        }
    }

    pub fn from_env() -> Self {
        let path = std::env::var("USERS_WORKBOOK")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WORKBOOK.to_string());
        Self::new(path)
    }

    pub fn workbook_path(&self) -> &Path {
        &self.workbook_path
    }
}
