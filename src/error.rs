//! Error types for the dashboard client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Validation error: comment is empty")]
    EmptyComment,

    #[error("Validation error: no file selected")]
    NoFileSelected,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Service error: {0}")]
    Service(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Validation failures are handled locally, before any request is made
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyComment | Self::NoFileSelected)
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
