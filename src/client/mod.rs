//! Analysis service client
//!
//! This module provides the seam to the external sentiment-analysis service:
//! - `AnalysisService`: the operations the dashboard needs
//! - `HttpAnalysisClient`: reqwest implementation over the service's HTTP API

mod http;
#[cfg(test)]
pub mod mock;

pub use http::{decode_upload, HttpAnalysisClient};

use crate::error::Result;
use crate::types::{AnalysisResult, BatchFile, UploadResponse};
use async_trait::async_trait;

/// Operations offered by the external analysis service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Analyze a single comment
    async fn analyze(&self, comment: &str) -> Result<AnalysisResult>;

    /// Upload a file of newline-delimited comments for batch analysis
    async fn upload(&self, file: &BatchFile) -> Result<UploadResponse>;

    /// Fetch the static sample-comments resource
    async fn sample_text(&self) -> Result<String>;
}
