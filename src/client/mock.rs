//! Scripted analysis service for testing
//!
//! Provides a service with controlled responses for:
//! - Dashboard flow tests without network calls
//! - Race tests with per-comment latency

use super::AnalysisService;
use crate::error::{DashboardError, Result};
use crate::types::{AnalysisResult, BatchFile, BatchSummary, UploadResponse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Call counters shared with the test
#[derive(Debug, Default)]
pub struct CallLog {
    pub analyze: AtomicU32,
    pub upload: AtomicU32,
    pub sample: AtomicU32,
}

/// Scripted analysis service
pub struct ScriptedService {
    results: HashMap<String, AnalysisResult>,
    latency: HashMap<String, u64>,
    upload: Option<UploadResponse>,
    sample: Option<String>,
    simulate_failures: bool,
    calls: Arc<CallLog>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
            latency: HashMap::new(),
            upload: None,
            sample: None,
            simulate_failures: false,
            calls: Arc::new(CallLog::default()),
        }
    }

    pub fn with_result(mut self, comment: &str, sentiment: &str, polarity: f64, emoji: &str) -> Self {
        self.results.insert(
            comment.to_string(),
            AnalysisResult {
                sentiment: sentiment.to_string(),
                polarity,
                emoji: emoji.to_string(),
            },
        );
        self
    }

    /// Delay the response for `comment` by `ms` milliseconds
    pub fn with_latency(mut self, comment: &str, ms: u64) -> Self {
        self.latency.insert(comment.to_string(), ms);
        self
    }

    pub fn with_summary(mut self, summary: BatchSummary) -> Self {
        self.upload = Some(UploadResponse::Summary(summary));
        self
    }

    pub fn with_upload_error(mut self, error: &str) -> Self {
        self.upload = Some(UploadResponse::Failed {
            error: error.to_string(),
        });
        self
    }

    pub fn with_sample(mut self, text: &str) -> Self {
        self.sample = Some(text.to_string());
        self
    }

    pub fn with_failures(mut self) -> Self {
        self.simulate_failures = true;
        self
    }

    pub fn calls(&self) -> Arc<CallLog> {
        self.calls.clone()
    }

    async fn delay(&self, comment: &str) {
        if let Some(&ms) = self.latency.get(comment) {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

impl Default for ScriptedService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisService for ScriptedService {
    async fn analyze(&self, comment: &str) -> Result<AnalysisResult> {
        self.calls.analyze.fetch_add(1, Ordering::SeqCst);
        self.delay(comment).await;

        if self.simulate_failures {
            return Err(DashboardError::Status(503));
        }

        self.results
            .get(comment)
            .cloned()
            .ok_or_else(|| DashboardError::Service(format!("no scripted result for {comment:?}")))
    }

    async fn upload(&self, _file: &BatchFile) -> Result<UploadResponse> {
        self.calls.upload.fetch_add(1, Ordering::SeqCst);

        if self.simulate_failures {
            return Err(DashboardError::Status(503));
        }

        self.upload
            .clone()
            .ok_or_else(|| DashboardError::Service("no scripted upload".to_string()))
    }

    async fn sample_text(&self) -> Result<String> {
        self.calls.sample.fetch_add(1, Ordering::SeqCst);

        match (&self.sample, self.simulate_failures) {
            (Some(text), false) => Ok(text.clone()),
            _ => Err(DashboardError::Status(404)),
        }
    }
}
