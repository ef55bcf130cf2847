use super::AnalysisService;
use crate::config::ServiceConfig;
use crate::error::{DashboardError, Result};
use crate::types::{AnalysisResult, AnalyzeRequest, BatchFile, UploadResponse};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};

/// HTTP client for the analysis service
#[derive(Clone)]
pub struct HttpAnalysisClient {
    http: Client,
    base_url: String,
    sample_path: String,
}

impl HttpAnalysisClient {
    /// Create a new client from service configuration
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        if config.base_url.trim().is_empty() {
            return Err(DashboardError::Config("service.base_url is empty".to_string()));
        }

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            sample_path: config.sample_path.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, comment: &str) -> Result<AnalysisResult> {
        let url = self.url("analyze");
        tracing::debug!("POST {} ({} chars)", url, comment.len());

        let resp = self
            .http
            .post(&url)
            .json(&AnalyzeRequest { comment })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DashboardError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn upload(&self, file: &BatchFile) -> Result<UploadResponse> {
        let url = self.url("upload");
        tracing::debug!("POST {} ({}, {} bytes)", url, file.name, file.bytes.len());

        let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = Form::new().part("file", part);

        let resp = self.http.post(&url).multipart(form).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        decode_upload(status, &body)
    }

    async fn sample_text(&self) -> Result<String> {
        let url = self.url(&self.sample_path);
        tracing::debug!("GET {}", url);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DashboardError::Status(status.as_u16()));
        }

        Ok(resp.text().await?)
    }
}

/// Decode an `/upload` body.
///
/// The service answers rejected uploads with a 4xx status and an `{error}`
/// body, so the body is parsed before the status is considered.
pub fn decode_upload(status: StatusCode, body: &[u8]) -> Result<UploadResponse> {
    match serde_json::from_slice::<UploadResponse>(body) {
        Ok(UploadResponse::Summary(_)) if !status.is_success() => {
            Err(DashboardError::Status(status.as_u16()))
        }
        Ok(parsed) => Ok(parsed),
        Err(_) if !status.is_success() => Err(DashboardError::Status(status.as_u16())),
        Err(e) => Err(e.into()),
    }
}
