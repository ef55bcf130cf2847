//! Wire and view models for the analysis service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of analyzing a single comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: String,
    pub polarity: f64,
    pub emoji: String,
}

/// One analyzed comment within a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentItem {
    pub text: String,
    pub label: String,
    pub polarity: f64,
    pub emoji: String,
}

/// Aggregate counts and percentages for a batch.
///
/// Percentages come from the service and are displayed as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: u64,
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
    pub positive_pct: f64,
    pub negative_pct: f64,
    pub neutral_pct: f64,
    #[serde(default)]
    pub items: Vec<CommentItem>,
}

impl BatchSummary {
    /// All-zero summary drawn when the page first loads
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn count(&self, category: Category) -> u64 {
        match category {
            Category::Positive => self.positive,
            Category::Negative => self.negative,
            Category::Neutral => self.neutral,
        }
    }

    pub fn percent(&self, category: Category) -> f64 {
        match category {
            Category::Positive => self.positive_pct,
            Category::Negative => self.negative_pct,
            Category::Neutral => self.neutral_pct,
        }
    }

    /// First `limit` items in service order
    pub fn top_items(&self, limit: usize) -> &[CommentItem] {
        &self.items[..self.items.len().min(limit)]
    }
}

/// Body of an `/upload` response.
///
/// A body with an `error` field is a failure even if other fields are present.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UploadResponse {
    Failed { error: String },
    Summary(BatchSummary),
}

/// Request body for `/analyze`
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub comment: &'a str,
}

/// Chart category, in fixed display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Positive,
    Negative,
    Neutral,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Positive, Category::Negative, Category::Neutral];

    pub fn label(self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Negative => "Negative",
            Category::Neutral => "Neutral",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Positive => "#22c55e",
            Category::Negative => "#ef4444",
            Category::Neutral => "#9ca3af",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user-selected file for batch upload
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl BatchFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping only its file name
    pub async fn read(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.txt".to_string());
        Ok(Self { name, bytes })
    }
}
