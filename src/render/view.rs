//! Pure view functions: results in, markup trees out

use super::Element;
use crate::error::{DashboardError, Result};
use crate::types::{AnalysisResult, BatchSummary, Category, CommentItem, UploadResponse};

pub const TYPE_A_COMMENT: &str = "Type a comment first.";
pub const ANALYZING: &str = "Analyzing…";
pub const UPLOADING: &str = "Uploading and analyzing…";
pub const NO_COMMENTS: &str = "No comments to display.";
pub const ANALYZE_FAILED: &str = "Something went wrong while analyzing. Please try again.";
pub const UPLOAD_FAILED: &str = "Something went wrong while uploading. Please try again.";
pub const SAMPLE_FAILED: &str = "Could not load sample comments.";

/// Service scores round small negatives to `-0.0`; show those as `0`
pub fn display_number(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

pub fn muted(message: &str) -> Element {
    Element::new("p").class("muted").text(message)
}

pub fn error(message: &str) -> Element {
    Element::new("p").class("error").text(message)
}

/// Sentiment label, emoji, polarity and the quoted comment
pub fn single_result(result: &AnalysisResult, comment: &str) -> Element {
    Element::new("div")
        .class("single")
        .child(
            Element::new("div")
                .class("row between")
                .child(
                    Element::new("div")
                        .child(Element::new("strong").text(result.sentiment.as_str()))
                        .text(result.emoji.as_str()),
                )
                .child(Element::new("div").text(format!("Polarity: {}", display_number(result.polarity)))),
        )
        .child(
            Element::new("p")
                .class("quote")
                .text(format!("\"{}\"", comment)),
        )
}

/// Single-result region for a settled analysis
pub fn analysis_outcome(outcome: &Result<AnalysisResult>, comment: &str) -> Element {
    match outcome {
        Ok(result) => single_result(result, comment),
        Err(DashboardError::EmptyComment) => muted(TYPE_A_COMMENT),
        Err(_) => error(ANALYZE_FAILED),
    }
}

pub fn batch_count(total: u64) -> Element {
    muted(&format!("Analyzed {} comments.", total))
}

/// Batch region for a settled upload
pub fn upload_outcome(outcome: &Result<UploadResponse>) -> Element {
    match outcome {
        Ok(UploadResponse::Summary(summary)) => batch_count(summary.total),
        Ok(UploadResponse::Failed { error: message }) => error(message),
        Err(_) => error(UPLOAD_FAILED),
    }
}

/// Count and service-supplied percentage per category, in chart order
pub fn summary_stats(summary: &BatchSummary) -> Element {
    Element::new("div").class("summary").children(Category::ALL.iter().map(|&category| {
        Element::new("p").text(format!(
            "{}: {} ({}%)",
            category,
            summary.count(category),
            summary.percent(category)
        ))
    }))
}

pub fn comment_item(item: &CommentItem) -> Element {
    Element::new("div")
        .class("item")
        .child(
            Element::new("div")
                .class("item-left")
                .child(Element::new("div").class("emoji").text(item.emoji.as_str()))
                .child(Element::new("div").class("text").text(item.text.as_str())),
        )
        .child(
            Element::new("div")
                .class("pol")
                .text(format!("{} ({})", item.label, display_number(item.polarity))),
        )
}

/// Top-list region; an empty list gets an explicit placeholder
pub fn top_list(items: &[CommentItem]) -> Element {
    if items.is_empty() {
        return muted(NO_COMMENTS);
    }
    Element::new("div")
        .class("list")
        .children(items.iter().map(comment_item))
}
