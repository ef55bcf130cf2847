//! Sentiment Dashboard
//!
//! A client for an external sentiment-analysis service: single-comment and
//! batch analysis, a summary pie chart, and escaped HTML rendering.

pub mod chart;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod page;
pub mod render;
pub mod types;


pub use client::{AnalysisService, HttpAnalysisClient};
pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
