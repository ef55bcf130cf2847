//! Pie chart description and lifecycle
//!
//! A `ChartCanvas` hosts chart instances. The dashboard keeps at most one
//! `ChartHandle` alive and destroys it before creating the next.

mod svg;

pub use svg::{render_pie, SvgCanvas};

use crate::types::{BatchSummary, Category};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub category: Category,
    pub value: u64,
    pub color: &'static str,
}

/// Pie chart over the three sentiment categories
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub slices: Vec<Slice>,
    pub legend: LegendPosition,
}

impl PieChart {
    /// Positive, Negative, Neutral in that order with fixed colours
    pub fn from_summary(summary: &BatchSummary) -> Self {
        Self {
            slices: Category::ALL
                .iter()
                .map(|&category| Slice {
                    category,
                    value: summary.count(category),
                    color: category.color(),
                })
                .collect(),
            legend: LegendPosition::Bottom,
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.slices.iter().map(|s| s.category.label()).collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.slices.iter().map(|s| s.value).collect()
    }

    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Owned reference to a live chart instance
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Surface that hosts chart instances
pub trait ChartCanvas: Send {
    fn create(&mut self, chart: &PieChart) -> ChartHandle;

    fn destroy(&mut self, handle: ChartHandle);

    /// Number of instances currently alive
    fn live_count(&self) -> usize;
}
