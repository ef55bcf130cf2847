//! Page state: display regions, comment box and dark mode

use crate::render::Element;
use std::collections::HashMap;

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; background: #f8fafc; color: #0f172a; }
main { max-width: 960px; margin: 0 auto; padding: 2rem; }
section { background: #ffffff; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
textarea { width: 100%; min-height: 4rem; }
.muted { color: #64748b; }
.error { color: #dc2626; }
.row { display: flex; }
.between { justify-content: space-between; }
.quote { font-style: italic; }
.item { display: flex; justify-content: space-between; padding: 0.25rem 0; }
.item-left { display: flex; gap: 0.5rem; }
.chart svg { max-width: 320px; }
html.dark body { background: #0f172a; color: #e2e8f0; }
html.dark section { background: #1e293b; }
";

/// Named display areas of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    SingleResult,
    BatchResult,
    SummaryStats,
    TopList,
}

impl Region {
    pub fn id(self) -> &'static str {
        match self {
            Region::SingleResult => "singleResult",
            Region::BatchResult => "batchResult",
            Region::SummaryStats => "summaryStats",
            Region::TopList => "topList",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    regions: HashMap<Region, Element>,
    comment_box: String,
    dark_mode: bool,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole content of a region
    pub fn set(&mut self, region: Region, content: Element) {
        self.regions.insert(region, content);
    }

    pub fn region(&self, region: Region) -> Option<&Element> {
        self.regions.get(&region)
    }

    /// Visible text of a region, empty if it has never been set
    pub fn region_text(&self, region: Region) -> String {
        self.regions
            .get(&region)
            .map(Element::to_text)
            .unwrap_or_default()
    }

    pub fn comment_box(&self) -> &str {
        &self.comment_box
    }

    pub fn set_comment_box(&mut self, value: impl Into<String>) {
        self.comment_box = value.into();
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    fn region_section(&self, region: Region, heading: Option<&'static str>) -> Element {
        let mut section = Element::new("div").attr("id", region.id());
        if let Some(heading) = heading {
            section = section.child(Element::new("h2").text(heading));
        }
        match self.regions.get(&region) {
            Some(content) => section.child(content.clone()),
            None => section,
        }
    }

    /// Render the complete HTML document, with `chart` as the pie chart markup
    pub fn render_document(&self, chart: Option<&Element>) -> String {
        let mut root = Element::new("html").attr("lang", "en");
        if self.dark_mode {
            root = root.class("dark");
        }

        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(Element::new("title").text("Comment Sentiment Analyzer"))
            .child(Element::new("style").text(STYLE));

        let mut chart_box = Element::new("div").attr("id", "pieChart").class("chart");
        if let Some(chart) = chart {
            chart_box = chart_box.child(chart.clone());
        }

        let body = Element::new("body").child(
            Element::new("main")
                .child(Element::new("header").child(Element::new("h1").text("Comment Sentiment Analyzer")))
                .child(
                    Element::new("section")
                        .child(
                            Element::new("textarea")
                                .attr("id", "commentBox")
                                .text(self.comment_box.as_str()),
                        )
                        .child(self.region_section(Region::SingleResult, None)),
                )
                .child(
                    Element::new("section")
                        .child(self.region_section(Region::BatchResult, Some("Batch analysis")))
                        .child(chart_box)
                        .child(self.region_section(Region::SummaryStats, None))
                        .child(self.region_section(Region::TopList, Some("Top comments"))),
                ),
        );

        format!("<!DOCTYPE html>\n{}", root.child(head).child(body).render())
    }
}
