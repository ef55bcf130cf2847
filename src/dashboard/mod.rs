//! Presentation controller
//!
//! Binds user actions to the analysis service and renders the outcome into
//! page regions. Page and chart state sit behind one lock that is never held
//! across an `.await`, so overlapping operations race and the last one to
//! settle owns the region it writes.


use crate::chart::{ChartCanvas, ChartHandle, PieChart, SvgCanvas};
use crate::client::AnalysisService;
use crate::error::{DashboardError, Result};
use crate::page::{Page, Region};
use crate::render::{view, Element};
use crate::types::{AnalysisResult, BatchFile, BatchSummary, UploadResponse};
use parking_lot::Mutex;

pub const DEFAULT_TOP_ITEMS: usize = 10;

struct State<C> {
    page: Page,
    canvas: C,
    chart: Option<ChartHandle>,
}

impl<C: ChartCanvas> State<C> {
    /// Swap the live chart for a new one and refresh the summary block
    fn redraw_chart(&mut self, summary: &BatchSummary) {
        if let Some(previous) = self.chart.take() {
            self.canvas.destroy(previous);
        }
        self.chart = Some(self.canvas.create(&PieChart::from_summary(summary)));
        self.page.set(Region::SummaryStats, view::summary_stats(summary));
    }
}

pub struct Dashboard<S, C = SvgCanvas> {
    service: S,
    state: Mutex<State<C>>,
    top_items: usize,
}

impl<S: AnalysisService, C: ChartCanvas> Dashboard<S, C> {
    pub fn new(service: S, canvas: C, page: Page) -> Self {
        Self {
            service,
            state: Mutex::new(State {
                page,
                canvas,
                chart: None,
            }),
            top_items: DEFAULT_TOP_ITEMS,
        }
    }

    /// Number of batch items rendered in the top list; zero keeps the default
    pub fn with_top_items(mut self, top_items: usize) -> Self {
        if top_items == 0 {
            tracing::warn!("top_items must be positive, keeping {}", DEFAULT_TOP_ITEMS);
            self.top_items = DEFAULT_TOP_ITEMS;
        } else {
            self.top_items = top_items;
        }
        self
    }

    /// Page-load flow: draw the all-zero chart
    pub fn initialize(&self) {
        self.update_chart(&BatchSummary::empty());
    }

    fn show(&self, region: Region, content: Element) {
        self.state.lock().page.set(region, content);
    }

    /// Analyze one comment and render the result in the single-result region
    pub async fn analyze_comment(&self, text: &str) -> Result<AnalysisResult> {
        let comment = text.trim();
        if comment.is_empty() {
            self.show(Region::SingleResult, view::muted(view::TYPE_A_COMMENT));
            return Err(DashboardError::EmptyComment);
        }

        self.show(Region::SingleResult, view::muted(view::ANALYZING));
        tracing::info!("Analyzing comment ({} chars)", comment.len());

        let outcome = self.service.analyze(comment).await;
        match &outcome {
            Ok(result) => tracing::info!("Sentiment: {} ({})", result.sentiment, result.polarity),
            Err(e) => tracing::warn!("Analysis failed: {}", e),
        }

        self.show(Region::SingleResult, view::analysis_outcome(&outcome, comment));
        outcome
    }

    /// Put the first non-empty line of the sample resource in the comment box
    pub async fn load_sample(&self) -> Result<String> {
        match self.service.sample_text().await {
            Ok(text) => {
                let sample = first_sample(&text).to_string();
                tracing::debug!("Loaded sample comment ({} chars)", sample.len());
                self.state.lock().page.set_comment_box(sample.as_str());
                Ok(sample)
            }
            Err(e) => {
                tracing::warn!("Failed to load sample: {}", e);
                self.state.lock().page.set_comment_box(view::SAMPLE_FAILED);
                Err(e)
            }
        }
    }

    /// Upload a file for batch analysis and render summary, chart and top list
    pub async fn analyze_batch(&self, file: Option<&BatchFile>) -> Result<BatchSummary> {
        let Some(file) = file else {
            return Err(DashboardError::NoFileSelected);
        };

        self.show(Region::BatchResult, view::muted(view::UPLOADING));
        tracing::info!("Uploading {} ({} bytes)", file.name, file.bytes.len());

        let outcome = self.service.upload(file).await;
        let batch_view = view::upload_outcome(&outcome);

        match outcome {
            Ok(UploadResponse::Summary(summary)) => {
                tracing::info!(
                    "Batch analyzed: {} comments ({} positive, {} negative, {} neutral)",
                    summary.total,
                    summary.positive,
                    summary.negative,
                    summary.neutral
                );
                let mut state = self.state.lock();
                state.page.set(Region::BatchResult, batch_view);
                state.redraw_chart(&summary);
                state
                    .page
                    .set(Region::TopList, view::top_list(summary.top_items(self.top_items)));
                Ok(summary)
            }
            Ok(UploadResponse::Failed { error }) => {
                tracing::warn!("Service rejected batch: {}", error);
                self.show(Region::BatchResult, batch_view);
                Err(DashboardError::Service(error))
            }
            Err(e) => {
                tracing::error!("Batch upload failed: {}", e);
                self.show(Region::BatchResult, batch_view);
                Err(e)
            }
        }
    }

    /// Replace the chart and the summary block
    pub fn update_chart(&self, summary: &BatchSummary) {
        self.state.lock().redraw_chart(summary);
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.state.lock().page.set_dark_mode(enabled);
    }

    /// Read the current page under the state lock
    pub fn with_page<R>(&self, f: impl FnOnce(&Page) -> R) -> R {
        f(&self.state.lock().page)
    }

    pub fn region_text(&self, region: Region) -> String {
        self.with_page(|page| page.region_text(region))
    }

    pub fn comment_box(&self) -> String {
        self.with_page(|page| page.comment_box().to_string())
    }

    pub fn live_charts(&self) -> usize {
        self.state.lock().canvas.live_count()
    }
}

impl<S: AnalysisService> Dashboard<S, SvgCanvas> {
    /// Render the whole page, chart included
    pub fn render_document(&self) -> String {
        let state = self.state.lock();
        state.page.render_document(state.canvas.current())
    }
}

fn first_sample(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
}
