use super::{ChartCanvas, ChartHandle, LegendPosition, PieChart};
use crate::render::Element;
use std::collections::BTreeMap;
use std::f64::consts::PI;

const SIZE: f64 = 200.0;
const RADIUS: f64 = 90.0;
const LEGEND_HEIGHT: f64 = 30.0;
const EMPTY_COLOR: &str = "#e5e7eb";

/// Canvas that renders each chart instance as inline SVG
#[derive(Debug, Default)]
pub struct SvgCanvas {
    next_id: u64,
    mounted: BTreeMap<u64, Element>,
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the most recently created live chart
    pub fn current(&self) -> Option<&Element> {
        self.mounted.values().next_back()
    }
}

impl ChartCanvas for SvgCanvas {
    fn create(&mut self, chart: &PieChart) -> ChartHandle {
        self.next_id += 1;
        self.mounted.insert(self.next_id, render_pie(chart));
        tracing::debug!("chart {} created ({} live)", self.next_id, self.mounted.len());
        ChartHandle(self.next_id)
    }

    fn destroy(&mut self, handle: ChartHandle) {
        if self.mounted.remove(&handle.0).is_none() {
            tracing::warn!("chart {} was not mounted", handle.0);
        }
    }

    fn live_count(&self) -> usize {
        self.mounted.len()
    }
}

fn point(angle: f64) -> (f64, f64) {
    let c = SIZE / 2.0;
    (c + RADIUS * angle.cos(), c + RADIUS * angle.sin())
}

/// Render a pie chart with its legend as an `<svg>` element
pub fn render_pie(chart: &PieChart) -> Element {
    let center = SIZE / 2.0;
    let radius = RADIUS;
    let total = chart.total();
    let (pie_y, legend_y) = match chart.legend {
        LegendPosition::Bottom => (0.0, SIZE + 10.0),
        LegendPosition::Top => (LEGEND_HEIGHT, 10.0),
    };

    let mut pie = Element::new("g")
        .class("pie")
        .attr("transform", format!("translate(0 {})", pie_y));

    let visible: Vec<_> = chart.slices.iter().filter(|s| s.value > 0).collect();
    match visible.as_slice() {
        [] => {
            pie = pie.child(
                Element::new("circle")
                    .class("empty")
                    .attr("cx", format!("{center}"))
                    .attr("cy", format!("{center}"))
                    .attr("r", format!("{radius}"))
                    .attr("fill", EMPTY_COLOR),
            );
        }
        [only] => {
            pie = pie.child(
                Element::new("circle")
                    .attr("cx", format!("{center}"))
                    .attr("cy", format!("{center}"))
                    .attr("r", format!("{radius}"))
                    .attr("fill", only.color)
                    .attr("data-label", only.category.label()),
            );
        }
        slices => {
            // Start at twelve o'clock, clockwise
            let mut start = -PI / 2.0;
            for slice in slices {
                let sweep = slice.value as f64 / total as f64 * 2.0 * PI;
                let end = start + sweep;
                let (x1, y1) = point(start);
                let (x2, y2) = point(end);
                let large_arc = u8::from(sweep > PI);
                let d = format!(
                    "M {center:.2} {center:.2} L {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
                );
                pie = pie.child(
                    Element::new("path")
                        .attr("d", d)
                        .attr("fill", slice.color)
                        .attr("data-label", slice.category.label()),
                );
                start = end;
            }
        }
    }

    let step = SIZE / chart.slices.len().max(1) as f64;
    let legend = Element::new("g")
        .class("legend")
        .children(chart.slices.iter().enumerate().flat_map(|(i, slice)| {
            let x = i as f64 * step + 8.0;
            [
                Element::new("rect")
                    .attr("x", format!("{x:.2}"))
                    .attr("y", format!("{legend_y:.2}"))
                    .attr("width", "10")
                    .attr("height", "10")
                    .attr("fill", slice.color),
                Element::new("text")
                    .attr("x", format!("{:.2}", x + 14.0))
                    .attr("y", format!("{:.2}", legend_y + 9.0))
                    .attr("font-size", "11")
                    .text(slice.category.label()),
            ]
        }));

    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("viewBox", format!("0 0 {} {}", SIZE, SIZE + LEGEND_HEIGHT))
        .attr("role", "img")
        .child(pie)
        .child(legend)
}
