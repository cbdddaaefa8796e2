use std::path::Path;

use plotters::prelude::*;
use serde::Serialize;

use crate::error::RenderError;
use crate::model::TransactionGraph;
use crate::utils::shorten_address;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEntry {
    pub address: String,
    pub label: String,
    pub degree: usize,
}

/// Bars of the activity chart: top-N addresses by in+out transaction count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    pub entries: Vec<ChartEntry>,
}

impl ChartData {
    pub fn from_graph(
        graph: &TransactionGraph,
        top_n: usize,
    ) -> Self {
        let entries = graph
            .top_degrees(top_n)
            .into_iter()
            .map(|entry| ChartEntry {
                label: shorten_address(&entry.address),
                address: entry.address,
                degree: entry.degree,
            })
            .collect();

        Self {
            title: format!("Top {} Addresses by Transaction Count", top_n),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_degree(&self) -> usize {
        self.entries.iter().map(|entry| entry.degree).max().unwrap_or(0)
    }
}

fn draw_error(e: impl std::fmt::Display) -> RenderError {
    RenderError::DrawError(e.to_string())
}

/// Draw the bar chart into an SVG document.
pub fn render_svg(
    data: &ChartData,
    width: u32,
    height: u32,
) -> Result<String, RenderError> {
    if data.is_empty() {
        return Err(RenderError::DrawError("no addresses to plot".to_string()));
    }

    let labels: Vec<String> = data.entries.iter().map(|entry| entry.label.clone()).collect();
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&data.title, ("sans-serif", 22))
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(50)
            .build_cartesian_2d((0..data.entries.len()).into_segmented(), 0..data.max_degree() + 1)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(data.entries.len())
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(idx) => labels.get(*idx).cloned().unwrap_or_default(),
                _ => String::new(),
            })
            .x_desc("Address")
            .y_desc("Transactions")
            .draw()
            .map_err(draw_error)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BLUE.mix(0.7).filled())
                    .margin(8)
                    .data(data.entries.iter().enumerate().map(|(idx, entry)| (idx, entry.degree))),
            )
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
    }

    Ok(svg)
}

pub fn write_chart(
    data: &ChartData,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), RenderError> {
    let svg = render_svg(data, width, height)?;
    std::fs::write(path, svg).map_err(|e| RenderError::OutputError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
