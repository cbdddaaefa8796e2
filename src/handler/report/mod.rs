pub mod chart;
pub mod text;

use std::path::Path;

use serde::Serialize;
use tracing::info;
use tracing::warn;

pub use chart::ChartData;
pub use chart::ChartEntry;
pub use text::ChartStatus;
pub use text::render_text_report;

use crate::config::ReporterConfig;
use crate::model::Flag;
use crate::model::MetricsSummary;
use crate::pipeline::processor::ActivityAnalysis;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub chart_data: ChartData,
    pub chart: ChartStatus,
    #[serde(skip)]
    pub text: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: &'a MetricsSummary,
    flags: &'a [Flag],
    chart: &'a ChartStatus,
    top_addresses: &'a [ChartEntry],
    skipped_records: usize,
}

/// Renders the chart and the text report. Chart and text fail independently.
#[derive(Debug, Clone)]
pub struct Reporter {
    config: ReporterConfig,
}

impl Reporter {
    pub fn new(config: ReporterConfig) -> Self {
        Self { config }
    }

    pub fn chart_data(
        &self,
        analysis: &ActivityAnalysis,
    ) -> ChartData {
        ChartData::from_graph(&analysis.graph, self.config.top_n)
    }

    /// Zero addresses skip rendering. A failed render is a warning, never an error.
    pub fn render_chart(
        &self,
        data: &ChartData,
        path: &Path,
    ) -> ChartStatus {
        if data.is_empty() {
            info!("chart::skipped::no_addresses");
            return ChartStatus::Skipped {
                reason: "no transactions to plot".to_string(),
            };
        }

        match chart::write_chart(data, path, self.config.chart_width, self.config.chart_height) {
            Ok(()) => {
                info!("chart::rendered::{}::bars::{}", path.display(), data.entries.len());
                ChartStatus::Rendered {
                    path: path.display().to_string(),
                }
            },
            Err(e) => {
                warn!("chart::render_failed::{}::error::{}", path.display(), e);
                ChartStatus::Failed { reason: e.to_string() }
            },
        }
    }

    /// `chart_path` of `None` disables chart output.
    pub fn report(
        &self,
        analysis: &ActivityAnalysis,
        skipped_records: usize,
        chart_path: Option<&Path>,
    ) -> Report {
        let chart_data = self.chart_data(analysis);
        let chart = match chart_path {
            Some(path) => self.render_chart(&chart_data, path),
            None => ChartStatus::Disabled,
        };
        let text = render_text_report(&analysis.summary, &analysis.flags, &chart, skipped_records);

        Report {
            chart_data,
            chart,
            text,
        }
    }

    pub fn to_json(
        &self,
        analysis: &ActivityAnalysis,
        report: &Report,
        skipped_records: usize,
    ) -> crate::Result<String> {
        let json = JsonReport {
            summary: &analysis.summary,
            flags: &analysis.flags,
            chart: &report.chart,
            top_addresses: &report.chart_data.entries,
            skipped_records,
        };
        Ok(serde_json::to_string_pretty(&json)?)
    }
}
