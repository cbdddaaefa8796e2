use std::fmt::Write;

use serde::Serialize;

use crate::model::Flag;
use crate::model::MetricsSummary;

/// What happened to the chart, reported alongside the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartStatus {
    Rendered { path: String },
    Skipped { reason: String },
    Failed { reason: String },
    Disabled,
}

impl ChartStatus {
    fn describe(&self) -> String {
        match self {
            ChartStatus::Rendered { path } => format!("saved to {}", path),
            ChartStatus::Skipped { reason } => format!("not rendered ({})", reason),
            ChartStatus::Failed { reason } => format!("not rendered, warning: {}", reason),
            ChartStatus::Disabled => "disabled".to_string(),
        }
    }
}

/// Fixed-order plain text report. ETH values use two decimals.
pub fn render_text_report(
    summary: &MetricsSummary,
    flags: &[Flag],
    chart: &ChartStatus,
    skipped_records: usize,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    write_report(&mut out, summary, flags, chart, skipped_records).unwrap_or_default();
    out
}

fn write_report(
    out: &mut impl Write,
    summary: &MetricsSummary,
    flags: &[Flag],
    chart: &ChartStatus,
    skipped_records: usize,
) -> std::fmt::Result {
    writeln!(out, "=== Wallet Analysis Report ===")?;
    writeln!(out, "Wallet Address: {}", summary.wallet_address)?;
    writeln!(out, "Transactions Analyzed: {}", summary.tx_count)?;
    writeln!(out, "Unique Addresses: {}", summary.unique_addresses)?;
    writeln!(out, "Total Value: {:.2} ETH", summary.total_value_eth)?;
    writeln!(out, "Average Value: {:.2} ETH", summary.avg_value_eth)?;
    writeln!(out, "Transactions in Last 24h: {}", summary.recent_24h_count)?;
    writeln!(out, "Insight: {}", summary.insight())?;
    if skipped_records > 0 {
        writeln!(out, "Skipped Malformed Records: {}", skipped_records)?;
    }
    writeln!(out, "Chart: {}", chart.describe())?;

    writeln!(out)?;
    writeln!(out, "=== Flags ===")?;
    for flag in flags {
        writeln!(out, "- {}", flag.message())?;
        for entry in flag.entries() {
            writeln!(out, "    {}", entry)?;
        }
    }

    Ok(())
}
