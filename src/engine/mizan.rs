use std::io::Write;
use std::path::Path;

use tracing::error;
use tracing::info;
use tracing::warn;

use crate::Result;
use crate::cli::Cli;
use crate::config::Config;
use crate::config::ConfigSource;
use crate::config::load_config_or_default;
use crate::error::PipelineError;
use crate::handler::report::Report;
use crate::handler::report::Reporter;
use crate::pipeline::datasource::EtherscanClient;
use crate::pipeline::datasource::FetchRequest;
use crate::pipeline::datasource::TransactionSource;
use crate::pipeline::input::AnalysisRequest;
use crate::pipeline::input::collect_inputs;
use crate::pipeline::processor::ActivityAnalysis;
use crate::pipeline::processor::ActivityProcessor;
use crate::setup_tracing;

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub analysis: ActivityAnalysis,
    pub skipped_records: usize,
    pub report: Report,
}

#[derive(Debug, Clone)]
pub struct Mizan {
    pub config: Config,
}

fn pipeline_failure(e: PipelineError) -> anyhow::Error {
    error!("pipeline_failed::{}::{}", e.category(), e);
    anyhow::Error::new(e)
}

impl Mizan {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(cli: Cli) -> Result<()> {
        let (config, config_source) = load_config_or_default(&cli.config)?;

        // Held until the process exits so buffered log lines are flushed
        let _tracing_guard = match setup_tracing("mizan", &config.logging) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Error setting up logging: {}", e);
                None
            },
        };
        info!("Starting Mizan (ميزان): The Scale");
        if config_source == ConfigSource::Defaults {
            warn!("config_not_found::{}::using_defaults", cli.config.display());
        }

        let sources = cli.input_sources(&config);
        let request = {
            let stdin = std::io::stdin();
            let mut reader = stdin.lock();
            let mut writer: Box<dyn Write> =
                if cli.json { Box::new(std::io::stderr()) } else { Box::new(std::io::stdout()) };
            collect_inputs(sources, config.analyzer.max_transactions, &mut reader, &mut writer)
                .map_err(pipeline_failure)?
        };
        info!("mizan::run::inputs_collected::{:?}", request);

        let source = EtherscanClient::new(config.etherscan.clone(), &request.api_key).map_err(pipeline_failure)?;
        let chart_path = cli.chart_path(&config);

        let mizan = Mizan::new(config);
        let outcome = mizan.analyze(&source, &request, chart_path.as_deref()).await?;

        if cli.json {
            let reporter = Reporter::new(mizan.config.reporter.clone());
            println!(
                "{}",
                reporter.to_json(&outcome.analysis, &outcome.report, outcome.skipped_records)?
            );
        } else {
            print!("{}", outcome.report.text);
        }

        info!("mizan::run::completed");
        Ok(())
    }

    /// Fetch, process, and report. Nothing is reported if the fetch fails.
    pub async fn analyze<S: TransactionSource + ?Sized>(
        &self,
        source: &S,
        request: &AnalysisRequest,
        chart_path: Option<&Path>,
    ) -> Result<AnalysisOutcome> {
        let fetch_request = FetchRequest::new(request.address.clone(), request.limit);
        let fetched = source.fetch_transactions(&fetch_request).await.map_err(pipeline_failure)?;
        info!(
            "mizan::analyze::fetched::{}::skipped::{}",
            fetched.transactions.len(),
            fetched.skipped
        );

        let processor = ActivityProcessor::new(self.config.analyzer.clone());
        let analysis = processor.process(fetched.transactions, &request.address);

        let reporter = Reporter::new(self.config.reporter.clone());
        let report = reporter.report(&analysis, fetched.skipped, chart_path);

        Ok(AnalysisOutcome {
            analysis,
            skipped_records: fetched.skipped,
            report,
        })
    }
}
