use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::constants::API_KEY_ENV;
use crate::pipeline::input::InputSources;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "mizan",
    about = "Maps an Ethereum wallet's recent transactions and flags unusual activity",
    long_about = None
)]
pub struct Cli {
    /// Etherscan API key, prompted for when absent
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Wallet address to analyze, prompted for when absent
    #[arg(short, long)]
    pub address: Option<String>,

    /// Number of most recent transactions to fetch, prompted for when absent
    #[arg(short = 'n', long)]
    pub count: Option<String>,

    #[arg(short, long, default_value = "Config.toml")]
    pub config: PathBuf,

    /// Chart output path, overrides `reporter.chart_path`
    #[arg(long)]
    pub chart: Option<PathBuf>,

    #[arg(long, conflicts_with = "chart")]
    pub no_chart: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn input_sources(
        &self,
        config: &Config,
    ) -> InputSources {
        InputSources {
            api_key: self.api_key.clone().or_else(|| config.etherscan.api_key.clone()),
            address: self.address.clone(),
            count: self.count.clone(),
        }
    }

    pub fn chart_path(
        &self,
        config: &Config,
    ) -> Option<PathBuf> {
        if self.no_chart {
            return None;
        }
        Some(self.chart.clone().unwrap_or_else(|| PathBuf::from(&config.reporter.chart_path)))
    }
}
