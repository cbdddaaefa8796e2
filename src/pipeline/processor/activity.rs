use serde::Serialize;
use tracing::debug;
use tracing::info;

use crate::config::AnalyzerConfig;
use crate::config::ContractCreationPolicy;
use crate::constants::CONTRACT_CREATION_PLACEHOLDER;
use crate::constants::SECONDS_PER_DAY;
use crate::model::ActivityLevel;
use crate::model::ConnectedAddress;
use crate::model::Flag;
use crate::model::FlaggedTransaction;
use crate::model::MetricsSummary;
use crate::model::Transaction;
use crate::model::TransactionGraph;
use crate::model::metrics::average;

/// Everything the reporter needs from one run.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityAnalysis {
    pub graph: TransactionGraph,
    pub summary: MetricsSummary,
    pub flags: Vec<Flag>,
    pub transactions: Vec<Transaction>,
}

/// Builds the transfer graph, metrics, and heuristic flags in one pass over the transactions.
#[derive(Debug, Clone)]
pub struct ActivityProcessor {
    config: AnalyzerConfig,
}

impl ActivityProcessor {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn process(
        &self,
        transactions: Vec<Transaction>,
        wallet_address: &str,
    ) -> ActivityAnalysis {
        let now = chrono::Utc::now().timestamp();
        self.process_at(transactions, wallet_address, now)
    }

    /// `now` is the single reference point for the 24h window.
    pub fn process_at(
        &self,
        transactions: Vec<Transaction>,
        wallet_address: &str,
        now: i64,
    ) -> ActivityAnalysis {
        let cutoff = now - SECONDS_PER_DAY;
        let with_placeholder = self.config.contract_creation == ContractCreationPolicy::PlaceholderNode;

        let mut graph = TransactionGraph::new();
        let mut total_value_eth = 0.0;
        let mut recent_24h_count = 0;
        let mut high_value = Vec::new();

        for tx in &transactions {
            graph.add_transaction(
                &tx.from_address,
                tx.to_address.as_deref(),
                &tx.hash,
                tx.value_eth,
                with_placeholder,
            );

            total_value_eth += tx.value_eth;

            if tx.timestamp >= cutoff {
                recent_24h_count += 1;
            }

            if tx.value_eth > self.config.high_value_threshold_eth {
                high_value.push(FlaggedTransaction {
                    hash: tx.hash.clone(),
                    value_eth: tx.value_eth,
                });
            }
        }

        let tx_count = transactions.len();
        let activity_level = ActivityLevel::classify(
            recent_24h_count,
            self.config.low_activity_threshold,
            self.config.high_activity_threshold,
        );

        let summary = MetricsSummary {
            wallet_address: wallet_address.to_string(),
            tx_count,
            unique_addresses: graph.node_count() - usize::from(graph.contains(CONTRACT_CREATION_PLACEHOLDER)),
            total_value_eth,
            avg_value_eth: average(total_value_eth, tx_count),
            recent_24h_count,
            activity_level,
        };

        let flags = self.flags(&graph, high_value);

        info!(
            "activity_processed::wallet::{}::tx_count::{}::nodes::{}::edges::{}::flags::{}",
            wallet_address,
            tx_count,
            graph.node_count(),
            graph.edge_count(),
            flags.len()
        );

        ActivityAnalysis {
            graph,
            summary,
            flags,
            transactions,
        }
    }

    fn flags(
        &self,
        graph: &TransactionGraph,
        high_value: Vec<FlaggedTransaction>,
    ) -> Vec<Flag> {
        let mut flags = Vec::new();

        if !high_value.is_empty() {
            debug!("flag::high_value::count::{}", high_value.len());
            flags.push(Flag::HighValue {
                threshold_eth: self.config.high_value_threshold_eth,
                transactions: high_value,
            });
        }

        let connected: Vec<ConnectedAddress> = graph
            .degrees()
            .into_iter()
            .filter(|entry| entry.address != CONTRACT_CREATION_PLACEHOLDER)
            .filter(|entry| entry.degree > self.config.high_connectivity_threshold)
            .map(|entry| ConnectedAddress {
                address: entry.address,
                degree: entry.degree,
            })
            .collect();

        if !connected.is_empty() {
            debug!("flag::high_connectivity::count::{}", connected.len());
            flags.push(Flag::HighConnectivity {
                threshold: self.config.high_connectivity_threshold,
                addresses: connected,
            });
        }

        if flags.is_empty() {
            flags.push(Flag::Routine);
        }

        flags
    }
}
