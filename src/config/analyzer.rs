use serde::Deserialize;
use serde::Serialize;

use crate::err_with_loc;
use crate::error::ConfigError;

/// How a transaction without a destination address enters the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractCreationPolicy {
    /// Sender becomes a node, no edge is added.
    #[default]
    OmitEdge,
    /// Edge goes to the shared `contract-creation` placeholder node.
    PlaceholderNode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub high_value_threshold_eth: f64,
    pub high_connectivity_threshold: usize,
    // Recent-activity insight buckets, counts over the last 24h
    pub low_activity_threshold: usize,
    pub high_activity_threshold: usize,
    pub max_transactions: u32,
    pub contract_creation: ContractCreationPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            high_value_threshold_eth: 10.0,
            high_connectivity_threshold: 5,
            low_activity_threshold: 3,
            high_activity_threshold: 10,
            max_transactions: 100,
            contract_creation: ContractCreationPolicy::default(),
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if !self.high_value_threshold_eth.is_finite() || self.high_value_threshold_eth < 0.0 {
            return Err(err_with_loc!(ConfigError::InvalidValue(format!(
                "analyzer.high_value_threshold_eth must be a non-negative number, got {}",
                self.high_value_threshold_eth
            ))));
        }
        if self.low_activity_threshold > self.high_activity_threshold {
            return Err(err_with_loc!(ConfigError::InvalidValue(format!(
                "analyzer.low_activity_threshold ({}) exceeds high_activity_threshold ({})",
                self.low_activity_threshold, self.high_activity_threshold
            ))));
        }
        if self.max_transactions == 0 {
            return Err(err_with_loc!(ConfigError::InvalidValue(
                "analyzer.max_transactions must be at least 1".to_string()
            )));
        }
        Ok(())
    }
}
