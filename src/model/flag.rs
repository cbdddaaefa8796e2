use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlaggedTransaction {
    pub hash: String,
    pub value_eth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectedAddress {
    pub address: String,
    pub degree: usize,
}

/// Heuristic finding. Findings are reported, never treated as failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Flag {
    HighValue {
        threshold_eth: f64,
        transactions: Vec<FlaggedTransaction>,
    },
    HighConnectivity {
        threshold: usize,
        addresses: Vec<ConnectedAddress>,
    },
    Routine,
}

impl Flag {
    pub fn message(&self) -> String {
        match self {
            Flag::HighValue { threshold_eth, transactions } => format!(
                "High-value transactions detected ({} above {:.2} ETH):",
                transactions.len(),
                threshold_eth
            ),
            Flag::HighConnectivity { threshold, addresses } => format!(
                "Highly connected addresses detected ({} with more than {} transactions):",
                addresses.len(),
                threshold
            ),
            Flag::Routine => "No red flags detected: activity appears routine.".to_string(),
        }
    }

    /// One line per listed transaction or address, 2-decimal values
    pub fn entries(&self) -> Vec<String> {
        match self {
            Flag::HighValue { transactions, .. } => transactions
                .iter()
                .map(|tx| format!("Tx {}: {:.2} ETH", tx.hash, tx.value_eth))
                .collect(),
            Flag::HighConnectivity { addresses, .. } => addresses
                .iter()
                .map(|entry| format!("Address {}: {} transactions", entry.address, entry.degree))
                .collect(),
            Flag::Routine => Vec::new(),
        }
    }

    pub fn is_routine(&self) -> bool {
        matches!(self, Flag::Routine)
    }
}
