use serde::Deserialize;
use serde::Serialize;

use crate::utils::wei_to_eth;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub hash: String,
    pub from_address: String,
    /// `None` for contract creation
    pub to_address: Option<String>,
    pub value_wei: u128,
    pub value_eth: f64,
    /// Unix seconds, UTC
    pub timestamp: i64,
}

impl Transaction {
    pub fn new(
        hash: impl Into<String>,
        from_address: impl Into<String>,
        to_address: Option<String>,
        value_wei: u128,
        timestamp: i64,
    ) -> Self {
        Self {
            hash: hash.into(),
            from_address: from_address.into(),
            to_address: to_address.filter(|to| !to.is_empty()),
            value_wei,
            value_eth: wei_to_eth(value_wei),
            timestamp,
        }
    }

    pub fn is_contract_creation(&self) -> bool {
        self.to_address.is_none()
    }
}
