use serde::Deserialize;
use serde::Serialize;

use crate::constants::ETHEREUM_CHAIN_ID;
use crate::constants::ETHERSCAN_API_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EtherscanConfig {
    pub base_url: String,
    pub chain_id: u64,
    pub timeout_ms: u64,
    // Prefer ETHERSCAN_API_KEY or --api-key over keeping the key in this file
    pub api_key: Option<String>,
}

impl Default for EtherscanConfig {
    fn default() -> Self {
        Self {
            base_url: ETHERSCAN_API_URL.to_string(),
            chain_id: ETHEREUM_CHAIN_ID,
            timeout_ms: 15_000,
            api_key: None,
        }
    }
}
