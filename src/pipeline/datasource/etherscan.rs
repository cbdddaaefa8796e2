use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use tracing::warn;

use crate::config::EtherscanConfig;
use crate::constants::ETHERSCAN_END_BLOCK;
use crate::constants::ETHERSCAN_STATUS_OK;
use crate::error::PipelineError;
use crate::error::PipelineResult;
use crate::model::Transaction;
use crate::pipeline::input::validate_address;
use crate::pipeline::input::validate_api_key;
use crate::pipeline::input::validate_limit;
use crate::utils::mask_api_key;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub address: String,
    pub limit: u32,
}

impl FetchRequest {
    pub fn new(
        address: impl Into<String>,
        limit: u32,
    ) -> Self {
        Self {
            address: address.into(),
            limit,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    /// Most recent first, at most `limit` entries
    pub transactions: Vec<Transaction>,
    /// Records dropped for missing or unparseable fields
    pub skipped: usize,
}

/// Anything that can list a wallet's transactions.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn fetch_transactions(
        &self,
        request: &FetchRequest,
    ) -> PipelineResult<FetchOutcome>;
}

#[derive(Debug, Deserialize)]
struct EtherscanResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: Value,
}

#[derive(Debug, Deserialize)]
struct RawTransaction {
    hash: String,
    from: String,
    to: String,
    value: Value,
    #[serde(rename = "timeStamp")]
    timestamp: Value,
}

pub struct EtherscanClient {
    config: EtherscanConfig,
    api_key: String,
    http_client: Client,
}

impl EtherscanClient {
    pub fn new(
        config: EtherscanConfig,
        api_key: &str,
    ) -> PipelineResult<Self> {
        let api_key = validate_api_key(api_key)?;
        let http_client = Client::builder().timeout(Duration::from_millis(config.timeout_ms)).build()?;

        Ok(Self {
            config,
            api_key,
            http_client,
        })
    }

    async fn request_envelope(
        &self,
        request: &FetchRequest,
    ) -> PipelineResult<EtherscanResponse> {
        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(&[
                ("chainid", self.config.chain_id.to_string()),
                ("module", "account".to_string()),
                ("action", "txlist".to_string()),
                ("address", request.address.clone()),
                ("startblock", "0".to_string()),
                ("endblock", ETHERSCAN_END_BLOCK.to_string()),
                ("page", "1".to_string()),
                ("offset", request.limit.to_string()),
                ("sort", "desc".to_string()),
                ("apikey", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<EtherscanResponse>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(e) if status.is_success() => {
                Err(PipelineError::NetworkError(format!("unreadable response from provider: {}", e)))
            },
            Err(_) => Err(PipelineError::NetworkError(format!("provider returned HTTP {}", status))),
        }
    }
}

#[async_trait]
impl TransactionSource for EtherscanClient {
    async fn fetch_transactions(
        &self,
        request: &FetchRequest,
    ) -> PipelineResult<FetchOutcome> {
        validate_limit(request.limit, u32::MAX)?;
        let address = validate_address(&request.address)?;
        let request = FetchRequest::new(address, request.limit);

        debug!(
            "fetching_transactions::address::{}::limit::{}::api_key::{}",
            request.address,
            request.limit,
            mask_api_key(&self.api_key)
        );

        let envelope = self.request_envelope(&request).await?;
        let outcome = parse_envelope(envelope, request.limit as usize)?;

        debug!(
            "fetched_transactions::count::{}::skipped::{}",
            outcome.transactions.len(),
            outcome.skipped
        );
        Ok(outcome)
    }
}

fn provider_message(envelope: &EtherscanResponse) -> String {
    let message = envelope.message.trim();
    match envelope.result.as_str().map(str::trim) {
        Some(detail) if !detail.is_empty() && detail != message => {
            if message.is_empty() {
                detail.to_string()
            } else {
                format!("{}: {}", message, detail)
            }
        },
        _ if message.is_empty() => "provider reported a failure without a message".to_string(),
        _ => message.to_string(),
    }
}

fn parse_envelope(
    envelope: EtherscanResponse,
    limit: usize,
) -> PipelineResult<FetchOutcome> {
    if envelope.status != ETHERSCAN_STATUS_OK {
        return Err(PipelineError::ProviderError(provider_message(&envelope)));
    }

    let records = match envelope.result {
        Value::Array(records) => records,
        _ => {
            return Err(PipelineError::ProviderError(format!(
                "{}: result is not a transaction list",
                envelope.message.trim()
            )));
        },
    };

    let mut outcome = FetchOutcome::default();
    for (index, record) in records.into_iter().take(limit).enumerate() {
        match normalize_record(record) {
            Ok(transaction) => outcome.transactions.push(transaction),
            Err(reason) => {
                warn!("skipped_malformed_record::index::{}::reason::{}", index, reason);
                outcome.skipped += 1;
            },
        }
    }

    Ok(outcome)
}

fn parse_u128(value: &Value) -> Option<u128> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64().map(u128::from),
        _ => None,
    }
}

fn parse_i64(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

fn normalize_record(record: Value) -> Result<Transaction, String> {
    let raw: RawTransaction = serde_json::from_value(record).map_err(|e| e.to_string())?;

    if raw.hash.trim().is_empty() {
        return Err("empty hash".to_string());
    }
    if raw.from.trim().is_empty() {
        return Err(format!("empty sender in {}", raw.hash));
    }
    let value_wei = parse_u128(&raw.value).ok_or_else(|| format!("invalid value in {}", raw.hash))?;
    let timestamp = parse_i64(&raw.timestamp).ok_or_else(|| format!("invalid timestamp in {}", raw.hash))?;

    let to = raw.to.trim().to_lowercase();
    Ok(Transaction::new(
        raw.hash.trim(),
        raw.from.trim().to_lowercase(),
        Some(to),
        value_wei,
        timestamp,
    ))
}
