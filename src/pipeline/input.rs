use std::io::BufRead;
use std::io::Write;

use tracing::debug;

use crate::constants::ADDRESS_HEX_LEN;
use crate::constants::ADDRESS_PREFIX;
use crate::constants::ETHERSCAN_SIGNUP_URL;
use crate::error::InputField;
use crate::error::PipelineError;
use crate::error::PipelineResult;
use crate::utils::mask_api_key;

/// The three validated values the pipeline runs on.
#[derive(Clone, PartialEq)]
pub struct AnalysisRequest {
    pub api_key: String,
    pub address: String,
    pub limit: u32,
}

impl std::fmt::Debug for AnalysisRequest {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("AnalysisRequest")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("address", &self.address)
            .field("limit", &self.limit)
            .finish()
    }
}

/// Values already known before prompting, from flags, environment, or config.
#[derive(Debug, Clone, Default)]
pub struct InputSources {
    pub api_key: Option<String>,
    pub address: Option<String>,
    pub count: Option<String>,
}

pub fn validate_api_key(api_key: &str) -> PipelineResult<String> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(PipelineError::invalid_input(
            InputField::ApiKey,
            format!("API key cannot be empty. Sign up at {} for a free key.", ETHERSCAN_SIGNUP_URL),
        ));
    }
    Ok(api_key.to_string())
}

/// Normalizes to lowercase; `0x` followed by exactly 40 hex characters.
pub fn validate_address(address: &str) -> PipelineResult<String> {
    let address = address.trim().to_lowercase();
    let valid = address
        .strip_prefix(ADDRESS_PREFIX)
        .is_some_and(|hex| hex.len() == ADDRESS_HEX_LEN && hex.chars().all(|c| c.is_ascii_hexdigit()));

    if !valid {
        return Err(PipelineError::invalid_input(
            InputField::Address,
            format!(
                "Invalid Ethereum wallet address '{}'. It should start with '0x' followed by {} hexadecimal characters.",
                address, ADDRESS_HEX_LEN
            ),
        ));
    }
    Ok(address)
}

pub fn validate_limit(
    limit: u32,
    max: u32,
) -> PipelineResult<u32> {
    if limit < 1 || limit > max {
        return Err(PipelineError::invalid_input(
            InputField::TransactionCount,
            format!("Number of transactions must be a positive integer between 1 and {}, got {}.", max, limit),
        ));
    }
    Ok(limit)
}

pub fn parse_count(
    count: &str,
    max: u32,
) -> PipelineResult<u32> {
    let count = count.trim();
    let limit = count.parse::<u32>().map_err(|_| {
        PipelineError::invalid_input(
            InputField::TransactionCount,
            format!("Number of transactions must be a positive integer between 1 and {}, got '{}'.", max, count),
        )
    })?;
    validate_limit(limit, max)
}

fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
    field: InputField,
) -> PipelineResult<String> {
    let io_err = |e: std::io::Error| PipelineError::invalid_input(field, format!("failed to read input: {}", e));

    write!(writer, "{}: ", label).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(io_err)?;
    if read == 0 {
        return Err(PipelineError::invalid_input(field, "no input provided"));
    }
    Ok(line.trim().to_string())
}

/// Resolve API key, address, and count in that order, prompting for whatever is missing.
/// Each value is validated as soon as it is known, so a bad key fails before the address prompt.
pub fn collect_inputs<R: BufRead, W: Write>(
    sources: InputSources,
    max_transactions: u32,
    reader: &mut R,
    writer: &mut W,
) -> PipelineResult<AnalysisRequest> {
    let api_key = match sources.api_key {
        Some(api_key) => api_key,
        None => prompt(reader, writer, "Enter your Etherscan API key", InputField::ApiKey)?,
    };
    let api_key = validate_api_key(&api_key)?;
    debug!("input::api_key::{}", mask_api_key(&api_key));

    let address = match sources.address {
        Some(address) => address,
        None => prompt(reader, writer, "Enter the wallet address to analyze", InputField::Address)?,
    };
    let address = validate_address(&address)?;
    debug!("input::address::{}", address);

    let count = match sources.count {
        Some(count) => count,
        None => prompt(
            reader,
            writer,
            "Enter the number of transactions to fetch (e.g., 10-20)",
            InputField::TransactionCount,
        )?,
    };
    let limit = parse_count(&count, max_transactions)?;
    debug!("input::limit::{}", limit);

    Ok(AnalysisRequest {
        api_key,
        address,
        limit,
    })
}
