/// ======================= Units =======================
/// Wei per ether. Provider values are always scaled by this, never by token metadata.
pub const WEI_PER_ETH: f64 = 1_000_000_000_000_000_000.0;

/// Seconds in the recent-activity window.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// ======================= Addresses =======================
pub const ADDRESS_PREFIX: &str = "0x";

/// Hex characters after the `0x` prefix.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Node label used for contract-creation transactions under the placeholder policy.
pub const CONTRACT_CREATION_PLACEHOLDER: &str = "contract-creation";

/// ======================= Etherscan =======================
/// Etherscan v2 multichain endpoint - public URL, the key travels as a query parameter
pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/v2/api";

pub const ETHERSCAN_SIGNUP_URL: &str = "https://etherscan.io/apis";

/// Ethereum mainnet
pub const ETHEREUM_CHAIN_ID: u64 = 1;

pub const ETHERSCAN_STATUS_OK: &str = "1";

/// Upper block bound accepted by `txlist`
pub const ETHERSCAN_END_BLOCK: u64 = 99_999_999;

pub const API_KEY_ENV: &str = "ETHERSCAN_API_KEY";
