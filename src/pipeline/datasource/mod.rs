pub mod etherscan;

pub use etherscan::EtherscanClient;
pub use etherscan::FetchOutcome;
pub use etherscan::FetchRequest;
pub use etherscan::TransactionSource;
