pub mod flag;
pub mod graph;
pub mod metrics;
pub mod transaction;

pub use flag::ConnectedAddress;
pub use flag::Flag;
pub use flag::FlaggedTransaction;
pub use graph::AddressNode;
pub use graph::DegreeEntry;
pub use graph::TransactionEdge;
pub use graph::TransactionGraph;
pub use metrics::ActivityLevel;
pub use metrics::MetricsSummary;
pub use transaction::Transaction;
