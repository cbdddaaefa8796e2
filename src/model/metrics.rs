use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// Bucket a 24h transaction count. `low` and `high` are exclusive lower bounds of the next bucket.
    pub fn classify(
        recent_24h_count: usize,
        low_threshold: usize,
        high_threshold: usize,
    ) -> Self {
        if recent_24h_count < low_threshold {
            ActivityLevel::Low
        } else if recent_24h_count < high_threshold {
            ActivityLevel::Moderate
        } else {
            ActivityLevel::High
        }
    }

    pub fn insight(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low recent activity: the wallet has been mostly quiet in the last 24 hours.",
            ActivityLevel::Moderate => "Moderate recent activity: the wallet is in regular use.",
            ActivityLevel::High => "High recent activity: the wallet has been very active in the last 24 hours.",
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ActivityLevel::Low => write!(f, "low"),
            ActivityLevel::Moderate => write!(f, "moderate"),
            ActivityLevel::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub wallet_address: String,
    pub tx_count: usize,
    pub unique_addresses: usize,
    pub total_value_eth: f64,
    pub avg_value_eth: f64,
    pub recent_24h_count: usize,
    pub activity_level: ActivityLevel,
}

impl MetricsSummary {
    pub fn insight(&self) -> &'static str {
        self.activity_level.insight()
    }
}

/// Mean that is defined as zero for an empty set.
pub fn average(
    total: f64,
    count: usize,
) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}
