use serde::Deserialize;
use serde::Serialize;

use crate::err_with_loc;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    pub top_n: usize,
    pub chart_path: String,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            chart_path: "wallet_activity.svg".to_string(),
            chart_width: 1024,
            chart_height: 640,
        }
    }
}

impl ReporterConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if self.top_n == 0 {
            return Err(err_with_loc!(ConfigError::InvalidValue("reporter.top_n must be at least 1".to_string())));
        }
        if self.chart_width < 200 || self.chart_height < 200 {
            return Err(err_with_loc!(ConfigError::InvalidValue(format!(
                "reporter chart size {}x{} is too small",
                self.chart_width, self.chart_height
            ))));
        }
        Ok(())
    }
}
