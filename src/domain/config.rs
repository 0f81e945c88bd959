use serde::{Deserialize, Serialize};

use super::errors::AppError;

/// Construction-time settings for a bench session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilerConfig {
    /// Size of the rolling sample window, in frames.
    pub sample_capacity: usize,
    /// Frame time that must accumulate between display refreshes.
    pub refresh_interval_ms: f64,
    /// Decimal places used when rendering frame rates.
    pub fps_decimals: usize,
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self {
            sample_capacity: 2000,
            refresh_interval_ms: 1000.0,
            fps_decimals: 3,
        }
    }
}

impl ProfilerConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let config: ProfilerConfig = serde_json::from_str(json)
            .map_err(|e| AppError::ValidationError(format!("invalid profiler config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.sample_capacity == 0 {
            return Err(AppError::ValidationError(
                "sample_capacity must be at least 1".to_string(),
            ));
        }
        if !self.refresh_interval_ms.is_finite() || self.refresh_interval_ms <= 0.0 {
            return Err(AppError::ValidationError(format!(
                "refresh_interval_ms must be positive, got {}",
                self.refresh_interval_ms
            )));
        }
        Ok(())
    }
}
