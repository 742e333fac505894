//! Analytics collector configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Analytics collector configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Seconds between periodic flushes
    #[serde(default = "default_flush_interval")]
    pub flush_interval_secs: u64,

    /// Failed flushes after which a queued event is dropped
    #[serde(default = "default_max_flush_attempts")]
    pub max_flush_attempts: u32,

    /// YAML file holding the persisted consent decision
    #[serde(default = "default_consent_file")]
    pub consent_file: PathBuf,

    /// Consent assumed when no decision has been persisted
    #[serde(default)]
    pub default_consent: bool,
}

impl AnalyticsConfig {
    /// Get flush interval as Duration
    pub fn flush_interval(&self) -> Duration {
        Duration::from_secs(self.flush_interval_secs)
    }

    /// Validate analytics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.flush_interval_secs == 0 || self.flush_interval_secs > 3600 {
            return Err(ValidationError::InvalidFlushInterval);
        }
        if self.max_flush_attempts == 0 {
            return Err(ValidationError::InvalidFlushAttempts);
        }
        if self.consent_file.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired(
                "LYRA_MENTOR__ANALYTICS__CONSENT_FILE",
            ));
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            flush_interval_secs: default_flush_interval(),
            max_flush_attempts: default_max_flush_attempts(),
            consent_file: default_consent_file(),
            default_consent: false,
        }
    }
}

fn default_flush_interval() -> u64 {
    30
}

fn default_max_flush_attempts() -> u32 {
    10
}

fn default_consent_file() -> PathBuf {
    PathBuf::from("data/analytics_consent.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_defaults() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.flush_interval(), Duration::from_secs(30));
        assert_eq!(config.max_flush_attempts, 10);
        assert!(!config.default_consent);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = AnalyticsConfig {
            flush_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFlushInterval));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let config = AnalyticsConfig {
            max_flush_attempts: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFlushAttempts));
    }

    #[test]
    fn test_empty_consent_path_rejected() {
        let config = AnalyticsConfig {
            consent_file: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }
}
