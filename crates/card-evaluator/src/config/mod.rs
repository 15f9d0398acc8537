use std::env;
use std::fmt;
use std::str::FromStr;

use crate::applications::fraud::DEFAULT_FLAGGED_LAST_NAME;
use crate::applications::EvaluationConfig;

/// Distinguishes runtime behavior for different stages of deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the host application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub evaluation: EvaluationConfig,
    pub fraud: FraudConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let defaults = EvaluationConfig::default();
        let evaluation = EvaluationConfig {
            high_income_threshold: number_or(
                "EVAL_HIGH_INCOME_THRESHOLD",
                defaults.high_income_threshold,
            )?,
            low_income_threshold: number_or(
                "EVAL_LOW_INCOME_THRESHOLD",
                defaults.low_income_threshold,
            )?,
            auto_referral_max_age: number_or(
                "EVAL_AUTO_REFERRAL_MAX_AGE",
                defaults.auto_referral_max_age,
            )?,
            detailed_lookup_min_age: number_or(
                "EVAL_DETAILED_LOOKUP_MIN_AGE",
                defaults.detailed_lookup_min_age,
            )?,
        };

        if !evaluation.thresholds_consistent() {
            return Err(ConfigError::InconsistentThresholds {
                low: evaluation.low_income_threshold,
                high: evaluation.high_income_threshold,
            });
        }

        let flagged_last_name = env::var("FRAUD_FLAGGED_LAST_NAME")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FLAGGED_LAST_NAME.to_string());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            evaluation,
            fraud: FraudConfig { flagged_last_name },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn number_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

/// Settings for the default fraud lookup.
#[derive(Debug, Clone)]
pub struct FraudConfig {
    pub flagged_last_name: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str },
    InconsistentThresholds { low: u32, high: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a non-negative whole number")
            }
            ConfigError::InconsistentThresholds { low, high } => write!(
                f,
                "EVAL_LOW_INCOME_THRESHOLD ({low}) must be below EVAL_HIGH_INCOME_THRESHOLD ({high})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
