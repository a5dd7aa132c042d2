use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{DebtError, Result};

/// hard cap on any schedule or simulation: 50 years of months
pub const MAX_PROJECTION_MONTHS: u32 = 600;

/// balances at or below this amount count as paid off
pub const PAYOFF_THRESHOLD: Money = Money::CENT;

/// interest-only term used when a debt carries no end date (30 years)
pub const DEFAULT_INTEREST_ONLY_MONTHS: u32 = 360;

/// average month length used to turn a date span into a month count
pub const DAYS_PER_MONTH: Decimal = dec!(30.44);

/// engine configuration shared by projectors and simulators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub horizon_months: u32,
    pub payoff_threshold: Money,
    pub default_interest_only_months: u32,
    pub days_per_month: Decimal,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon_months: MAX_PROJECTION_MONTHS,
            payoff_threshold: PAYOFF_THRESHOLD,
            default_interest_only_months: DEFAULT_INTEREST_ONLY_MONTHS,
            days_per_month: DAYS_PER_MONTH,
        }
    }
}

impl EngineConfig {
    /// default configuration with a different projection horizon
    pub fn with_horizon(horizon_months: u32) -> Self {
        Self {
            horizon_months,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizon_months == 0 {
            return Err(DebtError::InvalidConfiguration {
                message: "horizon must be at least one month".to_string(),
            });
        }

        if self.payoff_threshold.is_negative() {
            return Err(DebtError::InvalidConfiguration {
                message: format!("negative payoff threshold: {}", self.payoff_threshold),
            });
        }

        if self.days_per_month <= Decimal::ZERO {
            return Err(DebtError::InvalidConfiguration {
                message: format!("days per month must be positive, got {}", self.days_per_month),
            });
        }

        Ok(())
    }

    /// a balance that still has to be paid down
    pub fn is_outstanding(&self, balance: Money) -> bool {
        balance > self.payoff_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.horizon_months, 600);
        assert_eq!(config.payoff_threshold, Money::from_minor(1));
        assert_eq!(config.default_interest_only_months, 360);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        assert!(EngineConfig::with_horizon(0).validate().is_err());

        let config = EngineConfig {
            days_per_month: Decimal::ZERO,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_outstanding_threshold() {
        let config = EngineConfig::default();
        assert!(!config.is_outstanding(Money::from_minor(1)));
        assert!(config.is_outstanding(Money::from_minor(2)));
    }

    #[test]
    fn test_config_json() {
        let json = serde_json::to_string(&EngineConfig::with_horizon(120)).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.horizon_months, 120);
    }
}
