use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::DebtError;

/// unique identifier for a debt within one simulation run
pub type DebtId = Uuid;

/// repayment mechanic of a single debt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RepaymentType {
    /// fixed total payment, principal share grows over time
    #[default]
    Annuity,
    /// fixed principal share, total payment shrinks over time
    Linear,
    /// only interest is paid, principal never decreases
    InterestOnly,
}

/// how a shared monthly budget is spread over a debt portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// surplus goes to the smallest balance first
    Snowball,
    /// surplus goes to the highest interest rate first
    Avalanche,
    /// every debt keeps its own monthly payment, no surplus targeting
    Current,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Current, Strategy::Avalanche, Strategy::Snowball];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Snowball => "snowball",
            Strategy::Avalanche => "avalanche",
            Strategy::Current => "current",
        }
    }

    /// whether leftover budget is poured into target debts
    pub fn targets_surplus(&self) -> bool {
        match self {
            Strategy::Snowball | Strategy::Avalanche => true,
            Strategy::Current => false,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = DebtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snowball" => Ok(Strategy::Snowball),
            "avalanche" => Ok(Strategy::Avalanche),
            "current" => Ok(Strategy::Current),
            _ => Err(DebtError::UnknownStrategy { tag: s.to_string() }),
        }
    }
}
