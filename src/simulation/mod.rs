pub mod allocation;
pub mod simulator;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::{DebtId, Strategy};

pub use allocation::{pour_surplus, target_order, WorkingDebt};
pub use simulator::PayoffSimulator;

/// one debt's share of a simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtMonth {
    pub debt_id: DebtId,
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub balance: Money,
}

impl DebtMonth {
    /// entry for a debt that is already paid off
    pub fn settled(debt_id: DebtId) -> Self {
        Self {
            debt_id,
            payment: Money::ZERO,
            interest: Money::ZERO,
            principal: Money::ZERO,
            balance: Money::ZERO,
        }
    }
}

/// one month across the whole portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMonth {
    pub month: u32,
    pub date: NaiveDate,
    pub debts: Vec<DebtMonth>,
    pub total_payment: Money,
    pub total_balance: Money,
}

impl StrategyMonth {
    pub fn debt(&self, debt_id: DebtId) -> Option<&DebtMonth> {
        self.debts.iter().find(|d| d.debt_id == debt_id)
    }

    pub fn total_interest(&self) -> Money {
        self.debts.iter().map(|d| d.interest).sum()
    }
}

/// result of a portfolio simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffSimulation {
    pub strategy: Strategy,
    pub extra_monthly: Money,
    pub monthly_budget: Money,
    pub payoff_threshold: Money,
    pub months: Vec<StrategyMonth>,
    /// stopped at the horizon with balance still outstanding
    pub horizon_reached: bool,
}

impl PayoffSimulation {
    pub fn is_debt_free(&self) -> bool {
        !self.horizon_reached
    }

    pub fn final_balance(&self) -> Money {
        self.months.last().map(|m| m.total_balance).unwrap_or(Money::ZERO)
    }

    /// first month in which the debt's balance is paid down to the threshold
    pub fn payoff_month(&self, debt_id: DebtId) -> Option<u32> {
        self.months
            .iter()
            .find(|m| {
                m.debt(debt_id)
                    .is_some_and(|d| d.balance <= self.payoff_threshold)
            })
            .map(|m| m.month)
    }

    /// balance series of one debt, for charting
    pub fn balances(&self, debt_id: DebtId) -> Vec<Money> {
        self.months
            .iter()
            .filter_map(|m| m.debt(debt_id).map(|d| d.balance))
            .collect()
    }
}
