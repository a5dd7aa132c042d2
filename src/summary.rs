use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::debt::Debt;
use crate::decimal::Money;
use crate::errors::Result;
use crate::simulation::{PayoffSimulator, StrategyMonth};
use crate::types::Strategy;

/// aggregate totals of a simulated payoff
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PayoffSummary {
    pub total_months: u32,
    pub total_interest: Money,
    pub total_paid: Money,
    /// `None` when there was nothing to pay off
    pub payoff_date: Option<NaiveDate>,
}

/// reduce a month list into totals; an empty list is the debt-free state
pub fn summarize(months: &[StrategyMonth]) -> PayoffSummary {
    PayoffSummary {
        total_months: months.len() as u32,
        total_interest: months.iter().map(|m| m.total_interest()).sum(),
        total_paid: months.iter().map(|m| m.total_payment).sum(),
        payoff_date: months.last().map(|m| m.date),
    }
}

/// what a candidate plan saves against a baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffComparison {
    /// negative when the candidate takes longer
    pub months_saved: i64,
    pub interest_saved: Money,
}

impl PayoffComparison {
    pub fn between(baseline: &PayoffSummary, candidate: &PayoffSummary) -> Self {
        Self {
            months_saved: baseline.total_months as i64 - candidate.total_months as i64,
            interest_saved: baseline.total_interest - candidate.total_interest,
        }
    }
}

/// one strategy's result in a side-by-side comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategySummary {
    pub strategy: Strategy,
    pub summary: PayoffSummary,
    /// stopped at the horizon without clearing every balance
    pub horizon_reached: bool,
    /// savings against the `current` run
    pub versus_current: PayoffComparison,
}

/// run every strategy over the same portfolio.
///
/// `current` is the baseline and runs without the extra payment; the targeting
/// strategies get `extra_monthly` on top of the minimums.
pub fn compare_strategies(
    simulator: &PayoffSimulator,
    debts: &[Debt],
    extra_monthly: Money,
) -> Result<Vec<StrategySummary>> {
    let baseline = simulator.simulate(debts, Strategy::Current, Money::ZERO)?;
    let baseline_summary = summarize(&baseline.months);

    Strategy::ALL
        .iter()
        .map(|&strategy| -> Result<StrategySummary> {
            let simulation = if strategy == Strategy::Current {
                baseline.clone()
            } else {
                simulator.simulate(debts, strategy, extra_monthly)?
            };
            let summary = summarize(&simulation.months);

            Ok(StrategySummary {
                strategy,
                versus_current: PayoffComparison::between(&baseline_summary, &summary),
                horizon_reached: simulation.horizon_reached,
                summary,
            })
        })
        .collect()
}
