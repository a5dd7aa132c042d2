use std::collections::HashSet;

use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use log::{debug, warn};

use crate::amortization::month_date;
use crate::config::EngineConfig;
use crate::debt::Debt;
use crate::decimal::Money;
use crate::errors::{DebtError, Result};
use crate::types::Strategy;

use super::allocation::{pour_surplus, target_order, WorkingDebt};
use super::{PayoffSimulation, StrategyMonth};

/// month-by-month simulation of a whole debt portfolio under one strategy
pub struct PayoffSimulator {
    config: EngineConfig,
    start_date: NaiveDate,
}

impl PayoffSimulator {
    pub fn new(config: EngineConfig, time_provider: &SafeTimeProvider) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            start_date: time_provider.now().date_naive(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn simulate(
        &self,
        debts: &[Debt],
        strategy: Strategy,
        extra_monthly: Money,
    ) -> Result<PayoffSimulation> {
        if extra_monthly.is_negative() {
            return Err(DebtError::NegativeExtraPayment {
                amount: extra_monthly,
            });
        }

        let mut seen = HashSet::with_capacity(debts.len());
        for debt in debts {
            debt.validate()?;
            if !seen.insert(debt.id) {
                return Err(DebtError::DuplicateDebtId { id: debt.id });
            }
        }

        // inactive and paid debts stay in every month as settled entries
        let mut working: Vec<WorkingDebt> = debts
            .iter()
            .map(|d| {
                if d.is_simulated() {
                    WorkingDebt::from_debt(d)
                } else {
                    WorkingDebt::idle(d)
                }
            })
            .collect();
        let simulated = debts.iter().filter(|d| d.is_simulated()).count();

        let monthly_budget = working
            .iter()
            .map(|d| d.baseline_payment(strategy))
            .sum::<Money>()
            + extra_monthly;

        debug!(
            "simulating {} debts under {} with budget {} (extra {})",
            simulated,
            strategy,
            monthly_budget,
            extra_monthly
        );

        let mut months = Vec::new();
        let mut month = 0;

        while self.any_outstanding(&working) && month < self.config.horizon_months {
            month += 1;

            // ordering is fixed from balances at the start of the month
            let order = target_order(strategy, &working);

            let mut remaining = monthly_budget;
            let mut entries = Vec::with_capacity(working.len());
            for debt in working.iter_mut() {
                let entry = debt.pay_baseline(strategy);
                remaining -= entry.payment;
                entries.push(entry);
            }

            if strategy.targets_surplus() && remaining.is_positive() {
                pour_surplus(&order, &mut working, &mut entries, remaining);
            }

            let total_payment = entries.iter().map(|e| e.payment).sum();
            let total_balance = entries.iter().map(|e| e.balance).sum();

            months.push(StrategyMonth {
                month,
                date: month_date(self.start_date, month)?,
                debts: entries,
                total_payment,
                total_balance,
            });
        }

        let horizon_reached = self.any_outstanding(&working);
        if horizon_reached {
            warn!(
                "{} simulation reached the {} month horizon with {} outstanding",
                strategy,
                self.config.horizon_months,
                months.last().map(|m| m.total_balance).unwrap_or(Money::ZERO)
            );
        } else {
            debug!("{} simulation debt free after {} months", strategy, months.len());
        }

        Ok(PayoffSimulation {
            strategy,
            extra_monthly,
            monthly_budget,
            payoff_threshold: self.config.payoff_threshold,
            months,
            horizon_reached,
        })
    }

    fn any_outstanding(&self, debts: &[WorkingDebt]) -> bool {
        debts.iter().any(|d| self.config.is_outstanding(d.balance))
    }
}
