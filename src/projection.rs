use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use log::{debug, warn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::amortization::{
    amortization_schedule, interest_only_schedule, linear_amortization, schedule_totals,
    AmortizationRow,
};
use crate::config::EngineConfig;
use crate::debt::Debt;
use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{DebtId, RepaymentType};

/// why a debt cannot be paid off at its current payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnpayableReason {
    /// the payment does not exceed the interest accruing each month
    PaymentBelowInterest,
    /// the payment outpaces interest but not within the projection horizon
    ExceedsHorizon,
}

/// payoff outcome of a single debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayoffOutcome {
    Payable {
        months_to_payoff: u32,
        total_interest: Money,
        payoff_date: NaiveDate,
    },
    Unpayable {
        reason: UnpayableReason,
    },
}

/// projection of one debt under its own repayment mechanic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtProjection {
    pub debt_id: DebtId,
    pub repayment_type: RepaymentType,
    pub outcome: PayoffOutcome,
    pub schedule: Vec<AmortizationRow>,
}

impl DebtProjection {
    pub fn is_payable(&self) -> bool {
        matches!(self.outcome, PayoffOutcome::Payable { .. })
    }

    pub fn months_to_payoff(&self) -> Option<u32> {
        match self.outcome {
            PayoffOutcome::Payable { months_to_payoff, .. } => Some(months_to_payoff),
            PayoffOutcome::Unpayable { .. } => None,
        }
    }

    pub fn total_interest(&self) -> Option<Money> {
        match self.outcome {
            PayoffOutcome::Payable { total_interest, .. } => Some(total_interest),
            PayoffOutcome::Unpayable { .. } => None,
        }
    }

    pub fn payoff_date(&self) -> Option<NaiveDate> {
        match self.outcome {
            PayoffOutcome::Payable { payoff_date, .. } => Some(payoff_date),
            PayoffOutcome::Unpayable { .. } => None,
        }
    }

    pub fn unpayable_reason(&self) -> Option<UnpayableReason> {
        match self.outcome {
            PayoffOutcome::Payable { .. } => None,
            PayoffOutcome::Unpayable { reason } => Some(reason),
        }
    }
}

/// projects single debts for detail views
pub struct DebtProjector {
    config: EngineConfig,
    today: NaiveDate,
}

impl DebtProjector {
    /// schedules start from the provider's current date
    pub fn new(config: EngineConfig, time_provider: &SafeTimeProvider) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            today: time_provider.now().date_naive(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn project(&self, debt: &Debt) -> Result<DebtProjection> {
        debt.validate()?;

        if !debt.current_balance.is_positive() {
            return Ok(DebtProjection {
                debt_id: debt.id,
                repayment_type: debt.repayment_type,
                outcome: PayoffOutcome::Payable {
                    months_to_payoff: 0,
                    total_interest: Money::ZERO,
                    payoff_date: self.today,
                },
                schedule: Vec::new(),
            });
        }

        let projection = match debt.repayment_type {
            RepaymentType::InterestOnly => self.project_interest_only(debt)?,
            RepaymentType::Linear => self.project_linear(debt)?,
            RepaymentType::Annuity => self.project_annuity(debt)?,
        };

        match projection.outcome {
            PayoffOutcome::Payable { months_to_payoff, total_interest, .. } => {
                debug!(
                    "debt {} ({:?}) pays off in {} months, interest {}",
                    debt.id, debt.repayment_type, months_to_payoff, total_interest
                );
            }
            PayoffOutcome::Unpayable { reason } => {
                warn!(
                    "debt {} ({:?}) is not payable at {} per month: {:?}",
                    debt.id, debt.repayment_type, debt.monthly_payment, reason
                );
            }
        }

        Ok(projection)
    }

    pub fn project_all(&self, debts: &[Debt]) -> Result<Vec<DebtProjection>> {
        debts.iter().map(|debt| self.project(debt)).collect()
    }

    /// months between today and the end date, defaulting when no end date is set
    pub fn interest_only_term(&self, end_date: Option<NaiveDate>) -> u32 {
        let Some(end_date) = end_date else {
            return self.config.default_interest_only_months;
        };

        let days = Decimal::from((end_date - self.today).num_days());
        (days / self.config.days_per_month)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    }

    /// approximate linear term from the payment and the average expected interest.
    ///
    /// `None` when the payment leaves no room for principal.
    pub fn linear_term(&self, debt: &Debt) -> Option<u32> {
        let half_interest = debt.current_balance.interest(debt.monthly_rate()) / Decimal::from(2);
        let principal_share = debt.monthly_payment - half_interest;
        if !principal_share.is_positive() {
            return None;
        }

        let term = (debt.current_balance.as_decimal() / principal_share.as_decimal())
            .ceil()
            .to_u32()
            .unwrap_or(u32::MAX);
        Some(term.clamp(1, self.config.horizon_months))
    }

    fn project_interest_only(&self, debt: &Debt) -> Result<DebtProjection> {
        let months = self.interest_only_term(debt.end_date);
        if months > self.config.horizon_months {
            warn!(
                "interest-only debt {} runs {} months, projecting only the {} month horizon",
                debt.id, months, self.config.horizon_months
            );
        }

        let schedule = interest_only_schedule(
            debt.current_balance,
            debt.annual_rate(),
            months,
            self.today,
            &self.config,
        )?;

        // servicing the interest is all this debt ever needs
        let outcome = PayoffOutcome::Payable {
            months_to_payoff: schedule.len() as u32,
            total_interest: schedule_totals(&schedule).total_interest,
            payoff_date: schedule.last().map(|r| r.date).unwrap_or(self.today),
        };

        Ok(self.finish(debt, outcome, schedule))
    }

    fn project_linear(&self, debt: &Debt) -> Result<DebtProjection> {
        let Some(term) = self.linear_term(debt) else {
            return Ok(self.unpayable(debt, UnpayableReason::PaymentBelowInterest));
        };

        let schedule = linear_amortization(
            debt.current_balance,
            debt.annual_rate(),
            term,
            self.today,
            &self.config,
        )?;

        Ok(self.settle(debt, schedule))
    }

    fn project_annuity(&self, debt: &Debt) -> Result<DebtProjection> {
        // compare against the rounded interest the schedule actually charges
        let first_interest = debt.current_balance.interest(debt.monthly_rate());
        if debt.monthly_payment <= first_interest {
            return Ok(self.unpayable(debt, UnpayableReason::PaymentBelowInterest));
        }

        let schedule = amortization_schedule(
            debt.current_balance,
            debt.annual_rate(),
            debt.monthly_payment,
            self.today,
            &self.config,
        )?;

        Ok(self.settle(debt, schedule))
    }

    /// payable when the schedule clears the balance, otherwise cut off by the horizon
    fn settle(&self, debt: &Debt, schedule: Vec<AmortizationRow>) -> DebtProjection {
        let outcome = match schedule.last() {
            Some(last) if self.config.is_outstanding(last.balance) => PayoffOutcome::Unpayable {
                reason: UnpayableReason::ExceedsHorizon,
            },
            last => PayoffOutcome::Payable {
                months_to_payoff: schedule.len() as u32,
                total_interest: schedule_totals(&schedule).total_interest,
                payoff_date: last.map(|r| r.date).unwrap_or(self.today),
            },
        };

        self.finish(debt, outcome, schedule)
    }

    fn unpayable(&self, debt: &Debt, reason: UnpayableReason) -> DebtProjection {
        self.finish(debt, PayoffOutcome::Unpayable { reason }, Vec::new())
    }

    fn finish(
        &self,
        debt: &Debt,
        outcome: PayoffOutcome,
        schedule: Vec<AmortizationRow>,
    ) -> DebtProjection {
        DebtProjection {
            debt_id: debt.id,
            repayment_type: debt.repayment_type,
            outcome,
            schedule,
        }
    }
}
