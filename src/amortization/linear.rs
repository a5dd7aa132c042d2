use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::EngineConfig;
use crate::decimal::{Money, Rate, MONEY_DP};
use crate::errors::{DebtError, Result};

use super::{check_inputs, month_date, AmortizationRow};

/// equal principal each month, rounded up to the cent so the last month never exceeds it
fn fixed_principal(balance: Money, term_months: u32) -> Money {
    let share = balance.as_decimal() / Decimal::from(term_months);
    Money::from_decimal(
        share.round_dp_with_strategy(MONEY_DP, RoundingStrategy::ToPositiveInfinity),
    )
}

/// constant principal with interest on the declining balance.
///
/// Runs `term_months` months (bounded by the horizon) or until the balance is gone.
pub fn linear_amortization(
    balance: Money,
    annual_rate: Rate,
    term_months: u32,
    start_date: NaiveDate,
    config: &EngineConfig,
) -> Result<Vec<AmortizationRow>> {
    check_inputs(balance, annual_rate)?;
    if term_months == 0 {
        return Err(DebtError::InvalidTerm { months: term_months });
    }

    let monthly_rate = annual_rate.monthly_rate();
    let principal_step = fixed_principal(balance, term_months);
    let term = term_months.min(config.horizon_months);

    let mut rows = Vec::with_capacity(term as usize);
    let mut balance = balance;

    for month in 1..=term {
        if !balance.is_positive() {
            break;
        }

        let interest = balance.interest(monthly_rate);
        let principal = principal_step.min(balance);
        let payment = principal + interest;
        balance = (balance - principal).max(Money::ZERO);

        rows.push(AmortizationRow {
            month,
            date: month_date(start_date, month)?,
            payment,
            principal,
            interest,
            balance,
        });
    }

    Ok(rows)
}
