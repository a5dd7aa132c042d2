pub mod annuity;
pub mod interest_only;
pub mod linear;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{DebtError, Result};

pub use annuity::amortization_schedule;
pub use interest_only::interest_only_schedule;
pub use linear::linear_amortization;

/// one month of a single-debt schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month index
    pub month: u32,
    pub date: NaiveDate,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    /// balance after this month's payment
    pub balance: Money,
}

/// totals over a schedule
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub total_interest: Money,
    pub total_principal: Money,
    pub total_paid: Money,
}

pub fn schedule_totals(rows: &[AmortizationRow]) -> ScheduleTotals {
    rows.iter().fold(ScheduleTotals::default(), |mut acc, row| {
        acc.total_interest += row.interest;
        acc.total_principal += row.principal;
        acc.total_paid += row.payment;
        acc
    })
}

/// calendar date `months` months after `start`, clamped to month end
pub fn month_date(start: NaiveDate, months: u32) -> Result<NaiveDate> {
    start
        .checked_add_months(Months::new(months))
        .ok_or_else(|| DebtError::InvalidDate {
            message: format!("{} plus {} months is out of range", start, months),
        })
}

pub(crate) fn check_inputs(balance: Money, annual_rate: Rate) -> Result<()> {
    if balance.is_negative() {
        return Err(DebtError::NegativeAmount {
            field: "balance",
            amount: balance,
        });
    }

    if annual_rate.is_negative() {
        return Err(DebtError::NegativeRate { rate: annual_rate });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(month: u32, payment: Money, principal: Money, interest: Money) -> AmortizationRow {
        AmortizationRow {
            month,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            payment,
            principal,
            interest,
            balance: Money::ZERO,
        }
    }

    #[test]
    fn test_month_date_clamps_to_month_end() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(month_date(start, 1).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(month_date(start, 2).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert_eq!(month_date(start, 12).unwrap(), NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    }

    #[test]
    fn test_schedule_totals() {
        let rows = vec![
            row(1, Money::from_major(100), Money::from_major(90), Money::from_major(10)),
            row(
                2,
                Money::from_decimal(dec!(50.55)),
                Money::from_decimal(dec!(45.5)),
                Money::from_decimal(dec!(5.05)),
            ),
        ];

        let totals = schedule_totals(&rows);
        assert_eq!(totals.total_paid, Money::from_decimal(dec!(150.55)));
        assert_eq!(totals.total_principal, Money::from_decimal(dec!(135.5)));
        assert_eq!(totals.total_interest, Money::from_decimal(dec!(15.05)));
    }

    #[test]
    fn test_check_inputs() {
        assert!(check_inputs(Money::from_major(1), Rate::ZERO).is_ok());
        assert!(check_inputs(Money::from_major(-1), Rate::ZERO).is_err());
        assert!(check_inputs(Money::ZERO, Rate::from_percent(dec!(-1))).is_err());
    }
}
