use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{DebtError, Result};

use super::{check_inputs, month_date, AmortizationRow};

/// fixed-payment schedule; the final payment is capped so the balance cannot go negative.
///
/// Stops once the balance is within the payoff threshold or the horizon is hit.
/// A payment that never exceeds the accruing interest runs to the horizon, so callers
/// are expected to screen for that case before generating a schedule.
pub fn amortization_schedule(
    balance: Money,
    annual_rate: Rate,
    monthly_payment: Money,
    start_date: NaiveDate,
    config: &EngineConfig,
) -> Result<Vec<AmortizationRow>> {
    check_inputs(balance, annual_rate)?;
    if monthly_payment.is_negative() {
        return Err(DebtError::NegativeAmount {
            field: "monthly payment",
            amount: monthly_payment,
        });
    }

    let monthly_rate = annual_rate.monthly_rate();
    let mut rows = Vec::new();
    let mut balance = balance;
    let mut month = 0;

    while config.is_outstanding(balance) && month < config.horizon_months {
        month += 1;

        let interest = balance.interest(monthly_rate);
        let payment = monthly_payment.min(balance + interest);
        let principal = payment - interest;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::schedule_totals;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_twelve_month_annuity() {
        let rows = amortization_schedule(
            Money::from_major(1_200),
            Rate::from_percent(dec!(12)),
            Money::from_decimal(dec!(106.62)),
            start(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(rows.len(), 12);

        let first = &rows[0];
        assert_eq!(first.interest, Money::from_major(12));
        assert_eq!(first.principal, Money::from_decimal(dec!(94.62)));
        assert_eq!(first.balance, Money::from_decimal(dec!(1105.38)));
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());

        // final payment is capped at what is left
        let last = rows.last().unwrap();
        assert_eq!(last.payment, Money::from_decimal(dec!(106.60)));
        assert_eq!(last.balance, Money::ZERO);
        assert_eq!(last.date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());

        let totals = schedule_totals(&rows);
        assert_eq!(totals.total_interest, Money::from_decimal(dec!(79.42)));
        assert_eq!(totals.total_principal, Money::from_major(1_200));
    }

    #[test]
    fn test_smaller_payment_needs_an_extra_month() {
        let rows = amortization_schedule(
            Money::from_major(1_200),
            Rate::from_percent(dec!(12)),
            Money::from_major(103),
            start(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(rows.len(), 13);
        assert_eq!(rows[11].balance, Money::from_decimal(dec!(45.89)));
        assert_eq!(rows[12].payment, Money::from_decimal(dec!(46.35)));
        assert_eq!(schedule_totals(&rows).total_interest, Money::from_decimal(dec!(82.35)));
    }

    #[test]
    fn test_payment_equal_to_interest_runs_to_horizon() {
        let rows = amortization_schedule(
            Money::from_major(1_000),
            Rate::from_percent(dec!(12)),
            Money::from_major(10),
            start(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(rows.len(), 600);
        assert!(rows.iter().all(|r| r.balance == Money::from_major(1_000)));
    }

    #[test]
    fn test_zero_rate_and_zero_balance() {
        let rows = amortization_schedule(
            Money::from_major(300),
            Rate::ZERO,
            Money::from_major(100),
            start(),
            &EngineConfig::default(),
        )
        .unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.interest.is_zero()));

        let empty = amortization_schedule(
            Money::ZERO,
            Rate::from_percent(dec!(5)),
            Money::from_major(100),
            start(),
            &EngineConfig::default(),
        )
        .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_rejects_negative_payment() {
        let result = amortization_schedule(
            Money::from_major(100),
            Rate::ZERO,
            Money::from_major(-5),
            start(),
            &EngineConfig::default(),
        );
        assert!(matches!(result, Err(DebtError::NegativeAmount { .. })));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_payable_schedule_reaches_zero(
            balance_cents in 10_000i64..5_000_000,
            rate_bps in 0u32..3_000,
            months in 6u32..120,
        ) {
            let balance = Money::from_minor(balance_cents);
            let rate = Rate::from_percent(Decimal::new(rate_bps as i64, 2));
            // clears the debt well inside the horizon
            let payment = balance / Decimal::from(months)
                + balance.interest(rate.monthly_rate())
                + Money::CENT;

            let rows =
                amortization_schedule(balance, rate, payment, start(), &EngineConfig::default())
                    .unwrap();
            let last = rows.last().unwrap();

            prop_assert!(last.balance <= Money::CENT);
            prop_assert!(rows.len() as u32 <= months + 1);

            let totals = schedule_totals(&rows);
            prop_assert_eq!(totals.total_principal + last.balance, balance);

            for pair in rows.windows(2) {
                prop_assert!(pair[1].balance <= pair[0].balance);
            }
            for row in &rows {
                prop_assert_eq!(row.payment, row.principal + row.interest);
                prop_assert!(!row.balance.is_negative());
            }
        }
    }
}
