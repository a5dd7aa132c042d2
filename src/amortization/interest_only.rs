use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;

use super::{check_inputs, month_date, AmortizationRow};

/// interest-only schedule: each payment is that month's interest, the balance never moves
pub fn interest_only_schedule(
    balance: Money,
    annual_rate: Rate,
    months: u32,
    start_date: NaiveDate,
    config: &EngineConfig,
) -> Result<Vec<AmortizationRow>> {
    check_inputs(balance, annual_rate)?;

    let interest = balance.interest(annual_rate.monthly_rate());
    let term = months.min(config.horizon_months);

    (1..=term)
        .map(|month| -> Result<AmortizationRow> {
            Ok(AmortizationRow {
                month,
                date: month_date(start_date, month)?,
                payment: interest,
                principal: Money::ZERO,
                interest,
                balance,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::schedule_totals;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_interest_only_mortgage() {
        let rows = interest_only_schedule(
            Money::from_major(250_000),
            Rate::from_percent(dec!(3.8)),
            360,
            start(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(rows.len(), 360);
        assert_eq!(rows[0].payment, Money::from_decimal(dec!(791.67)));
        assert_eq!(rows[359].balance, Money::from_major(250_000));
        assert_eq!(rows[359].date, NaiveDate::from_ymd_opt(2054, 1, 1).unwrap());
        assert_eq!(
            schedule_totals(&rows).total_interest,
            Money::from_decimal(dec!(285001.20))
        );
    }

    #[test]
    fn test_zero_months() {
        let rows = interest_only_schedule(
            Money::from_major(10_000),
            Rate::from_percent(dec!(4)),
            0,
            start(),
            &EngineConfig::default(),
        )
        .unwrap();
        assert!(rows.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_balance_never_changes(
            balance_cents in 0i64..100_000_000,
            rate_bps in 0u32..1_500,
            months in 1u32..600,
        ) {
            let balance = Money::from_minor(balance_cents);
            let rate = Rate::from_percent(Decimal::new(rate_bps as i64, 2));

            let rows =
                interest_only_schedule(balance, rate, months, start(), &EngineConfig::default())
                    .unwrap();

            prop_assert_eq!(rows.len() as u32, months);
            for row in &rows {
                prop_assert!(row.principal.is_zero());
                prop_assert_eq!(row.balance, balance);
                prop_assert_eq!(row.payment, row.interest);
            }
        }
    }
}
