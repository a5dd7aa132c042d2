/// debt projection - single-debt detail views for each repayment type
use chrono::{NaiveDate, TimeZone, Utc};
use debt_payoff_rs::{
    Debt, DebtProjector, EngineConfig, Money, PayoffOutcome, RepaymentType, SafeTimeProvider,
    TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let projector = DebtProjector::new(EngineConfig::default(), &time)?;

    let debts = vec![
        Debt::builder()
            .name("annuity mortgage")
            .balance(Money::from_major(180_000))
            .rate_percent(dec!(3.8))
            .monthly_payment(Money::from_decimal(dec!(838.72)))
            .build()?,
        Debt::builder()
            .name("linear mortgage")
            .balance(Money::from_major(120_000))
            .rate_percent(dec!(4.1))
            .monthly_payment(Money::from_major(750))
            .repayment_type(RepaymentType::Linear)
            .build()?,
        Debt::builder()
            .name("interest-only part")
            .balance(Money::from_major(60_000))
            .rate_percent(dec!(3.2))
            .monthly_payment(Money::from_major(160))
            .repayment_type(RepaymentType::InterestOnly)
            .end_date(NaiveDate::from_ymd_opt(2049, 1, 1).unwrap())
            .build()?,
        Debt::builder()
            .name("overdrawn card")
            .balance(Money::from_major(3_000))
            .rate_percent(dec!(24))
            .monthly_payment(Money::from_major(60))
            .build()?,
    ];

    for (debt, projection) in debts.iter().zip(projector.project_all(&debts)?) {
        match projection.outcome {
            PayoffOutcome::Payable { months_to_payoff, total_interest, payoff_date } => {
                println!(
                    "{:<20} paid off {} after {} months, interest {}",
                    debt.name, payoff_date, months_to_payoff, total_interest
                );
            }
            PayoffOutcome::Unpayable { reason } => {
                println!("{:<20} not payable at current payment ({:?})", debt.name, reason);
            }
        }
    }

    Ok(())
}
