/// strategy comparison - current vs avalanche vs snowball over one portfolio
use chrono::{TimeZone, Utc};
use debt_payoff_rs::{
    compare_strategies, Debt, EngineConfig, Money, PayoffSimulator, RepaymentType,
    SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== strategy comparison ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let simulator = PayoffSimulator::new(EngineConfig::default(), &time)?;

    let debts = vec![
        Debt::builder()
            .name("store card")
            .balance(Money::from_major(800))
            .rate_percent(dec!(4))
            .minimum_payment(Money::from_major(40))
            .monthly_payment(Money::from_major(100))
            .build()?,
        Debt::builder()
            .name("credit card")
            .balance(Money::from_major(4_000))
            .rate_percent(dec!(22))
            .minimum_payment(Money::from_major(120))
            .monthly_payment(Money::from_major(210))
            .build()?,
        Debt::builder()
            .name("car loan")
            .balance(Money::from_major(9_500))
            .rate_percent(dec!(6.5))
            .minimum_payment(Money::from_major(240))
            .monthly_payment(Money::from_major(240))
            .repayment_type(RepaymentType::Annuity)
            .build()?,
    ];

    for extra in [0, 150, 300] {
        println!("extra per month: {}", extra);
        println!("------------------------------");

        for result in compare_strategies(&simulator, &debts, Money::from_major(extra))? {
            println!(
                "{:<10} {:>4} months  interest {:>9}  saves {:>3} months / {:>8}",
                result.strategy.to_string(),
                result.summary.total_months,
                result.summary.total_interest,
                result.versus_current.months_saved,
                result.versus_current.interest_saved,
            );
        }
        println!();
    }

    Ok(())
}
