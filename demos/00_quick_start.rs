/// quick start - minimal example to get started
use debt_payoff_rs::{
    summarize, Debt, EngineConfig, Money, PayoffSimulator, SafeTimeProvider, Strategy, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // a credit card and a personal loan
    let card = Debt::builder()
        .name("credit card")
        .balance(Money::from_major(1_000))
        .rate_percent(dec!(20))
        .minimum_payment(Money::from_major(50))
        .build()?;
    let loan = Debt::builder()
        .name("personal loan")
        .balance(Money::from_major(5_000))
        .rate_percent(dec!(5))
        .minimum_payment(Money::from_major(100))
        .build()?;

    let time = SafeTimeProvider::new(TimeSource::System);
    let simulator = PayoffSimulator::new(EngineConfig::default(), &time)?;

    // pay 200 on top of the minimums, smallest balance first
    let simulation = simulator.simulate(
        &[card.clone(), loan.clone()],
        Strategy::Snowball,
        Money::from_major(200),
    )?;
    let summary = summarize(&simulation.months);

    println!("debt free in {} months", summary.total_months);
    println!("total interest: {}", summary.total_interest);
    println!("{} paid off in month {:?}", card.name, simulation.payoff_month(card.id));
    println!("{} paid off in month {:?}", loan.name, simulation.payoff_month(loan.id));

    Ok(())
}
