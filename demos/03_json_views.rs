/// json views - serialization for chart rendering
use chrono::{TimeZone, Utc};
use debt_payoff_rs::{
    Debt, DebtProjector, EngineConfig, Money, PayoffSimulator, ProjectionView, SafeTimeProvider,
    SimulationView, Strategy, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== json views ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));

    let card = Debt::builder()
        .balance(Money::from_major(1_000))
        .rate_percent(dec!(20))
        .minimum_payment(Money::from_major(50))
        .build()?;
    let loan = Debt::builder()
        .balance(Money::from_major(5_000))
        .rate_percent(dec!(5))
        .minimum_payment(Money::from_major(100))
        .build()?;

    // single debt schedule
    let projector = DebtProjector::new(EngineConfig::default(), &time)?;
    let projection = projector.project(&card)?;
    println!("card projection:");
    println!("----------------");
    println!("{}\n", ProjectionView::from_projection(&projection).to_json_pretty()?);

    // whole portfolio under avalanche
    let simulator = PayoffSimulator::new(EngineConfig::default(), &time)?;
    let simulation =
        simulator.simulate(&[card, loan], Strategy::Avalanche, Money::from_major(200))?;
    println!("avalanche simulation:");
    println!("---------------------");
    println!("{}", SimulationView::from_simulation(&simulation).to_json_pretty()?);

    Ok(())
}
