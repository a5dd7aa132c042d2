/// serialization support for chart and card rendering
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amortization::{schedule_totals, AmortizationRow, ScheduleTotals};
use crate::decimal::Money;
use crate::projection::{DebtProjection, PayoffOutcome};
use crate::simulation::PayoffSimulation;
use crate::summary::{summarize, PayoffSummary};
use crate::types::{DebtId, RepaymentType, Strategy};

/// one debt's series across a simulation, aligned with `SimulationView::dates`
#[derive(Debug, Serialize, Deserialize)]
pub struct DebtSeries {
    pub debt_id: DebtId,
    pub balances: Vec<Money>,
    pub payments: Vec<Money>,
    pub payoff_month: Option<u32>,
}

/// serializable view of a simulation, keyed by debt for stacked charts
#[derive(Debug, Serialize, Deserialize)]
pub struct SimulationView {
    pub strategy: Strategy,
    pub monthly_budget: Money,
    pub extra_monthly: Money,
    pub horizon_reached: bool,
    pub summary: PayoffSummary,
    pub dates: Vec<NaiveDate>,
    pub total_balances: Vec<Money>,
    pub series: Vec<DebtSeries>,
}

impl SimulationView {
    pub fn from_simulation(simulation: &PayoffSimulation) -> Self {
        let debt_ids: Vec<DebtId> = simulation
            .months
            .first()
            .map(|m| m.debts.iter().map(|d| d.debt_id).collect())
            .unwrap_or_default();

        let series = debt_ids
            .into_iter()
            .map(|debt_id| DebtSeries {
                debt_id,
                balances: simulation.balances(debt_id),
                payments: simulation
                    .months
                    .iter()
                    .filter_map(|m| m.debt(debt_id).map(|d| d.payment))
                    .collect(),
                payoff_month: simulation.payoff_month(debt_id),
            })
            .collect();

        SimulationView {
            strategy: simulation.strategy,
            monthly_budget: simulation.monthly_budget,
            extra_monthly: simulation.extra_monthly,
            horizon_reached: simulation.horizon_reached,
            summary: summarize(&simulation.months),
            dates: simulation.months.iter().map(|m| m.date).collect(),
            total_balances: simulation.months.iter().map(|m| m.total_balance).collect(),
            series,
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// serializable view of a single-debt projection
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectionView {
    pub debt_id: DebtId,
    pub repayment_type: RepaymentType,
    pub outcome: PayoffOutcome,
    pub totals: ScheduleTotals,
    pub rows: Vec<AmortizationRow>,
}

impl ProjectionView {
    pub fn from_projection(projection: &DebtProjection) -> Self {
        ProjectionView {
            debt_id: projection.debt_id,
            repayment_type: projection.repayment_type,
            outcome: projection.outcome.clone(),
            totals: schedule_totals(&projection.schedule),
            rows: projection.schedule.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::debt::Debt;
    use crate::projection::DebtProjector;
    use crate::simulation::PayoffSimulator;
    use chrono::{TimeZone, Utc};
    use hourglass_rs::{SafeTimeProvider, TimeSource};
    use rust_decimal_macros::dec;

    fn time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn test_simulation_view() {
        let card = Debt::builder()
            .balance(Money::from_major(1_000))
            .rate_percent(dec!(20))
            .minimum_payment(Money::from_major(50))
            .build()
            .unwrap();
        let loan = Debt::builder()
            .balance(Money::from_major(5_000))
            .rate_percent(dec!(5))
            .minimum_payment(Money::from_major(100))
            .build()
            .unwrap();

        let simulator = PayoffSimulator::new(EngineConfig::default(), &time()).unwrap();
        let simulation = simulator
            .simulate(&[card.clone(), loan.clone()], Strategy::Snowball, Money::from_major(200))
            .unwrap();
        let view = SimulationView::from_simulation(&simulation);

        assert_eq!(view.series.len(), 2);
        assert_eq!(view.series[0].debt_id, card.id);
        assert_eq!(view.series[0].payoff_month, Some(5));
        assert_eq!(view.dates.len(), 18);
        assert_eq!(view.series[1].balances.len(), 18);
        assert_eq!(view.summary.total_months, 18);

        let json = view.to_json_pretty().unwrap();
        assert!(json.contains("\"strategy\": \"snowball\""));
        assert!(json.contains(&card.id.to_string()));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["series"][0]["payoff_month"], 5);
    }

    #[test]
    fn test_empty_simulation_view() {
        let simulator = PayoffSimulator::new(EngineConfig::default(), &time()).unwrap();
        let simulation = simulator.simulate(&[], Strategy::Avalanche, Money::ZERO).unwrap();
        let view = SimulationView::from_simulation(&simulation);

        assert!(view.series.is_empty());
        assert!(view.dates.is_empty());
        assert_eq!(view.summary.payoff_date, None);
    }

    #[test]
    fn test_projection_view() {
        let debt = Debt::builder()
            .balance(Money::from_major(1_200))
            .rate_percent(dec!(12))
            .monthly_payment(Money::from_decimal(dec!(106.62)))
            .build()
            .unwrap();

        let projector = DebtProjector::new(EngineConfig::default(), &time()).unwrap();
        let view = ProjectionView::from_projection(&projector.project(&debt).unwrap());

        assert_eq!(view.rows.len(), 12);
        assert_eq!(view.totals.total_interest, Money::from_decimal(dec!(79.42)));

        let json = view.to_json_pretty().unwrap();
        assert!(json.contains("\"status\": \"payable\""));
        assert!(json.contains("\"months_to_payoff\": 12"));
    }
}
