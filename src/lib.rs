pub mod amortization;
pub mod config;
pub mod debt;
pub mod decimal;
pub mod errors;
pub mod projection;
pub mod serialization;
pub mod simulation;
pub mod summary;
pub mod types;

// re-export key types
pub use amortization::{
    amortization_schedule, interest_only_schedule, linear_amortization, schedule_totals,
    AmortizationRow, ScheduleTotals,
};
pub use config::{
    EngineConfig, DAYS_PER_MONTH, DEFAULT_INTEREST_ONLY_MONTHS, MAX_PROJECTION_MONTHS,
    PAYOFF_THRESHOLD,
};
pub use debt::{Debt, DebtBuilder};
pub use decimal::{Money, Rate};
pub use errors::{DebtError, Result};
pub use projection::{DebtProjection, DebtProjector, PayoffOutcome, UnpayableReason};
pub use serialization::{ProjectionView, SimulationView};
pub use simulation::{DebtMonth, PayoffSimulation, PayoffSimulator, StrategyMonth};
pub use summary::{compare_strategies, summarize, PayoffComparison, PayoffSummary, StrategySummary};
pub use types::{DebtId, RepaymentType, Strategy};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
