//! Pure mortgage amortization engine: loan-amount derivation, fixed-rate
//! annuity payments, monthly cost breakdowns, 15-vs-30-year comparisons,
//! and lazy month-by-month or year-aggregated amortization schedules.
//!
//! Every operation is a deterministic, synchronous computation over
//! immutable value objects; the engine performs no I/O and returns raw
//! numeric values for a presentation layer to format.

pub mod config;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod loan;
pub mod schedule;

// re-export key types
pub use config::{EngineConfig, DEFAULT_HOME_INSURANCE_RATE, DEFAULT_PROPERTY_TAX_RATE};
pub use decimal::{Money, Rate};
pub use engine::{
    annuity_payment, LoanComparison, MonthlyBreakdown, MortgageEngine, MortgageResult,
    DEFAULT_COMPARISON_TERMS,
};
pub use errors::{MortgageError, Result};
pub use loan::{DownPayment, LoanInput, LoanInputBuilder};
pub use schedule::{AmortizationRow, AmortizationSchedule, AnnualSchedule, MonthlySchedule, ScheduleYear};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
