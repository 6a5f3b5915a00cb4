use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};

/// input validation failures, raised before any amortization math runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MortgageError {
    #[error("home price must be positive: {price}")]
    NonPositiveHomePrice { price: Money },

    #[error("loan term must be at least one year: {years}")]
    NonPositiveTerm { years: u32 },

    #[error("annual interest rate must be positive: {rate}")]
    NonPositiveRate { rate: Rate },

    #[error("down payment cannot be negative: {amount}")]
    NegativeDownPayment { amount: Money },

    #[error("percentage down payment out of range 0-100: {percent}")]
    DownPaymentPercentageOutOfRange { percent: Decimal },

    #[error("monthly extra fees cannot be negative: {fees}")]
    NegativeExtraFees { fees: Money },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

pub type Result<T> = std::result::Result<T, MortgageError>;
