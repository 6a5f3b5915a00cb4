use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{MortgageError, Result};

/// down payment mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DownPayment {
    /// percentage of home price, 0-100
    Percentage(Decimal),
    /// absolute currency amount
    Amount(Money),
}

/// loan parameters for a single mortgage estimate
///
/// constructed directly or through [`LoanInputBuilder`]; immutable once
/// validated, all derived quantities are recomputed on demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub home_price: Money,
    /// advisory only; `None` or a non-positive value suppresses the
    /// cost-per-square-foot metric instead of failing validation
    pub square_footage: Option<Decimal>,
    pub down_payment: DownPayment,
    /// nominal annual rate (4.5% means 0.045)
    pub annual_rate: Rate,
    pub term_years: u32,
    /// recurring non-amortized monthly costs (HOA and similar)
    pub monthly_extra_fees: Money,
}

impl LoanInput {
    pub fn builder() -> LoanInputBuilder {
        LoanInputBuilder::new()
    }

    /// check every field up front; no arithmetic runs on rejected input
    pub fn validate(&self) -> Result<()> {
        if !self.home_price.is_positive() {
            return Err(MortgageError::NonPositiveHomePrice {
                price: self.home_price,
            });
        }

        if self.term_years == 0 {
            return Err(MortgageError::NonPositiveTerm {
                years: self.term_years,
            });
        }

        if !self.annual_rate.is_positive() {
            return Err(MortgageError::NonPositiveRate {
                rate: self.annual_rate,
            });
        }

        match self.down_payment {
            DownPayment::Percentage(pct) => {
                if pct < Decimal::ZERO || pct > Decimal::from(100) {
                    return Err(MortgageError::DownPaymentPercentageOutOfRange { percent: pct });
                }
            }
            DownPayment::Amount(amount) => {
                if amount.is_negative() {
                    return Err(MortgageError::NegativeDownPayment { amount });
                }
            }
        }

        if self.monthly_extra_fees.is_negative() {
            return Err(MortgageError::NegativeExtraFees {
                fees: self.monthly_extra_fees,
            });
        }

        Ok(())
    }

    /// down payment resolved to a currency amount
    pub fn actual_down_payment(&self) -> Money {
        match self.down_payment {
            DownPayment::Percentage(pct) => self.home_price.percentage(pct),
            DownPayment::Amount(amount) => amount,
        }
    }

    /// amount financed; may be zero or negative when the down payment
    /// covers the full price, which the engine treats as a degenerate
    /// case rather than an error
    pub fn loan_amount(&self) -> Money {
        self.home_price - self.actual_down_payment()
    }

    /// nominal monthly rate
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate.monthly()
    }

    pub fn number_of_payments(&self) -> u32 {
        self.term_years * 12
    }

    /// square footage filtered to positive values
    pub fn effective_square_footage(&self) -> Option<Decimal> {
        self.square_footage.filter(|sf| *sf > Decimal::ZERO)
    }

    /// same loan at a different term, for side-by-side comparison
    pub fn with_term(&self, term_years: u32) -> Self {
        Self {
            term_years,
            ..self.clone()
        }
    }
}

/// builder for [`LoanInput`]
#[derive(Debug, Clone, Default)]
pub struct LoanInputBuilder {
    home_price: Option<Money>,
    square_footage: Option<Decimal>,
    down_payment: Option<DownPayment>,
    annual_rate: Option<Rate>,
    term_years: Option<u32>,
    monthly_extra_fees: Option<Money>,
}

impl LoanInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn home_price(mut self, price: Money) -> Self {
        self.home_price = Some(price);
        self
    }

    pub fn square_footage(mut self, sqft: Decimal) -> Self {
        self.square_footage = Some(sqft);
        self
    }

    pub fn down_payment_percent(mut self, pct: Decimal) -> Self {
        self.down_payment = Some(DownPayment::Percentage(pct));
        self
    }

    pub fn down_payment_amount(mut self, amount: Money) -> Self {
        self.down_payment = Some(DownPayment::Amount(amount));
        self
    }

    pub fn annual_rate(mut self, rate: Rate) -> Self {
        self.annual_rate = Some(rate);
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_years = Some(years);
        self
    }

    pub fn monthly_extra_fees(mut self, fees: Money) -> Self {
        self.monthly_extra_fees = Some(fees);
        self
    }

    /// build and validate the input
    pub fn build(self) -> Result<LoanInput> {
        let input = LoanInput {
            home_price: self
                .home_price
                .ok_or(MortgageError::MissingField { field: "home_price" })?,
            square_footage: self.square_footage,
            down_payment: self
                .down_payment
                .ok_or(MortgageError::MissingField { field: "down_payment" })?,
            annual_rate: self
                .annual_rate
                .ok_or(MortgageError::MissingField { field: "annual_rate" })?,
            term_years: self
                .term_years
                .ok_or(MortgageError::MissingField { field: "term_years" })?,
            monthly_extra_fees: self.monthly_extra_fees.unwrap_or(Money::ZERO),
        };

        input.validate()?;
        Ok(input)
    }
}
