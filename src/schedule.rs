use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::engine::MonthlyBreakdown;

/// one period of an amortization schedule, monthly or year-aggregated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month or year index
    pub period: u32,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub remaining_balance: Money,
    pub fees_and_tax_paid: Money,
}

impl MonthlyBreakdown {
    /// lazy month-by-month schedule reconstructed from the breakdown alone
    ///
    /// the iterator owns its running balance, so calling this again yields
    /// a fresh schedule from period 1
    pub fn monthly_schedule(&self) -> MonthlySchedule {
        MonthlySchedule {
            balance: self.loan_amount,
            payment: self.principal_and_interest,
            monthly_rate: self.annual_rate.monthly(),
            fees_and_tax: self.fees_and_tax(),
            period: 0,
            total_periods: self.number_of_payments(),
        }
    }

    /// year-aggregated schedule; each row sums 12 consecutive monthly rows
    /// from the same per-month loop, never an approximation
    pub fn annual_schedule(&self) -> AnnualSchedule {
        AnnualSchedule {
            monthly: self.monthly_schedule(),
            year: 0,
        }
    }
}

/// month-by-month schedule iterator over an explicit running balance
#[derive(Debug, Clone)]
pub struct MonthlySchedule {
    balance: Money,
    payment: Money,
    monthly_rate: Rate,
    fees_and_tax: Money,
    period: u32,
    total_periods: u32,
}

impl Iterator for MonthlySchedule {
    type Item = AmortizationRow;

    fn next(&mut self) -> Option<AmortizationRow> {
        if self.period >= self.total_periods {
            return None;
        }
        self.period += 1;

        let interest = self.balance * self.monthly_rate.as_decimal();
        let principal = self.payment - interest;
        self.balance -= principal;

        Some(AmortizationRow {
            period: self.period,
            principal_paid: principal,
            interest_paid: interest,
            remaining_balance: self.balance,
            fees_and_tax_paid: self.fees_and_tax,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.total_periods - self.period) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthlySchedule {}

/// year-aggregated schedule iterator
#[derive(Debug, Clone)]
pub struct AnnualSchedule {
    monthly: MonthlySchedule,
    year: u32,
}

impl Iterator for AnnualSchedule {
    type Item = AmortizationRow;

    fn next(&mut self) -> Option<AmortizationRow> {
        let mut principal = Money::ZERO;
        let mut interest = Money::ZERO;
        let mut fees_and_tax = Money::ZERO;
        let mut balance = None;

        for month in self.monthly.by_ref() {
            principal += month.principal_paid;
            interest += month.interest_paid;
            fees_and_tax += month.fees_and_tax_paid;
            balance = Some(month.remaining_balance);

            if month.period % 12 == 0 {
                break;
            }
        }

        let remaining_balance = balance?;
        self.year += 1;

        Some(AmortizationRow {
            period: self.year,
            principal_paid: principal,
            interest_paid: interest,
            remaining_balance,
            fees_and_tax_paid: fees_and_tax,
        })
    }
}

/// one year of a materialized schedule, with running totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleYear {
    /// 1-based year index
    pub year: u32,
    /// calendar year when the schedule was anchored to a start date
    pub calendar_year: Option<i32>,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub fees_and_tax_paid: Money,
    pub remaining_balance: Money,
    pub cumulative_principal: Money,
    pub cumulative_interest: Money,
}

/// fully materialized year-by-year schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub loan_amount: Money,
    pub annual_rate: Rate,
    pub term_years: u32,
    pub years: Vec<ScheduleYear>,
    pub total_principal: Money,
    pub total_interest: Money,
    pub total_fees_and_tax: Money,
}

impl AmortizationSchedule {
    /// expand the breakdown into a year-by-year schedule; an optional
    /// start date anchors each row to a calendar year
    pub fn generate(breakdown: &MonthlyBreakdown, start_date: Option<NaiveDate>) -> Self {
        let start_year = start_date.map(|d| d.year());

        let mut years = Vec::with_capacity(breakdown.term_years as usize);
        let mut cumulative_principal = Money::ZERO;
        let mut cumulative_interest = Money::ZERO;
        let mut total_fees_and_tax = Money::ZERO;

        for row in breakdown.annual_schedule() {
            cumulative_principal += row.principal_paid;
            cumulative_interest += row.interest_paid;
            total_fees_and_tax += row.fees_and_tax_paid;

            years.push(ScheduleYear {
                year: row.period,
                calendar_year: start_year.map(|y| y + row.period as i32 - 1),
                principal_paid: row.principal_paid,
                interest_paid: row.interest_paid,
                fees_and_tax_paid: row.fees_and_tax_paid,
                remaining_balance: row.remaining_balance,
                cumulative_principal,
                cumulative_interest,
            });
        }

        Self {
            loan_amount: breakdown.loan_amount,
            annual_rate: breakdown.annual_rate,
            term_years: breakdown.term_years,
            years,
            total_principal: cumulative_principal,
            total_interest: cumulative_interest,
            total_fees_and_tax,
        }
    }

    /// get row for a specific year
    pub fn year(&self, year: u32) -> Option<&ScheduleYear> {
        self.years.get(year.checked_sub(1)? as usize)
    }

    /// remaining balance after the given year, or the full loan amount
    /// for year zero
    pub fn balance_after_year(&self, year: u32) -> Money {
        self.year(year)
            .map(|y| y.remaining_balance)
            .unwrap_or(self.loan_amount)
    }

    /// principal + interest + recurring fees and tax over the full term
    pub fn total_paid(&self) -> Money {
        self.total_principal + self.total_interest + self.total_fees_and_tax
    }
}
