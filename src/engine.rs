use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::loan::LoanInput;

/// canonical 15-vs-30-year comparison terms
pub const DEFAULT_COMPARISON_TERMS: [u32; 2] = [15, 30];

/// decomposition of one monthly payment
///
/// carries the echoed loan parameters (`annual_rate`, `term_years`,
/// `loan_amount`) so an amortization schedule can be rebuilt from the
/// breakdown alone, without re-passing the original input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    pub principal_and_interest: Money,
    pub property_tax: Money,
    pub home_insurance: Money,
    pub extra_fees: Money,
    pub annual_rate: Rate,
    pub term_years: u32,
    pub loan_amount: Money,
}

impl MonthlyBreakdown {
    /// full monthly payment
    pub fn total(&self) -> Money {
        self.principal_and_interest + self.property_tax + self.home_insurance + self.extra_fees
    }

    /// recurring monthly costs outside principal and interest
    pub fn fees_and_tax(&self) -> Money {
        self.property_tax + self.home_insurance + self.extra_fees
    }

    pub fn number_of_payments(&self) -> u32 {
        self.term_years * 12
    }
}

/// point-in-time mortgage estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    /// breakdown sum: P&I + tax + insurance + extra fees
    pub monthly_payment: Money,
    /// nominal cash outlay over the loan's life, down payment included
    pub total_cost: Money,
    /// amount financed
    pub total_principal: Money,
    /// P&I paid over the full term, less the amount financed
    pub total_interest: Money,
    /// `None` when square footage was absent or non-positive
    pub cost_per_square_foot: Option<Money>,
    pub breakdown: MonthlyBreakdown,
}

/// two independent estimates of the same loan at different terms;
/// `results[i]` corresponds to `terms_years[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanComparison {
    pub terms_years: [u32; 2],
    pub results: [MortgageResult; 2],
}

impl LoanComparison {
    /// extra paid per month on the second term relative to the first
    pub fn monthly_payment_difference(&self) -> Money {
        self.results[1].monthly_payment - self.results[0].monthly_payment
    }

    /// extra lifetime cost of the second term relative to the first
    pub fn total_cost_difference(&self) -> Money {
        self.results[1].total_cost - self.results[0].total_cost
    }
}

/// pure mortgage estimate calculator
///
/// stateless apart from the tax/insurance configuration; every call is an
/// independent synchronous computation
#[derive(Debug, Clone, Copy, Default)]
pub struct MortgageEngine {
    config: EngineConfig,
}

impl MortgageEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// compute the full estimate for one loan
    pub fn calculate(&self, input: &LoanInput) -> Result<MortgageResult> {
        input.validate()?;

        let loan_amount = input.loan_amount();
        let periods = input.number_of_payments();
        let principal_and_interest = annuity_payment(loan_amount, input.monthly_rate(), periods);

        let monthly = Decimal::from(12);
        let property_tax = (input.home_price * self.config.property_tax_rate.as_decimal()) / monthly;
        let home_insurance =
            (input.home_price * self.config.home_insurance_rate.as_decimal()) / monthly;

        let breakdown = MonthlyBreakdown {
            principal_and_interest,
            property_tax,
            home_insurance,
            extra_fees: input.monthly_extra_fees,
            annual_rate: input.annual_rate,
            term_years: input.term_years,
            loan_amount,
        };

        let n = Decimal::from(periods);
        let monthly_payment = breakdown.total();
        let total_cost = monthly_payment * n + input.actual_down_payment();
        let total_interest = principal_and_interest * n - loan_amount;
        let cost_per_square_foot = input
            .effective_square_footage()
            .map(|sqft| total_cost / sqft);

        Ok(MortgageResult {
            monthly_payment,
            total_cost,
            total_principal: loan_amount,
            total_interest,
            cost_per_square_foot,
            breakdown,
        })
    }

    /// canonical 15-vs-30-year comparison
    pub fn compare_standard(&self, input: &LoanInput) -> Result<LoanComparison> {
        self.compare(input, DEFAULT_COMPARISON_TERMS)
    }

    /// estimate the same loan at two terms, everything else held constant
    pub fn compare(&self, input: &LoanInput, terms_years: [u32; 2]) -> Result<LoanComparison> {
        let first = self.calculate(&input.with_term(terms_years[0]))?;
        let second = self.calculate(&input.with_term(terms_years[1]))?;

        Ok(LoanComparison {
            terms_years,
            results: [first, second],
        })
    }
}

/// fixed-rate annuity payment: P = L * r * (1+r)^n / ((1+r)^n - 1)
///
/// branches explicitly on the degenerate cases the closed form cannot
/// handle: a fully covered loan pays nothing, a zero periodic rate
/// amortizes linearly
pub fn annuity_payment(loan_amount: Money, monthly_rate: Rate, periods: u32) -> Money {
    if !loan_amount.is_positive() || periods == 0 {
        return Money::ZERO;
    }

    if monthly_rate.is_zero() {
        return loan_amount / Decimal::from(periods);
    }

    let compound = monthly_rate.compound_factor(periods);
    let numerator = loan_amount.as_decimal() * monthly_rate.as_decimal() * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::DownPayment;
    use rust_decimal_macros::dec;

    fn standard_input() -> LoanInput {
        LoanInput {
            home_price: Money::from_major(300_000),
            square_footage: Some(dec!(2000)),
            down_payment: DownPayment::Percentage(dec!(20)),
            annual_rate: Rate::from_percent(dec!(4.5)),
            term_years: 30,
            monthly_extra_fees: Money::from_major(100),
        }
    }

    #[test]
    fn test_annuity_matches_closed_form() {
        // 240k at 4.5% over 30 years: canonical P&I is ~1216
        let result = MortgageEngine::default().calculate(&standard_input()).unwrap();
        let p_i = result.breakdown.principal_and_interest;

        let diff = (p_i - Money::from_major(1216)).abs();
        assert!(diff < Money::from_major(1), "P&I was {p_i}");
    }

    #[test]
    fn test_breakdown_components() {
        let result = MortgageEngine::default().calculate(&standard_input()).unwrap();
        let breakdown = &result.breakdown;

        // 1.2% of 300k / 12 and 0.5% of 300k / 12
        assert_eq!(breakdown.property_tax, Money::from_major(300));
        assert_eq!(breakdown.home_insurance, Money::from_major(125));
        assert_eq!(breakdown.extra_fees, Money::from_major(100));
        assert_eq!(result.monthly_payment, breakdown.total());
        assert_eq!(breakdown.loan_amount, Money::from_major(240_000));
        assert_eq!(breakdown.term_years, 30);
    }

    #[test]
    fn test_total_cost_includes_down_payment() {
        let result = MortgageEngine::default().calculate(&standard_input()).unwrap();
        let expected =
            result.monthly_payment * Decimal::from(360) + Money::from_major(60_000);
        assert_eq!(result.total_cost, expected);
    }

    #[test]
    fn test_totals_consistency() {
        let result = MortgageEngine::default().calculate(&standard_input()).unwrap();
        let n = Decimal::from(result.breakdown.number_of_payments());

        let lhs = result.total_principal + result.total_interest;
        let rhs = result.breakdown.principal_and_interest * n;
        assert!((lhs - rhs).abs() < Money::from_str_exact("0.000001").unwrap());
    }

    #[test]
    fn test_zero_rate_annuity_fallback() {
        let payment = annuity_payment(Money::from_major(240_000), Rate::ZERO, 360);
        assert_eq!(payment, Money::from_str_exact("666.666667").unwrap());

        // exactly divisible case
        let payment = annuity_payment(Money::from_major(120_000), Rate::ZERO, 120);
        assert_eq!(payment, Money::from_major(1000));
    }

    #[test]
    fn test_full_down_payment_degenerates_to_zero_payment() {
        let input = LoanInput {
            down_payment: DownPayment::Percentage(dec!(100)),
            ..standard_input()
        };
        let result = MortgageEngine::default().calculate(&input).unwrap();

        assert_eq!(result.total_principal, Money::ZERO);
        assert_eq!(result.breakdown.principal_and_interest, Money::ZERO);
        assert_eq!(result.total_interest, Money::ZERO);
        // tax, insurance, and fees still apply
        assert_eq!(result.monthly_payment, Money::from_major(525));
    }

    #[test]
    fn test_overpaid_down_payment_skips_annuity() {
        let input = LoanInput {
            down_payment: DownPayment::Amount(Money::from_major(350_000)),
            ..standard_input()
        };
        let result = MortgageEngine::default().calculate(&input).unwrap();

        assert!(result.total_principal.is_negative());
        assert_eq!(result.breakdown.principal_and_interest, Money::ZERO);
    }

    #[test]
    fn test_missing_square_footage_suppresses_metric() {
        let mut input = standard_input();
        input.square_footage = None;
        let result = MortgageEngine::default().calculate(&input).unwrap();
        assert_eq!(result.cost_per_square_foot, None);

        input.square_footage = Some(dec!(-5));
        let result = MortgageEngine::default().calculate(&input).unwrap();
        assert_eq!(result.cost_per_square_foot, None);
    }

    #[test]
    fn test_cost_per_square_foot() {
        let result = MortgageEngine::default().calculate(&standard_input()).unwrap();
        let per_sqft = result.cost_per_square_foot.unwrap();
        assert_eq!(per_sqft, result.total_cost / dec!(2000));
    }

    #[test]
    fn test_invalid_input_rejected_before_computation() {
        let input = LoanInput {
            home_price: Money::from_major(-1000),
            ..standard_input()
        };
        assert!(MortgageEngine::default().calculate(&input).is_err());
    }

    #[test]
    fn test_comparison_order_and_invariants() {
        let engine = MortgageEngine::default();
        let comparison = engine.compare_standard(&standard_input()).unwrap();

        assert_eq!(comparison.terms_years, [15, 30]);
        assert_eq!(comparison.results[0].breakdown.term_years, 15);
        assert_eq!(comparison.results[1].breakdown.term_years, 30);

        let shorter = &comparison.results[0];
        let longer = &comparison.results[1];

        // same amount financed, strictly less interest on the shorter term
        assert_eq!(shorter.total_principal, longer.total_principal);
        assert!(shorter.total_interest < longer.total_interest);

        // longer term trades a lower monthly payment for a higher lifetime cost
        assert!(comparison.monthly_payment_difference().is_negative());
        assert!(comparison.total_cost_difference().is_positive());
    }

    #[test]
    fn test_config_override_changes_tax() {
        let config = EngineConfig::new(
            Rate::from_percent(dec!(1.0)),
            Rate::from_percent(dec!(0.5)),
        );
        let result = MortgageEngine::new(config)
            .calculate(&standard_input())
            .unwrap();
        assert_eq!(result.breakdown.property_tax, Money::from_major(250));
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = MortgageEngine::default().calculate(&standard_input()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: MortgageResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
