/// 15-vs-30-year comparison on the same loan
use mortgage_engine_rs::{LoanInput, Money, MortgageEngine, Rate, DEFAULT_COMPARISON_TERMS};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = LoanInput::builder()
        .home_price(Money::from_major(450_000))
        .square_footage(dec!(2400))
        .down_payment_amount(Money::from_major(90_000))
        .annual_rate(Rate::from_percent(dec!(5.25)))
        .term_years(30)
        .build()?;

    let comparison = MortgageEngine::default().compare(&input, DEFAULT_COMPARISON_TERMS)?;

    for (term, result) in comparison.terms_years.iter().zip(&comparison.results) {
        println!("{term} years:");
        println!("  monthly payment: {}", result.monthly_payment.round_dp(2));
        println!("  total cost:      {}", result.total_cost.round_dp(2));
        println!("  total interest:  {}", result.total_interest.round_dp(2));
    }

    println!(
        "30-year saves {} per month but costs {} more overall",
        comparison.monthly_payment_difference().abs().round_dp(2),
        comparison.total_cost_difference().round_dp(2),
    );

    Ok(())
}
