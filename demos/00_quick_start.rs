/// quick start - minimal example to get started
use mortgage_engine_rs::{LoanInput, Money, MortgageEngine, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // $300k home, 20% down, 4.5% over 30 years
    let input = LoanInput::builder()
        .home_price(Money::from_major(300_000))
        .down_payment_percent(dec!(20))
        .annual_rate(Rate::from_percent(dec!(4.5)))
        .term_years(30)
        .monthly_extra_fees(Money::from_major(100))
        .build()?;

    let result = MortgageEngine::default().calculate(&input)?;

    println!("monthly payment: {}", result.monthly_payment.round_dp(2));
    println!("total cost:      {}", result.total_cost.round_dp(2));
    println!("principal:       {}", result.total_principal.round_dp(2));
    println!("interest:        {}", result.total_interest.round_dp(2));

    Ok(())
}
