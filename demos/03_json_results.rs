/// serializing results for a downstream presentation layer
use mortgage_engine_rs::{LoanInput, Money, MortgageEngine, MortgageResult, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = LoanInput::builder()
        .home_price(Money::from_major(300_000))
        .square_footage(dec!(2000))
        .down_payment_percent(dec!(20))
        .annual_rate(Rate::from_percent(dec!(4.5)))
        .term_years(30)
        .monthly_extra_fees(Money::from_major(100))
        .build()?;

    let result = MortgageEngine::default().calculate(&input)?;

    let json = serde_json::to_string_pretty(&result)?;
    println!("{json}");

    let restored: MortgageResult = serde_json::from_str(&json)?;
    assert_eq!(restored, result);

    Ok(())
}
