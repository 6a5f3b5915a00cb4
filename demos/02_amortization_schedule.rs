/// year-by-year amortization schedule rebuilt from a monthly breakdown
use mortgage_engine_rs::chrono::NaiveDate;
use mortgage_engine_rs::{AmortizationSchedule, LoanInput, Money, MortgageEngine, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = LoanInput::builder()
        .home_price(Money::from_major(300_000))
        .down_payment_percent(dec!(20))
        .annual_rate(Rate::from_percent(dec!(4.5)))
        .term_years(30)
        .build()?;

    let result = MortgageEngine::default().calculate(&input)?;

    // the breakdown alone carries enough to rebuild the schedule
    let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let schedule = AmortizationSchedule::generate(&result.breakdown, Some(start));

    println!("year  principal     interest     balance");
    for year in &schedule.years {
        println!(
            "{}  {:>12}  {:>11}  {:>10}",
            year.calendar_year.unwrap_or(year.year as i32),
            year.principal_paid.round_dp(2).to_string(),
            year.interest_paid.round_dp(2).to_string(),
            year.remaining_balance.round_dp(2).to_string(),
        );
    }

    println!("total principal: {}", schedule.total_principal.round_dp(2));
    println!("total interest:  {}", schedule.total_interest.round_dp(2));

    // the lazy monthly iterator is restartable and needs no allocation
    let first_month = result.breakdown.monthly_schedule().next().unwrap();
    println!(
        "first month: {} principal, {} interest",
        first_month.principal_paid.round_dp(2),
        first_month.interest_paid.round_dp(2),
    );

    Ok(())
}
