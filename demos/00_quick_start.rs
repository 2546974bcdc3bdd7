/// quick start - minimal fixed deposit calculation
use finkit_rs::chrono::NaiveDate;
use finkit_rs::{CalculationRequest, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // one-year fixed deposit of ₹1,00,000 at 6.5% simple interest
    let start = NaiveDate::from_ymd_opt(2024, 4, 1).ok_or("bad start date")?;
    let end = NaiveDate::from_ymd_opt(2025, 3, 31).ok_or("bad end date")?;

    let request = CalculationRequest::simple(
        Money::from_major(100_000),
        Rate::from_percent(dec!(6.5)),
        start,
        end,
    );
    let result = request.calculate()?;

    println!("days:     {}", result.total_days);
    println!("interest: {}", result.total_interest.format_inr());
    println!("maturity: {}", result.maturity_amount.format_inr());

    Ok(())
}
