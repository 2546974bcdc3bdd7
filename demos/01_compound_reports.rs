/// compound interest with monthly and financial-year reports
use finkit_rs::chrono::NaiveDate;
use finkit_rs::{CalculationRequest, CompoundingFrequency, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2023, 2, 15).ok_or("bad start date")?;
    let end = NaiveDate::from_ymd_opt(2024, 8, 14).ok_or("bad end date")?;

    let request = CalculationRequest::compound(
        Money::from_major(500_000),
        Rate::from_percent(dec!(7.1)),
        start,
        end,
        CompoundingFrequency::Quarterly,
    );
    let result = request.calculate()?;

    println!("monthly report");
    for segment in &result.monthly_report {
        println!(
            "  {}  {:>14}  {:>16}",
            segment.period_end,
            segment.interest.format_inr(),
            segment.balance.format_inr()
        );
    }

    println!("financial year report");
    for year in &result.financial_year_report {
        println!(
            "  {}  {:>14}",
            year.financial_year,
            year.interest.format_inr()
        );
    }

    println!("total interest: {}", result.total_interest.format_inr());
    println!("maturity:       {}", result.maturity_amount.format_inr());

    // the result serializes directly for a ui layer
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
