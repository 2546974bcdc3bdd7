use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{FinkitError, Result};
use crate::interest::calendar::{days_between_inclusive, last_day_of_month, FinancialYear};
use crate::interest::{CompoundingFrequency, InterestType};

/// a single fixed deposit calculation, built once per submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub principal: Money,
    pub annual_rate: Rate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub interest_type: InterestType,
    /// required for compound interest, ignored for simple
    pub compounding: Option<CompoundingFrequency>,
}

impl CalculationRequest {
    /// simple interest request
    pub fn simple(
        principal: Money,
        annual_rate: Rate,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            start_date,
            end_date,
            interest_type: InterestType::Simple,
            compounding: None,
        }
    }

    /// compound interest request
    pub fn compound(
        principal: Money,
        annual_rate: Rate,
        start_date: NaiveDate,
        end_date: NaiveDate,
        frequency: CompoundingFrequency,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            start_date,
            end_date,
            interest_type: InterestType::Compound,
            compounding: Some(frequency),
        }
    }

    /// run the accrual engine over this request
    pub fn calculate(&self) -> Result<CalculationResult> {
        calculate(self)
    }
}

/// one calendar-month-bounded accrual segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlySegment {
    /// last day of the segment, month-end or the range end, whichever is earlier
    pub period_end: NaiveDate,
    /// days covered by this segment, both endpoints included
    pub days: u32,
    /// interest accrued during this segment only
    pub interest: Money,
    /// deposit balance after this segment; stays at principal for simple interest
    pub balance: Money,
}

/// interest accrued within one indian financial year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialYearInterest {
    pub financial_year: FinancialYear,
    pub interest: Money,
}

/// full result of a fixed deposit calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub total_interest: Money,
    pub maturity_amount: Money,
    /// calendar days in the range, both endpoints included
    pub total_days: u32,
    pub monthly_report: Vec<MonthlySegment>,
    pub financial_year_report: Vec<FinancialYearInterest>,
}

/// walk the date range in calendar-month-bounded segments and accrue
/// interest per segment, aggregating by month and by financial year
///
/// pure function: deterministic, no side effects, no shared state
pub fn calculate(request: &CalculationRequest) -> Result<CalculationResult> {
    if request.end_date < request.start_date {
        return Err(FinkitError::InvalidDateRange {
            start: request.start_date,
            end: request.end_date,
        });
    }
    if request.annual_rate <= Rate::ZERO {
        return Err(FinkitError::InvalidRate {
            rate: request.annual_rate,
        });
    }
    if request.principal <= Money::ZERO {
        return Err(FinkitError::InvalidPrincipal {
            amount: request.principal,
        });
    }
    let frequency = match (request.interest_type, request.compounding) {
        (InterestType::Compound, Some(frequency)) => Some(frequency),
        (InterestType::Compound, None) => return Err(FinkitError::MissingCompoundingFrequency),
        (InterestType::Simple, _) => None,
    };

    let total_days = days_between_inclusive(request.start_date, request.end_date);
    let rate_fraction = request.annual_rate.as_decimal();

    let mut monthly_report = Vec::new();
    let mut financial_year_report = Vec::new();
    let mut total_interest = Money::ZERO;
    let mut current_amount = request.principal;
    let mut cursor = request.start_date;
    let mut current_year = FinancialYear::of(request.start_date);
    let mut year_interest = Money::ZERO;

    while cursor <= request.end_date {
        let period_end = last_day_of_month(cursor).min(request.end_date);
        let days = days_between_inclusive(cursor, period_end);
        let year_fraction = Decimal::from(days) / dec!(365);

        let segment_interest = match frequency {
            None => Money::from_decimal(current_amount.as_decimal() * rate_fraction * year_fraction),
            Some(frequency) => {
                // compounding restarts every calendar month: each segment applies
                // (1 + r/n)^(n*t) over its own fractional-year length to the balance
                // carried in, which yields different totals than one whole-term
                // compound factor
                let n = Decimal::from(frequency.periods_per_year());
                let growth = (Decimal::ONE + rate_fraction / n).powd(n * year_fraction);
                Money::from_decimal(current_amount.as_decimal() * (growth - Decimal::ONE))
            }
        };

        // a segment never crosses a month boundary, so all of its interest
        // belongs to the financial year containing its end date
        let segment_year = FinancialYear::of(period_end);
        if segment_year != current_year {
            financial_year_report.push(FinancialYearInterest {
                financial_year: current_year,
                interest: year_interest,
            });
            current_year = segment_year;
            year_interest = Money::ZERO;
        }

        total_interest += segment_interest;
        year_interest += segment_interest;

        let balance = match request.interest_type {
            InterestType::Compound => current_amount + segment_interest,
            InterestType::Simple => current_amount,
        };
        monthly_report.push(MonthlySegment {
            period_end,
            days,
            interest: segment_interest,
            balance,
        });

        if request.interest_type == InterestType::Compound {
            current_amount += segment_interest;
        }

        cursor = period_end + chrono::Duration::days(1);
    }

    if year_interest > Money::ZERO {
        financial_year_report.push(FinancialYearInterest {
            financial_year: current_year,
            interest: year_interest,
        });
    }

    Ok(CalculationResult {
        total_interest,
        maturity_amount: request.principal + total_interest,
        total_days,
        monthly_report,
        financial_year_report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn money(s: &str) -> Money {
        Money::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_single_day_simple() {
        let request = CalculationRequest::simple(
            Money::from_major(100_000),
            Rate::from_percent(dec!(6)),
            date(2024, 1, 15),
            date(2024, 1, 15),
        );
        let result = request.calculate().unwrap();

        assert_eq!(result.total_days, 1);
        assert_eq!(result.monthly_report.len(), 1);
        assert_eq!(result.monthly_report[0].days, 1);
        assert_eq!(result.monthly_report[0].period_end, date(2024, 1, 15));
        assert_eq!(result.monthly_report[0].balance, Money::from_major(100_000));

        // 100000 * 0.06 * (1/365)
        assert_eq!(result.total_interest.round_dp(2), money("16.44"));
        assert_eq!(
            result.maturity_amount,
            Money::from_major(100_000) + result.total_interest
        );
    }

    #[test]
    fn test_segments_partition_the_range() {
        let request = CalculationRequest::simple(
            Money::from_major(50_000),
            Rate::from_percent(dec!(7.5)),
            date(2024, 1, 15),
            date(2024, 3, 10),
        );
        let result = request.calculate().unwrap();

        let ends: Vec<NaiveDate> = result.monthly_report.iter().map(|s| s.period_end).collect();
        assert_eq!(
            ends,
            vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 10)]
        );

        let day_sum: u32 = result.monthly_report.iter().map(|s| s.days).sum();
        assert_eq!(day_sum, result.total_days);
        assert_eq!(result.total_days, 56);
    }

    #[test]
    fn test_monthly_interest_sums_to_total() {
        let request = CalculationRequest::compound(
            Money::from_major(250_000),
            Rate::from_percent(dec!(7.1)),
            date(2022, 7, 18),
            date(2024, 2, 5),
            CompoundingFrequency::Quarterly,
        );
        let result = request.calculate().unwrap();

        let mut monthly_sum = Money::ZERO;
        for segment in &result.monthly_report {
            monthly_sum += segment.interest;
        }
        assert_eq!(monthly_sum, result.total_interest);

        let mut year_sum = Money::ZERO;
        for year in &result.financial_year_report {
            year_sum += year.interest;
        }
        assert_eq!(year_sum, result.total_interest);
    }

    #[test]
    fn test_financial_year_split() {
        let request = CalculationRequest::simple(
            Money::from_major(100_000),
            Rate::from_percent(dec!(10)),
            date(2023, 3, 1),
            date(2023, 5, 31),
        );
        let result = request.calculate().unwrap();

        assert_eq!(result.financial_year_report.len(), 2);
        assert_eq!(
            result.financial_year_report[0].financial_year.label(),
            "2022-2023"
        );
        assert_eq!(
            result.financial_year_report[1].financial_year.label(),
            "2023-2024"
        );

        // march segment only: 100000 * 0.10 * 31/365
        assert_eq!(
            result.financial_year_report[0].interest.round_dp(2),
            money("849.32")
        );
        // april + may segments: 100000 * 0.10 * (30 + 31)/365
        assert_eq!(
            result.financial_year_report[1].interest.round_dp(2),
            money("1671.23")
        );
        assert_eq!(
            result.financial_year_report[0].interest + result.financial_year_report[1].interest,
            result.total_interest
        );
    }

    #[test]
    fn test_simple_balance_stays_at_principal() {
        let principal = Money::from_major(75_000);
        let request = CalculationRequest::simple(
            principal,
            Rate::from_percent(dec!(8)),
            date(2023, 1, 10),
            date(2023, 11, 20),
        );
        let result = request.calculate().unwrap();

        for segment in &result.monthly_report {
            assert_eq!(segment.balance, principal);
        }
    }

    #[test]
    fn test_compound_balance_tracks_accrued_interest() {
        let principal = Money::from_major(100_000);
        let request = CalculationRequest::compound(
            principal,
            Rate::from_percent(dec!(6)),
            date(2024, 1, 1),
            date(2024, 6, 30),
            CompoundingFrequency::Monthly,
        );
        let result = request.calculate().unwrap();

        let mut accrued = Money::ZERO;
        let mut previous_balance = principal;
        for segment in &result.monthly_report {
            accrued += segment.interest;
            assert_eq!(segment.balance, principal + accrued);
            assert!(segment.balance >= previous_balance);
            previous_balance = segment.balance;
        }

        // first segment: 100000 * ((1 + 0.06/12)^(12 * 31/365) - 1)
        let first = result.monthly_report[0].interest;
        assert!(first > money("509"));
        assert!(first < money("510"));
    }

    #[test]
    fn test_compound_exceeds_simple_over_same_range() {
        let principal = Money::from_major(200_000);
        let rate = Rate::from_percent(dec!(7));
        let start = date(2023, 4, 1);
        let end = date(2024, 3, 31);

        let simple = CalculationRequest::simple(principal, rate, start, end)
            .calculate()
            .unwrap();
        let compound = CalculationRequest::compound(
            principal,
            rate,
            start,
            end,
            CompoundingFrequency::Monthly,
        )
        .calculate()
        .unwrap();

        assert!(compound.total_interest >= simple.total_interest);
    }

    #[test]
    fn test_frequency_ignored_for_simple() {
        let mut request = CalculationRequest::simple(
            Money::from_major(10_000),
            Rate::from_percent(dec!(5)),
            date(2023, 6, 1),
            date(2023, 9, 30),
        );
        let bare = request.calculate().unwrap();

        request.compounding = Some(CompoundingFrequency::Quarterly);
        let with_frequency = request.calculate().unwrap();

        assert_eq!(bare, with_frequency);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let request = CalculationRequest::compound(
            Money::from_major(300_000),
            Rate::from_percent(dec!(6.8)),
            date(2021, 11, 5),
            date(2024, 2, 29),
            CompoundingFrequency::SemiAnnual,
        );
        assert_eq!(request.calculate().unwrap(), request.calculate().unwrap());
    }

    #[test]
    fn test_validation_rejects_bad_input() {
        let good = CalculationRequest::simple(
            Money::from_major(1_000),
            Rate::from_percent(dec!(5)),
            date(2024, 1, 1),
            date(2024, 6, 30),
        );

        let mut reversed = good;
        reversed.start_date = date(2024, 7, 1);
        assert!(matches!(
            reversed.calculate(),
            Err(FinkitError::InvalidDateRange { .. })
        ));

        let mut zero_principal = good;
        zero_principal.principal = Money::ZERO;
        assert!(matches!(
            zero_principal.calculate(),
            Err(FinkitError::InvalidPrincipal { .. })
        ));

        let mut zero_rate = good;
        zero_rate.annual_rate = Rate::ZERO;
        assert!(matches!(
            zero_rate.calculate(),
            Err(FinkitError::InvalidRate { .. })
        ));

        let mut no_frequency = good;
        no_frequency.interest_type = InterestType::Compound;
        assert!(matches!(
            no_frequency.calculate(),
            Err(FinkitError::MissingCompoundingFrequency)
        ));
    }

    #[test]
    fn test_mid_month_start_crossing_year_end() {
        let request = CalculationRequest::simple(
            Money::from_major(100_000),
            Rate::from_percent(dec!(6)),
            date(2023, 12, 15),
            date(2024, 1, 15),
        );
        let result = request.calculate().unwrap();

        let ends: Vec<NaiveDate> = result.monthly_report.iter().map(|s| s.period_end).collect();
        assert_eq!(ends, vec![date(2023, 12, 31), date(2024, 1, 15)]);
        assert_eq!(result.monthly_report[0].days, 17);
        assert_eq!(result.monthly_report[1].days, 15);

        // december and january both sit inside 2023-2024
        assert_eq!(result.financial_year_report.len(), 1);
        assert_eq!(
            result.financial_year_report[0].financial_year.label(),
            "2023-2024"
        );
    }
}
