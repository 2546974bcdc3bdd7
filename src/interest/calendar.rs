use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// count of calendar days with both endpoints included
///
/// callers must pass start <= end
pub fn days_between_inclusive(start: NaiveDate, end: NaiveDate) -> u32 {
    (end - start).num_days() as u32 + 1
}

/// last calendar day of the date's month
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = match date.month() {
        12 => (date.year() + 1, 1),
        m => (date.year(), m + 1),
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

/// indian financial year, april 1 through march 31
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FinancialYear {
    start_year: i32,
}

impl FinancialYear {
    /// financial year containing the given date
    pub fn of(date: NaiveDate) -> Self {
        let start_year = if date.month() >= 4 {
            date.year()
        } else {
            date.year() - 1
        };
        FinancialYear { start_year }
    }

    /// calendar year the financial year starts in
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// label in the "2023-2024" form
    pub fn label(&self) -> String {
        format!("{}-{}", self.start_year, self.start_year + 1)
    }
}

impl fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// reports carry the label, not the raw year
impl Serialize for FinancialYear {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_between_inclusive() {
        assert_eq!(days_between_inclusive(date(2024, 1, 15), date(2024, 1, 15)), 1);
        assert_eq!(days_between_inclusive(date(2024, 1, 1), date(2024, 1, 31)), 31);
        assert_eq!(days_between_inclusive(date(2023, 12, 30), date(2024, 1, 2)), 4);
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(last_day_of_month(date(2023, 2, 10)), date(2023, 2, 28));
        assert_eq!(last_day_of_month(date(2023, 12, 25)), date(2023, 12, 31));
        assert_eq!(last_day_of_month(date(2024, 4, 30)), date(2024, 4, 30));
    }

    #[test]
    fn test_financial_year_boundary() {
        assert_eq!(FinancialYear::of(date(2023, 3, 31)).label(), "2022-2023");
        assert_eq!(FinancialYear::of(date(2023, 4, 1)).label(), "2023-2024");
        assert_eq!(FinancialYear::of(date(2024, 1, 15)).start_year(), 2023);
    }

    #[test]
    fn test_financial_year_display_and_serde() {
        let fy = FinancialYear::of(date(2023, 6, 1));
        assert_eq!(fy.to_string(), "2023-2024");
        assert_eq!(serde_json::to_string(&fy).unwrap(), "\"2023-2024\"");
    }
}
