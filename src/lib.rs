pub mod decimal;
pub mod errors;
pub mod interest;
pub mod lookup;

// re-export key types
pub use decimal::{Money, Rate};
pub use errors::{FinkitError, Result};
pub use interest::{
    calculate, CalculationRequest, CalculationResult, CompoundingFrequency, FinancialYear,
    FinancialYearInterest, InterestType, MonthlySegment,
};
pub use lookup::{
    filter_by_day, BankBranch, Exercise, ExerciseSheetClient, IfscClient, LookupConfig, PostOffice,
    PostalClient,
};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
