//! thin typed clients over the public lookup services
//!
//! the clients fetch, classify the "no records" case, and decode — nothing
//! more; callers render the records as-is

pub mod fitness;
pub mod ifsc;
pub mod postal;

pub use fitness::{filter_by_day, Exercise, ExerciseSheetClient};
pub use ifsc::{BankBranch, IfscClient};
pub use postal::{PostOffice, PostalClient};

use std::time::Duration;

use crate::errors::Result;

/// connection settings shared by the lookup clients
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub postal_base_url: String,
    pub ifsc_base_url: String,
    pub exercise_sheet_url: String,
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            postal_base_url: "https://api.postalpincode.in".to_string(),
            ifsc_base_url: "https://ifsc.razorpay.com".to_string(),
            exercise_sheet_url: "https://sheetdb.io/api/v1/3z759ihl8tvli".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}
