use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum FinkitError {
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("invalid principal: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidRate {
        rate: Rate,
    },

    #[error("compound interest requires a compounding frequency")]
    MissingCompoundingFrequency,

    #[error("invalid pincode: {code}")]
    InvalidPincode {
        code: String,
    },

    #[error("invalid ifsc code: {code}")]
    InvalidIfscCode {
        code: String,
    },

    #[error("empty search query")]
    EmptyQuery,

    #[error("no records found: {message}")]
    NoRecords {
        message: String,
    },

    #[error("unexpected response from {service}: {message}")]
    UnexpectedResponse {
        service: String,
        message: String,
    },

    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FinkitError>;
