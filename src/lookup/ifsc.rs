use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{FinkitError, Result};
use crate::lookup::LookupConfig;

/// bank branch record as returned by ifsc.razorpay.com
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct BankBranch {
    pub bank: String,
    pub ifsc: String,
    pub branch: String,
    #[serde(default)]
    pub centre: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub micr: Option<String>,
    #[serde(default)]
    pub swift: Option<String>,
    #[serde(default)]
    pub bankcode: Option<String>,
    #[serde(default)]
    pub imps: bool,
    #[serde(default)]
    pub rtgs: bool,
    #[serde(default)]
    pub neft: bool,
    #[serde(default)]
    pub upi: bool,
}

/// client for ifsc.razorpay.com
pub struct IfscClient {
    http: reqwest::Client,
    base_url: String,
}

impl IfscClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: LookupConfig::default().ifsc_base_url,
        }
    }

    pub fn with_config(config: &LookupConfig) -> Result<Self> {
        Ok(Self {
            http: super::http_client(config.timeout)?,
            base_url: config.ifsc_base_url.clone(),
        })
    }

    /// look up the branch behind an 11 character ifsc code
    ///
    /// codes are uppercased before the request, matching bank statements
    /// that print them in lowercase
    pub async fn lookup(&self, code: &str) -> Result<BankBranch> {
        let code = code.trim().to_ascii_uppercase();
        if code.len() != 11 {
            return Err(FinkitError::InvalidIfscCode { code });
        }

        let url = format!("{}/{}", self.base_url, code);
        debug!(%url, "ifsc lookup");
        let response = self.http.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FinkitError::NoRecords {
                message: format!("no branch found for ifsc {code}"),
            });
        }
        Ok(response.error_for_status()?.json().await?)
    }
}

impl Default for IfscClient {
    fn default() -> Self {
        Self::new()
    }
}
