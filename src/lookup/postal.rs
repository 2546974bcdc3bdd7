use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{FinkitError, Result};
use crate::lookup::LookupConfig;

/// one post office record as returned by the postal api
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PostOffice {
    pub name: String,
    #[serde(default)]
    pub branch_type: Option<String>,
    #[serde(default)]
    pub delivery_status: Option<String>,
    #[serde(default)]
    pub circle: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub pincode: String,
}

// the api wraps every reply in a one-element array of this envelope
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PostalEnvelope {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    post_office: Option<Vec<PostOffice>>,
}

/// client for api.postalpincode.in
pub struct PostalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PostalClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: LookupConfig::default().postal_base_url,
        }
    }

    pub fn with_config(config: &LookupConfig) -> Result<Self> {
        Ok(Self {
            http: super::http_client(config.timeout)?,
            base_url: config.postal_base_url.clone(),
        })
    }

    /// look up the post offices serving a six digit pincode
    pub async fn by_pincode(&self, pincode: &str) -> Result<Vec<PostOffice>> {
        let pincode = pincode.trim();
        if pincode.len() != 6 || !pincode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FinkitError::InvalidPincode {
                code: pincode.to_string(),
            });
        }
        self.fetch(format!("{}/pincode/{}", self.base_url, pincode))
            .await
    }

    /// search post offices by branch name
    pub async fn by_branch_name(&self, name: &str) -> Result<Vec<PostOffice>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FinkitError::EmptyQuery);
        }
        self.fetch(format!("{}/postoffice/{}", self.base_url, name))
            .await
    }

    async fn fetch(&self, url: String) -> Result<Vec<PostOffice>> {
        debug!(%url, "postal lookup");
        let envelopes: Vec<PostalEnvelope> = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        unwrap_envelopes(envelopes)
    }
}

impl Default for PostalClient {
    fn default() -> Self {
        Self::new()
    }
}

// Status "Success" carries records; anything else is the api's polite 404
fn unwrap_envelopes(envelopes: Vec<PostalEnvelope>) -> Result<Vec<PostOffice>> {
    let first = envelopes
        .into_iter()
        .next()
        .ok_or_else(|| FinkitError::UnexpectedResponse {
            service: "postal".to_string(),
            message: "empty response array".to_string(),
        })?;
    if first.status != "Success" {
        return Err(FinkitError::NoRecords {
            message: first
                .message
                .unwrap_or_else(|| "no post offices found".to_string()),
        });
    }
    Ok(first.post_office.unwrap_or_default())
}
