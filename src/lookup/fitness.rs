use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;
use crate::lookup::LookupConfig;

/// one exercise row from the spreadsheet-backed api
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Exercise {
    pub exercise: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub sets: Option<String>,
    #[serde(default)]
    pub reps_range: Option<String>,
    pub day: String,
}

/// client for the exercise spreadsheet api
pub struct ExerciseSheetClient {
    http: reqwest::Client,
    url: String,
}

impl ExerciseSheetClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            url: LookupConfig::default().exercise_sheet_url,
        }
    }

    pub fn with_config(config: &LookupConfig) -> Result<Self> {
        Ok(Self {
            http: super::http_client(config.timeout)?,
            url: config.exercise_sheet_url.clone(),
        })
    }

    /// fetch every exercise row
    pub async fn exercises(&self) -> Result<Vec<Exercise>> {
        debug!(url = %self.url, "exercise sheet fetch");
        Ok(self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    /// fetch and keep only the rows scheduled for the given day
    pub async fn exercises_for_day(&self, day: &str) -> Result<Vec<Exercise>> {
        let all = self.exercises().await?;
        Ok(filter_by_day(&all, day))
    }
}

impl Default for ExerciseSheetClient {
    fn default() -> Self {
        Self::new()
    }
}

/// keep the exercises scheduled for the given day; "all" keeps everything
pub fn filter_by_day(exercises: &[Exercise], day: &str) -> Vec<Exercise> {
    if day.eq_ignore_ascii_case("all") {
        return exercises.to_vec();
    }
    exercises
        .iter()
        .filter(|exercise| exercise.day == day)
        .cloned()
        .collect()
}
