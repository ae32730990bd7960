//! Trip-planner HTTP adapter for plan and daily-log retrieval.

use thiserror::Error;
use tracing::debug;

use crate::plan::{DailyLog, TripPlanResponse};

/// Provides computed trip plans and daily-log records.
///
/// The engine itself never performs I/O; hosting code fetches inputs
/// through this seam and hands them to the pure annotation functions.
pub trait TripPlanProvider {
    fn plan_for(&self, trip_id: u64) -> Result<TripPlanResponse, PlanFetchError>;
    fn daily_logs_for(&self, trip_id: u64) -> Result<Vec<DailyLog>, PlanFetchError>;
}

/// Failure while talking to the trip-planning collaborator.
#[derive(Debug, Error)]
pub enum PlanFetchError {
    #[error("trip planner request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub base_url: String,
    /// Collaborator token for the Authorization header, if required.
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            auth_token: None,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlannerClient {
    config: PlannerConfig,
    client: reqwest::blocking::Client,
}

impl PlannerClient {
    pub fn new(config: PlannerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.config.auth_token {
            Some(token) => request.header("Authorization", format!("Token {token}")),
            None => request,
        }
    }
}

impl TripPlanProvider for PlannerClient {
    fn plan_for(&self, trip_id: u64) -> Result<TripPlanResponse, PlanFetchError> {
        let url = format!("{}/trips/{}/generate_plan/", self.config.base_url, trip_id);
        debug!(%url, "requesting trip plan");

        let plan = self
            .authorize(self.client.post(url))
            .send()?
            .error_for_status()?
            .json::<TripPlanResponse>()?;

        Ok(plan)
    }

    fn daily_logs_for(&self, trip_id: u64) -> Result<Vec<DailyLog>, PlanFetchError> {
        let url = format!("{}/logs/get_log/", self.config.base_url);
        debug!(%url, trip_id, "requesting daily logs");

        let logs = self
            .authorize(self.client.get(url).query(&[("id", trip_id)]))
            .send()?
            .error_for_status()?
            .json::<Vec<DailyLog>>()?;

        Ok(logs)
    }
}
