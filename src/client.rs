//! # Recipe API Client
//!
//! Thin asynchronous client for the recipe manager's HTTP API. The
//! aggregation engine itself performs no I/O; callers use this client to
//! resolve recipe records and meal-plan occurrences up front, then feed the
//! results to the build pipeline.
//!
//! ## Failure policy
//!
//! Transient failures are retried a bounded number of times with jittered
//! exponential backoff. When a single recipe still cannot be resolved (for
//! example it was deleted between selection and fetch), `get_recipes` drops
//! it with a warning instead of failing the whole build; the remaining
//! recipes aggregate normally.

use crate::recipe_model::{MealOccurrence, Recipe};
use crate::scaling::PlanWindow;
use futures::future::join_all;
use log::{debug, warn};
use rand::Rng;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Retry and timeout settings for API requests
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum number of retry attempts per request
    pub max_retries: u32,
    /// Base delay between retries in milliseconds
    pub base_retry_delay_ms: u64,
    /// Maximum delay between retries in milliseconds
    pub max_retry_delay_ms: u64,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_retry_delay_ms: 250,
            max_retry_delay_ms: 5000,
            request_timeout_secs: 30,
        }
    }
}

/// Errors surfaced by the recipe API client
#[derive(Debug)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, decode)
    Transport(reqwest::Error),
    /// Non-success HTTP status with the response body, when readable
    Status { code: u16, body: String },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Transport(e) => write!(f, "Request failed: {}", e),
            ClientError::Status { code, body } => {
                write!(f, "Request failed ({}): {}", code, body)
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e)
    }
}

/// Client for the recipe manager's JSON API
pub struct RecipeApiClient {
    base_url: String,
    http: reqwest::Client,
    config: ClientConfig,
}

impl RecipeApiClient {
    /// Create a client for the API at `base_url` with default settings
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Create a client with explicit retry/timeout settings
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            config,
        })
    }

    /// Fetch one recipe record by id
    pub async fn get_recipe(&self, id: &str) -> Result<Recipe, ClientError> {
        let url = format!("{}/api/recipes/{}", self.base_url, id);
        self.get_json(&url, &[]).await
    }

    /// Fetch many recipes concurrently, silently dropping failures
    ///
    /// All ids are requested at once; records come back in the order of
    /// `ids`, minus any failures, so aggregation order stays deterministic
    /// and one slow recipe does not stall the ones behind it.
    pub async fn get_recipes(&self, ids: &[String]) -> Vec<Recipe> {
        let results = join_all(ids.iter().map(|id| self.get_recipe(id))).await;

        let mut recipes = Vec::with_capacity(ids.len());
        for (id, result) in ids.iter().zip(results) {
            match result {
                Ok(recipe) => recipes.push(recipe),
                Err(e) => {
                    warn!("Dropping recipe '{}' from build: {}", id, e);
                }
            }
        }
        debug!("Resolved {}/{} recipes", recipes.len(), ids.len());
        recipes
    }

    /// Search recipes by free-text query
    pub async fn search_recipes(&self, query: &str) -> Result<Vec<Recipe>, ClientError> {
        let url = format!("{}/api/recipes", self.base_url);
        self.get_json(&url, &[("q", query.to_string())]).await
    }

    /// Fetch meal-plan occurrences for a window
    pub async fn get_meals(&self, window: &PlanWindow) -> Result<Vec<MealOccurrence>, ClientError> {
        let url = format!("{}/api/meals", self.base_url);
        let mut query = vec![
            ("start", window.start.to_string()),
            ("end", window.end.to_string()),
        ];
        if let Some(person) = &window.person {
            query.push(("person", person.clone()));
        }
        self.get_json(&url, &query).await
    }

    /// GET a JSON resource with bounded, jittered retries
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let mut attempt = 0u32;
        loop {
            match self.try_get_json(url, query).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.config.max_retries && is_retryable(&e) => {
                    attempt += 1;
                    let delay = self.retry_delay(attempt);
                    warn!(
                        "Attempt {}/{} for {} failed ({}); retrying in {:?}",
                        attempt, self.config.max_retries, url, e, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Exponential backoff capped at the configured maximum, plus jitter
    fn retry_delay(&self, attempt: u32) -> Duration {
        let exp = self
            .config
            .base_retry_delay_ms
            .saturating_mul(1u64 << attempt.min(16))
            .min(self.config.max_retry_delay_ms);
        let jitter = rand::thread_rng().gen_range(0..=self.config.base_retry_delay_ms);
        Duration::from_millis(exp + jitter)
    }
}

/// Server errors and transport failures are worth retrying; client errors
/// (404 for a deleted recipe, 400 for a bad query) are not
fn is_retryable(error: &ClientError) -> bool {
    match error {
        ClientError::Transport(_) => true,
        ClientError::Status { code, .. } => *code >= 500,
    }
}
