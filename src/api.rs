// API client module: a small blocking HTTP client used by the `fetch`
// and `random-user` commands. One request per invocation, no timeout,
// no retry and no auth headers.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Blocking HTTP client plus the endpoint used for random users.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    random_user_url: String,
}

/// Response envelope of the Random User API. Only the fields the CLI
/// prints are modelled.
#[derive(Deserialize, Debug)]
pub struct RandomUserResponse {
    pub results: Vec<RandomUser>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RandomUser {
    pub name: UserName,
    pub email: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserName {
    pub first: String,
    pub last: String,
}

impl RandomUserResponse {
    /// First user of the payload; an empty `results` array is an error.
    pub fn into_first(self) -> Result<RandomUser> {
        self.results
            .into_iter()
            .next()
            .context("Random user response has no results")
    }
}

impl RandomUser {
    /// `User: <first> <last> | Email: <email>`
    pub fn summary(&self) -> String {
        format!(
            "User: {} {} | Email: {}",
            self.name.first, self.name.last, self.email
        )
    }
}

impl ApiClient {
    /// Create an ApiClient that asks `random_user_url` for random users.
    pub fn new(random_user_url: impl Into<String>) -> Result<Self> {
        // The blocking client defaults to a 30s total timeout.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            random_user_url: random_user_url.into(),
        })
    }

    /// GET `url` and return the body. Non-2xx statuses are errors.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let res = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to send request to {}", url))?;
        let res = res.error_for_status()?;
        res.text().context("Failed to read response body")
    }

    /// Fetch one user from the Random User API.
    pub fn random_user(&self) -> Result<RandomUser> {
        let res = self
            .client
            .get(&self.random_user_url)
            .send()
            .context("Failed to send random user request")?
            .error_for_status()?;
        let payload: RandomUserResponse = res.json().context("Parsing random user json")?;
        payload.into_first()
    }
}

/// Pretty-print JSON bodies; anything else is returned unchanged.
pub fn render_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) if value.is_object() || value.is_array() => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string())
        }
        _ => body.to_string(),
    }
}
