//! API Ninjas thesaurus provider.
//!
//! Resolves synonyms over HTTP against the API Ninjas thesaurus endpoint.
//! Requires an API key and internet connection.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{Result, ThesaurizeError};
use crate::thesaurus::SynonymProvider;

/// Default thesaurus endpoint.
const DEFAULT_ENDPOINT: &str = "https://api.api-ninjas.com/v1/thesaurus";

/// Deadline applied to each lookup so one hung call cannot stall a phrase.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response structure from the API Ninjas thesaurus endpoint.
#[derive(Debug, Deserialize)]
struct ThesaurusResponse {
    /// Synonym candidates in provider order.
    synonyms: Vec<String>,
}

/// HTTP synonym provider backed by the API Ninjas thesaurus.
///
/// # Examples
///
/// ```no_run
/// use thesaurize::thesaurus::{ApiNinjasThesaurus, SynonymProvider};
///
/// # async fn example() -> thesaurize::error::Result<()> {
/// let thesaurus = ApiNinjasThesaurus::new(std::env::var("API_TOKEN").unwrap())?;
/// let synonym = thesaurus.resolve("fast").await?;
/// # Ok(())
/// # }
/// ```
pub struct ApiNinjasThesaurus {
    /// HTTP client for making API requests.
    client: Client,
    /// API key sent with each request.
    api_key: String,
    /// Endpoint URL (overridable for tests).
    endpoint: String,
}

impl std::fmt::Debug for ApiNinjasThesaurus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiNinjasThesaurus")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl ApiNinjasThesaurus {
    /// Create a new provider with the given API key.
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self> {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    /// Create a provider that talks to a custom endpoint.
    pub fn with_endpoint<S: Into<String>, E: Into<String>>(api_key: S, endpoint: E) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ThesaurizeError::resolver(format!("failed to build HTTP client: {e}")))?;

        Ok(ApiNinjasThesaurus {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        })
    }

    /// Get the endpoint this provider queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SynonymProvider for ApiNinjasThesaurus {
    async fn resolve(&self, word: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("word", word)])
            .header("X-Api-Key", self.api_key.as_str())
            .send()
            .await
            .map_err(|e| {
                ThesaurizeError::resolver(format!("thesaurus request for '{word}' failed: {e}"))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ThesaurizeError::resolver(format!("failed to read thesaurus response: {e}"))
        })?;

        if !status.is_success() {
            return Err(ThesaurizeError::resolver(format!(
                "thesaurus API error (status {status}): {body}"
            )));
        }

        let parsed: ThesaurusResponse = serde_json::from_str(&body).map_err(|e| {
            ThesaurizeError::resolver(format!("malformed thesaurus response for '{word}': {e}"))
        })?;

        // First candidate wins; an empty candidate list resolves to the word
        // itself rather than an error.
        Ok(parsed
            .synonyms
            .into_iter()
            .next()
            .unwrap_or_else(|| word.to_string()))
    }

    fn name(&self) -> &'static str {
        "api_ninjas"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let parsed: ThesaurusResponse =
            serde_json::from_str(r#"{"synonyms": ["speedy", "quick"]}"#).unwrap();
        assert_eq!(parsed.synonyms, vec!["speedy", "quick"]);

        let parsed: ThesaurusResponse = serde_json::from_str(r#"{"synonyms": []}"#).unwrap();
        assert!(parsed.synonyms.is_empty());
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        let parsed: serde_json::Result<ThesaurusResponse> = serde_json::from_str("not json");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_provider_construction() {
        let thesaurus = ApiNinjasThesaurus::new("secret").unwrap();
        assert_eq!(thesaurus.name(), "api_ninjas");
        assert_eq!(thesaurus.endpoint(), DEFAULT_ENDPOINT);

        let thesaurus =
            ApiNinjasThesaurus::with_endpoint("secret", "http://localhost:9999/v1/thesaurus")
                .unwrap();
        assert_eq!(thesaurus.endpoint(), "http://localhost:9999/v1/thesaurus");
    }
}
