use crate::api::models::{ApiResponse, RequestBody};
use crate::error::{AuditError, Result};
use colored::*;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::fmt;
use std::time::Duration;

/// How the client authenticates against the model endpoint.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Sent as the `api-key` header.
    ApiKey(String),
    /// An already acquired token, sent as `Authorization: Bearer`.
    BearerToken(String),
}

impl Credential {
    /// Pick the credential from the environment; a non-empty API key wins
    /// over a bearer token.
    pub fn from_env_lookup<F>(env_lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        env_lookup("AZURE_OPENAI_API_KEY")
            .filter(|k| !k.is_empty())
            .map(Credential::ApiKey)
            .or_else(|| {
                env_lookup("AZURE_OPENAI_AD_TOKEN")
                    .filter(|t| !t.is_empty())
                    .map(Credential::BearerToken)
            })
    }

    fn header(&self) -> Result<(HeaderName, HeaderValue)> {
        let (name, value) = match self {
            Credential::ApiKey(key) => (HeaderName::from_static("api-key"), key.clone()),
            Credential::BearerToken(token) => (AUTHORIZATION, format!("Bearer {}", token)),
        };
        let value = HeaderValue::from_str(&value)
            .map_err(|e| AuditError::ConfigError(format!("Invalid credential header: {}", e)))?;
        Ok((name, value))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::ApiKey(_) => write!(f, "ApiKey(***)"),
            Credential::BearerToken(_) => write!(f, "BearerToken(***)"),
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
    verbose: bool,
}

impl ApiClient {
    pub fn new(
        endpoint: &str,
        credential: &Credential,
        request_timeout: u64,
        verbose: bool,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let (name, value) = credential.header()?;
        headers.insert(name, value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(request_timeout))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            verbose,
        })
    }

    /// POST a request and fail on any non-success status.
    pub async fn send(&self, request_body: &RequestBody) -> Result<reqwest::Response> {
        if self.verbose {
            eprintln!(
                "{}",
                format!(
                    "[api] POST {} (items={}, tools={}, stream={})",
                    self.endpoint,
                    request_body.input.len(),
                    request_body.tools.len(),
                    request_body.stream
                )
                .dimmed()
            );
        }

        let response = self
            .http
            .post(&self.endpoint)
            .json(request_body)
            .send()
            .await?;

        if self.verbose {
            eprintln!(
                "{}",
                format!("[api] Response status: {}", response.status()).dimmed()
            );
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AuditError::ApiError { status, message });
        }

        Ok(response)
    }

    /// Non-streaming request returning the parsed response.
    pub async fn create_response(&self, request_body: &RequestBody) -> Result<ApiResponse> {
        let response = self.send(request_body).await?;
        let response_text = response.text().await?;
        if self.verbose {
            eprintln!(
                "{}",
                format!("[api] Raw response: {}", response_text).dimmed()
            );
        }
        Ok(serde_json::from_str(&response_text)?)
    }
}
