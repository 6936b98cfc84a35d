//! DigitalOcean API client core
//!
//! Bearer token HTTP plumbing shared by every resource family. Each call
//! is a single round trip against the v2 REST API: no retries, no caching,
//! no connection management beyond what reqwest already does.

use crate::error::{DoError, Result};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

const DO_API_BASE: &str = "https://api.digitalocean.com/v2";

/// DigitalOcean API client
///
/// Cheap to share behind an `Arc`; holds only the reqwest client and the
/// access token.
#[derive(Debug)]
pub struct DoClient {
    client: reqwest::Client,
    token: String,
}

impl DoClient {
    /// Create a client from an access token
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(DoError::MissingToken);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            token,
        })
    }

    /// Create a client from the `DIGITALOCEAN_ACCESS_TOKEN` environment variable
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("DIGITALOCEAN_ACCESS_TOKEN").unwrap_or_default();
        Self::new(token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", DO_API_BASE, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// GET returning the raw response body (kubeconfig YAML is not JSON)
    pub(crate) async fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }
        Ok(body)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// POST where the API answers 204 No Content on success
    pub(crate) async fn post_no_content<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        Self::expect_no_content(response).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        tracing::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        Self::expect_no_content(response).await
    }

    /// DELETE carrying a JSON body (membership removal endpoints)
    pub(crate) async fn delete_with_body<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;

        Self::expect_no_content(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::api_error(status, &body));
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn expect_no_content(response: reqwest::Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(Self::api_error(status, &body));
        }
        Ok(())
    }

    fn api_error(status: reqwest::StatusCode, body: &str) -> DoError {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(e) => DoError::Api {
                status: status.as_u16(),
                id: e.id,
                message: e.message,
            },
            Err(_) => DoError::Api {
                status: status.as_u16(),
                id: status
                    .canonical_reason()
                    .unwrap_or("error")
                    .to_lowercase()
                    .replace(' ', "_"),
                message: body.trim().to_string(),
            },
        }
    }
}

// ============ API Types ============

/// Error body the API attaches to non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    id: String,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_token() {
        let err = DoClient::new("").unwrap_err();
        assert!(matches!(err, DoError::MissingToken));
        assert_eq!(
            err.to_string(),
            "DIGITALOCEAN_ACCESS_TOKEN environment variable is required"
        );
    }

    #[test]
    fn test_from_env_requires_token() {
        temp_env::with_var_unset("DIGITALOCEAN_ACCESS_TOKEN", || {
            let err = DoClient::from_env().unwrap_err();
            assert!(matches!(err, DoError::MissingToken));
        });
    }

    #[test]
    fn test_from_env_reads_token() {
        temp_env::with_var("DIGITALOCEAN_ACCESS_TOKEN", Some("dop_v1_test"), || {
            assert!(DoClient::from_env().is_ok());
        });
    }

    #[test]
    fn test_api_error_parses_provider_body() {
        let err = DoClient::api_error(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"id":"not_found","message":"The resource you requested could not be found."}"#,
        );
        assert_eq!(
            err.to_string(),
            "404 not_found: The resource you requested could not be found."
        );
    }

    #[test]
    fn test_api_error_keeps_unparseable_body() {
        let err = DoClient::api_error(reqwest::StatusCode::BAD_GATEWAY, "upstream busted");
        assert_eq!(err.to_string(), "502 bad_gateway: upstream busted");
    }
}
