//! # Userpay Client SDK
//!
//! A typed Rust client for the userpay demo API.

use reqwest::Client;

use userpay_types::PaymentQuery;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// Userpay API client.
pub struct UserpayClient {
    base_url: String,
    http: Client,
}

impl UserpayClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches the greeting at the application root.
    pub async fn hello(&self) -> Result<String, ClientError> {
        self.get_text("/").await
    }

    /// Fetches the user collection index.
    pub async fn users_index(&self) -> Result<String, ClientError> {
        self.get_text("/users").await
    }

    /// Fetches the echo line for a single user.
    pub async fn user(&self, id: &str) -> Result<String, ClientError> {
        self.get_text(&format!("/users/{}", id)).await
    }

    /// Fetches the payment lookup line for a user, with an optional filter.
    pub async fn payment_summary(
        &self,
        id: &str,
        filter: Option<String>,
    ) -> Result<String, ClientError> {
        let query = PaymentQuery { filter };
        let resp = self
            .http
            .get(format!("{}/users/{}/payment", self.base_url, id))
            .query(&query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn get_text(&self, path: &str) -> Result<String, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<String, ClientError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.text().await?)
        } else {
            let message = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = UserpayClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = UserpayClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }
}
