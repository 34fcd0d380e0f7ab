use crate::product::FormValues;
use leptos::logging::{log, warn};
use reqwest::Url;
use thiserror::Error;

/// What the backend answered, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    /// `None` when the status line arrived but the body could not be read
    pub body: Option<String>,
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// No HTTP response came back (DNS, refused connection, CORS, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Sends a new product to the backend. No retries and no timeout.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    async fn create_product(&self, product: &FormValues) -> Result<ApiResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpProductClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpProductClient {
    pub fn new(endpoint: Url) -> Self {
        HttpProductClient {
            http: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl ProductApi for HttpProductClient {
    async fn create_product(&self, product: &FormValues) -> Result<ApiResponse, ClientError> {
        log!("POST {}", self.endpoint);
        // .json() sets Content-Type: application/json
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(product)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("status {status} arrived but its body did not: {e}");
                None
            }
        };
        Ok(ApiResponse { status, body })
    }
}
