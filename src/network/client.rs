use crate::api::request::Request;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use std::sync::Arc;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
    #[error("Status code: {actual} != {expected}, response: {body}")]
    UnexpectedStatus {
        actual: StatusCode,
        expected: StatusCode,
        body: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

pub trait Client {
    fn post(
        &self,
        url: &str,
        request: &Request,
    ) -> impl Future<Output = Result<RawResponse, ClientError>> + Send;
}

/// Posts JSON-RPC requests over HTTP(S). Nodes commonly serve self-signed
/// certificates, so certificate validation is disabled.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { client })
    }
}

impl Client for HttpClient {
    async fn post(&self, url: &str, request: &Request) -> Result<RawResponse, ClientError> {
        let body = serde_json::to_vec(request)?;
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

/// A client bound to a single node.
pub struct NodeClient<C: Client> {
    client: Arc<C>,
    url: String,
}

impl<C: Client> NodeClient<C> {
    pub fn new(client: Arc<C>, url: String) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends the request, requires `200 OK` and decodes the body.
    pub async fn send<R: DeserializeOwned>(&self, request: &Request) -> Result<R, ClientError> {
        let body = self.send_expecting(request, StatusCode::OK).await?;
        let response = serde_json::from_str(&body)?;
        Ok(response)
    }

    /// Sends the request and requires the given status code, returning the raw body.
    pub async fn send_expecting(
        &self,
        request: &Request,
        expected: StatusCode,
    ) -> Result<String, ClientError> {
        tracing::debug!(url = %self.url, ?request, "Sending request to node");
        let response = self.client.post(&self.url, request).await?;
        tracing::debug!(
            url = %self.url,
            status = %response.status,
            body = %response.body,
            "Response received from node"
        );
        if response.status != expected {
            return Err(ClientError::UnexpectedStatus {
                actual: response.status,
                expected,
                body: response.body,
            });
        }
        Ok(response.body)
    }
}
