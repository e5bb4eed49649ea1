//! HTTP client for the management console.

use reqwest::{Client, StatusCode};

use crate::error::ProbeError;
use crate::target::ProbeTarget;

/// Status and body text of one console response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ConsoleResponse {
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, ProbeError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Whether a request carries the target's Basic credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Anonymous,
    Basic,
}

/// GET-only client bound to one [`ProbeTarget`].
pub struct ConsoleClient {
    client: Client,
    target: ProbeTarget,
}

impl ConsoleClient {
    pub fn new(target: ProbeTarget) -> Result<Self, ProbeError> {
        let client = Client::builder()
            .timeout(target.timeout)
            .build()
            .map_err(ProbeError::Client)?;
        Ok(Self { client, target })
    }

    pub fn target(&self) -> &ProbeTarget {
        &self.target
    }

    /// GET `path` and read the full body as text.
    pub async fn get(&self, path: &str, auth: Auth) -> Result<ConsoleResponse, ProbeError> {
        let url = self.target.endpoint_url(path);
        let mut request = self.client.get(&url);
        if auth == Auth::Basic {
            request = request.basic_auth(&self.target.username, Some(&self.target.password));
        }
        let resp = request.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok(ConsoleResponse { status, body })
    }
}
