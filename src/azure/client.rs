use anyhow::{bail, Context, Result};
use reqwest::{Client, Method, Response};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::auth::Credentials;

const MANAGEMENT_BASE: &str = "https://management.azure.com";
const USER_AGENT: &str = concat!("azup/", env!("CARGO_PKG_VERSION"));

/// Default timeout for management-plane requests (30 seconds)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Azure Resource Manager client. All management-plane calls (resource
/// groups, deployments, web apps, components) go through here; the Kudu
/// endpoint has its own client because it lives on a different host with
/// different response conventions.
pub struct ArmClient {
    client: Client,
    token: String,
    subscription_id: String,
}

#[derive(Deserialize)]
struct ArmErrorEnvelope {
    error: ArmError,
}

#[derive(Deserialize)]
struct ArmError {
    code: String,
    message: String,
}

impl ArmClient {
    pub fn new(creds: &Credentials) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            token: creds.token.clone(),
            subscription_id: creds.subscription_id.clone(),
        })
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Issue a request against a subscription-relative path, e.g.
    /// `/resourcegroups/{rg}?api-version=...`. Non-2xx responses are decoded
    /// through the ARM error envelope.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response> {
        let url = format!(
            "{}/subscriptions/{}{}",
            MANAGEMENT_BASE, self.subscription_id, path
        );
        tracing::debug!(%method, %url, "management request");

        let mut request = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("{} {}", method, path))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            match serde_json::from_str::<ArmErrorEnvelope>(&text) {
                Ok(envelope) => bail!("{}: {}", envelope.error.code, envelope.error.message),
                Err(_) => bail!("{} returned {}: {}", path, status, text),
            }
        }

        Ok(response)
    }

    pub(crate) async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self.send(Method::GET, path, None).await?;
        response.json().await.context("Failed to decode response")
    }

    pub(crate) async fn put_json(&self, path: &str, body: &Value) -> Result<Value> {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        response.json().await.context("Failed to decode response")
    }

    /// POST that returns a JSON body.
    pub(crate) async fn post_json(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        let response = self.send(Method::POST, path, body).await?;
        response.json().await.context("Failed to decode response")
    }

    /// POST whose success response carries no useful body (restart, sync).
    pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
        self.send(Method::POST, path, None).await?;
        Ok(())
    }

    /// DELETE; ARM answers 200 or 202 for accepted deletions.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None).await?;
        Ok(())
    }
}
