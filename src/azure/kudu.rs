use anyhow::{Context, Result};
use futures::StreamExt;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use tokio::io::AsyncWriteExt;

use crate::cli::context::DeployContext;
use crate::error::Error;

const USER_AGENT: &str = concat!("azup/", env!("CARGO_PKG_VERSION"));

/// Directory remote commands run in: the deployed site root.
const SITE_WWWROOT: &str = "site\\wwwroot";

/// Client for the app's Kudu endpoint (`https://{app}.scm.../api`): remote
/// command execution, VFS reads, zip upload, and the log stream. Built
/// without a request timeout: the log stream is open-ended and npm installs
/// routinely outlast any short deadline.
pub struct KuduClient {
    client: Client,
    base_url: String,
    token: String,
}

#[derive(Deserialize)]
struct CommandResult {
    #[serde(rename = "Output", default)]
    output: String,
    #[serde(rename = "Error", default)]
    error: String,
    #[serde(rename = "ExitCode", default)]
    exit_code: i64,
}

impl KuduClient {
    pub fn new(ctx: &DeployContext, token: &str) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: ctx.kudu_url.clone(),
            token: token.to_string(),
        })
    }

    /// Run a shell command in the deployed site's root and return its output.
    pub async fn exec(&self, command: &str) -> Result<String, Error> {
        let url = format!("{}/command", self.base_url);
        let body = json!({ "command": command, "dir": SITE_WWWROOT });
        tracing::debug!(command, "kudu exec");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::operation("remote command", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::operation(
                "remote command",
                format!("{}: {}", status, text),
            ));
        }

        let result: CommandResult = response
            .json()
            .await
            .map_err(|e| Error::operation("remote command", e))?;

        if result.exit_code != 0 {
            return Err(Error::operation(
                format!("remote command '{}'", command),
                result.error.trim(),
            ));
        }

        Ok(result.output)
    }

    /// Read one file from the deployed site's virtual filesystem.
    // https://github.com/projectkudu/kudu/wiki/REST-API#vfs
    pub async fn file_contents(&self, path: &str) -> Result<String, Error> {
        let url = format!("{}/vfs/site/wwwroot/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| Error::operation(format!("reading {}", path), e))?;

        if !response.status().is_success() {
            return Err(Error::operation(
                format!("reading {}", path),
                response.status(),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| Error::operation(format!("reading {}", path), e))
    }

    /// Upload a zip archive for server-side extraction into the site root.
    pub async fn zip_deploy(&self, archive: &Path) -> Result<(), Error> {
        let url = format!("{}/zip/site/wwwroot/", self.base_url);
        let bytes = tokio::fs::read(archive)
            .await
            .map_err(|e| Error::Upload(format!("reading {}: {}", archive.display(), e)))?;
        tracing::debug!(size = bytes.len(), "uploading archive");

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .body(bytes)
            .send()
            .await
            .map_err(|e| Error::Upload(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Upload(format!("{}: {}", status, text)));
        }

        Ok(())
    }

    /// Open the live log feed and pipe it to stdout until the server closes
    /// the connection or the process is interrupted. No reconnect.
    pub async fn log_stream(&self) -> Result<()> {
        let url = format!("{}/logstream", self.base_url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .context("Failed to open log stream")?;

        if !response.status().is_success() {
            anyhow::bail!("log stream returned {}", response.status());
        }

        let mut stdout = tokio::io::stdout();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.context("log stream dropped")?;
            stdout.write_all(&chunk).await?;
            stdout.flush().await?;
        }

        Ok(())
    }
}

/// Fixed port the in-app debug agent listens on.
pub const DEBUG_AGENT_PORT: u16 = 8967;

/// Remote curl invocation that sets a logpoint through the debug agent.
pub fn logpoint_command(file: &str, line: u32, expression: &str) -> String {
    format!(
        "curl -s \"http://localhost:{}/logpoint?file={}&line={}&expression={}\"",
        DEBUG_AGENT_PORT,
        urlencoding::encode(file),
        line,
        urlencoding::encode(expression)
    )
}

/// Remote curl invocation that clears every logpoint.
pub fn clear_logpoints_command() -> String {
    format!("curl -s \"http://localhost:{}/clear\"", DEBUG_AGENT_PORT)
}
