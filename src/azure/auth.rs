use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::process::Command;

/// Resolved management-plane credentials.
pub struct Credentials {
    pub token: String,
    pub subscription_id: String,
}

#[derive(Deserialize)]
struct AzAccessToken {
    #[serde(rename = "accessToken")]
    access_token: String,
    #[serde(rename = "expires_on")]
    expires_on: Option<i64>,
    subscription: Option<String>,
}

/// Resolve a bearer token and subscription id from the environment, falling
/// back to the local `az` CLI. The interactive login flow itself lives in
/// `az login`; azup only consumes its session.
pub fn resolve_credentials() -> Result<Credentials> {
    if let Ok(token) = env::var("AZURE_ACCESS_TOKEN") {
        let subscription_id = env::var("AZURE_SUBSCRIPTION_ID")
            .context("AZURE_SUBSCRIPTION_ID must be set when AZURE_ACCESS_TOKEN is used")?;
        return Ok(Credentials {
            token,
            subscription_id,
        });
    }

    let raw = run_az(&["account", "get-access-token", "-o", "json"])
        .context("Failed to acquire an access token. Run 'az login' first, or set AZURE_ACCESS_TOKEN.")?;
    let token: AzAccessToken =
        serde_json::from_str(&raw).context("Failed to parse az access token output")?;

    if let Some(expires_on) = token.expires_on {
        if expires_on < chrono::Utc::now().timestamp() {
            eprintln!("Warning: the cached az access token has expired");
            eprintln!("Run 'az login' to refresh");
        }
    }

    let subscription_id = match env::var("AZURE_SUBSCRIPTION_ID") {
        Ok(id) => id,
        Err(_) => match token.subscription {
            Some(id) => id,
            None => run_az(&["account", "show", "--query", "id", "-o", "tsv"])
                .context("Failed to get subscription ID. Run 'az login' first.")?,
        },
    };

    Ok(Credentials {
        token: token.access_token,
        subscription_id,
    })
}

/// Execute an az CLI command and return stdout.
fn run_az(args: &[&str]) -> Result<String> {
    let output = Command::new("az")
        .args(args)
        .output()
        .context("Failed to execute az command. Is Azure CLI installed?")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("az command failed: {}", stderr.trim());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
