use anyhow::Result;

use crate::azure::auth::Credentials;
use crate::cli::config::Settings;

pub const DEFAULT_LOCATION: &str = "westus";

/// Everything an operation needs to address the app: names, location, and
/// the two computed endpoints. Resolved exactly once per invocation, after
/// credential resolution, and never mutated; operations borrow it.
#[derive(Debug, Clone)]
pub struct DeployContext {
    pub subscription_id: String,
    pub location: String,
    pub app_name: String,
    pub resource_group: String,
    pub insights_name: String,
    pub app_url: String,
    pub kudu_url: String,
}

impl DeployContext {
    pub fn resolve(creds: &Credentials, settings: &Settings) -> Result<Self> {
        let location = location_or_default(std::env::var("AZURE_LOCATION").ok());

        Ok(Self {
            subscription_id: creds.subscription_id.clone(),
            location,
            app_name: settings.app_name.clone(),
            resource_group: settings.resource_group_name.clone(),
            insights_name: settings.insights_name.clone(),
            app_url: format!("https://{}.azurewebsites.net", settings.app_name),
            kudu_url: format!("https://{}.scm.azurewebsites.net/api", settings.app_name),
        })
    }
}

fn location_or_default(env_override: Option<String>) -> String {
    match env_override {
        Some(location) if !location.trim().is_empty() => location,
        _ => DEFAULT_LOCATION.to_string(),
    }
}
