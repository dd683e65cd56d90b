use serde_json::Value;

use super::client::ArmClient;
use crate::cli::context::DeployContext;
use crate::error::Error;

const WEB_API_VERSION: &str = "2022-03-01";

/// Deployment-user credentials for the app's Kudu/git endpoints.
pub struct PublishingCredentials {
    pub username: String,
    pub password: String,
}

impl ArmClient {
    pub async fn publishing_credentials(
        &self,
        ctx: &DeployContext,
    ) -> Result<PublishingCredentials, Error> {
        let path = format!(
            "/resourcegroups/{}/providers/Microsoft.Web/sites/{}/config/publishingcredentials/list?api-version={}",
            ctx.resource_group, ctx.app_name, WEB_API_VERSION
        );

        let result = self
            .post_json(&path, None)
            .await
            .map_err(|e| Error::operation("listing publishing credentials", e))?;

        let username = result
            .pointer("/properties/publishingUserName")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::operation("listing publishing credentials", "no publishingUserName in response")
            })?
            .to_string();
        let password = result
            .pointer("/properties/publishingPassword")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                Error::operation("listing publishing credentials", "no publishingPassword in response")
            })?
            .to_string();

        Ok(PublishingCredentials { username, password })
    }

    pub async fn restart_app(&self, ctx: &DeployContext) -> Result<(), Error> {
        let path = format!(
            "/resourcegroups/{}/providers/Microsoft.Web/sites/{}/restart?api-version={}&synchronous=true",
            ctx.resource_group, ctx.app_name, WEB_API_VERSION
        );

        self.post_empty(&path)
            .await
            .map_err(|e| Error::operation("restarting web app", e))
    }

    /// Trigger a pull from the app's configured source repository.
    pub async fn sync_repository(&self, ctx: &DeployContext) -> Result<(), Error> {
        let path = format!(
            "/resourcegroups/{}/providers/Microsoft.Web/sites/{}/sync?api-version={}",
            ctx.resource_group, ctx.app_name, WEB_API_VERSION
        );

        self.post_empty(&path)
            .await
            .map_err(|e| Error::operation("syncing remote repository", e))
    }
}
