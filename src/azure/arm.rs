use serde_json::{json, Value};
use std::time::Duration;

use super::client::ArmClient;
use crate::cli::context::DeployContext;
use crate::error::Error;

const RESOURCE_API_VERSION: &str = "2021-04-01";

/// How often to check an in-flight ARM deployment.
const DEPLOYMENT_POLL_INTERVAL: Duration = Duration::from_secs(5);

impl ArmClient {
    /// Create-or-update the resource group at the configured location.
    /// ARM PUT is idempotent: re-running against an existing group succeeds.
    pub async fn create_resource_group(&self, ctx: &DeployContext) -> Result<(), Error> {
        let path = format!(
            "/resourcegroups/{}?api-version={}",
            ctx.resource_group, RESOURCE_API_VERSION
        );
        let body = json!({ "location": ctx.location });

        self.put_json(&path, &body)
            .await
            .map_err(|e| Error::provisioning(format!("resource group {}", ctx.resource_group), e))?;
        Ok(())
    }

    /// Delete the resource group and everything in it. ARM answers 202 and
    /// finishes the deletion in the background.
    pub async fn delete_resource_group(&self, ctx: &DeployContext) -> Result<(), Error> {
        let path = format!(
            "/resourcegroups/{}?api-version={}",
            ctx.resource_group, RESOURCE_API_VERSION
        );

        self.delete(&path)
            .await
            .map_err(|e| Error::provisioning(format!("resource group {}", ctx.resource_group), e))?;
        Ok(())
    }

    /// Export the resource group's current infrastructure as an ARM template.
    pub async fn export_template(&self, ctx: &DeployContext) -> Result<Value, Error> {
        let path = format!(
            "/resourcegroups/{}/exportTemplate?api-version={}",
            ctx.resource_group, RESOURCE_API_VERSION
        );
        let body = json!({ "resources": ["*"] });

        let result = self
            .post_json(&path, Some(&body))
            .await
            .map_err(|e| Error::provisioning(format!("resource group {}", ctx.resource_group), e))?;

        Ok(result.get("template").cloned().unwrap_or(result))
    }

    /// Submit a template deployment and wait for it to reach a terminal
    /// provisioning state. `name` must be unique per attempt.
    pub async fn create_deployment(
        &self,
        ctx: &DeployContext,
        name: &str,
        template: Value,
        parameters: Value,
    ) -> Result<(), Error> {
        let path = format!(
            "/resourcegroups/{}/providers/Microsoft.Resources/deployments/{}?api-version={}",
            ctx.resource_group, name, RESOURCE_API_VERSION
        );
        let body = json!({
            "properties": {
                "mode": "Incremental",
                "template": template,
                "parameters": parameters,
            }
        });

        self.put_json(&path, &body)
            .await
            .map_err(|e| Error::provisioning(format!("deployment {}", name), e))?;

        loop {
            let state = self.deployment_state(ctx, name).await?;
            tracing::debug!(deployment = name, %state, "deployment state");

            match state.as_str() {
                "Succeeded" => return Ok(()),
                "Failed" | "Canceled" => {
                    return Err(Error::provisioning(
                        format!("deployment {}", name),
                        format!("terminal state {}", state),
                    ))
                }
                _ => tokio::time::sleep(DEPLOYMENT_POLL_INTERVAL).await,
            }
        }
    }

    async fn deployment_state(&self, ctx: &DeployContext, name: &str) -> Result<String, Error> {
        let path = format!(
            "/resourcegroups/{}/providers/Microsoft.Resources/deployments/{}?api-version={}",
            ctx.resource_group, name, RESOURCE_API_VERSION
        );

        let status = self
            .get_json(&path)
            .await
            .map_err(|e| Error::provisioning(format!("deployment {}", name), e))?;

        Ok(status
            .pointer("/properties/provisioningState")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string())
    }
}
