use serde_json::json;

use crate::azure::ArmClient;
use crate::cli::context::DeployContext;
use crate::error::Error;

const INSIGHTS_API_VERSION: &str = "2020-02-02";

/// Auxiliary services that can be attached to an app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ServiceKind {
    /// Application Insights telemetry component
    AppInsights,
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceKind::AppInsights => write!(f, "app-insights"),
        }
    }
}

/// Thin seam over the per-service management calls; each operation is one
/// delegated remote call.
pub struct ServiceManager<'a> {
    arm: &'a ArmClient,
    ctx: &'a DeployContext,
}

impl<'a> ServiceManager<'a> {
    pub fn new(arm: &'a ArmClient, ctx: &'a DeployContext) -> Self {
        Self { arm, ctx }
    }

    pub async fn create(&self, kind: ServiceKind) -> Result<(), Error> {
        match kind {
            ServiceKind::AppInsights => {
                let path = self.insights_path();
                let body = json!({
                    "location": self.ctx.location,
                    "kind": "web",
                    "properties": { "Application_Type": "web" }
                });
                self.arm
                    .put_json(&path, &body)
                    .await
                    .map_err(|e| Error::operation(format!("creating {} service", kind), e))?;
                Ok(())
            }
        }
    }

    pub async fn remove(&self, kind: ServiceKind) -> Result<(), Error> {
        match kind {
            ServiceKind::AppInsights => {
                let path = self.insights_path();
                self.arm
                    .delete(&path)
                    .await
                    .map_err(|e| Error::operation(format!("deleting {} service", kind), e))
            }
        }
    }

    fn insights_path(&self) -> String {
        format!(
            "/resourcegroups/{}/providers/Microsoft.Insights/components/{}?api-version={}",
            self.ctx.resource_group, self.ctx.insights_name, INSIGHTS_API_VERSION
        )
    }
}
