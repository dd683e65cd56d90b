use anyhow::Result;

use super::resolve_context;
use crate::azure::ArmClient;
use crate::cli::progress::run_step;

pub async fn execute_restart() -> Result<()> {
    let (creds, ctx) = resolve_context()?;
    let arm = ArmClient::new(&creds)?;

    run_step("Restarting web app", "Restarted web app", async {
        Ok(arm.restart_app(&ctx).await?)
    })
    .await
}
