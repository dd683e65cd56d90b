use anyhow::Result;

use super::resolve_context;
use crate::azure::ArmClient;
use crate::cli::progress::run_step;

pub async fn execute_sync() -> Result<()> {
    let (creds, ctx) = resolve_context()?;
    let arm = ArmClient::new(&creds)?;

    run_step("Syncing remote Git repo", "Synced remote Git repo", async {
        Ok(arm.sync_repository(&ctx).await?)
    })
    .await
}
