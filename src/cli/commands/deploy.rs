use anyhow::{Context, Result};
use tokio::task;

use super::resolve_context;
use crate::azure::KuduClient;
use crate::bundle::{zip_directory, ConfigArtifacts};
use crate::cli::progress::run_step;
use crate::cli::DeployArgs;

pub async fn execute_deploy(args: DeployArgs) -> Result<()> {
    let (creds, ctx) = resolve_context()?;
    let kudu = KuduClient::new(&ctx, &creds.token)?;
    deploy_bundle(&kudu, &ctx.app_name, args.linux).await
}

/// Generate the deploy-time config, zip the working directory, and stream
/// the archive to the app's zip-deploy endpoint. The archive and generated
/// files come off disk on success and failure alike; the artifacts guard
/// covers the failure path from Drop.
pub(crate) async fn deploy_bundle(kudu: &KuduClient, app_name: &str, linux: bool) -> Result<()> {
    let dir = std::env::current_dir().context("Failed to resolve working directory")?;
    let artifacts = ConfigArtifacts::write(&dir, linux)?;

    let archive_path = dir.join(format!("{}.zip", app_name));
    let result = run_step("Deploying code", "Deployed code", async {
        let src = dir.clone();
        let dest = archive_path.clone();
        task::spawn_blocking(move || zip_directory(&src, &dest))
            .await
            .context("archive task failed")??;

        kudu.zip_deploy(&archive_path).await?;
        Ok(())
    })
    .await;

    if archive_path.exists() {
        if let Err(err) = std::fs::remove_file(&archive_path) {
            tracing::debug!(%err, "could not remove deploy archive");
        }
    }

    result?;
    artifacts.remove()?;
    Ok(())
}
