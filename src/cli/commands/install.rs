use anyhow::Result;

use super::resolve_context;
use crate::azure::KuduClient;
use crate::cli::progress::run_step;

pub async fn execute_install() -> Result<()> {
    let (creds, ctx) = resolve_context()?;
    let kudu = KuduClient::new(&ctx, &creds.token)?;

    run_step(
        "Installing npm dependencies",
        "Installed npm dependencies",
        async {
            kudu.exec("npm install --production").await?;
            Ok(())
        },
    )
    .await
}
