use anyhow::Result;

use super::resolve_context;
use crate::azure::ArmClient;

pub async fn execute_export() -> Result<()> {
    let (creds, ctx) = resolve_context()?;
    let arm = ArmClient::new(&creds)?;

    let template = arm.export_template(&ctx).await?;
    println!("{}", serde_json::to_string_pretty(&template)?);

    Ok(())
}
