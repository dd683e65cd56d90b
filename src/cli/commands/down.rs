use anyhow::Result;
use std::io::{self, Write};

use super::resolve_context;
use crate::azure::ArmClient;
use crate::cli::config::{Settings, SETTINGS_FILENAME};
use crate::cli::progress::{print_success, print_warning, run_step};
use crate::cli::DownArgs;

pub async fn execute_down(args: DownArgs) -> Result<()> {
    let (creds, ctx) = resolve_context()?;

    eprintln!("==> Deleting app: {}", ctx.app_name);
    eprintln!("    Resource group: {}", ctx.resource_group);

    if !args.force {
        eprint!("\nThis deletes every resource in the group. Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let arm = ArmClient::new(&creds)?;
    run_step(
        &format!("Deleting app: {}", ctx.app_name),
        &format!("Deleted app: {}", ctx.app_name),
        async { Ok(arm.delete_resource_group(&ctx).await?) },
    )
    .await?;

    // The remote delete is authoritative. A failed local clear must not mask
    // the successful deletion, so it is reported as a warning only.
    match Settings::clear() {
        Ok(true) => print_success(&format!("Removed {}", SETTINGS_FILENAME)),
        Ok(false) => {}
        Err(err) => print_warning(&format!(
            "Resource group deleted, but local settings were not cleared: {}",
            err
        )),
    }

    Ok(())
}
