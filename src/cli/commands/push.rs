use anyhow::{bail, Context, Result};
use std::process::Command;

use super::remote::GIT_REMOTE_NAME;
use crate::cli::progress::print_success;

pub fn execute_push() -> Result<()> {
    eprintln!("==> Pushing local master to the {} remote", GIT_REMOTE_NAME);

    let status = Command::new("git")
        .args(["push", GIT_REMOTE_NAME, "master"])
        .status()
        .context("Failed to run git. Is it installed?")?;

    if !status.success() {
        bail!(
            "git push {} master failed. Run 'azup remote --add' to register the remote first.",
            GIT_REMOTE_NAME
        );
    }

    print_success("Synced local Git repo");
    Ok(())
}
