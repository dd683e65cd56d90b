use anyhow::Result;
use std::process::Command;

use crate::cli::config::Settings;
use crate::cli::progress::print_success;

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(target_os = "windows")]
const OPENER: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENER: &str = "xdg-open";

/// Open the deployed app in the default browser. Needs only local settings;
/// no credentials are resolved.
pub fn execute_browse() -> Result<()> {
    let settings = Settings::load()?;
    let url = format!("https://{}.azurewebsites.net", settings.app_name);

    print_success(&format!("Launching {}", url));
    if let Err(err) = Command::new(OPENER).arg(&url).spawn() {
        eprintln!("Open {} in your browser ({})", url, err);
    }

    Ok(())
}
