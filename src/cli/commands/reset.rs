use anyhow::Result;

use crate::cli::config::{Settings, SETTINGS_FILENAME};
use crate::cli::progress::print_success;

pub fn execute_reset() -> Result<()> {
    if Settings::clear()? {
        print_success("Cleared local settings");
    } else {
        eprintln!("No {} to remove", SETTINGS_FILENAME);
    }
    Ok(())
}
