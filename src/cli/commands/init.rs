use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::config::{Settings, SETTINGS_FILENAME};
use crate::cli::naming::{generate_app_name, insights_name, resource_group_name};
use crate::cli::InitArgs;

pub fn execute_init(args: InitArgs) -> Result<()> {
    if Path::new(SETTINGS_FILENAME).exists() && !args.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            SETTINGS_FILENAME
        );
    }

    let app_name = args.name.unwrap_or_else(generate_app_name);

    let settings = Settings {
        resource_group_name: resource_group_name(&app_name),
        insights_name: insights_name(&app_name),
        app_name,
    };

    settings.save()?;

    eprintln!("Created {}", SETTINGS_FILENAME);
    eprintln!("  app: {}", settings.app_name);
    eprintln!("  resource group: {}", settings.resource_group_name);
    eprintln!();
    eprintln!("Next: azup up");

    Ok(())
}
