use anyhow::Result;

use super::resolve_context;
use crate::azure::kudu::{clear_logpoints_command, logpoint_command};
use crate::azure::KuduClient;
use crate::cli::progress::print_success;
use crate::cli::{LogpointArgs, LogpointCommands};

pub async fn execute_logpoint(args: LogpointArgs) -> Result<()> {
    let (creds, ctx) = resolve_context()?;
    let kudu = KuduClient::new(&ctx, &creds.token)?;

    match args.command {
        LogpointCommands::Add(add) => {
            let command = logpoint_command(&add.file, add.line, &add.expression);
            kudu.exec(&command).await?;
            print_success(&format!("Added logpoint at {}:{}", add.file, add.line));
        }
        LogpointCommands::Clear => {
            kudu.exec(&clear_logpoints_command()).await?;
            print_success("Cleared logpoints");
        }
    }

    Ok(())
}
