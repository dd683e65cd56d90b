use anyhow::Result;

use super::resolve_context;
use crate::azure::{ArmClient, KuduClient};
use crate::cli::progress::run_step;
use crate::cli::{ServiceArgs, ServiceCommands};
use crate::services::{ServiceKind, ServiceManager};

pub async fn execute_service(args: ServiceArgs) -> Result<()> {
    let (creds, ctx) = resolve_context()?;
    let arm = ArmClient::new(&creds)?;
    let manager = ServiceManager::new(&arm, &ctx);

    match args.command {
        ServiceCommands::Add(arg) => {
            run_step(
                &format!("Creating {} service", arg.kind),
                &format!("Created {} service", arg.kind),
                async { Ok(manager.create(arg.kind).await?) },
            )
            .await?;

            // The telemetry component is only useful once the agent module is
            // present in the deployed site.
            if arg.kind == ServiceKind::AppInsights {
                let kudu = KuduClient::new(&ctx, &creds.token)?;
                run_step(
                    "Installing the applicationinsights module",
                    "Installed the applicationinsights module",
                    async {
                        kudu.exec("npm install applicationinsights").await?;
                        Ok(())
                    },
                )
                .await?;
            }
        }
        ServiceCommands::Remove(arg) => {
            run_step(
                &format!("Deleting {} service", arg.kind),
                &format!("Deleted {} service", arg.kind),
                async { Ok(manager.remove(arg.kind).await?) },
            )
            .await?;
        }
    }

    Ok(())
}
