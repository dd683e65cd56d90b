use anyhow::Result;

use super::deploy::deploy_bundle;
use super::remote::add_remote;
use super::resolve_context;
use crate::azure::templates::{deployment_parameters, TemplateKind, WebAppOptions};
use crate::azure::{ArmClient, KuduClient};
use crate::cli::naming::deployment_name;
use crate::cli::progress::{print_success, run_step};
use crate::cli::UpArgs;

pub async fn execute_up(args: UpArgs) -> Result<()> {
    let (creds, ctx) = resolve_context()?;

    eprintln!("==> Deploying {} to Azure", ctx.app_name);
    eprintln!("    Subscription:   {}", ctx.subscription_id);
    eprintln!("    Location:       {}", ctx.location);
    eprintln!("    Resource group: {}", ctx.resource_group);
    eprintln!();

    let arm = ArmClient::new(&creds)?;
    let options = WebAppOptions {
        enable_git: args.git,
        repo_url: args.repo.clone(),
        linux: args.linux,
    };

    run_step(
        &format!("Creating resource group: {}", ctx.resource_group),
        &format!("Created resource group: {}", ctx.resource_group),
        async { Ok(arm.create_resource_group(&ctx).await?) },
    )
    .await?;

    let template = TemplateKind::select(&options).body()?;
    let parameters = deployment_parameters(&ctx.app_name, &options);
    let name = deployment_name(&ctx.resource_group);
    run_step(
        &format!("Creating web app: {}", ctx.app_name),
        &format!("Created web app: {}", ctx.app_name),
        async {
            Ok(arm
                .create_deployment(&ctx, &name, template, parameters)
                .await?)
        },
    )
    .await?;

    if args.repo.is_some() {
        print_success("Configured deployment from the remote repository");
    } else {
        let kudu = KuduClient::new(&ctx, &creds.token)?;
        deploy_bundle(&kudu, &ctx.app_name, args.linux).await?;

        if !args.no_install {
            run_step(
                "Installing npm dependencies",
                "Installed npm dependencies",
                async {
                    kudu.exec("npm install --production").await?;
                    Ok(())
                },
            )
            .await?;
        }
    }

    if args.git && args.repo.is_none() {
        add_remote(&arm, &ctx).await?;
    }

    print_success(&format!("Your app is running at {}", ctx.app_url));
    Ok(())
}
