pub mod commands;
pub mod config;
pub mod context;
pub mod naming;
pub mod progress;

use clap::{Parser, Subcommand};

use crate::services::ServiceKind;

#[derive(Parser)]
#[command(name = "azup")]
#[command(about = "Deploy Node.js apps to Azure App Service")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write .azup.toml with generated resource names
    Init(InitArgs),
    /// Provision the resource group and web app, then deploy
    Up(UpArgs),
    /// Zip-deploy the working directory to the existing app
    Deploy(DeployArgs),
    /// Delete the app's resource group
    Down(DownArgs),
    /// Clear persisted local settings
    Reset,
    /// Stream application logs to stdout
    Logs,
    /// Restart the web app
    Restart,
    /// Trigger a sync from the app's configured repository
    Sync,
    /// Push the local master branch to the azure remote
    Push,
    /// Print the authenticated Git remote URL, optionally registering it
    Remote(RemoteArgs),
    /// Print a file from the deployed site
    Cat(CatArgs),
    /// Install production npm dependencies on the deployed site
    Install,
    /// Export the resource group's ARM template
    Export,
    /// Manage auxiliary services
    Service(ServiceArgs),
    /// Manage logpoints in the running app
    Logpoint(LogpointArgs),
    /// Open the deployed app in the browser
    Browse,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// App name (generated when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Overwrite an existing .azup.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct UpArgs {
    /// Configure the app for local Git deployment
    #[arg(long)]
    pub git: bool,

    /// Deploy from an external Git repository instead of uploading
    #[arg(long)]
    pub repo: Option<String>,

    /// Provision a Linux plan
    #[arg(long)]
    pub linux: bool,

    /// Skip the remote npm install after upload
    #[arg(long)]
    pub no_install: bool,
}

#[derive(clap::Args)]
pub struct DeployArgs {
    /// Target a Linux app (changes the generated platform descriptor)
    #[arg(long)]
    pub linux: bool,
}

#[derive(clap::Args)]
pub struct DownArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct RemoteArgs {
    /// Register the URL as the 'azure' remote in the current repo
    #[arg(long)]
    pub add: bool,
}

#[derive(clap::Args)]
pub struct CatArgs {
    /// Path relative to site/wwwroot
    pub path: String,
}

#[derive(clap::Args)]
pub struct ServiceArgs {
    #[command(subcommand)]
    pub command: ServiceCommands,
}

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// Create a service and wire the app to it
    Add(ServiceKindArg),
    /// Delete a service
    Remove(ServiceKindArg),
}

#[derive(clap::Args)]
pub struct ServiceKindArg {
    /// Service type
    #[arg(value_enum)]
    pub kind: ServiceKind,
}

#[derive(clap::Args)]
pub struct LogpointArgs {
    #[command(subcommand)]
    pub command: LogpointCommands,
}

#[derive(Subcommand)]
pub enum LogpointCommands {
    /// Add a logpoint to a file in the running app
    Add(LogpointAddArgs),
    /// Clear all logpoints
    Clear,
}

#[derive(clap::Args)]
pub struct LogpointAddArgs {
    /// File path relative to the site root
    pub file: String,

    /// 1-based line number
    pub line: u32,

    /// Expression to log when the line executes
    pub expression: String,
}
