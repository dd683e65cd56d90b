use clap::Parser;

use azup::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init(args) => commands::execute_init(args)?,
        Commands::Up(args) => commands::execute_up(args).await?,
        Commands::Deploy(args) => commands::execute_deploy(args).await?,
        Commands::Down(args) => commands::execute_down(args).await?,
        Commands::Reset => commands::execute_reset()?,
        Commands::Logs => commands::execute_logs().await?,
        Commands::Restart => commands::execute_restart().await?,
        Commands::Sync => commands::execute_sync().await?,
        Commands::Push => commands::execute_push()?,
        Commands::Remote(args) => commands::execute_remote(args).await?,
        Commands::Cat(args) => commands::execute_cat(args).await?,
        Commands::Install => commands::execute_install().await?,
        Commands::Export => commands::execute_export().await?,
        Commands::Service(args) => commands::execute_service(args).await?,
        Commands::Logpoint(args) => commands::execute_logpoint(args).await?,
        Commands::Browse => commands::execute_browse()?,
    }

    Ok(())
}
