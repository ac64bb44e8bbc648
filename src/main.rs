use clap::Parser;
use tracing_subscriber::EnvFilter;

use a3s_eventlog::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config =
        a3s_eventlog::cli::resolve_config(cli.config.as_deref(), cli.archive.as_deref())?;

    match cli.command {
        Commands::Serve { host, port } => {
            a3s_eventlog::cli::serve::execute(config, host, port).await?;
        }
        Commands::List { size } => {
            let service = a3s_eventlog::cli::open_service(&config).await?;
            let size = size.unwrap_or(config.default_page_size);
            a3s_eventlog::cli::list::execute(&service, size).await?;
        }
        Commands::Get { event_id } => {
            let service = a3s_eventlog::cli::open_service(&config).await?;
            a3s_eventlog::cli::get::execute(&service, &event_id).await?;
        }
        Commands::Insert { file } => {
            let service = a3s_eventlog::cli::open_service(&config).await?;
            a3s_eventlog::cli::insert::execute(&service, &file).await?;
        }
    }

    Ok(())
}
