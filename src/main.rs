use clap::Parser;
use tracing_subscriber::EnvFilter;

use cloudgate::cli::{Cli, Commands};
use cloudgate::config::Settings;
use cloudgate::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.load_settings()?;

    init_tracing(&settings);

    match cli.command {
        Some(Commands::Serve { dry_run: true, .. }) => {
            // Settings already validated by load_settings
            println!("Configuration is valid");
            println!("Server would bind to: {}", settings.server.address());
            Ok(())
        }
        _ => Server::new(settings).run().await,
    }
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logger.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if settings.logger.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
