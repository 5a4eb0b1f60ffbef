use clap::Parser;
use tracing::debug;

use linkshelf::cli::{Cli, Commands};
use linkshelf::config::{get_config, init_config};
use linkshelf::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config(cli.config.as_deref());
    let config = get_config();

    match cli.command.unwrap_or(Commands::Serve) {
        #[cfg(feature = "server")]
        Commands::Serve => {
            let _guard = init_logging(&config.logging)?;
            debug!("Configuration loaded: {:?}", config);
            linkshelf::runtime::modes::run_server(&config).await?;
        }
        #[cfg(feature = "cli")]
        command => {
            // CLI 输出走 stdout，日志只保留警告以上
            let mut logging = config.logging.clone();
            logging.level = "warn".to_string();
            logging.file = None;
            let _guard = init_logging(&logging)?;

            if let Err(e) = linkshelf::runtime::modes::run_cli(command, &config).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        #[cfg(not(feature = "server"))]
        Commands::Serve => anyhow::bail!("This build has no server mode"),
        #[cfg(not(feature = "cli"))]
        _ => anyhow::bail!("This build has no CLI commands"),
    }

    Ok(())
}
