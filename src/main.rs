use clap::Parser;

use linkgen::cli::Cli;
use linkgen::config::{get_config, init_config, init_config_from};
use linkgen::runtime::modes::{self, Mode};
use linkgen::system::logging::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.config.as_deref() {
        Some(path) => init_config_from(path),
        None => init_config(),
    }

    match modes::detect_mode(cli.command.as_ref()) {
        #[cfg(feature = "server")]
        Mode::Server => {
            let config = get_config();
            let _guard = init_logging(&config.logging)?;
            modes::run_server().await
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                anyhow::bail!("No command provided");
            };
            if let Err(e) = modes::run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
        Mode::Unknown => anyhow::bail!("No execution mode enabled; build with the `server` feature"),
    }
}
