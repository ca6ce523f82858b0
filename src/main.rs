use std::path::PathBuf;

use clap::{Parser, Subcommand};
use teloxide::Bot;
use tokio::signal;
use tracing::{error, info};

use chaineye::adapter::telegram::{polling, webhook};
use chaineye::app::{self, Config};

#[derive(Parser)]
#[command(name = "chaineye", about = "Telegram bot for crypto-market signals", version)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Receive updates over a persistent long-poll connection (default).
    Poll,
    /// Receive updates over an inbound webhook endpoint.
    Serve,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!("chaineye starting");

    let bot = Bot::new(&config.telegram.bot_token);
    let services = match app::build(&config, bot.clone()) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "Failed to wire services");
            std::process::exit(1);
        }
    };

    match cli.mode.unwrap_or(Mode::Poll) {
        Mode::Poll => {
            tokio::select! {
                () = polling::run(bot, services.router, services.messenger) => {}
                _ = signal::ctrl_c() => {
                    info!("Shutdown signal received");
                }
            }
        }
        Mode::Serve => {
            let addr = match config.webhook.bind_addr() {
                Ok(addr) => addr,
                Err(e) => {
                    error!(error = %e, "Invalid webhook bind address");
                    std::process::exit(1);
                }
            };
            tokio::select! {
                result = webhook::serve(addr, services.router, services.messenger) => {
                    if let Err(e) = result {
                        error!(error = %e, "Fatal error");
                        std::process::exit(1);
                    }
                }
                _ = signal::ctrl_c() => {
                    info!("Shutdown signal received");
                }
            }
        }
    }

    info!("chaineye stopped");
}
