mod api;
mod config;
mod consts;
mod data;
mod environment;
mod events;
mod logging;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::config::{Config, get_config_path};
use crate::data::FetchSettings;
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the briefing dashboard
    Start {
        /// Weather city, overriding the saved configuration.
        #[arg(long)]
        city: Option<String>,

        /// Weather country code, overriding the saved configuration.
        #[arg(long)]
        country: Option<String>,

        /// Comma-separated coin list, overriding the saved configuration.
        #[arg(long)]
        coins: Option<String>,

        /// Target currency code, overriding the saved configuration.
        #[arg(long)]
        currency: Option<String>,

        /// Print a one-shot briefing to stdout instead of entering the TUI.
        #[arg(long)]
        headless: bool,

        /// Disable the dashboard background color.
        #[arg(long)]
        no_background_color: bool,
    },
    /// Save default dashboard settings to the configuration file.
    Configure {
        /// Weather city.
        #[arg(long)]
        city: Option<String>,

        /// Weather country code.
        #[arg(long)]
        country: Option<String>,

        /// Comma-separated coin list.
        #[arg(long)]
        coins: Option<String>,

        /// Target currency code.
        #[arg(long)]
        currency: Option<String>,
    },
    /// Delete the saved configuration file.
    Reset,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment = Environment::from_env();
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            city,
            country,
            coins,
            currency,
            headless,
            no_background_color,
        } => {
            // Saved settings first, CLI overrides on top.
            let mut config = if config_path.exists() {
                Config::load_from_file(&config_path).unwrap_or_default()
            } else {
                Config::default()
            };
            if let Some(city) = city {
                config.city = city;
            }
            if let Some(country) = country {
                config.country = country;
            }
            if let Some(coins) = coins {
                config.coins = coins;
            }
            if let Some(currency) = currency {
                config.currency = currency;
            }

            let settings = FetchSettings::from(config);
            let session = setup_session(settings, environment).await?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background_color).await
            }
        }
        Command::Configure {
            city,
            country,
            coins,
            currency,
        } => {
            // Start from the saved settings so partial edits are possible.
            let mut config = if config_path.exists() {
                Config::load_from_file(&config_path)
                    .map_err(|e| format!("Failed to load config: {}", e))?
            } else {
                Config::default()
            };
            if let Some(city) = city {
                config.city = city;
            }
            if let Some(country) = country {
                config.country = country;
            }
            if let Some(coins) = coins {
                config.coins = coins;
            }
            if let Some(currency) = currency {
                config.currency = currency;
            }
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!(
                "Configuration saved: {}, {} | {} vs {}",
                config.city, config.country, config.coins, config.currency
            );
            Ok(())
        }
        Command::Reset => {
            println!("Clearing saved briefing configuration...");
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}
