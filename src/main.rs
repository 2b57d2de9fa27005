use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use elo_insight::api::{build_router, state::AppState};
use elo_insight::config::AppConfig;
use elo_insight::models::RiotId;
use elo_insight::stats::{self, LeagueLookup};

#[derive(Parser)]
#[command(name = "elo-insight")]
#[command(about = "League of Legends, Valorant and CS2 statistics backend")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print League of Legends stats for a Riot ID
    Lol {
        /// Riot ID, e.g. "Name#NA1"
        riot_id: String,
    },

    /// Print Valorant stats for a Riot ID
    Valorant {
        /// Riot ID, e.g. "Name#NA1"
        riot_id: String,
    },

    /// Print CS2 stats for a Steam ID
    Cs2 {
        /// 64-bit Steam ID
        steam_id: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(Path::new(&cli.config))
        .with_context(|| format!("Failed to load config from {}", cli.config))?;
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting elo-insight v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            config.validate()?;

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let app = build_router(AppState::from_config(config));
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Lol { riot_id } => {
            config.validate()?;
            let id = RiotId::parse(&riot_id, &config.riot.default_tagline)
                .ok_or_else(|| anyhow!("Invalid Riot ID: {}", riot_id))?;
            let riot_config = config.riot.clone();
            let state = AppState::from_config(config);
            let riot = state
                .riot
                .ok_or_else(|| anyhow!("Riot API key not configured"))?;

            let response =
                stats::league_stats(riot.as_ref(), &riot_config, LeagueLookup::RiotId(id)).await?;
            print_json(&response)?;
        }
        Commands::Valorant { riot_id } => {
            config.validate()?;
            let id = RiotId::parse(&riot_id, &config.riot.default_tagline)
                .ok_or_else(|| anyhow!("Invalid Riot ID: {}", riot_id))?;
            let riot_config = config.riot.clone();
            let state = AppState::from_config(config);
            let riot = state
                .riot
                .ok_or_else(|| anyhow!("Riot API key not configured"))?;

            let response = stats::valorant_stats(riot.as_ref(), &riot_config, &id).await?;
            print_json(&response)?;
        }
        Commands::Cs2 { steam_id } => {
            config.validate()?;
            let state = AppState::from_config(config);
            let steam = state
                .steam
                .ok_or_else(|| anyhow!("Steam API key not configured"))?;

            let response = stats::cs2_stats(steam.as_ref(), &steam_id).await?;
            print_json(&response)?;
        }
    }

    Ok(())
}
