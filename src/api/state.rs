use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{redact, AppConfig};
use crate::fetch::{RiotApi, RiotClient, SteamApi, SteamClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,

    /// `None` when no usable Riot API key is configured
    pub riot: Option<Arc<dyn RiotApi>>,

    /// `None` when no Steam API key is configured
    pub steam: Option<Arc<dyn SteamApi>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            riot: None,
            steam: None,
        }
    }

    pub fn with_riot(mut self, riot: Arc<dyn RiotApi>) -> Self {
        self.riot = Some(riot);
        self
    }

    pub fn with_steam(mut self, steam: Arc<dyn SteamApi>) -> Self {
        self.steam = Some(steam);
        self
    }

    /// Build upstream clients from the environment credentials.
    ///
    /// A missing or malformed key leaves that provider unset; its routes
    /// then answer 500 instead of the service refusing to start.
    pub fn from_config(config: AppConfig) -> Self {
        let riot = match config.riot.api_key() {
            Ok(key) => {
                info!("Using Riot API key {}", redact(&key));
                match RiotClient::new(&config.riot, &key) {
                    Ok(client) => Some(Arc::new(client) as Arc<dyn RiotApi>),
                    Err(e) => {
                        warn!("Riot client unavailable: {}", e);
                        None
                    }
                }
            }
            Err(e) => {
                warn!("Riot stats disabled: {}", e);
                None
            }
        };

        let steam = match config.steam.api_key() {
            Ok(key) => match SteamClient::new(&config.steam, &key) {
                Ok(client) => Some(Arc::new(client) as Arc<dyn SteamApi>),
                Err(e) => {
                    warn!("Steam client unavailable: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("CS2 stats disabled: {}", e);
                None
            }
        };

        Self {
            config: Arc::new(config),
            riot,
            steam,
        }
    }
}
