//! Layered configuration: built-in defaults, an optional TOML file named
//! by `HILO_CONFIG`, then environment overrides. Each resolved value
//! remembers where it came from so `hilo cfg` can display the source.

use serde::{Deserialize, Serialize};
use std::fs;

use hilo_ai::{BetStrategy, PlayStrategy};
use hilo_sim::config::SimConfig;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub decks: ValueSource,
    pub hands: ValueSource,
    pub initial_bankroll: ValueSource,
    pub min_bet: ValueSource,
    pub max_bet: ValueSource,
    pub play_strategy: ValueSource,
    pub bet_strategy: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            decks: ValueSource::Default,
            hands: ValueSource::Default,
            initial_bankroll: ValueSource::Default,
            min_bet: ValueSource::Default,
            max_bet: ValueSource::Default,
            play_strategy: ValueSource::Default,
            bet_strategy: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: SimConfig,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "{}", e),
            ConfigError::Parse(e) => write!(f, "{}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<SimConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = SimConfig::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HILO_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.hands {
            cfg.hands = v;
            sources.hands = ValueSource::File;
        }
        if let Some(v) = f.initial_bankroll {
            cfg.initial_bankroll = v;
            sources.initial_bankroll = ValueSource::File;
        }
        if let Some(v) = f.min_bet {
            cfg.min_bet = v;
            sources.min_bet = ValueSource::File;
        }
        if let Some(v) = f.max_bet {
            cfg.max_bet = v;
            sources.max_bet = ValueSource::File;
        }
        if let Some(v) = f.play_strategy {
            cfg.play_strategy = v;
            sources.play_strategy = ValueSource::File;
        }
        if let Some(v) = f.bet_strategy {
            cfg.bet_strategy = v;
            sources.bet_strategy = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("HILO_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }

    cfg.validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    decks: Option<u32>,
    #[serde(default)]
    hands: Option<u64>,
    #[serde(default)]
    initial_bankroll: Option<f64>,
    #[serde(default)]
    min_bet: Option<f64>,
    #[serde(default)]
    max_bet: Option<f64>,
    #[serde(default)]
    play_strategy: Option<PlayStrategy>,
    #[serde(default)]
    bet_strategy: Option<BetStrategy>,
    #[serde(default)]
    seed: Option<u64>,
}
