use serde::{Deserialize, Serialize};
use std::fs;

use fivedraw_engine::rank::HAND_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub rounds: u32,
    pub max_discards: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub rounds: ValueSource,
    pub max_discards: ValueSource,
    pub seed: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            rounds: ValueSource::Default,
            max_discards: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 4,
            rounds: fivedraw_engine::engine::DRAW_ROUNDS,
            max_discards: fivedraw_engine::engine::MAX_DISCARDS,
            seed: None,
        }
    }
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

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FIVEDRAW_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.rounds {
            cfg.rounds = v;
            sources.rounds = ValueSource::File;
        }
        if let Some(v) = f.max_discards {
            cfg.max_discards = v;
            sources.max_discards = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("FIVEDRAW_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var("FIVEDRAW_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid players".into()))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(rounds) = std::env::var("FIVEDRAW_ROUNDS")
        && !rounds.is_empty()
    {
        cfg.rounds = rounds
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid rounds".into()))?;
        sources.rounds = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    rounds: Option<u32>,
    #[serde(default)]
    max_discards: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.players < 2 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: players must be >= 2".into(),
        ));
    }
    if cfg.rounds == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: rounds must be >= 1".into(),
        ));
    }
    // worst case per player: the initial hand plus a full redraw each round
    let worst_case = cfg.players * (HAND_SIZE + cfg.max_discards * cfg.rounds as usize);
    if worst_case > 52 {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: {} players with {} rounds could need {} cards, deck has 52",
            cfg.players, cfg.rounds, worst_case
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: tests run serially; no other thread reads the environment
        unsafe {
            std::env::remove_var("FIVEDRAW_CONFIG");
            std::env::remove_var("FIVEDRAW_SEED");
            std::env::remove_var("FIVEDRAW_PLAYERS");
            std::env::remove_var("FIVEDRAW_ROUNDS");
        }
    }

    #[test]
    #[serial]
    fn defaults_match_the_table_rules() {
        clear_env();
        let resolved = load_with_sources().expect("defaults are valid");
        assert_eq!(resolved.config.players, 4);
        assert_eq!(resolved.config.rounds, 2);
        assert_eq!(resolved.config.max_discards, 3);
        assert_eq!(resolved.config.seed, None);
        assert!(matches!(resolved.sources.players, ValueSource::Default));
    }

    #[test]
    #[serial]
    fn env_overrides_defaults() {
        clear_env();
        unsafe {
            std::env::set_var("FIVEDRAW_SEED", "99");
            std::env::set_var("FIVEDRAW_PLAYERS", "3");
        }
        let resolved = load_with_sources().expect("valid overrides");
        assert_eq!(resolved.config.seed, Some(99));
        assert_eq!(resolved.config.players, 3);
        assert!(matches!(resolved.sources.seed, ValueSource::Env));
        assert!(matches!(resolved.sources.players, ValueSource::Env));
        clear_env();
    }

    #[test]
    #[serial]
    fn file_values_load_and_env_wins_over_file() {
        use std::io::Write;

        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "players = 3\nseed = 7").unwrap();
        unsafe {
            std::env::set_var("FIVEDRAW_CONFIG", file.path());
            std::env::set_var("FIVEDRAW_SEED", "42");
        }

        let resolved = load_with_sources().expect("valid config");
        assert_eq!(resolved.config.players, 3);
        assert!(matches!(resolved.sources.players, ValueSource::File));
        assert_eq!(resolved.config.seed, Some(42));
        assert!(matches!(resolved.sources.seed, ValueSource::Env));
        clear_env();
    }

    #[test]
    #[serial]
    fn deck_exhausting_configuration_is_rejected() {
        clear_env();
        unsafe {
            std::env::set_var("FIVEDRAW_PLAYERS", "8");
        }
        let result = load_with_sources();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        clear_env();
    }

    #[test]
    #[serial]
    fn too_few_players_is_rejected() {
        clear_env();
        unsafe {
            std::env::set_var("FIVEDRAW_PLAYERS", "1");
        }
        let result = load_with_sources();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
        clear_env();
    }
}
