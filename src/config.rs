use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Which automated player to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    ShortestPath,
    Random,
}

/// Player names and seating.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Name of the human player.
    pub player_name: String,
    /// Name shown for the automated player.
    pub automaton_name: String,
    /// Seat of the human player, 1 or 2. The automaton takes the other one.
    pub human_player: u8,
    /// Let the automated player open the game.
    pub automaton_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_name: "player".to_string(),
            automaton_name: "automaton".to_string(),
            human_player: 1,
            automaton_first: false,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AutomatonConfig {
    pub strategy: Strategy,
    /// Seed for the random strategy; a fresh OS seed when unset.
    pub seed: Option<u64>,
    pub wall_probability: f64,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        AutomatonConfig {
            strategy: Strategy::ShortestPath,
            seed: None,
            wall_probability: 0.2,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cap on actions in an automated match.
    pub max_turns: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { max_turns: 500 }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "warn".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub automaton: AutomatonConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.player_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.player_name must not be empty".into(),
            ));
        }
        if self.game.automaton_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.automaton_name must not be empty".into(),
            ));
        }
        Player::from_number(self.game.human_player)
            .map_err(|e| ConfigError::Validation(format!("game.human_player: {e}")))?;
        if !(0.0..=1.0).contains(&self.automaton.wall_probability) {
            return Err(ConfigError::Validation(
                "automaton.wall_probability must be in [0, 1]".into(),
            ));
        }
        if self.session.max_turns == 0 {
            return Err(ConfigError::Validation(
                "session.max_turns must be > 0".into(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[automaton]
strategy = "random"
seed = 42
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.automaton.strategy, Strategy::Random);
        assert_eq!(config.automaton.seed, Some(42));
        // Other fields should be defaults
        assert!((config.automaton.wall_probability - 0.2).abs() < 1e-9);
        assert_eq!(config.session.max_turns, 500);
        assert_eq!(config.game.automaton_name, "automaton");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.automaton.strategy, Strategy::ShortestPath);
        assert_eq!(config.automaton.seed, None);
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.game.human_player, 1);
        assert!(!config.game.automaton_first);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let toml_str = r#"
[automaton]
strategy = "minimax"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_zero_max_turns() {
        let mut config = AppConfig::default();
        config.session.max_turns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_wall_probability_out_of_range() {
        let mut config = AppConfig::default();
        config.automaton.wall_probability = 1.5;
        assert!(config.validate().is_err());
        config.automaton.wall_probability = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_seat() {
        let mut config = AppConfig::default();
        config.game.human_player = 2;
        config.validate().expect("seat 2 should be valid");

        config.game.human_player = 3;
        match config.validate() {
            Err(ConfigError::Validation(msg)) => {
                assert_eq!(msg, "game.human_player: player number must be 1 or 2, got 3")
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_empty_names() {
        let mut config = AppConfig::default();
        config.game.player_name = "  ".into();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.game.automaton_name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.session.max_turns, 500);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quoridor.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
player_name = "alice"
automaton_first = true

[session]
max_turns = 80
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.game.player_name, "alice");
        assert!(config.game.automaton_first);
        assert_eq!(config.session.max_turns, 80);
        // Others are defaults
        assert_eq!(config.automaton.strategy, Strategy::ShortestPath);
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[session]\nmax_turns = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
