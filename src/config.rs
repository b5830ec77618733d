use crate::consts;
use crate::game::Arena;
use log::LevelFilter;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    /// How the snake starts out
    pub(crate) snake: SnakeConfig,

    /// Size of the playing field
    pub(crate) arena: Arena,

    /// Where & how much to log
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snaketrail").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct SnakeConfig {
    /// Head speed in units per second
    pub(crate) speed: Speed,

    /// Number of body segments at the start of a game
    pub(crate) initial_length: NonZeroUsize,
}

impl Default for SnakeConfig {
    fn default() -> SnakeConfig {
        SnakeConfig {
            speed: Speed::default(),
            initial_length: consts::DEFAULT_SNAKE_LENGTH,
        }
    }
}

/// A positive, finite speed
#[derive(Clone, Copy, Deserialize, Debug, PartialEq)]
#[serde(try_from = "f32")]
pub(crate) struct Speed(f32);

impl Speed {
    pub(crate) fn get(self) -> f32 {
        self.0
    }
}

impl Default for Speed {
    fn default() -> Speed {
        Speed(consts::DEFAULT_SPEED)
    }
}

impl TryFrom<f32> for Speed {
    type Error = InvalidSpeed;

    fn try_from(value: f32) -> Result<Speed, InvalidSpeed> {
        if value.is_finite() && value > 0.0 {
            Ok(Speed(value))
        } else {
            Err(InvalidSpeed(value))
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("speed must be a positive finite number, got {0}")]
pub(crate) struct InvalidSpeed(f32);

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct LogConfig {
    /// Most verbose level of messages to write
    pub(crate) level: LevelFilter,

    /// File to write log messages to.  If not set, nothing is logged.
    pub(crate) file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            level: LevelFilter::Info,
            file: None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load_str(s: &str) -> Result<Config, ConfigError> {
        let mut file = NamedTempFile::new().expect("creating a tempfile should succeed");
        file.write_all(s.as_bytes())
            .expect("writing to a tempfile should succeed");
        Config::load(file.path(), false)
    }

    #[test]
    fn load_missing() {
        let dir = tempfile::tempdir().expect("creating a tempdir should succeed");
        let path = dir.path().join("config.toml");
        let cfg = Config::load(&path, true).expect("missing file should be allowed");
        assert_eq!(cfg, Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_empty() {
        let cfg = load_str("").expect("empty config should parse");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.snake.speed, Speed(consts::DEFAULT_SPEED));
        assert_eq!(cfg.snake.initial_length.get(), 3);
        assert_eq!(cfg.arena.size(), consts::DEFAULT_ARENA_SIZE);
        assert_eq!(cfg.log.level, LevelFilter::Info);
    }

    #[test]
    fn load_full() {
        let cfg = load_str(concat!(
            "[snake]\n",
            "speed = 8.5\n",
            "initial-length = 5\n",
            "\n",
            "[arena]\n",
            "width = 30\n",
            "height = 12\n",
            "\n",
            "[log]\n",
            "level = \"DEBUG\"\n",
            "file = \"/tmp/snaketrail.log\"\n",
        ))
        .expect("config should parse");
        assert_eq!(
            cfg,
            Config {
                snake: SnakeConfig {
                    speed: Speed(8.5),
                    initial_length: NonZeroUsize::new(5).expect("5 is nonzero"),
                },
                arena: Arena::new(30, 12).expect("arena size should be valid"),
                log: LogConfig {
                    level: LevelFilter::Debug,
                    file: Some(PathBuf::from("/tmp/snaketrail.log")),
                },
            }
        );
    }

    #[test]
    fn load_partial_arena() {
        let cfg = load_str("[arena]\nwidth = 20\n").expect("config should parse");
        assert_eq!(cfg.arena.size().width, 20);
        assert_eq!(cfg.arena.size().height, consts::DEFAULT_ARENA_SIZE.height);
    }

    #[rstest]
    #[case("[snake]\nspeed = 0.0\n")]
    #[case("[snake]\nspeed = -3.0\n")]
    #[case("[snake]\nspeed = nan\n")]
    #[case("[snake]\nspeed = inf\n")]
    #[case("[snake]\ninitial-length = 0\n")]
    #[case("[arena]\nwidth = 2\n")]
    #[case("[arena]\nheight = 100\n")]
    #[case("[log]\nlevel = \"LOUD\"\n")]
    #[case("[snake\nspeed = 3.0\n")]
    fn load_invalid(#[case] s: &str) {
        assert!(matches!(load_str(s), Err(ConfigError::Parse(_))));
    }

    #[rstest]
    #[case(1.0, true)]
    #[case(0.25, true)]
    #[case(0.0, false)]
    #[case(-1.0, false)]
    #[case(f32::INFINITY, false)]
    #[case(f32::NAN, false)]
    fn speed_validation(#[case] value: f32, #[case] ok: bool) {
        assert_eq!(Speed::try_from(value).is_ok(), ok);
    }
}
