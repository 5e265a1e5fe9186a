//! Configuration for the clex driver.
//!
//! Settings come from a TOML file; command-line flags override them.

use std::path::{Path, PathBuf};

use clex_lex::{LexerConfig, DEFAULT_MAX_LEXEME_LEN};
use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};

use crate::error::{DriverError, Result};
use crate::sink::OutputFormat;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "clex.toml";

/// Driver configuration.
///
/// ```toml
/// verbose = false
/// format = "pairs"
///
/// [lexer]
/// max_lexeme_len = 31
/// number_literals = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Enable debug logging.
    #[serde(default)]
    pub verbose: bool,

    /// Output rendering.
    #[serde(default)]
    pub format: OutputFormat,

    /// Scanner settings.
    #[serde(default)]
    pub lexer: LexerSection,
}

/// The `[lexer]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LexerSection {
    /// Longest lexeme accepted; `0` for unlimited.
    #[serde(default = "default_max_lexeme_len")]
    pub max_lexeme_len: usize,

    /// Emit number literal tokens instead of skipping digits.
    #[serde(default = "default_true")]
    pub number_literals: bool,
}

fn default_max_lexeme_len() -> usize {
    DEFAULT_MAX_LEXEME_LEN
}

fn default_true() -> bool {
    true
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            max_lexeme_len: default_max_lexeme_len(),
            number_literals: true,
        }
    }
}

impl LexerSection {
    /// Converts the table into scanner options.
    pub fn to_lexer_config(&self) -> LexerConfig {
        LexerConfig::default()
            .with_max_lexeme_len(self.max_lexeme_len)
            .with_number_literals(self.number_literals)
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/clex/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            DriverError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| DriverError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DriverError::Config(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| DriverError::Config(format!("failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| DriverError::Config(format!("cannot write {}: {}", path.display(), e)))
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("clex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("clex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
