use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tool-level settings for the `percode` binary.
///
/// The library always exposes both decode policies; this only picks which
/// one the `decode` command uses for a given deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Fail the `decode` command on malformed escapes instead of printing
    /// the best-effort prefix.
    pub strict_decode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_decode: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = "percode.toml";
        if Path::new(config_path).exists() {
            let contents = fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            let config = Self::default();
            // First run: write the defaults out so they can be edited
            let toml = toml::to_string(&config)?;
            fs::write(config_path, toml)?;
            Ok(config)
        }
    }
}
