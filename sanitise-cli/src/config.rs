use anyhow::{Context, Result};
use sanitise_core::CharacterProfile;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SanitiseConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Where a loaded config came from. Reported after logging is installed,
/// since the logging level itself comes from the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

impl ConfigSource {
    pub fn log(self, path: &Path) {
        match self {
            ConfigSource::File => tracing::debug!("Loaded config from {}.", path.display()),
            ConfigSource::Defaults => tracing::info!(
                "No config file found at {}. Using SanitiseConfig::default().",
                path.display()
            ),
        }
    }
}

impl SanitiseConfig {
    pub fn load(path: &Path) -> Result<(Self, ConfigSource)> {
        if !path.exists() {
            return Ok((SanitiseConfig::default(), ConfigSource::Defaults));
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let cfg = toml::from_str::<SanitiseConfig>(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok((cfg, ConfigSource::File))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "ProfileConfig::default_profile")]
    pub default: CharacterProfile,
}

impl ProfileConfig {
    fn default_profile() -> CharacterProfile {
        CharacterProfile::Gsm
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            default: Self::default_profile(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl LoggingConfig {
    fn default_level() -> String {
        "warn".to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "ReportConfig::default_true")]
    pub pretty: bool,
}

impl ReportConfig {
    fn default_true() -> bool {
        true
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            pretty: Self::default_true(),
        }
    }
}
