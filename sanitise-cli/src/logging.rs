use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Install a stderr subscriber. `RUST_LOG` overrides the configured level.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(filter(env.as_deref(), config)?)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {e}"))
}

/// First directive that parses: the environment's, the config's, then the default level.
fn filter(env: Option<&str>, config: &LoggingConfig) -> Result<EnvFilter> {
    if let Some(filter) = env.and_then(|directive| EnvFilter::try_new(directive).ok()) {
        return Ok(filter);
    }
    let filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new(LoggingConfig::default().level))?;
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
        }
    }

    #[test]
    fn environment_wins_over_config() {
        let f = filter(Some("debug"), &level("error")).unwrap();
        assert_eq!(f.to_string(), "debug");
    }

    #[test]
    fn config_level_applies_without_environment() {
        let f = filter(None, &level("info")).unwrap();
        assert_eq!(f.to_string(), "info");
    }

    #[test]
    fn unparsable_directives_fall_back() {
        let f = filter(Some("sanitise=loud"), &level("info")).unwrap();
        assert_eq!(f.to_string(), "info");
        let f = filter(None, &level("sanitise=loud")).unwrap();
        assert_eq!(f.to_string(), "warn");
    }
}
