use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::generation::DEFAULT_DELAY_MS;

/// Upper bound on the artificial generation delay
pub const MAX_DELAY_MS: u64 = 60_000;

/// Main configuration structure loaded from career_roadmap.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Settings for the simulated generation step
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the event loop waits for a key before redrawing
    pub tick_ms: u64,
    pub title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            title: "AI Career Roadmap Generator".to_string(),
        }
    }
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
    /// The TUI only logs when this is set; stdout belongs to the terminal
    pub log_file: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "career_roadmap=info".to_string(),
            log_file: None,
        }
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "career_roadmap=info".to_string()),
            log_file: std::env::var("ROADMAP_LOG_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Load ROADMAP_ENV_FILE if set, otherwise ./.env. Existing variables win.
///
/// Safe to call more than once; the binary calls it before installing the
/// log subscriber so RUST_LOG from the env file applies.
pub fn load_env_file() {
    if let Ok(env_path) = std::env::var("ROADMAP_ENV_FILE") {
        let _ = dotenvy::from_path(env_path);
    } else {
        let _ = dotenvy::from_path(".env");
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses ROADMAP_CONFIG environment variable or defaults to "career_roadmap.toml"
    pub fn load() -> anyhow::Result<Self> {
        load_env_file();

        let config_path = std::env::var("ROADMAP_CONFIG")
            .unwrap_or_else(|_| "career_roadmap.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            Self::from_toml(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides();
        config.runtime = RuntimeConfig::load_from_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply env overrides (env-first)
    pub fn apply_env_overrides(&mut self) {
        if let Some(delay) = std::env::var("ROADMAP_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            self.generation.delay_ms = delay;
            tracing::debug!("ROADMAP_DELAY_MS env override applied");
        }
        if let Some(tick) = std::env::var("ROADMAP_TICK_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            self.ui.tick_ms = tick;
            tracing::debug!("ROADMAP_TICK_MS env override applied");
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.ui.tick_ms == 0 {
            anyhow::bail!("ui.tick_ms must be greater than 0");
        }
        if self.generation.delay_ms > MAX_DELAY_MS {
            anyhow::bail!(
                "generation.delay_ms must be at most {} (got {})",
                MAX_DELAY_MS,
                self.generation.delay_ms
            );
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.generation.delay_ms)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.ui.tick_ms)
    }
}
