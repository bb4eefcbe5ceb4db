//! Panel configuration.

use std::net::SocketAddr;
use std::time::Duration;

use crate::domain::STATION_COUNT;
use crate::modes::{ModeKind, UnknownMode};

/// Errors reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid {name}: {message}")]
    Invalid { name: &'static str, message: String },

    /// Initial mode name not recognised
    #[error(transparent)]
    Mode(#[from] UnknownMode),
}

/// Runtime settings for the panel controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// Time between rendered frames (milliseconds).
    pub frame_interval_ms: u64,

    /// Seed for the animation RNG.
    /// The same seed replays the same random animations.
    pub seed: u64,

    /// Number of pixels on the LED strip.
    /// Must cover at least one light per station.
    pub pixel_count: usize,

    /// Mode shown at startup.
    pub initial_mode: ModeKind,
}

impl PanelConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        bind_addr: SocketAddr,
        frame_interval_ms: u64,
        seed: u64,
        pixel_count: usize,
        initial_mode: ModeKind,
    ) -> Self {
        Self {
            bind_addr,
            frame_interval_ms,
            seed,
            pixel_count,
            initial_mode,
        }
    }

    /// Returns the frame interval as a Duration.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Read settings from `PANEL_*` environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`PanelConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("PANEL_ADDR") {
            config.bind_addr = parse("PANEL_ADDR", &addr)?;
        }
        if let Some(ms) = lookup("PANEL_FRAME_MS") {
            config.frame_interval_ms = parse("PANEL_FRAME_MS", &ms)?;
            if config.frame_interval_ms == 0 {
                return Err(ConfigError::Invalid {
                    name: "PANEL_FRAME_MS",
                    message: "must be at least 1".into(),
                });
            }
        }
        if let Some(seed) = lookup("PANEL_SEED") {
            config.seed = parse("PANEL_SEED", &seed)?;
        }
        if let Some(pixels) = lookup("PANEL_PIXELS") {
            config.pixel_count = parse("PANEL_PIXELS", &pixels)?;
            if config.pixel_count < STATION_COUNT {
                return Err(ConfigError::Invalid {
                    name: "PANEL_PIXELS",
                    message: format!("must be at least {STATION_COUNT}"),
                });
            }
        }
        if let Some(mode) = lookup("PANEL_MODE") {
            config.initial_mode = mode.parse()?;
        }

        Ok(config)
    }
}

fn parse<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        message: e.to_string(),
    })
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            frame_interval_ms: 20, // 50 fps
            seed: 0,
            pixel_count: STATION_COUNT,
            initial_mode: ModeKind::Routes,
        }
    }
}
