//! Configuration for a dice roller.

use std::path::Path;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use crate::error::{DiceError, DiceResult};

/// Timing and seeding for a [`crate::Roller`].
///
/// Can be built in code with the `with_*` methods or loaded from TOML, where
/// every field is optional:
///
/// ```toml
/// seed = 7
/// animation_ms = 1000
/// resolve_delay_ms = 600
/// frame_ms = 33
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// How long the faces tween after a roll, in milliseconds.
    pub animation_ms: u64,
    /// How long after a roll the outcome is evaluated, in milliseconds.
    pub resolve_delay_ms: u64,
    /// Redraw interval for front ends that animate, in milliseconds.
    pub frame_ms: u64,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            animation_ms: 1000,
            resolve_delay_ms: 600,
            frame_ms: 33,
        }
    }
}

impl RollerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> DiceResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_path(path: &Path) -> DiceResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| DiceError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source)
    }

    /// Load `path` if given (defaults otherwise), then let `seed` override
    /// the file's seed.
    pub fn load(path: Option<&Path>, seed: Option<u64>) -> DiceResult<Self> {
        let config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        Ok(match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        })
    }

    /// An RNG seeded from `seed`, or from OS entropy when unset.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Check that durations that are used as divisors are non-zero.
    pub fn validate(&self) -> DiceResult<()> {
        if self.animation_ms == 0 {
            return Err(DiceError::InvalidConfig(
                "animation_ms must be greater than 0".into(),
            ));
        }
        if self.frame_ms == 0 {
            return Err(DiceError::InvalidConfig(
                "frame_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the tween duration.
    pub fn with_animation_ms(mut self, ms: u64) -> Self {
        self.animation_ms = ms;
        self
    }

    /// Set the delay before the outcome is evaluated.
    pub fn with_resolve_delay_ms(mut self, ms: u64) -> Self {
        self.resolve_delay_ms = ms;
        self
    }

    /// Set the redraw interval.
    pub fn with_frame_ms(mut self, ms: u64) -> Self {
        self.frame_ms = ms;
        self
    }

    /// Tween duration as a [`Duration`].
    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// Resolve delay as a [`Duration`].
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }

    /// Redraw interval as a [`Duration`].
    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
