//! Pacing for whoever animates the tree. Nothing here changes what the tree does, only how long a
//! visualizer waits between the steps it highlights.
//!
//! ```
//! use std::time::Duration;
//!
//! use bst::config::{Config, Step};
//!
//! let config = Config::from_toml_str("speed = 2.0").unwrap();
//! assert_eq!(config.delay(Step::InsertStep), Duration::from_millis(250));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Multiplier applied to every delay. `2.0` animates twice as fast.
    pub speed: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}

/// The kinds of pauses an animation makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Highlighting one more node on the way down to an insert.
    InsertStep,
    /// Highlighting one more node on the way down to a find.
    FindStep,
    /// Showing the new node before the layout is recomputed.
    InsertSettle,
}

impl Step {
    /// The delay at a speed of 1.
    pub fn base(self) -> Duration {
        match self {
            Step::InsertStep => Duration::from_millis(500),
            Step::FindStep => Duration::from_millis(400),
            Step::InsertSettle => Duration::from_millis(300),
        }
    }
}

impl Config {
    /// A config running at the given speed.
    pub fn with_speed(speed: f64) -> Result<Self> {
        let config = Self { speed };
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document such as `speed = 1.5`. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the speed can be divided by.
    pub fn validate(&self) -> Result<()> {
        if self.speed.is_finite() && self.speed > 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidSpeed(self.speed))
        }
    }

    /// How long to pause for the given step.
    pub fn delay(&self, step: Step) -> Duration {
        let nanos = step.base().as_nanos() as f64 / self.speed;
        Duration::from_nanos(nanos.round() as u64)
    }
}
