use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::types::time_of_day::MINUTES_PER_DAY;

pub const DEFAULT_SOON_MINUTES: u16 = 30;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusThresholds {
    /// An in-progress period with this many minutes or fewer left is ENDING_SOON.
    #[serde(default = "default_soon_minutes")]
    pub ending_soon_minutes: u16,

    /// A period starting within this many minutes is STARTING_SOON.
    #[serde(default = "default_soon_minutes")]
    pub starting_soon_minutes: u16,
}

impl StatusThresholds {
    pub fn new(ending_soon_minutes: u16, starting_soon_minutes: u16) -> Self {
        Self {
            ending_soon_minutes,
            starting_soon_minutes,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.ending_soon_minutes >= MINUTES_PER_DAY {
            bail!("ending_soon_minutes must be < {MINUTES_PER_DAY}");
        }
        if self.starting_soon_minutes >= MINUTES_PER_DAY {
            bail!("starting_soon_minutes must be < {MINUTES_PER_DAY}");
        }
        Ok(())
    }
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self::new(DEFAULT_SOON_MINUTES, DEFAULT_SOON_MINUTES)
    }
}

fn default_soon_minutes() -> u16 {
    DEFAULT_SOON_MINUTES
}
