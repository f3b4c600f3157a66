use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Active,
    StartingSoon,
    EndingSoon,
    Closed,
}

impl Status {
    pub fn is_live(self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_in_progress(self) -> bool {
        matches!(self, Self::Active | Self::EndingSoon)
    }

    /// Sort key for venue lists: ending soon first, closed last.
    pub fn rank(self) -> u8 {
        match self {
            Self::EndingSoon => 0,
            Self::Active => 1,
            Self::StartingSoon => 2,
            Self::Closed => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::StartingSoon => "STARTING_SOON",
            Self::EndingSoon => "ENDING_SOON",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
