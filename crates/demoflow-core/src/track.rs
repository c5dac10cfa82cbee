use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One of the three fixed demo variants. Each track owns its own static
/// event list, delay list, and evaluation report; the set is closed and a
/// track never changes identity once selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Track {
    #[serde(rename = "mvp")]
    Mvp,
    #[serde(rename = "2-month")]
    TwoMonth,
    #[serde(rename = "4-month")]
    FourMonth,
}

impl Track {
    pub const COUNT: usize = 3;

    /// All tracks, in display order (also the scheduler's state-table order).
    pub const fn all() -> [Track; Track::COUNT] {
        [Track::Mvp, Track::TwoMonth, Track::FourMonth]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Track::Mvp => "mvp",
            Track::TwoMonth => "2-month",
            Track::FourMonth => "4-month",
        }
    }

    /// Position in the scheduler's fixed state table.
    pub(crate) const fn index(self) -> usize {
        match self {
            Track::Mvp => 0,
            Track::TwoMonth => 1,
            Track::FourMonth => 2,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Track {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mvp" => Ok(Track::Mvp),
            "2-month" => Ok(Track::TwoMonth),
            "4-month" => Ok(Track::FourMonth),
            other => Err(ValidationError::UnknownTrack(other.to_string())),
        }
    }
}
