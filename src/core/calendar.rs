use std::fmt::{Display, Formatter};

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

/// Calendar month of a non-leap year.
#[derive(
    Debug,
    Hash,
    Ord,
    PartialOrd,
    Deserialize,
    Serialize,
    clap::ValueEnum,
    enumset::EnumSetType,
)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const N_MONTHS: usize = 12;

    /// Iterate over the months from January to December.
    pub fn iter() -> impl Iterator<Item = Self> {
        EnumSet::<Self>::all().iter()
    }

    /// Number of days, February always has 28.
    #[must_use]
    pub const fn n_days(self) -> u16 {
        match self {
            Self::February => 28,
            Self::April | Self::June | Self::September | Self::November => 30,
            _ => 31,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        };
        write!(f, "{name}")
    }
}
