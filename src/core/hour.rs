use std::{
    fmt::{Debug, Display, Formatter},
    ops::BitOr,
    str::FromStr,
};

use serde::{Deserialize, Serialize, Serializer};

use crate::prelude::*;

/// Hour slot of a day, always within `0..=23`.
#[must_use]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Hour(u8);

impl Hour {
    pub const N_HOURS: usize = 24;

    pub const MIDNIGHT: Self = Self(0);
    pub const DEFAULT_DAY_START: Self = Self(6);
    pub const DEFAULT_DAY_END: Self = Self(18);

    /// Iterate over all the hours of a day in ascending order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + Clone {
        (0..Self::N_HOURS).map(|index| Self(index as u8))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for Hour {
    type Error = Error;

    fn try_from(hour: u8) -> Result<Self> {
        ensure!(usize::from(hour) < Self::N_HOURS, "hour must be within 0..=23, got {hour}");
        Ok(Self(hour))
    }
}

impl TryFrom<i64> for Hour {
    type Error = Error;

    fn try_from(hour: i64) -> Result<Self> {
        u8::try_from(hour)
            .map_err(|_| anyhow::anyhow!("hour must be within 0..=23, got {hour}"))?
            .try_into()
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> Self {
        hour.0
    }
}

impl FromStr for Hour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim().parse::<u8>().with_context(|| format!("`{s}` is not an hour"))?.try_into()
    }
}

impl Display for Hour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl Debug for Hour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h", self.0)
    }
}

/// Compact set of hours.
#[must_use]
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct HourSet(u32);

impl HourSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self((1 << Hour::N_HOURS) - 1);

    #[must_use]
    pub const fn contains(self, hour: Hour) -> bool {
        self.0 & (1 << hour.0) != 0
    }

    pub const fn insert(&mut self, hour: Hour) {
        self.0 |= 1 << hour.0;
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }

    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate over the contained hours in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Hour> + Clone {
        Hour::iter().filter(move |hour| self.contains(*hour))
    }
}

impl FromIterator<Hour> for HourSet {
    fn from_iter<T: IntoIterator<Item = Hour>>(iterator: T) -> Self {
        let mut this = Self::EMPTY;
        for hour in iterator {
            this.insert(hour);
        }
        this
    }
}

impl BitOr for HourSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl Debug for HourSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for HourSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
