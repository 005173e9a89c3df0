use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

use crate::core::hour::{Hour, HourSet};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Day,
    Night,
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "Day"),
            Self::Night => write!(f, "Night"),
        }
    }
}

impl Segment {
    pub const fn color(self) -> Color {
        match self {
            Self::Day => Color::DarkYellow,
            Self::Night => Color::Blue,
        }
    }
}

/// Day/night partition of the 24 hours.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Segments {
    pub day: HourSet,
    pub night: HourSet,
}

impl Segments {
    /// Split the day at `day_start` (inclusive) and `day_end` (exclusive).
    ///
    /// When `day_start >= day_end`, the day segment wraps past midnight.
    /// In particular, `day_start == day_end` makes the whole day a day segment,
    /// leaving the night empty.
    pub fn resolve(day_start: Hour, day_end: Hour) -> Self {
        let day: HourSet = if day_start < day_end {
            Hour::iter().filter(|hour| (day_start..day_end).contains(hour)).collect()
        } else {
            Hour::iter().filter(|hour| *hour >= day_start || *hour < day_end).collect()
        };
        Self { day, night: day.complement() }
    }

    pub const fn hours(&self, segment: Segment) -> HourSet {
        match segment {
            Segment::Day => self.day,
            Segment::Night => self.night,
        }
    }

    pub const fn segment_of(&self, hour: Hour) -> Segment {
        if self.day.contains(hour) { Segment::Day } else { Segment::Night }
    }
}
