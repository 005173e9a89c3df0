use std::fmt::{Display, Formatter};

use enumset::EnumSet;
use serde::{Deserialize, Serialize, Serializer};

use crate::{core::calendar::Month, prelude::*};

/// How the seasonal multipliers are set up.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentMode {
    /// Individual multiplier for each month.
    #[default]
    Monthly,

    /// Single multiplier for all the months.
    General,
}

/// Seasonal multiplier for each month, neutral by default.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Multipliers([f64; Month::N_MONTHS]);

impl Default for Multipliers {
    fn default() -> Self {
        Self([Self::NEUTRAL; Month::N_MONTHS])
    }
}

impl Multipliers {
    pub const NEUTRAL: f64 = 1.0;

    /// Conventional range of the multipliers, not enforced.
    pub const CONVENTIONAL_RANGE: std::ops::RangeInclusive<f64> = 0.5..=1.5;

    /// Same multiplier for every month.
    pub fn try_uniform(multiplier: f64) -> Result<Self> {
        ensure_positive(multiplier)?;
        Ok(Self([multiplier; Month::N_MONTHS]))
    }

    /// Multipliers for the specified months, the rest stay neutral.
    pub fn try_monthly(multipliers: impl IntoIterator<Item = (Month, f64)>) -> Result<Self> {
        let mut this = Self::default();
        for (month, multiplier) in multipliers {
            this.try_set(month, multiplier)?;
        }
        Ok(this)
    }

    pub fn try_set(&mut self, month: Month, multiplier: f64) -> Result {
        ensure_positive(multiplier).with_context(|| format!("invalid multiplier for {month}"))?;
        self.0[month.index()] = multiplier;
        Ok(())
    }

    #[must_use]
    pub const fn get(&self, month: Month) -> f64 {
        self.0[month.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Month, f64)> + '_ {
        Month::iter().map(|month| (month, self.get(month)))
    }

    /// Months with a non-neutral multiplier.
    #[must_use]
    #[expect(clippy::float_cmp)]
    pub fn adjusted_months(&self) -> EnumSet<Month> {
        self.iter()
            .filter(|(_, multiplier)| *multiplier != Self::NEUTRAL)
            .map(|(month, _)| month)
            .collect()
    }
}

fn ensure_positive(multiplier: f64) -> Result {
    ensure!(
        multiplier.is_finite() && multiplier > 0.0,
        "multiplier must be a positive number, got {multiplier}",
    );
    if !Multipliers::CONVENTIONAL_RANGE.contains(&multiplier) {
        warn!(multiplier, "multiplier is outside of the conventional range");
    }
    Ok(())
}

impl Serialize for Multipliers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Formats a multiplier like `x1.25`.
pub struct FormattedMultiplier(pub f64);

impl Display for FormattedMultiplier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{:.2}", self.0)
    }
}
