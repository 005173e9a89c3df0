use serde::Serialize;

use crate::{
    core::{calendar::Month, energy::EnergySplit, multipliers::Multipliers},
    prelude::*,
    quantity::energy::KilowattHours,
};

/// Energy of a single month under its seasonal multiplier.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyEnergy {
    pub month: Month,
    pub n_days: u16,
    pub multiplier: f64,
    pub energy: EnergySplit,
}

/// Twelve-month energy projection.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnnualProjection {
    pub n_days: u16,
    pub total: EnergySplit,
    pub months: Vec<MonthlyEnergy>,
}

impl AnnualProjection {
    /// Project the **unadjusted** daily energy over the year.
    ///
    /// Each month gets its own multiplier, so the result does not depend on the reference month.
    #[instrument(skip_all)]
    pub fn project(base_daily: EnergySplit, multipliers: &Multipliers) -> Self {
        let months: Vec<_> = Month::iter()
            .map(|month| {
                let multiplier = multipliers.get(month);
                MonthlyEnergy {
                    month,
                    n_days: month.n_days(),
                    multiplier,
                    energy: base_daily * multiplier * f64::from(month.n_days()),
                }
            })
            .collect();
        let this = Self {
            n_days: months.iter().map(|month| month.n_days).sum(),
            total: months.iter().fold(EnergySplit::ZERO, |total, month| total + month.energy),
            months,
        };
        debug!(
            total = ?this.total.total,
            day = ?this.total.day,
            night = ?this.total.night,
            "projected",
        );
        this
    }

    pub fn mean_monthly_energy(&self) -> KilowattHours {
        #[expect(clippy::cast_precision_loss)]
        let n_months = self.months.len() as f64;
        if self.months.is_empty() { KilowattHours::ZERO } else { self.total.total / n_months }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn daily() -> EnergySplit {
        EnergySplit {
            total: KilowattHours(10.0),
            day: KilowattHours(6.0),
            night: KilowattHours(4.0),
        }
    }

    #[test]
    fn test_neutral_is_365_days() {
        let projection = AnnualProjection::project(daily(), &Multipliers::default());
        assert_eq!(projection.n_days, 365);
        assert_abs_diff_eq!(projection.total.total.0, 3650.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.total.day.0, 2190.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.total.night.0, 1460.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.mean_monthly_energy().0, 3650.0 / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_monthly_multipliers() {
        let multipliers =
            Multipliers::try_monthly([(Month::January, 1.5), (Month::February, 0.5)]).unwrap();
        let projection = AnnualProjection::project(daily(), &multipliers);
        assert_abs_diff_eq!(projection.months[0].energy.total.0, 10.0 * 1.5 * 31.0, epsilon = 1e-9);
        assert_abs_diff_eq!(projection.months[1].energy.total.0, 10.0 * 0.5 * 28.0, epsilon = 1e-9);
        let expected = 10.0 * (1.5 * 31.0 + 0.5 * 28.0 + (365.0 - 31.0 - 28.0));
        assert_abs_diff_eq!(projection.total.total.0, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_breakdown_order() {
        let projection = AnnualProjection::project(daily(), &Multipliers::default());
        let months: Vec<_> = projection.months.iter().map(|month| month.month).collect();
        assert_eq!(months, Month::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_uniform_multiplier() {
        let projection =
            AnnualProjection::project(daily(), &Multipliers::try_uniform(1.1).unwrap());
        assert_abs_diff_eq!(projection.total.total.0, 10.0 * 1.1 * 365.0, epsilon = 1e-9);
    }
}
