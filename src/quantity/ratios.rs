use crate::quantity::power::Watts;

quantity!(Percentage, suffix: "%", precision: 2);

impl Percentage {
    /// Mean-to-peak ratio in percent, zero when there is no peak.
    pub fn load_factor(mean: Watts, peak: Watts) -> Self {
        if peak > Watts::ZERO { Self(mean / peak * 100.0) } else { Self::ZERO }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_load_factor() {
        let load_factor = Percentage::load_factor(Watts(50.0), Watts(200.0));
        assert_abs_diff_eq!(load_factor.0, 25.0, epsilon = 1e-9);
    }

    #[test]
    fn test_load_factor_zero_peak() {
        assert_eq!(Percentage::load_factor(Watts::ZERO, Watts::ZERO), Percentage::ZERO);
    }
}
