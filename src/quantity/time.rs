quantity!(Hours, suffix: "h", precision: 1);

impl Hours {
    pub const ONE: Self = Self(1.0);
}

impl From<usize> for Hours {
    #[expect(clippy::cast_precision_loss)]
    fn from(n_hours: usize) -> Self {
        Self(n_hours as f64)
    }
}
