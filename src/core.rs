pub mod adjust;
pub mod aggregate;
pub mod analysis;
pub mod annual;
pub mod calendar;
pub mod energy;
pub mod heatmap;
pub mod hour;
pub mod ldc;
pub mod load;
pub mod metrics;
pub mod multipliers;
pub mod segment;
pub mod series;
