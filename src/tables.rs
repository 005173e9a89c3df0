use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        analysis::Report,
        calendar::Month,
        heatmap::{LoadHeatmap, MonthlyHeatmap},
        hour::Hour,
        ldc::LdcPoint,
        load::Load,
        metrics::{DerivedMetrics, SegmentMetrics},
        multipliers::{FormattedMultiplier, Multipliers},
        segment::Segment,
        series::HourlySeries,
    },
    quantity::power::Watts,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn right(content: impl ToString) -> Cell {
    Cell::new(content).set_alignment(CellAlignment::Right)
}

fn format_hour(hour: Option<Hour>) -> String {
    hour.map_or_else(|| "N/A".to_string(), |hour| hour.to_string())
}

pub fn build_hourly_table(report: &Report) -> Table {
    let peak_power = report.adjusted.metrics.peak_power;
    let mut table = new_table();
    table.set_header(vec!["Hour", "Segment", "Base", "Adjusted"]);
    for (hour, adjusted) in report.adjusted.series.iter() {
        let segment = report.segments.segment_of(hour);
        table.add_row(vec![
            Cell::new(hour),
            Cell::new(segment).fg(segment.color()),
            right(report.base.series[hour]).add_attribute(Attribute::Dim),
            right(adjusted).fg(if adjusted == peak_power && peak_power > Watts::ZERO {
                Color::Red
            } else {
                Color::Reset
            }),
        ]);
    }
    table
}

pub fn build_metrics_table(report: &Report) -> Table {
    let base = &report.base.metrics;
    let adjusted = &report.adjusted.metrics;

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Metric"),
        right("Base"),
        right(format!(
            "{} {}",
            report.reference_month,
            FormattedMultiplier(report.adjusted.multiplier)
        )),
    ]);

    let overall: [(&str, fn(&DerivedMetrics) -> String); 6] = [
        ("Peak power", |metrics| metrics.peak_power.to_string()),
        ("Peak hour", |metrics| metrics.peak_hour.to_string()),
        ("Minimum power", |metrics| metrics.min_power.to_string()),
        ("Minimum hour", |metrics| metrics.min_hour.to_string()),
        ("Mean power", |metrics| metrics.mean_power.to_string()),
        ("Load factor", |metrics| metrics.load_factor.to_string()),
    ];
    for (name, value) in overall {
        table.add_row(vec![Cell::new(name), right(value(base)), right(value(adjusted))]);
    }

    let segment_rows: [(&str, fn(&SegmentMetrics) -> String); 4] = [
        ("peak power", |metrics| metrics.peak_power.to_string()),
        ("peak hour", |metrics| format_hour(metrics.peak_hour)),
        ("mean power", |metrics| metrics.mean_power.to_string()),
        ("load factor", |metrics| metrics.load_factor.to_string()),
    ];
    for (segment, base, adjusted) in [
        (Segment::Day, &base.day, &adjusted.day),
        (Segment::Night, &base.night, &adjusted.night),
    ] {
        for (name, value) in segment_rows {
            table.add_row(vec![
                Cell::new(format!("{segment} {name}")).fg(segment.color()),
                right(value(base)),
                right(value(adjusted)),
            ]);
        }
    }
    table
}

pub fn build_energy_table(report: &Report) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Energy"),
        right("Total"),
        right("Day").fg(Color::DarkYellow),
        right("Night").fg(Color::Blue),
    ]);
    for (name, energy) in [
        ("Daily, base".to_string(), report.base.metrics.daily_energy),
        ("Daily, adjusted".to_string(), report.adjusted.metrics.daily_energy),
        (
            format!("{} days of {}", report.period.n_days, report.reference_month),
            report.period.energy,
        ),
        (format!("Annual, {} days", report.annual.n_days), report.annual.total),
    ] {
        table.add_row(vec![
            Cell::new(name),
            right(energy.total).add_attribute(Attribute::Bold),
            right(energy.day),
            right(energy.night),
        ]);
    }
    table
}

pub fn build_ldc_table(ldc: &[LdcPoint]) -> Table {
    let mut table = new_table();
    table.set_header(vec![right("Duration"), right("Power"), right("Hour")]);
    for point in ldc {
        table.add_row(vec![
            right(format!("{}h", point.duration_hours)),
            right(point.power),
            right(point.hour).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_monthly_table(report: &Report) -> Table {
    let adjusted_months = report.multipliers.adjusted_months();
    let mean_energy = report.annual.mean_monthly_energy();

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Month"),
        right("Days"),
        right("Multiplier"),
        right("Energy"),
        right("Day").fg(Color::DarkYellow),
        right("Night").fg(Color::Blue),
    ]);
    for month in &report.annual.months {
        let mut name = Cell::new(month.month);
        if month.month == report.reference_month {
            name = name.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            name,
            right(month.n_days).add_attribute(Attribute::Dim),
            right(FormattedMultiplier(month.multiplier)).fg(
                if adjusted_months.contains(month.month) {
                    if month.multiplier > Multipliers::NEUTRAL { Color::Red } else { Color::Green }
                } else {
                    Color::Reset
                },
            ),
            right(month.energy.total).fg(if month.energy.total > mean_energy {
                Color::Red
            } else {
                Color::Green
            }),
            right(month.energy.day),
            right(month.energy.night),
        ]);
    }
    table.add_row(vec![
        Cell::new("Mean").add_attribute(Attribute::Italic),
        Cell::new(""),
        Cell::new(""),
        right(mean_energy).add_attribute(Attribute::Italic),
        Cell::new(""),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        right(report.annual.n_days),
        Cell::new(""),
        right(report.annual.total.total).add_attribute(Attribute::Bold),
        right(report.annual.total.day),
        right(report.annual.total.night),
    ]);
    table
}

pub fn build_load_heatmap_table(heatmap: &LoadHeatmap) -> Table {
    let max_power = heatmap.max_power();
    let mut table = new_heatmap_table("Load");
    for row in &heatmap.rows {
        table.add_row(heatmap_row(Cell::new(&row.name), &row.series, max_power));
    }
    table
}

pub fn build_monthly_heatmap_table(heatmap: &MonthlyHeatmap, reference_month: Month) -> Table {
    let max_power = heatmap.max_power();
    let mut table = new_heatmap_table("Month");
    for row in &heatmap.rows {
        let mut name = Cell::new(row.month);
        if row.month == reference_month {
            name = name.add_attribute(Attribute::Bold);
        }
        table.add_row(heatmap_row(name, &row.series, max_power));
    }
    table
}

fn new_heatmap_table(title: &str) -> Table {
    let mut table = new_table();
    let mut header = vec![Cell::new(title)];
    header.extend(Hour::iter().map(|hour| right(u8::from(hour))));
    table.set_header(header);
    table
}

fn heatmap_row(name: Cell, series: &HourlySeries, max_power: Watts) -> Vec<Cell> {
    let mut cells = vec![name];
    cells.extend(series.iter().map(|(_, power)| {
        right(format!("{:.0}", power.0)).fg(intensity_color(power, max_power))
    }));
    cells
}

/// Colour bucket of the value relative to the maximum.
fn intensity_color(power: Watts, max_power: Watts) -> Color {
    if power <= Watts::ZERO || max_power <= Watts::ZERO {
        return Color::DarkGrey;
    }
    let intensity = power / max_power;
    if intensity < 0.25 {
        Color::Blue
    } else if intensity < 0.5 {
        Color::Green
    } else if intensity < 0.75 {
        Color::DarkYellow
    } else {
        Color::Red
    }
}

pub fn build_loads_table(loads: &[Load]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Load"),
        right("Power"),
        right("Hours"),
        Cell::new("Schedule"),
    ]);
    for load in loads {
        let schedule: String = Hour::iter()
            .map(|hour| if load.activity.contains(hour) { '█' } else { '·' })
            .collect();
        table.add_row(vec![
            Cell::new(&load.name),
            right(load.rated_power),
            right(load.activity.len()).add_attribute(Attribute::Dim),
            Cell::new(schedule),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_color() {
        assert_eq!(intensity_color(Watts::ZERO, Watts(100.0)), Color::DarkGrey);
        assert_eq!(intensity_color(Watts(10.0), Watts::ZERO), Color::DarkGrey);
        assert_eq!(intensity_color(Watts(10.0), Watts(100.0)), Color::Blue);
        assert_eq!(intensity_color(Watts(60.0), Watts(100.0)), Color::DarkYellow);
        assert_eq!(intensity_color(Watts(100.0), Watts(100.0)), Color::Red);
    }

    #[test]
    fn test_format_hour() {
        assert_eq!(format_hour(None), "N/A");
        assert_eq!(format_hour(Hour::try_from(7_u8).ok()), "07:00");
    }
}
