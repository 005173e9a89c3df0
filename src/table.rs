use itertools::Itertools;
use serde::Deserialize;

use crate::{
    core::{
        hour::{Hour, HourSet},
        load::Load,
    },
    quantity::power::Watts,
};

/// Unvalidated load table row, as it comes from a scenario file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLoad {
    pub name: String,

    #[serde(rename = "power_watts")]
    pub power: Option<f64>,

    /// Hourly on/off flags, one per hour.
    pub hours: Option<Vec<i64>>,

    /// Alternatively, the list of hours when the load is on.
    pub active_hours: Option<Vec<i64>>,
}

#[derive(Clone, Debug, PartialEq, derive_more::Display)]
pub enum Issue {
    #[display("the load table is empty")]
    EmptyTable,

    #[display("row {row}: the load name is empty")]
    EmptyName { row: usize },

    #[display("row {row} ({name}): rated power is missing or not a number")]
    MissingPower { row: usize, name: String },

    #[display("row {row} ({name}): rated power is negative ({power} W)")]
    NegativePower { row: usize, name: String, power: f64 },

    #[display("row {row} ({name}): either `hours` or `active_hours` is required")]
    MissingSchedule { row: usize, name: String },

    #[display("row {row} ({name}): `hours` and `active_hours` are mutually exclusive")]
    AmbiguousSchedule { row: usize, name: String },

    #[display("row {row} ({name}): expected 24 hourly flags, got {n_flags}")]
    FlagCount { row: usize, name: String, n_flags: usize },

    #[display("row {row} ({name}): flag {flag} at hour {hour} is neither 0 nor 1")]
    NonBinaryFlag { row: usize, name: String, hour: usize, flag: i64 },

    #[display("row {row} ({name}): active hour {hour} is outside of 0..=23")]
    HourOutOfRange { row: usize, name: String, hour: i64 },
}

/// Load table being assembled from one or more sources.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct LoadTable {
    rows: Vec<RawLoad>,
}

impl LoadTable {
    /// Append the rows, a row replaces any earlier row with the same name.
    ///
    /// Names are trimmed, so the names stay unique after the merge.
    pub fn merge(&mut self, rows: impl IntoIterator<Item = RawLoad>) {
        for mut row in rows {
            row.name = row.name.trim().to_string();
            self.rows.retain(|existing| existing.name != row.name);
            self.rows.push(row);
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[RawLoad] {
        &self.rows
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Validate every row and collect all the issues.
    pub fn try_validate(&self) -> Result<Vec<Load>, Vec<Issue>> {
        if self.is_empty() {
            return Err(vec![Issue::EmptyTable]);
        }
        let mut loads = Vec::with_capacity(self.len());
        let mut issues = Vec::new();
        // Rows are numbered from 1, like the table items are:
        for (row, raw) in (1..).zip(self.rows()) {
            match validate_row(row, raw) {
                Ok(load) => loads.push(load),
                Err(row_issues) => issues.extend(row_issues),
            }
        }
        if issues.is_empty() { Ok(loads) } else { Err(issues) }
    }
}

/// Trimmed names which occur more than once.
#[must_use]
pub fn duplicate_names(rows: &[RawLoad]) -> Vec<&str> {
    rows.iter().map(|row| row.name.trim()).duplicates().collect()
}

fn validate_row(row: usize, raw: &RawLoad) -> Result<Load, Vec<Issue>> {
    let mut issues = Vec::new();
    let name = raw.name.trim();
    if name.is_empty() {
        issues.push(Issue::EmptyName { row });
    }

    let rated_power = match raw.power {
        Some(power) if !power.is_finite() => {
            issues.push(Issue::MissingPower { row, name: name.to_string() });
            None
        }
        Some(power) if power < 0.0 => {
            issues.push(Issue::NegativePower { row, name: name.to_string(), power });
            None
        }
        Some(power) => Some(Watts(power)),
        None => {
            issues.push(Issue::MissingPower { row, name: name.to_string() });
            None
        }
    };

    let activity = match (&raw.hours, &raw.active_hours) {
        (Some(flags), None) => validate_flags(row, name, flags, &mut issues),
        (None, Some(active_hours)) => validate_active_hours(row, name, active_hours, &mut issues),
        (None, None) => {
            issues.push(Issue::MissingSchedule { row, name: name.to_string() });
            None
        }
        (Some(_), Some(_)) => {
            issues.push(Issue::AmbiguousSchedule { row, name: name.to_string() });
            None
        }
    };

    match (rated_power, activity) {
        (Some(rated_power), Some(activity)) if issues.is_empty() => {
            Ok(Load { name: name.to_string(), rated_power, activity })
        }
        _ => Err(issues),
    }
}

fn validate_flags(
    row: usize,
    name: &str,
    flags: &[i64],
    issues: &mut Vec<Issue>,
) -> Option<HourSet> {
    if flags.len() != Hour::N_HOURS {
        issues.push(Issue::FlagCount { row, name: name.to_string(), n_flags: flags.len() });
        return None;
    }
    let n_issues = issues.len();
    let mut activity = HourSet::EMPTY;
    for (hour, (index, flag)) in Hour::iter().zip(flags.iter().copied().enumerate()) {
        match flag {
            0 => {}
            1 => activity.insert(hour),
            _ => issues.push(Issue::NonBinaryFlag {
                row,
                name: name.to_string(),
                hour: index,
                flag,
            }),
        }
    }
    (issues.len() == n_issues).then_some(activity)
}

fn validate_active_hours(
    row: usize,
    name: &str,
    active_hours: &[i64],
    issues: &mut Vec<Issue>,
) -> Option<HourSet> {
    let n_issues = issues.len();
    let mut activity = HourSet::EMPTY;
    for &hour in active_hours {
        match Hour::try_from(hour) {
            Ok(hour) => activity.insert(hour),
            Err(_) => issues.push(Issue::HourOutOfRange { row, name: name.to_string(), hour }),
        }
    }
    (issues.len() == n_issues).then_some(activity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, power: f64, active_hours: &[i64]) -> RawLoad {
        RawLoad {
            name: name.to_string(),
            power: Some(power),
            hours: None,
            active_hours: Some(active_hours.to_vec()),
        }
    }

    #[test]
    fn test_merge_keeps_last() {
        let mut table = LoadTable::default();
        table.merge([row("A", 1.0, &[]), row("B", 2.0, &[]), row("A", 3.0, &[])]);
        table.merge([row("C", 4.0, &[]), row("B", 5.0, &[])]);
        let rows: Vec<_> =
            table.rows().iter().map(|row| (row.name.as_str(), row.power.unwrap())).collect();
        assert_eq!(rows, vec![("A", 3.0), ("C", 4.0), ("B", 5.0)]);
    }

    #[test]
    fn test_validate_ok() {
        let mut table = LoadTable::default();
        let mut flags = vec![0; 24];
        flags[7] = 1;
        table.merge([
            row("Lamp", 40.0, &[18, 19]),
            RawLoad {
                name: " Kettle ".to_string(),
                power: Some(0.0),
                hours: Some(flags),
                active_hours: None,
            },
        ]);
        let loads = table.try_validate().unwrap();
        assert_eq!(loads.len(), 2);
        assert_eq!(loads[0].activity.len(), 2);
        assert_eq!(loads[1].name, "Kettle");
        assert_eq!(loads[1].activity.iter().map(u8::from).collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(LoadTable::default().try_validate().unwrap_err(), vec![Issue::EmptyTable]);
    }

    #[test]
    fn test_power_issues() {
        let mut table = LoadTable::default();
        table.merge([
            row("Negative", -1.0, &[]),
            row("NaN", f64::NAN, &[]),
            RawLoad { power: None, ..row("Missing", 0.0, &[]) },
        ]);
        let issues = table.try_validate().unwrap_err();
        assert_eq!(
            issues,
            vec![
                Issue::NegativePower { row: 1, name: "Negative".to_string(), power: -1.0 },
                Issue::MissingPower { row: 2, name: "NaN".to_string() },
                Issue::MissingPower { row: 3, name: "Missing".to_string() },
            ]
        );
    }

    #[test]
    fn test_schedule_issues() {
        let mut table = LoadTable::default();
        table.merge([
            RawLoad { active_hours: None, ..row("None", 1.0, &[]) },
            RawLoad { hours: Some(vec![0; 24]), ..row("Both", 1.0, &[]) },
            RawLoad { hours: Some(vec![1; 23]), active_hours: None, ..row("Short", 1.0, &[]) },
            row("Late", 1.0, &[24]),
        ]);
        let issues = table.try_validate().unwrap_err();
        assert_eq!(
            issues,
            vec![
                Issue::MissingSchedule { row: 1, name: "None".to_string() },
                Issue::AmbiguousSchedule { row: 2, name: "Both".to_string() },
                Issue::FlagCount { row: 3, name: "Short".to_string(), n_flags: 23 },
                Issue::HourOutOfRange { row: 4, name: "Late".to_string(), hour: 24 },
            ]
        );
    }

    #[test]
    fn test_non_binary_flag() {
        let mut flags = vec![0; 24];
        flags[5] = 2;
        let mut table = LoadTable::default();
        table.merge([RawLoad { hours: Some(flags), active_hours: None, ..row("Pump", 1.0, &[]) }]);
        let issues = table.try_validate().unwrap_err();
        assert_eq!(
            issues,
            vec![Issue::NonBinaryFlag { row: 1, name: "Pump".to_string(), hour: 5, flag: 2 }]
        );
        assert_eq!(issues[0].to_string(), "row 1 (Pump): flag 2 at hour 5 is neither 0 nor 1");
    }

    #[test]
    fn test_empty_name() {
        let mut table = LoadTable::default();
        table.merge([row("  ", 1.0, &[1])]);
        assert_eq!(table.try_validate().unwrap_err(), vec![Issue::EmptyName { row: 1 }]);
    }

    #[test]
    fn test_duplicate_names() {
        let rows = [row("A", 1.0, &[]), row("B", 1.0, &[]), row(" A ", 2.0, &[])];
        assert_eq!(duplicate_names(&rows), vec!["A"]);
    }

    #[test]
    fn test_merge_ignores_surrounding_whitespace() {
        let mut table = LoadTable::default();
        table.merge([row("Fridge", 100.0, &[0]), row(" Fridge ", 150.0, &[1])]);
        assert_eq!(table.len(), 1);

        let loads = table.try_validate().unwrap();
        let names: Vec<_> = loads.iter().map(|load| load.name.as_str()).collect();
        assert_eq!(names, vec!["Fridge"]);
        assert_eq!(loads[0].rated_power, Watts(150.0));
    }

    #[test]
    fn test_deserialize() {
        let raw: RawLoad = toml::from_str(
            r#"
                name = "Fridge"
                power_watts = 150.0
                active_hours = [0, 1]
            "#,
        )
        .unwrap();
        assert_eq!(raw, row("Fridge", 150.0, &[0, 1]));
    }
}
