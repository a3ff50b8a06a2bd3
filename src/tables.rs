use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{ApplianceKind, DAYS_PER_MONTH, Estimate, LogEntry, Statistics, Tip, TrendPoint},
    fmt::FormattedPercentage,
    quantity::{energy::KilowattHours, rate::KilowattHourRate},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn energy_cell(energy: KilowattHours) -> Cell {
    Cell::new(format!("{energy:.1}")).set_alignment(CellAlignment::Right)
}

pub fn build_estimate_table(estimate: Estimate, rate: KilowattHourRate) -> Table {
    let tip = Tip::advise(estimate.total);
    let mut table = new_table();
    table.set_header(vec!["Base", "Appliances", "Total daily", "Monthly cost"]);
    table.add_row(vec![
        energy_cell(estimate.base),
        energy_cell(estimate.appliances),
        energy_cell(estimate.total).fg(tip.color()).add_attribute(Attribute::Bold),
        Cell::new(estimate.monthly_cost(rate)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format!("{DAYS_PER_MONTH} days × {rate}"))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim),
    ]);
    table
}

#[must_use]
pub fn build_tip_table(tip: Tip) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Energy tip"]);
    table.add_row(vec![Cell::new(tip).fg(tip.color())]);
    table
}

/// Share of each appliance in the appliance total.
///
/// Shares are [`None`] when the selected appliances consume nothing at all.
pub fn appliance_shares(
    breakdown: &[(ApplianceKind, KilowattHours)],
) -> Vec<(ApplianceKind, KilowattHours, Option<f64>)> {
    let total: KilowattHours = breakdown.iter().map(|(_, energy)| *energy).sum();
    breakdown
        .iter()
        .map(|(kind, energy)| {
            let share = (total > KilowattHours::ZERO).then(|| energy.0 / total.0);
            (*kind, *energy, share)
        })
        .collect()
}

#[must_use]
pub fn build_breakdown_table(breakdown: &[(ApplianceKind, KilowattHours)]) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Appliance"),
        Cell::new("Consumption").set_alignment(CellAlignment::Right),
        Cell::new("Share").set_alignment(CellAlignment::Right),
    ]);
    for (kind, energy, share) in appliance_shares(breakdown) {
        table.add_row(vec![
            Cell::new(kind),
            energy_cell(energy),
            share.map_or_else(
                || Cell::new("–").add_attribute(Attribute::Dim),
                |share| Cell::new(FormattedPercentage(share)),
            )
            .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_entries_table(entries: &[LogEntry]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Estimated", "Actual", "Difference"]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.date.format("%Y-%m-%d")),
            energy_cell(entry.estimated).add_attribute(Attribute::Dim),
            energy_cell(entry.actual),
            Cell::new(format!("{:+.1}", entry.difference.0)).set_alignment(CellAlignment::Right).fg(
                if entry.difference > KilowattHours::ZERO { Color::Red } else { Color::Green },
            ),
        ]);
    }
    table
}

pub fn build_statistics_table(statistics: Statistics) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Average daily", "Maximum day", "Minimum day"]);
    table.add_row(vec![
        energy_cell(statistics.mean),
        energy_cell(statistics.max).fg(Color::Red),
        energy_cell(statistics.min).fg(Color::Green),
    ]);
    table
}

#[must_use]
pub fn build_trend_table(trend: &[TrendPoint]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Estimated", "Actual"]);
    for point in trend {
        table.add_row(vec![
            Cell::new(point.date.format("%b %d")).add_attribute(Attribute::Dim),
            energy_cell(point.estimated),
            energy_cell(point.actual).fg(if point.actual > point.estimated {
                Color::Red
            } else {
                Color::Green
            }),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    use super::*;
    use crate::core::ConsumptionLog;

    #[test]
    fn test_appliance_shares() {
        let shares = appliance_shares(&[
            (ApplianceKind::AirConditioner, KilowattHours(3.0)),
            (ApplianceKind::Refrigerator, KilowattHours(1.5)),
        ]);
        assert_abs_diff_eq!(shares[0].2.unwrap(), 2.0 / 3.0);
        assert_abs_diff_eq!(shares[1].2.unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_appliance_shares_of_nothing() {
        let shares = appliance_shares(&[(ApplianceKind::Unknown, KilowattHours::ZERO)]);
        assert_eq!(shares[0].2, None);
    }

    #[test]
    fn test_entries_table_has_row_per_entry() {
        let mut log = ConsumptionLog::default();
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        log.add_entry(date, KilowattHours(8.1), KilowattHours(7.0));
        log.add_entry(date, KilowattHours(8.1), KilowattHours(9.0));
        let table = build_entries_table(&log.recent_entries(10));
        assert_eq!(table.row_iter().count(), 2);
        assert!(table.to_string().contains("+0.9"));
    }
}
