//! Terminal rendering: leveled messages and the fixed-width tables.
//!
//! Column widths, precisions, and rule lengths are the program's output
//! contract; the end-to-end tests assert on them verbatim. Cells are padded
//! by display width, not char count, and never truncated.

use colored::Colorize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;
use wattlog::api::{CmdMessage, MessageLevel};
use wattlog::model::Appliance;
use wattlog::registry::IndexedAppliance;

const INDEX_WIDTH: usize = 5;
const NAME_WIDTH: usize = 25;
const POWER_WIDTH: usize = 12;
const HOURS_WIDTH: usize = 12;
const ENERGY_WIDTH: usize = 12;

const LISTING_RULE_WIDTH: usize = 65;
const MATCH_RULE_WIDTH: usize = 61;

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

/// The full listing: header, rule, one row per record with its 1-based
/// index in the leftmost column.
pub fn print_listing<W: Write>(out: &mut W, rows: &[IndexedAppliance]) -> io::Result<()> {
    writeln!(out, "{}{}", pad_cell("No.", INDEX_WIDTH), header_row())?;
    writeln!(out, "{}", "-".repeat(LISTING_RULE_WIDTH))?;
    for entry in rows {
        writeln!(
            out,
            "{}{}",
            pad_cell(&entry.index.to_string(), INDEX_WIDTH),
            data_row(&entry.appliance)
        )?;
    }
    Ok(())
}

/// Search results: same columns minus the index. Nothing is printed when
/// there are no rows, so no header appears above zero matches.
pub fn print_matches<W: Write>(out: &mut W, rows: &[IndexedAppliance]) -> io::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }
    writeln!(out, "Found:")?;
    writeln!(out, "{}", header_row())?;
    writeln!(out, "{}", "-".repeat(MATCH_RULE_WIDTH))?;
    for entry in rows {
        writeln!(out, "{}", data_row(&entry.appliance))?;
    }
    Ok(())
}

fn header_row() -> String {
    format!(
        "{}{}{}{}",
        pad_cell("Name", NAME_WIDTH),
        pad_cell("Power(W)", POWER_WIDTH),
        pad_cell("Hours", HOURS_WIDTH),
        pad_cell("kWh/day", ENERGY_WIDTH),
    )
}

fn data_row(appliance: &Appliance) -> String {
    format!(
        "{}{}{}{}",
        pad_cell(&appliance.name, NAME_WIDTH),
        pad_cell(&format!("{:.2}", appliance.power_w), POWER_WIDTH),
        pad_cell(&format!("{:.2}", appliance.hours_per_day), HOURS_WIDTH),
        pad_cell(&format!("{:.3}", appliance.daily_energy_kwh()), ENERGY_WIDTH),
    )
}

fn pad_cell(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(index: usize, name: &str, power_w: f64, hours: f64) -> IndexedAppliance {
        IndexedAppliance {
            index,
            appliance: Appliance::new(name.to_string(), power_w, hours),
        }
    }

    #[test]
    fn data_row_matches_the_column_contract() {
        let row = data_row(&Appliance::new("Heater".into(), 1500.0, 3.0));
        // ASCII cells pad identically to std formatting.
        let expected = format!("{:<25}{:<12}{:<12}{:<12}", "Heater", "1500.00", "3.00", "4.500");
        assert_eq!(row, expected);
    }

    #[test]
    fn pad_cell_uses_display_width() {
        // Two CJK chars occupy four columns.
        assert_eq!(pad_cell("空調", 8), "空調    ");
    }

    #[test]
    fn pad_cell_never_truncates() {
        let long = "An unreasonably long appliance name";
        assert_eq!(pad_cell(long, 25), long);
    }

    #[test]
    fn listing_has_header_rule_and_indexed_rows() {
        let rows = vec![
            indexed(1, "Heater", 1500.0, 3.0),
            indexed(2, "Fan", 75.0, 8.0),
        ];
        let mut out = Vec::new();
        print_listing(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("No.  Name"));
        assert_eq!(lines[1], "-".repeat(65));
        assert!(lines[2].starts_with("1    Heater"));
        assert!(lines[2].contains("1500.00"));
        assert!(lines[2].contains("4.500"));
        assert!(lines[3].starts_with("2    Fan"));
        assert!(lines[3].contains("0.600"));
    }

    #[test]
    fn matches_table_drops_the_index_column() {
        let rows = vec![indexed(2, "Fan", 75.0, 8.0)];
        let mut out = Vec::new();
        print_matches(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Found:");
        assert!(lines[1].starts_with("Name"));
        assert_eq!(lines[2], "-".repeat(61));
        assert!(lines[3].starts_with("Fan "));
    }

    #[test]
    fn zero_matches_print_nothing() {
        let mut out = Vec::new();
        print_matches(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
