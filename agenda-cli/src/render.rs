//! Terminal rendering for agenda-core types.
//!
//! Extension traits that add colored output using owo_colors, plus the
//! French date labels the app displays.

use std::collections::HashSet;

use agenda_core::contact::{Contact, EmergencyNumber};
use agenda_core::event::Event;
use agenda_core::grid::MonthCell;
use agenda_core::medicine::Medicine;
use agenda_core::weather::WeatherReading;
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let mut line = format!(
            "{} {} {}",
            self.category.glyph(),
            self.time.bold(),
            self.title
        );
        if self.important {
            line.push_str(&format!(" {}", "[Important]".red().bold()));
        }
        if let Some(notes) = &self.notes {
            line.push_str(&format!(" {}", format!("({notes})").dimmed()));
        }
        line
    }
}

impl Render for Medicine {
    fn render(&self) -> String {
        let mark = if self.taken { "✅" } else { "💊" };
        let name = if self.taken {
            self.name.dimmed().to_string()
        } else {
            self.name.clone()
        };
        let mut line = format!(
            "{} {} {} {}",
            mark,
            self.time.bold(),
            name,
            format!("(pilule {})", self.color).dimmed()
        );
        if let Some(notes) = &self.notes {
            line.push_str(&format!(" {}", format!("— {notes}").dimmed()));
        }
        line
    }
}

impl Render for Contact {
    fn render(&self) -> String {
        let name = if self.urgent {
            self.name.red().bold().to_string()
        } else {
            self.name.bold().to_string()
        };
        format!(
            "{} {} — {}  {}",
            self.emoji,
            name,
            self.relation,
            self.phone.dimmed()
        )
    }
}

impl Render for EmergencyNumber {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.glyph,
            self.label,
            format!("({})", self.number).red().bold()
        )
    }
}

impl Render for WeatherReading {
    fn render(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!(
            "{} {} à {}, {}",
            self.condition.glyph(),
            format!("{}°C", self.temperature).bold(),
            self.city,
            self.condition.label()
        ));
        lines.push(
            format!("   humidité {} %, vent {} km/h", self.humidity, self.wind_speed)
                .dimmed()
                .to_string(),
        );
        lines.push(format!("💡 {}", self.advice));
        lines.join("\n")
    }
}

// =============================================================================
// French date labels
// =============================================================================

/// Indexed by `num_days_from_sunday`.
const WEEKDAYS_FR: [&str; 7] = [
    "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
];

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// "mardi 3 mars", the header format of the source app.
pub fn format_date_fr(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        WEEKDAYS_FR[date.weekday().num_days_from_sunday() as usize],
        date.day(),
        MONTHS_FR[date.month0() as usize]
    )
}

/// "mars 2026", for the month view title.
pub fn month_title_fr(date: NaiveDate) -> String {
    format!("{} {}", MONTHS_FR[date.month0() as usize], date.year())
}

/// Relative label for grouping: "Aujourd'hui", "Demain", or the full date.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Aujourd'hui".to_string(),
        1 => "Demain".to_string(),
        _ => format_date_fr(date),
    }
}

// =============================================================================
// Month grid
// =============================================================================

/// Render the 42-cell grid as six rows of seven, Sunday-first.
///
/// Padding days are dimmed, today is highlighted, and days carrying at least
/// one event get a marker dot.
pub fn render_month(
    grid: &[MonthCell],
    event_days: &HashSet<NaiveDate>,
    today: NaiveDate,
) -> String {
    let mut lines = Vec::new();
    lines.push(" Di  Lu  Ma  Me  Je  Ve  Sa".bold().to_string());

    for week in grid.chunks(7) {
        let row: Vec<String> = week.iter().map(|cell| render_cell(cell, event_days, today)).collect();
        lines.push(row.join(" "));
    }

    lines.join("\n")
}

fn render_cell(cell: &MonthCell, event_days: &HashSet<NaiveDate>, today: NaiveDate) -> String {
    let marker = if event_days.contains(&cell.date) { "•" } else { " " };
    let day = format!("{:>2}", cell.date.day());

    let day = if cell.date == today {
        day.reversed().bold().to_string()
    } else if cell.is_current_month {
        day
    } else {
        day.dimmed().to_string()
    };

    format!("{day}{marker}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::grid::month_grid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- date labels ---

    #[test]
    fn french_date_format() {
        // 2024-03-01 is a Friday.
        assert_eq!(format_date_fr(date(2024, 3, 1)), "vendredi 1 mars");
        assert_eq!(format_date_fr(date(2026, 8, 30)), "dimanche 30 août");
    }

    #[test]
    fn month_title() {
        assert_eq!(month_title_fr(date(2024, 3, 15)), "mars 2024");
    }

    #[test]
    fn relative_day_labels() {
        let today = date(2026, 8, 30);
        assert_eq!(day_label(today, today), "Aujourd'hui");
        assert_eq!(day_label(date(2026, 8, 31), today), "Demain");
        assert_eq!(day_label(date(2026, 9, 2), today), "mercredi 2 septembre");
    }

    // --- month grid ---

    #[test]
    fn month_render_has_header_and_six_rows() {
        let grid = month_grid(date(2024, 3, 1));
        let rendered = render_month(&grid, &HashSet::new(), date(2024, 3, 1));
        assert_eq!(rendered.lines().count(), 7);
    }

    #[test]
    fn event_days_get_a_marker() {
        let grid = month_grid(date(2024, 3, 1));
        let mut days = HashSet::new();
        days.insert(date(2024, 3, 15));

        let rendered = render_month(&grid, &days, date(2024, 3, 1));
        assert!(rendered.contains("15•"));
    }
}
