use agenda_core::config::GlobalConfig;
use agenda_core::event::{Event, EventCategory};
use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

use crate::render::format_date_fr;

use super::{load_data, normalize_time, save_data};

pub fn run(
    config: &GlobalConfig,
    title: Option<String>,
    date: Option<String>,
    time: Option<String>,
    category: Option<String>,
    important: bool,
    notes: Option<String>,
) -> Result<()> {
    let interactive = title.is_none() || date.is_none() || time.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Quel rendez-vous ?")
            .interact_text()?,
    };

    // --- Date ---
    let date = if let Some(s) = date {
        parse_day(&s)?
    } else {
        prompt_with_retry("  Quel jour ?", parse_day)?
    };

    // --- Time ---
    let time = if let Some(s) = time {
        normalize_time(&s)?
    } else {
        prompt_with_retry("  À quelle heure ? (ex: 14:30)", normalize_time)?
    };

    // --- Category ---
    let category = match category {
        Some(name) => EventCategory::from_name(&name)
            .ok_or_else(|| anyhow::anyhow!("Unknown category '{}'", name))?,
        None if interactive => {
            let labels: Vec<String> = EventCategory::ALL
                .iter()
                .map(|c| format!("{} {}", c.glyph(), c.label()))
                .collect();
            let selection = Select::new()
                .with_prompt("  Catégorie")
                .items(&labels)
                .default(0)
                .interact()?;
            EventCategory::ALL[selection]
        }
        None => EventCategory::Other,
    };

    // --- Important ---
    let important = if important {
        true
    } else if interactive {
        Confirm::new()
            .with_prompt("  Important ?")
            .default(false)
            .interact()?
    } else {
        false
    };

    let mut event = Event::new(&title, date, &time, category);
    event.important = important;
    event.notes = notes;

    let mut data = load_data(config)?;
    let stored = data.events.add(event).clone();
    save_data(config, &data)?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!(
            "  Ajouté : {} le {} à {}",
            stored.title,
            format_date_fr(stored.date),
            stored.time
        )
        .green()
    );

    Ok(())
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let mut result = String::new();
    let lower = input.to_lowercase();

    for (i, word) in lower.split_whitespace().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        let expanded = abbrevs
            .iter()
            .find(|(abbr, _)| *abbr == word)
            .map(|(_, full)| *full)
            .unwrap_or(word);
        result.push_str(expanded);
    }

    result
}

/// Parse a day: ISO `YYYY-MM-DD` first, then natural language ("tomorrow",
/// "sat", "march 20") via fuzzydate.
fn parse_day(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    let expanded = expand_abbreviations(input);
    fuzzydate::parse(&expanded)
        .map(|dt| dt.date())
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    // --- expand_abbreviations ---

    #[test]
    fn expand_day_abbreviations() {
        assert_eq!(expand_abbreviations("sat"), "saturday");
        assert_eq!(expand_abbreviations("next fri"), "next friday");
        assert_eq!(expand_abbreviations("thu"), "thursday");
    }

    #[test]
    fn expand_month_abbreviations() {
        assert_eq!(expand_abbreviations("jan 20"), "january 20");
        assert_eq!(expand_abbreviations("sept 5"), "september 5");
    }

    #[test]
    fn expand_preserves_non_abbreviations() {
        assert_eq!(expand_abbreviations("tomorrow"), "tomorrow");
        assert_eq!(expand_abbreviations("next friday"), "next friday");
    }

    // --- parse_day ---

    #[test]
    fn parse_day_iso() {
        let date = parse_day("2026-09-03").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 9, 3).unwrap());
    }

    #[test]
    fn parse_day_natural_language() {
        let date = parse_day("march 20").unwrap();
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 20);
    }

    #[test]
    fn parse_day_abbreviation_works() {
        assert!(parse_day("sat").is_ok());
    }

    #[test]
    fn parse_day_invalid_input() {
        assert!(parse_day("not a date at all xyz").is_err());
    }
}
