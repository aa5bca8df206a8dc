use agenda_core::config::GlobalConfig;
use agenda_core::day_index::events_between;
use anyhow::Result;
use chrono::{Duration, Local};
use owo_colors::OwoColorize;

use crate::render::{Render, day_label};

use super::{UPCOMING_DAYS, load_data, parse_date_arg};

pub fn run(config: &GlobalConfig, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let data = load_data(config)?;
    let today = Local::now().date_naive();

    let from = match from {
        Some(s) => parse_date_arg(s)?,
        None => today,
    };
    let to = match to {
        Some(s) => parse_date_arg(s)?,
        None => from + Duration::days(UPCOMING_DAYS),
    };

    let events = events_between(&data.events, from, to);

    if events.is_empty() {
        println!("{}", "Aucun rendez-vous sur cette période".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_label: Option<String> = None;

    for event in &events {
        let label = day_label(event.date, today);

        if current_label.as_ref() != Some(&label) {
            if current_label.is_some() {
                println!();
            }
            println!("{}", label.bold());
            current_label = Some(label);
        }

        println!("  {} {}", event.render(), format!("#{}", event.id).dimmed());
    }

    Ok(())
}
