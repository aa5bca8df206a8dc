use std::collections::HashSet;

use agenda_core::config::GlobalConfig;
use agenda_core::grid::month_grid;
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use owo_colors::OwoColorize;

use crate::render::{Render, month_title_fr, render_month};

use super::load_data;

pub fn run(config: &GlobalConfig, date: Option<&str>) -> Result<()> {
    let data = load_data(config)?;
    let today = Local::now().date_naive();
    let reference = match date {
        Some(s) => parse_month_arg(s)?,
        None => today,
    };

    let grid = month_grid(reference);
    let event_days: HashSet<NaiveDate> = data.events.all().iter().map(|e| e.date).collect();

    println!("📅 {}", month_title_fr(reference).bold());
    println!("{}", render_month(&grid, &event_days, today));

    // Below the grid, the month's own events in day order.
    let first = grid.iter().find(|c| c.is_current_month).map(|c| c.date);
    let last = grid.iter().rev().find(|c| c.is_current_month).map(|c| c.date);
    if let (Some(first), Some(last)) = (first, last) {
        let events = agenda_core::day_index::events_between(&data.events, first, last);
        if !events.is_empty() {
            println!();
            for event in &events {
                println!(
                    "{} {}",
                    format!("{:>2}", event.date.day()).dimmed(),
                    event.render()
                );
            }
        }
    }

    Ok(())
}

/// Accept YYYY-MM or a full YYYY-MM-DD.
fn parse_month_arg(s: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid month '{}'. Expected YYYY-MM or YYYY-MM-DD", s))
}
