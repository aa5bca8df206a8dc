use agenda_core::config::GlobalConfig;
use agenda_core::day_index;
use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::render::{Render, format_date_fr};

use super::load_data;

pub fn run(config: &GlobalConfig) -> Result<()> {
    let data = load_data(config)?;
    let now = Local::now();
    let today = now.date_naive();

    println!(
        "🏠 Bonjour {} — {}",
        config.user_name.bold(),
        format_date_fr(today)
    );
    println!("   {}", now.format("%H:%M").to_string().bold().blue());
    println!();

    let summary = day_index::day_summary(&data.events, &data.medicines, today);

    println!("{}", "📅 Aujourd'hui".bold());
    if summary.events.is_empty() {
        println!("   {}", "Aucun rendez-vous prévu 😌".dimmed());
    } else {
        for event in &summary.events {
            println!("   {}", event.render());
        }
    }

    if !summary.medicines.is_empty() {
        println!();
        println!("{}", "💊 Médicaments".bold());
        for medicine in &summary.medicines {
            println!("   {}", medicine.render());
        }

        let pending = summary.medicines.iter().filter(|m| !m.taken).count();
        if pending == 0 {
            println!("   {}", "Tout est pris pour aujourd'hui ✅".dimmed());
        }
    }

    Ok(())
}
