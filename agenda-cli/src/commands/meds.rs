use agenda_core::config::GlobalConfig;
use agenda_core::medicine::Medicine;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;

use super::{load_data, normalize_time, save_data};

pub fn list(config: &GlobalConfig) -> Result<()> {
    let data = load_data(config)?;

    if data.medicines.is_empty() {
        println!("{}", "Aucun médicament enregistré".dimmed());
        return Ok(());
    }

    println!("{}", "💊 Mes Médicaments".bold());
    for medicine in data.medicines.schedule() {
        println!("  {} {}", medicine.render(), format!("#{}", medicine.id).dimmed());
    }

    let pending = data.medicines.pending().len();
    println!();
    if pending == 0 {
        println!("{}", "Tout est pris pour aujourd'hui ✅".green());
    } else {
        println!("{}", format!("{pending} à prendre").bold());
    }

    Ok(())
}

pub fn take(config: &GlobalConfig, id: u64) -> Result<()> {
    let mut data = load_data(config)?;

    let Some(medicine) = data.medicines.get(id) else {
        println!("{}", format!("  Aucun médicament #{id}").dimmed());
        return Ok(());
    };
    let name = medicine.name.clone();

    data.medicines.toggle_taken(id);
    let taken = data.medicines.get(id).is_some_and(|m| m.taken);
    save_data(config, &data)?;

    if taken {
        println!("{}", format!("  ✅ {name} pris").green());
    } else {
        println!("  💊 {name} à prendre");
    }

    Ok(())
}

pub fn add(
    config: &GlobalConfig,
    name: &str,
    time: &str,
    color: &str,
    notes: Option<&str>,
) -> Result<()> {
    let time = normalize_time(time)?;
    let mut data = load_data(config)?;

    let mut medicine = Medicine::new(name, &time, color);
    if let Some(notes) = notes {
        medicine = medicine.with_notes(notes);
    }

    let stored = data.medicines.add(medicine).clone();
    save_data(config, &data)?;

    println!(
        "{}",
        format!("  Ajouté : {} à {}", stored.name, stored.time).green()
    );
    Ok(())
}

pub fn reset(config: &GlobalConfig) -> Result<()> {
    let mut data = load_data(config)?;
    data.medicines.reset_day();
    save_data(config, &data)?;

    println!("{}", "  Nouvelle journée : tout est à prendre".green());
    Ok(())
}
