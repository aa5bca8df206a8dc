use std::path::PathBuf;

use agenda_core::config::GlobalConfig;
use anyhow::Result;
use owo_colors::OwoColorize;

pub fn run(
    config: &GlobalConfig,
    city: Option<&str>,
    name: Option<&str>,
    data_dir: Option<&str>,
) -> Result<()> {
    if city.is_none() && name.is_none() && data_dir.is_none() {
        println!("{}", "⚙️ Réglages".bold());
        println!("  Nom     : {}", config.user_name);
        println!("  Ville   : {}", config.city);
        println!("  Données : {}", config.data_dir.display());
        println!();
        println!("{}", "agenda config --city Lyon pour modifier".dimmed());
        return Ok(());
    }

    let updated = apply(config.clone(), city, name, data_dir);
    updated.save()?;

    println!("{}", "  Réglages enregistrés".green());
    Ok(())
}

/// Overwrite only the fields that were given.
fn apply(
    mut config: GlobalConfig,
    city: Option<&str>,
    name: Option<&str>,
    data_dir: Option<&str>,
) -> GlobalConfig {
    if let Some(city) = city {
        config.city = city.to_string();
    }
    if let Some(name) = name {
        config.user_name = name.to_string();
    }
    if let Some(dir) = data_dir {
        config.data_dir = PathBuf::from(dir);
    }
    config
}
