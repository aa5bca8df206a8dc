use agenda_core::config::GlobalConfig;
use anyhow::Result;
use owo_colors::OwoColorize;

use super::{load_data, save_data};

pub fn run(config: &GlobalConfig, id: u64) -> Result<()> {
    let mut data = load_data(config)?;

    match data.events.get(id) {
        Some(event) => {
            let title = event.title.clone();
            data.events.remove(id);
            save_data(config, &data)?;
            println!("{}", format!("  Supprimé : {title}").green());
        }
        None => {
            println!("{}", format!("  Aucun rendez-vous #{id}").dimmed());
        }
    }

    Ok(())
}
