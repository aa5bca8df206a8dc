use agenda_core::config::GlobalConfig;
use agenda_core::contact::EMERGENCY_NUMBERS;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;

use super::load_data;

/// How many family contacts the emergency screen offers.
const FAMILY_LIMIT: usize = 3;

pub fn run(config: &GlobalConfig) -> Result<()> {
    println!("{}", "🚨 URGENCE".red().bold());
    println!();

    for number in EMERGENCY_NUMBERS {
        println!("  {}", number.render());
    }

    let data = load_data(config)?;
    let family = data.contacts.emergency_family(FAMILY_LIMIT);

    if !family.is_empty() {
        println!();
        println!("{}", "📞 Appeler la Famille".bold());
        for contact in family {
            println!(
                "  {} {} {}",
                contact.emoji,
                contact.name.bold(),
                contact.dial_string().green()
            );
        }
    }

    Ok(())
}
