use agenda_core::config::GlobalConfig;
use agenda_core::contact::Contact;
use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;

use super::{load_data, save_data};

pub fn list(config: &GlobalConfig) -> Result<()> {
    let data = load_data(config)?;

    if data.contacts.is_empty() {
        println!("{}", "Aucun contact enregistré".dimmed());
        return Ok(());
    }

    println!("{}", "📞 Mes Contacts".bold());
    for contact in data.contacts.all() {
        println!("  {} {}", contact.render(), format!("#{}", contact.id).dimmed());
    }

    Ok(())
}

pub fn add(
    config: &GlobalConfig,
    name: &str,
    relation: &str,
    phone: &str,
    emoji: &str,
    urgent: bool,
) -> Result<()> {
    let mut data = load_data(config)?;

    let mut contact = Contact::new(name, relation, phone, emoji);
    contact.urgent = urgent;

    let stored = data.contacts.add(contact).clone();
    save_data(config, &data)?;

    println!("{}", format!("  Ajouté : {}", stored.name).green());
    Ok(())
}

/// Print the dialable form of a contact's number, big and unmissable.
pub fn call(config: &GlobalConfig, id: u64) -> Result<()> {
    let data = load_data(config)?;

    let Some(contact) = data.contacts.get(id) else {
        println!("{}", format!("  Aucun contact #{id}").dimmed());
        return Ok(());
    };

    println!("  {} {}", contact.emoji, contact.name.bold());
    println!("  📞 {}", contact.dial_string().bold().green());
    Ok(())
}

pub fn remove(config: &GlobalConfig, id: u64) -> Result<()> {
    let mut data = load_data(config)?;

    match data.contacts.get(id) {
        Some(contact) => {
            let name = contact.name.clone();
            data.contacts.remove(id);
            save_data(config, &data)?;
            println!("{}", format!("  Supprimé : {name}").green());
        }
        None => {
            println!("{}", format!("  Aucun contact #{id}").dimmed());
        }
    }

    Ok(())
}
