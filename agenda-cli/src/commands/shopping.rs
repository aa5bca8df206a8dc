use agenda_core::config::GlobalConfig;
use agenda_core::shopping::{SUGGESTED_ITEMS, ShoppingItem};
use anyhow::Result;
use owo_colors::OwoColorize;

use super::{load_data, save_data};

pub fn list(config: &GlobalConfig) -> Result<()> {
    let data = load_data(config)?;

    if data.shopping.is_empty() {
        println!("{}", "La liste de courses est vide".dimmed());
        return Ok(());
    }

    println!("{}", "🛒 Ma Liste".bold());
    for item in data.shopping.all() {
        let mark = if item.checked { "✓".green().to_string() } else { " ".to_string() };
        let label = if item.checked {
            item.label.strikethrough().dimmed().to_string()
        } else {
            item.label.clone()
        };
        println!(
            "  [{}] {} {} {}",
            mark,
            label,
            format!("({})", item.category).dimmed(),
            format!("#{}", item.id).dimmed()
        );
    }

    println!();
    println!("{}", format!("{} à acheter", data.shopping.remaining()).bold());
    Ok(())
}

pub fn add(config: &GlobalConfig, label: &str, category: &str) -> Result<()> {
    let mut data = load_data(config)?;
    let stored = data.shopping.add(ShoppingItem::new(label, category)).clone();
    save_data(config, &data)?;

    println!("{}", format!("  Ajouté : {}", stored.label).green());
    Ok(())
}

pub fn check(config: &GlobalConfig, id: u64) -> Result<()> {
    let mut data = load_data(config)?;

    let Some(item) = data.shopping.get(id) else {
        println!("{}", format!("  Aucun article #{id}").dimmed());
        return Ok(());
    };
    let label = item.label.clone();

    data.shopping.toggle(id);
    let checked = data.shopping.get(id).is_some_and(|i| i.checked);
    save_data(config, &data)?;

    if checked {
        println!("{}", format!("  ✓ {label}").green());
    } else {
        println!("  {label} à nouveau sur la liste");
    }

    Ok(())
}

pub fn clear(config: &GlobalConfig) -> Result<()> {
    let mut data = load_data(config)?;
    let before = data.shopping.all().len();
    data.shopping.clear_checked();
    let dropped = before - data.shopping.all().len();
    save_data(config, &data)?;

    println!("{}", format!("  {dropped} article(s) retiré(s)").green());
    Ok(())
}

pub fn suggest(config: &GlobalConfig, label: Option<&str>) -> Result<()> {
    match label {
        None => {
            println!("{}", "💡 Suggestions".bold());
            for suggestion in SUGGESTED_ITEMS {
                println!("  ➕ {suggestion}");
            }
            println!();
            println!("{}", "agenda shopping suggest <article> pour en ajouter un".dimmed());
            Ok(())
        }
        Some(label) => {
            let Some(known) = find_suggestion(label) else {
                anyhow::bail!(
                    "'{}' n'est pas dans les suggestions ({})",
                    label,
                    SUGGESTED_ITEMS.join(", ")
                );
            };

            let mut data = load_data(config)?;
            let stored = data.shopping.add_suggestion(known).clone();
            save_data(config, &data)?;

            println!("{}", format!("  Ajouté : {}", stored.label).green());
            Ok(())
        }
    }
}

/// Case-insensitive lookup in the suggestion table. Full Unicode folding,
/// since the staples include "Œufs" and "Pâtes".
fn find_suggestion(label: &str) -> Option<&'static str> {
    let wanted = label.to_lowercase();
    SUGGESTED_ITEMS
        .iter()
        .find(|s| s.to_lowercase() == wanted)
        .copied()
}
