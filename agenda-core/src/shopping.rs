//! Shopping checklist.

use serde::{Deserialize, Serialize};

/// Category given to items added from the suggestion table.
pub const SUGGESTED_CATEGORY: &str = "Suggéré";

/// Staples offered as one-tap additions.
pub const SUGGESTED_ITEMS: [&str; 6] = ["Œufs", "Beurre", "Yaourts", "Bananes", "Poulet", "Pâtes"];

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: u64,
    pub label: String,
    pub checked: bool,
    /// Store section ("Boulangerie", "Frais", ...).
    pub category: String,
}

impl ShoppingItem {
    pub fn new(label: &str, category: &str) -> Self {
        ShoppingItem {
            id: 0,
            label: label.to_string(),
            checked: false,
            category: category.to_string(),
        }
    }
}

/// Insertion-ordered checklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    next_id: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        ShoppingList {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add(&mut self, mut item: ShoppingItem) -> &ShoppingItem {
        if item.id == 0 {
            item.id = self.next_id.max(1);
        }
        self.next_id = self.next_id.max(item.id + 1);

        let index = self.items.len();
        self.items.push(item);
        &self.items[index]
    }

    /// Add one of the suggested staples.
    pub fn add_suggestion(&mut self, label: &str) -> &ShoppingItem {
        self.add(ShoppingItem::new(label, SUGGESTED_CATEGORY))
    }

    /// No-op if absent.
    pub fn remove(&mut self, id: u64) {
        if let Some(index) = self.items.iter().position(|i| i.id == id) {
            self.items.remove(index);
        }
    }

    pub fn all(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Flip the checkmark. No-op if the id is unknown.
    pub fn toggle(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.checked = !item.checked;
        }
    }

    /// Items still to buy.
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|i| !i.checked).count()
    }

    /// Drop everything already checked off.
    pub fn clear_checked(&mut self) {
        self.items.retain(|i| !i.checked);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
