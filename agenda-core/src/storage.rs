//! Persistence for the app's working data.
//!
//! Everything lives in a single JSON document under the data directory.
//! Writes go through a temp file and rename so a crash never leaves a
//! half-written file behind. A missing file loads as the seeded defaults.

use std::path::{Path, PathBuf};

use chrono::{Duration, Local};
use serde::{Deserialize, Serialize};

use crate::contact::{Contact, ContactBook, DOCTOR_RELATION};
use crate::error::{AgendaError, AgendaResult};
use crate::event::{Event, EventCategory};
use crate::medicine::{Medicine, MedicineLog};
use crate::shopping::{ShoppingItem, ShoppingList};
use crate::store::EventStore;

const DATA_FILE: &str = "agenda.json";

/// The whole working set: events, medicines, contacts, shopping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppData {
    pub events: EventStore,
    pub medicines: MedicineLog,
    pub contacts: ContactBook,
    pub shopping: ShoppingList,
}

impl AppData {
    /// The stock data a fresh install starts with.
    pub fn seeded() -> Self {
        let today = Local::now().date_naive();
        let tomorrow = today + Duration::days(1);

        let mut events = EventStore::new();
        events.add(Event::new("Dr. Martin", today, "14:30", EventCategory::Medical).important());
        events.add(Event::new("Appel Marie", tomorrow, "16:00", EventCategory::Family));

        let mut medicines = MedicineLog::new();
        medicines.add(Medicine::new("Vitamine D", "08:00", "jaune").with_notes("Au petit-déjeuner"));
        medicines.add(Medicine::new("Tension", "14:30", "blanche").with_notes("Après le repas"));

        let mut contacts = ContactBook::new();
        contacts.add(Contact::new("Pierre", "Fils", "06.12.34.56.78", "👨"));
        contacts.add(Contact::new("Marie", "Fille", "06.87.65.43.21", "👩"));
        contacts.add(Contact::new("Dr. Martin", DOCTOR_RELATION, "01.23.45.67.89", "👨‍⚕️").urgent());

        let mut shopping = ShoppingList::new();
        shopping.add(ShoppingItem::new("Pain", "Boulangerie"));
        shopping.add(ShoppingItem::new("Lait", "Frais"));

        AppData {
            events,
            medicines,
            contacts,
            shopping,
        }
    }

    fn file_path(data_dir: &Path) -> PathBuf {
        data_dir.join(DATA_FILE)
    }

    /// Load from `data_dir`, seeding defaults when no file exists yet.
    pub fn load(data_dir: &Path) -> AgendaResult<Self> {
        let path = Self::file_path(data_dir);

        if !path.exists() {
            log::debug!("No data file at {}, starting seeded", path.display());
            return Ok(Self::seeded());
        }

        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| AgendaError::Serialization(e.to_string()))
    }

    /// Save to `data_dir` atomically (temp file + rename).
    pub fn save(&self, data_dir: &Path) -> AgendaResult<()> {
        std::fs::create_dir_all(data_dir)?;

        let path = Self::file_path(data_dir);
        let temp = data_dir.join(format!("{DATA_FILE}.tmp"));

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| AgendaError::Serialization(e.to_string()))?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;

        log::debug!("Saved data file to {}", path.display());
        Ok(())
    }
}
