//! Contacts and emergency numbers.

use serde::{Deserialize, Serialize};

/// Relation label the app treats as the doctor on the emergency screen.
pub const DOCTOR_RELATION: &str = "Médecin";

/// A one-tap-dial contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    /// Relation to the user ("Fils", "Fille", "Médecin", ...).
    pub relation: String,
    /// Display form, e.g. "06.12.34.56.78".
    pub phone: String,
    pub emoji: String,
    /// Shown with emergency styling.
    pub urgent: bool,
}

impl Contact {
    pub fn new(name: &str, relation: &str, phone: &str, emoji: &str) -> Self {
        Contact {
            id: 0,
            name: name.to_string(),
            relation: relation.to_string(),
            phone: phone.to_string(),
            emoji: emoji.to_string(),
            urgent: false,
        }
    }

    pub fn urgent(mut self) -> Self {
        self.urgent = true;
        self
    }

    /// Dialable number: the display form with dot/space separators stripped.
    pub fn dial_string(&self) -> String {
        self.phone
            .chars()
            .filter(|c| *c != '.' && !c.is_whitespace())
            .collect()
    }
}

/// Insertion-ordered contact collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    next_id: u64,
}

impl ContactBook {
    pub fn new() -> Self {
        ContactBook {
            contacts: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add(&mut self, mut contact: Contact) -> &Contact {
        if contact.id == 0 {
            contact.id = self.next_id.max(1);
        }
        self.next_id = self.next_id.max(contact.id + 1);

        let index = self.contacts.len();
        self.contacts.push(contact);
        &self.contacts[index]
    }

    /// No-op if absent.
    pub fn remove(&mut self, id: u64) {
        if let Some(index) = self.contacts.iter().position(|c| c.id == id) {
            self.contacts.remove(index);
        }
    }

    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: u64) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn urgent(&self) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.urgent).collect()
    }

    /// Family members (plus the doctor) offered on the emergency screen:
    /// non-urgent contacts, or any contact whose relation is the doctor,
    /// first `limit` in insertion order.
    pub fn emergency_family(&self, limit: usize) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| !c.urgent || c.relation == DOCTOR_RELATION)
            .take(limit)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// A national emergency service with its short dial code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmergencyNumber {
    pub glyph: &'static str,
    pub label: &'static str,
    pub number: &'static str,
}

/// French emergency services, in the order the emergency screen lists them.
pub const EMERGENCY_NUMBERS: [EmergencyNumber; 3] = [
    EmergencyNumber {
        glyph: "🚑",
        label: "SAMU - Urgence Médicale",
        number: "15",
    },
    EmergencyNumber {
        glyph: "🚒",
        label: "Pompiers - Accident/Incendie",
        number: "18",
    },
    EmergencyNumber {
        glyph: "👮",
        label: "Police - Sécurité",
        number: "17",
    },
];
