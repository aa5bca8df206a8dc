//! Calendar event types.
//!
//! An event is a titled, dated, timed entry with a category and an
//! importance flag. Time-of-day is kept as a zero-padded "HH:MM" string:
//! it is only used for sort order and display, and the fixed-width format
//! makes lexicographic comparison correct.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique, stable identifier (assigned by the store on insert).
    pub id: u64,
    pub title: String,
    /// Calendar day the event falls on. Serialized as ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Zero-padded "HH:MM".
    pub time: String,
    pub category: EventCategory,
    pub important: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Event {
    /// Build an event with no id yet; the store assigns one on insert.
    pub fn new(title: &str, date: NaiveDate, time: &str, category: EventCategory) -> Self {
        Event {
            id: 0,
            title: title.to_string(),
            date,
            time: time.to_string(),
            category,
            important: false,
            notes: None,
        }
    }

    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Closed set of event categories, each with fixed display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Medical,
    Family,
    Shopping,
    Leisure,
    Medication,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Medical,
        EventCategory::Family,
        EventCategory::Shopping,
        EventCategory::Leisure,
        EventCategory::Medication,
        EventCategory::Other,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            EventCategory::Medical => "🏥",
            EventCategory::Family => "👨‍👩‍👧‍👦",
            EventCategory::Shopping => "🛒",
            EventCategory::Leisure => "🎨",
            EventCategory::Medication => "💊",
            EventCategory::Other => "📌",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Medical => "Médical",
            EventCategory::Family => "Famille",
            EventCategory::Shopping => "Courses",
            EventCategory::Leisure => "Loisirs",
            EventCategory::Medication => "Médicament",
            EventCategory::Other => "Autre",
        }
    }

    /// Parse a category name as entered on the command line.
    pub fn from_name(name: &str) -> Option<EventCategory> {
        match name.to_lowercase().as_str() {
            "medical" | "médical" => Some(EventCategory::Medical),
            "family" | "famille" => Some(EventCategory::Family),
            "shopping" | "courses" => Some(EventCategory::Shopping),
            "leisure" | "loisirs" => Some(EventCategory::Leisure),
            "medication" | "médicament" => Some(EventCategory::Medication),
            "other" | "autre" => Some(EventCategory::Other),
            _ => None,
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
