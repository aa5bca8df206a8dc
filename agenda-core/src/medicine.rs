//! Medicine schedule.
//!
//! Each medicine is taken at a fixed "HH:MM" time every day and carries a
//! boolean `taken` flag that resets each morning. The flag is the only
//! mutable field.

use serde::{Deserialize, Serialize};

/// One scheduled medicine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub id: u64,
    pub name: String,
    /// Zero-padded "HH:MM".
    pub time: String,
    pub taken: bool,
    /// Pill color, as the user describes it ("jaune", "blanche", ...).
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Medicine {
    pub fn new(name: &str, time: &str, color: &str) -> Self {
        Medicine {
            id: 0,
            name: name.to_string(),
            time: time.to_string(),
            taken: false,
            color: color.to_string(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

/// Insertion-ordered medicine collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicineLog {
    medicines: Vec<Medicine>,
    next_id: u64,
}

impl MedicineLog {
    pub fn new() -> Self {
        MedicineLog {
            medicines: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add(&mut self, mut medicine: Medicine) -> &Medicine {
        if medicine.id == 0 {
            medicine.id = self.next_id.max(1);
        }
        self.next_id = self.next_id.max(medicine.id + 1);

        let index = self.medicines.len();
        self.medicines.push(medicine);
        &self.medicines[index]
    }

    /// No-op if absent.
    pub fn remove(&mut self, id: u64) {
        if let Some(index) = self.medicines.iter().position(|m| m.id == id) {
            self.medicines.remove(index);
        }
    }

    pub fn all(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn get(&self, id: u64) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    /// Flip the taken flag. No-op (not an error) if the id is unknown.
    pub fn toggle_taken(&mut self, id: u64) {
        if let Some(medicine) = self.medicines.iter_mut().find(|m| m.id == id) {
            medicine.taken = !medicine.taken;
            log::debug!(
                "Medicine '{}' marked {}",
                medicine.name,
                if medicine.taken { "taken" } else { "pending" }
            );
        }
    }

    /// All medicines sorted by time of day (stable, like the day index).
    pub fn schedule(&self) -> Vec<Medicine> {
        let mut sorted = self.medicines.clone();
        sorted.sort_by(|a, b| a.time.cmp(&b.time));
        sorted
    }

    /// Medicines not yet taken, sorted by time.
    pub fn pending(&self) -> Vec<Medicine> {
        self.schedule().into_iter().filter(|m| !m.taken).collect()
    }

    /// Clear all taken flags for a new day.
    pub fn reset_day(&mut self) {
        for medicine in &mut self.medicines {
            medicine.taken = false;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MedicineLog {
        let mut log = MedicineLog::new();
        log.add(Medicine::new("Tension", "14:30", "blanche"));
        log.add(Medicine::new("Vitamine D", "08:00", "jaune"));
        log.add(Medicine::new("Calcium", "20:00", "blanche"));
        log
    }

    // --- toggle ---

    #[test]
    fn toggle_flips_only_the_target() {
        let mut log = seeded();
        let id = log.all()[0].id;

        log.toggle_taken(id);
        assert!(log.get(id).unwrap().taken);
        assert!(log.all().iter().filter(|m| m.id != id).all(|m| !m.taken));

        log.toggle_taken(id);
        assert!(!log.get(id).unwrap().taken);
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut log = seeded();
        log.toggle_taken(999);
        assert!(log.all().iter().all(|m| !m.taken));
    }

    // --- schedule ---

    #[test]
    fn schedule_sorts_by_time_of_day() {
        let log = seeded();
        let names: Vec<_> = log.schedule().iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, ["Vitamine D", "Tension", "Calcium"]);
    }

    #[test]
    fn pending_excludes_taken_medicines() {
        let mut log = seeded();
        let morning = log.schedule()[0].id;
        log.toggle_taken(morning);

        let names: Vec<_> = log.pending().iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, ["Tension", "Calcium"]);
    }

    #[test]
    fn reset_day_clears_every_flag() {
        let mut log = seeded();
        for id in log.all().iter().map(|m| m.id).collect::<Vec<_>>() {
            log.toggle_taken(id);
        }
        log.reset_day();
        assert!(log.all().iter().all(|m| !m.taken));
    }
}
