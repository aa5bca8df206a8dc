pub mod config;
pub mod contacts;
pub mod emergency;
pub mod events;
pub mod meds;
pub mod month;
pub mod new;
pub mod remove;
pub mod shopping;
pub mod today;
pub mod weather;

use agenda_core::config::GlobalConfig;
use agenda_core::storage::AppData;
use anyhow::Result;
use chrono::NaiveDate;

/// Default window for the events listing.
pub const UPCOMING_DAYS: i64 = 7;

/// Load the working data from the configured data directory.
pub fn load_data(config: &GlobalConfig) -> Result<AppData> {
    Ok(AppData::load(&config.data_path())?)
}

/// Persist the working data back to the configured data directory.
pub fn save_data(config: &GlobalConfig, data: &AppData) -> Result<()> {
    Ok(data.save(&config.data_path())?)
}

/// Parse a YYYY-MM-DD argument.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

/// Validate and zero-pad an "HH:MM" input ("8:00" becomes "08:00").
///
/// Every stored time goes through here so that lexicographic order on the
/// strings matches time-of-day order.
pub fn normalize_time(input: &str) -> Result<String> {
    let parsed = chrono::NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| anyhow::anyhow!("Invalid time \"{}\". Expected HH:MM", input))?;
    Ok(parsed.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::medicine::{Medicine, MedicineLog};

    // --- normalize_time ---

    #[test]
    fn normalize_time_zero_pads() {
        assert_eq!(normalize_time("8:00").unwrap(), "08:00");
        assert_eq!(normalize_time("14:30").unwrap(), "14:30");
    }

    #[test]
    fn normalize_time_rejects_garbage() {
        assert!(normalize_time("tea time").is_err());
        assert!(normalize_time("25:00").is_err());
    }

    #[test]
    fn normalized_times_keep_the_schedule_sorted() {
        let mut log = MedicineLog::new();
        log.add(Medicine::new(
            "Tension",
            &normalize_time("14:30").unwrap(),
            "blanche",
        ));
        log.add(Medicine::new(
            "Doliprane",
            &normalize_time("8:00").unwrap(),
            "jaune",
        ));

        let names: Vec<_> = log.schedule().iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, ["Doliprane", "Tension"]);
    }
}
