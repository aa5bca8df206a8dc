//! Day index: which events fall on a given calendar day.
//!
//! Pure queries over an [`EventStore`]. Day-bucketing compares calendar days
//! only; the "HH:MM" time string orders events within a day (lexicographic
//! comparison is correct because the format is fixed-width and zero-padded).

use chrono::{Local, NaiveDate};

use crate::event::Event;
use crate::medicine::{Medicine, MedicineLog};
use crate::store::EventStore;

/// Events on `date`, ordered by time ascending.
///
/// The sort is stable, so events sharing a time keep their insertion order.
/// An empty result is normal, never an error.
pub fn events_on(store: &EventStore, date: NaiveDate) -> Vec<Event> {
    let mut matches: Vec<Event> = store
        .all()
        .iter()
        .filter(|e| e.date == date)
        .cloned()
        .collect();

    matches.sort_by(|a, b| a.time.cmp(&b.time));
    matches
}

/// Events in `[from, to]` inclusive, ordered by day then time.
pub fn events_between(store: &EventStore, from: NaiveDate, to: NaiveDate) -> Vec<Event> {
    let mut matches: Vec<Event> = store
        .all()
        .iter()
        .filter(|e| e.date >= from && e.date <= to)
        .cloned()
        .collect();

    matches.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    matches
}

/// True iff `date` is the system clock's local calendar day at call time.
pub fn is_today(date: NaiveDate) -> bool {
    date == Local::now().date_naive()
}

/// Everything the home screen shows for one day.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Day's events in day-index order.
    pub events: Vec<Event>,
    /// Full medicine schedule, sorted by time.
    pub medicines: Vec<Medicine>,
}

pub fn day_summary(store: &EventStore, medicines: &MedicineLog, date: NaiveDate) -> DaySummary {
    DaySummary {
        date,
        events: events_on(store, date),
        medicines: medicines.schedule(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(title: &str, on: NaiveDate, time: &str) -> Event {
        Event::new(title, on, time, EventCategory::Other)
    }

    // --- events_on ---

    #[test]
    fn filters_by_day_and_sorts_by_time() {
        let d = date(2024, 3, 1);
        let mut store = EventStore::new();
        store.add(event("A", d, "08:00"));
        store.add(event("B", d, "14:30"));
        store.add(event("C", d + chrono::Duration::days(1), "09:00"));

        let titles: Vec<_> = events_on(&store, d).iter().map(|e| e.title.clone()).collect();
        assert_eq!(titles, ["A", "B"]);

        let next: Vec<_> = events_on(&store, d + chrono::Duration::days(1))
            .iter()
            .map(|e| e.title.clone())
            .collect();
        assert_eq!(next, ["C"]);
    }

    #[test]
    fn later_insertion_still_sorts_earlier_times_first() {
        let d = date(2024, 3, 1);
        let mut store = EventStore::new();
        store.add(event("afternoon", d, "14:30"));
        store.add(event("morning", d, "08:00"));

        let titles: Vec<_> = events_on(&store, d).iter().map(|e| e.title.clone()).collect();
        assert_eq!(titles, ["morning", "afternoon"]);
    }

    #[test]
    fn equal_times_keep_insertion_order() {
        let d = date(2024, 3, 1);
        let mut store = EventStore::new();
        store.add(event("first", d, "10:00"));
        store.add(event("second", d, "10:00"));

        let titles: Vec<_> = events_on(&store, d).iter().map(|e| e.title.clone()).collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[test]
    fn query_is_idempotent() {
        let d = date(2024, 3, 1);
        let mut store = EventStore::new();
        store.add(event("B", d, "14:30"));
        store.add(event("A", d, "08:00"));

        assert_eq!(events_on(&store, d), events_on(&store, d));
    }

    #[test]
    fn empty_store_yields_an_empty_sequence() {
        let store = EventStore::new();
        assert!(events_on(&store, date(2024, 3, 1)).is_empty());
    }

    #[test]
    fn never_returns_another_day() {
        let d = date(2024, 3, 1);
        let mut store = EventStore::new();
        store.add(event("here", d, "08:00"));
        store.add(event("elsewhere", date(2024, 3, 2), "08:00"));

        assert!(events_on(&store, d).iter().all(|e| e.date == d));
    }

    #[test]
    fn removal_is_reflected_in_the_index() {
        let d = date(2024, 3, 1);
        let mut store = EventStore::new();
        let a = store.add(event("A", d, "08:00")).id;
        store.add(event("B", d, "14:30"));

        store.remove(a);
        let titles: Vec<_> = events_on(&store, d).iter().map(|e| e.title.clone()).collect();
        assert_eq!(titles, ["B"]);
    }

    // --- events_between ---

    #[test]
    fn range_query_orders_by_day_then_time() {
        let mut store = EventStore::new();
        store.add(event("late day2", date(2024, 3, 2), "18:00"));
        store.add(event("day1", date(2024, 3, 1), "09:00"));
        store.add(event("early day2", date(2024, 3, 2), "07:00"));
        store.add(event("outside", date(2024, 3, 9), "07:00"));

        let titles: Vec<_> = events_between(&store, date(2024, 3, 1), date(2024, 3, 3))
            .iter()
            .map(|e| e.title.clone())
            .collect();
        assert_eq!(titles, ["day1", "early day2", "late day2"]);
    }

    // --- is_today ---

    #[test]
    fn today_matches_the_local_clock() {
        let today = Local::now().date_naive();
        assert!(is_today(today));
        assert!(!is_today(today + chrono::Duration::days(1)));
    }
}
