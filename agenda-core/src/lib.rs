//! Core types and day-planning logic for the agenda companion app.
//!
//! This crate is the view-model behind the `agenda` CLI: events with a
//! 6×7 month grid and a time-ordered day index, plus the medicine schedule,
//! contact book, shopping checklist and simulated weather. It owns no UI;
//! a host layer calls these functions and renders the results.

pub mod config;
pub mod contact;
pub mod day_index;
pub mod error;
pub mod event;
pub mod grid;
pub mod medicine;
pub mod shopping;
pub mod storage;
pub mod store;
pub mod weather;

pub use error::{AgendaError, AgendaResult};
pub use event::{Event, EventCategory};
pub use store::EventStore;
