//! Roster file ingestion.

pub mod roster_file;

pub use roster_file::{RosterTable, read_roster};
