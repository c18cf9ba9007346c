//! Writer für den JSON-Zustand.

use super::document::{CourseDocument, PersistedState};
use crate::app::EditingState;
use anyhow::{Context, Result};

/// Serialisiert den vollständigen Zustand inklusive History.
pub fn serialize(state: &EditingState) -> Result<String> {
    let document = PersistedState::from_state(state);
    serde_json::to_string(&document).context("Zustand konnte nicht serialisiert werden")
}

/// Exportiert nur die Löcher als lesbares Kurs-Dokument.
pub fn export_course(state: &EditingState) -> Result<String> {
    let document = CourseDocument {
        holes: state.holes.to_vec(),
    };
    serde_json::to_string_pretty(&document).context("Kurs konnte nicht exportiert werden")
}
