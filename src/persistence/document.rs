//! Serialisierbare Abbilder von Zustand und Snapshots.
//!
//! Der Laufzeit-Zustand teilt Löcher per `Arc`; auf der Platte liegen
//! eigenständige Kopien mit camelCase-Schlüsseln.

use crate::app::{DrawingMode, EditingState, Snapshot};
use crate::core::{CourseHole, ElementId, Position};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Ein History-Eintrag auf der Platte.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    pub holes: Vec<CourseHole>,
    #[serde(default)]
    pub current_hole: u32,
    #[serde(default)]
    pub drawing_mode: Option<DrawingMode>,
    #[serde(default)]
    pub selected_element: Option<ElementId>,
    #[serde(default)]
    pub is_drawing: bool,
    #[serde(default)]
    pub temp_path: Vec<Position>,
}

impl PersistedSnapshot {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            holes: snapshot.holes.to_vec(),
            current_hole: snapshot.current_hole,
            drawing_mode: snapshot.drawing_mode,
            selected_element: snapshot.selected_element.clone(),
            is_drawing: snapshot.is_drawing,
            temp_path: snapshot.temp_path.clone(),
        }
    }

    pub fn into_snapshot(self) -> Snapshot {
        Snapshot {
            holes: Arc::new(self.holes),
            current_hole: self.current_hole,
            drawing_mode: self.drawing_mode,
            selected_element: self.selected_element,
            is_drawing: self.is_drawing,
            temp_path: self.temp_path,
        }
    }
}

/// Vollständiger Editor-Zustand inklusive History.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub holes: Vec<CourseHole>,
    #[serde(default)]
    pub current_hole: u32,
    #[serde(default)]
    pub drawing_mode: Option<DrawingMode>,
    #[serde(default)]
    pub selected_element: Option<ElementId>,
    #[serde(default)]
    pub is_drawing: bool,
    #[serde(default)]
    pub temp_path: Vec<Position>,
    #[serde(default)]
    pub past: Vec<PersistedSnapshot>,
    #[serde(default)]
    pub future: Vec<PersistedSnapshot>,
}

impl PersistedState {
    pub fn from_state(state: &EditingState) -> Self {
        Self {
            holes: state.holes.to_vec(),
            current_hole: state.current_hole,
            drawing_mode: state.drawing_mode,
            selected_element: state.selected_element.clone(),
            is_drawing: state.is_drawing,
            temp_path: state.temp_path.clone(),
            past: state
                .history
                .past()
                .iter()
                .map(PersistedSnapshot::from_snapshot)
                .collect(),
            future: state
                .history
                .future()
                .iter()
                .map(PersistedSnapshot::from_snapshot)
                .collect(),
        }
    }
}

/// Reines Kurs-Dokument (nur Löcher) für Export und Austausch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseDocument {
    pub holes: Vec<CourseHole>,
}
