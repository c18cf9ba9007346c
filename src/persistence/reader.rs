//! Reader für den JSON-Zustand und importierte Kurs-Dateien.

use super::document::{PersistedSnapshot, PersistedState};
use super::error::ImportError;
use crate::app::{DrawingMode, EditHistory, EditingState, Snapshot};
use crate::core::{CourseHole, ElementKind};
use crate::shared::EditorOptions;
use std::collections::HashSet;
use std::sync::Arc;

/// Liest einen gespeicherten Zustand. Schlägt nie fehl.
///
/// Distanzen werden neu berechnet, ein verwaistes `currentHole` auf das
/// niedrigste Loch gesetzt und die History auf die konfigurierte Tiefe
/// gekürzt. Unlesbare oder ungültige Daten ergeben den Standard-Startzustand.
pub fn deserialize(json: &str, options: &EditorOptions) -> EditingState {
    match restore_state(json, options) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("Gespeicherter Zustand verworfen, starte neu: {e}");
            EditingState::new(options)
        }
    }
}

/// Importiert eine vom Nutzer gewählte Kurs-Datei.
///
/// Akzeptiert einen vollständigen gespeicherten Zustand oder ein reines
/// `{ "holes": [...] }`-Dokument. Übernommen werden nur die Löcher und das
/// aktuelle Loch; History und Zeichen-Zustand beginnen leer.
pub fn import_course(json: &str, options: &EditorOptions) -> Result<EditingState, ImportError> {
    let document: PersistedState = serde_json::from_str(json)?;
    validate_holes(&document.holes)?;

    let mut state = EditingState::from_holes(
        document.holes,
        EditHistory::new_with_capacity(options.history_max_depth),
    )
    .ok_or(ImportError::NoHoles)?;
    if state.hole(document.current_hole).is_some() {
        state.current_hole = document.current_hole;
    }
    Ok(state)
}

fn restore_state(json: &str, options: &EditorOptions) -> Result<EditingState, ImportError> {
    let document: PersistedState = serde_json::from_str(json)?;
    validate_holes(&document.holes)?;

    let history = restore_history(document.past, document.future, options);
    let mut state =
        EditingState::from_holes(document.holes, history).ok_or(ImportError::NoHoles)?;
    let mut snapshot = Snapshot {
        holes: Arc::clone(&state.holes),
        current_hole: document.current_hole,
        drawing_mode: document.drawing_mode,
        selected_element: document.selected_element,
        is_drawing: document.is_drawing,
        temp_path: document.temp_path,
    };
    repair_snapshot(&mut snapshot);
    snapshot.apply_to(&mut state);
    Ok(state)
}

/// Stellt die History wieder her. Ein ungültiger Eintrag verwirft die
/// gesamte History, der aktuelle Zustand bleibt davon unberührt.
fn restore_history(
    past: Vec<PersistedSnapshot>,
    future: Vec<PersistedSnapshot>,
    options: &EditorOptions,
) -> EditHistory {
    let restore = |entries: Vec<PersistedSnapshot>| -> Result<Vec<Snapshot>, ImportError> {
        entries
            .into_iter()
            .map(|entry| {
                validate_holes(&entry.holes)?;
                let mut snapshot = entry.into_snapshot();
                let holes = Arc::make_mut(&mut snapshot.holes);
                holes.sort_by_key(|h| h.number);
                for hole in holes.iter_mut() {
                    hole.recompute_distance();
                }
                repair_snapshot(&mut snapshot);
                Ok(snapshot)
            })
            .collect()
    };

    match (restore(past), restore(future)) {
        (Ok(past), Ok(future)) => {
            EditHistory::from_stacks(past, future, options.history_max_depth)
        }
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("Gespeicherte History verworfen: {e}");
            EditHistory::new_with_capacity(options.history_max_depth)
        }
    }
}

/// Repariert Verweise, die nach dem Laden ins Leere zeigen.
fn repair_snapshot(snapshot: &mut Snapshot) {
    if !snapshot.holes.iter().any(|h| h.number == snapshot.current_hole) {
        if let Some(lowest) = snapshot.holes.iter().map(|h| h.number).min() {
            log::debug!(
                "currentHole {} existiert nicht, nutze Loch {lowest}",
                snapshot.current_hole
            );
            snapshot.current_hole = lowest;
        }
    }
    if let Some(id) = &snapshot.selected_element {
        let exists = snapshot
            .holes
            .iter()
            .any(|h| h.elements.iter().any(|e| &e.id == id));
        if !exists {
            snapshot.selected_element = None;
        }
    }
    let accumulates = snapshot
        .drawing_mode
        .is_some_and(DrawingMode::accumulates_path);
    if !accumulates {
        snapshot.is_drawing = false;
        snapshot.temp_path.clear();
    }
    if snapshot.drawing_mode.is_some() {
        snapshot.selected_element = None;
    }
    snapshot.temp_path.retain(|p| p.is_valid());
}

/// Prüft die strukturellen Invarianten einer Lochliste.
pub fn validate_holes(holes: &[CourseHole]) -> Result<(), ImportError> {
    if holes.is_empty() {
        return Err(ImportError::NoHoles);
    }

    let mut numbers = HashSet::new();
    let mut element_ids = HashSet::new();
    for hole in holes {
        if hole.number == 0 {
            return Err(ImportError::InvalidHoleNumber(hole.number));
        }
        if !numbers.insert(hole.number) {
            return Err(ImportError::DuplicateHole(hole.number));
        }
        if !CourseHole::is_valid_par(hole.par) {
            return Err(ImportError::InvalidPar {
                hole: hole.number,
                par: hole.par,
            });
        }
        for element in &hole.elements {
            if element.id.is_empty() {
                return Err(ImportError::EmptyElementId { hole: hole.number });
            }
            if element.hole_number != hole.number {
                return Err(ImportError::ElementHoleMismatch {
                    id: element.id.clone(),
                    claimed: element.hole_number,
                    hole: hole.number,
                });
            }
            if !element_ids.insert(&element.id) {
                return Err(ImportError::DuplicateElement(element.id.clone()));
            }
            if !element.kind.is_valid() {
                return Err(match element.kind {
                    ElementKind::ObZone { .. } | ElementKind::Hazard { .. } => {
                        ImportError::DegeneratePath {
                        id: element.id.clone(),
                    }
                    }
                    _ => ImportError::InvalidPosition {
                        id: element.id.clone(),
                    },
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
