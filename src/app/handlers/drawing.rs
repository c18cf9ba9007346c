//! Handler für die Zeichen-State-Machine.
//!
//! Moduswechsel und Punktsammlung sind keine History-Ereignisse; erst das
//! Übernehmen eines fertigen Pfads schreibt einen Snapshot.

use crate::app::{DrawingMode, EditingState};
use crate::core::{CourseElement, Position};

use super::elements;

/// Wechselt das Werkzeug. Laufendes Zeichnen und Selektion werden verworfen.
pub fn set_drawing_mode(state: &mut EditingState, mode: Option<DrawingMode>) -> bool {
    state.reset_drawing();
    state.selected_element = None;
    state.drawing_mode = mode;
    log::debug!("Zeichenmodus: {mode:?}");
    true
}

/// Beginnt einen Pfad mit dem ersten Punkt.
pub fn start_drawing(state: &mut EditingState, position: Position) -> bool {
    let Some(mode) = state.drawing_mode.filter(|m| m.accumulates_path()) else {
        log::debug!("StartDrawing ignoriert: kein Pfad-Werkzeug aktiv");
        return false;
    };
    if !position.is_valid() {
        log::warn!("StartDrawing ignoriert: ungültige Position {position:?}");
        return false;
    }

    state.is_drawing = true;
    state.temp_path.clear();
    state.temp_path.push(position);
    log::debug!("Zeichnen gestartet ({mode:?})");
    true
}

/// Hängt einen Punkt an den laufenden Pfad an.
pub fn continue_drawing(state: &mut EditingState, position: Position) -> bool {
    if !state.is_drawing {
        log::debug!("ContinueDrawing ignoriert: kein Pfad aktiv");
        return false;
    }
    if !position.is_valid() {
        log::warn!("ContinueDrawing ignoriert: ungültige Position {position:?}");
        return false;
    }

    state.temp_path.push(position);
    true
}

/// Schließt den laufenden Pfad ab.
///
/// Polygon-Werkzeuge erzeugen ab drei Punkten ein Element, sonst wird der
/// Pfad verworfen. Das Messwerkzeug behält den Pfad und stoppt nur das Sammeln.
pub fn finish_drawing(state: &mut EditingState) -> bool {
    let Some(mode) = state.drawing_mode.filter(|_| state.is_drawing) else {
        log::debug!("FinishDrawing ignoriert: kein Pfad aktiv");
        return false;
    };

    let Some(element_type) = mode.element_type() else {
        state.is_drawing = false;
        log::info!(
            "Messung abgeschlossen: {:.1} m",
            state.measure_distance_m().unwrap_or(0.0)
        );
        return true;
    };

    let path = state.temp_path.clone();
    match CourseElement::new_path(state.current_hole, element_type, path) {
        Some(element) => elements::add_element(state, element),
        None => {
            log::info!(
                "Pfad mit {} Punkten zu kurz für {}, verworfen",
                state.temp_path.len(),
                element_type.label()
            );
            cancel_drawing(state)
        }
    }
}

/// Verwirft den laufenden Pfad und kehrt in den Selektionsmodus zurück.
pub fn cancel_drawing(state: &mut EditingState) -> bool {
    if state.drawing_mode.is_none() && !state.is_drawing && state.temp_path.is_empty() {
        log::debug!("CancelDrawing: nichts zu tun");
        return false;
    }

    state.reset_drawing();
    log::debug!("Zeichnen abgebrochen");
    true
}
