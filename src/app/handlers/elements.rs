//! Handler für Element-Operationen (Einfügen, Ändern, Löschen).

use crate::app::EditingState;
use crate::core::{CourseElement, ElementId, ElementPatch};

/// Fügt ein fertiges Element in sein Loch ein und beendet das Zeichnen.
pub fn add_element(state: &mut EditingState, element: CourseElement) -> bool {
    let hole_number = element.hole_number;
    if state.hole(hole_number).is_none() {
        log::warn!(
            "Element {} verworfen: Loch {} existiert nicht",
            element.id,
            hole_number
        );
        return false;
    }
    if state.find_element(&element.id).is_some() {
        log::warn!("Element {} verworfen: ID bereits vergeben", element.id);
        return false;
    }
    if !element.kind.is_valid() {
        log::warn!(
            "Element {} verworfen: ungültige Geometrie ({})",
            element.id,
            element.element_type().label()
        );
        return false;
    }

    state.record_undo_snapshot();
    let id = element.id.clone();
    let label = element.element_type().label();
    if let Some(hole) = state.hole_mut(hole_number) {
        hole.elements.push(element);
    }
    state.reset_drawing();
    state.recompute_distances();
    log::info!("{label} {id} zu Loch {hole_number} hinzugefügt");
    true
}

/// Wendet einen Patch auf ein Element an. Typ und Loch bleiben unverändert.
pub fn update_element(state: &mut EditingState, id: &ElementId, patch: &ElementPatch) -> bool {
    let Some((hole_idx, elem_idx)) = state.locate_element(id) else {
        log::warn!("Update ignoriert: Element {id} existiert nicht");
        return false;
    };

    // Erst an einer Kopie prüfen, damit die History nur bei Erfolg wächst
    let mut updated = state.holes[hole_idx].elements[elem_idx].clone();
    if let Err(reason) = updated.apply_patch(patch) {
        log::warn!("Update von Element {id} abgelehnt: {reason:?}");
        return false;
    }

    state.record_undo_snapshot();
    state.holes_mut()[hole_idx].elements[elem_idx] = updated;
    state.recompute_distances();
    log::info!("Element {id} aktualisiert");
    true
}

/// Löscht ein Element; eine Selektion darauf wird aufgehoben.
pub fn delete_element(state: &mut EditingState, id: &ElementId) -> bool {
    let Some((hole_idx, elem_idx)) = state.locate_element(id) else {
        log::warn!("Löschen ignoriert: Element {id} existiert nicht");
        return false;
    };

    state.record_undo_snapshot();
    state.holes_mut()[hole_idx].elements.remove(elem_idx);
    if state.selected_element.as_ref() == Some(id) {
        state.selected_element = None;
    }
    state.recompute_distances();
    log::info!("Element {id} gelöscht");
    true
}
