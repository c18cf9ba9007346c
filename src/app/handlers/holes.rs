//! Handler für Loch-Operationen.

use crate::app::EditingState;
use crate::core::{CourseHole, HolePatch};
use crate::shared::EditorOptions;

/// Wechselt das aktuelle Loch. Zeichnen und Selektion werden beendet.
/// Kein History-Ereignis.
pub fn set_current_hole(state: &mut EditingState, number: u32) -> bool {
    if state.hole(number).is_none() {
        log::warn!("Lochwechsel ignoriert: Loch {number} existiert nicht");
        return false;
    }

    state.current_hole = number;
    state.selected_element = None;
    state.reset_drawing();
    log::info!("Aktuelles Loch: {number}");
    true
}

/// Legt ein leeres Loch an und macht es zum aktuellen Loch.
pub fn add_hole(state: &mut EditingState, number: u32, options: &EditorOptions) -> bool {
    if number == 0 {
        log::warn!("Loch 0 ist keine gültige Nummer");
        return false;
    }
    if state.hole(number).is_some() {
        log::warn!("Loch {number} existiert bereits");
        return false;
    }

    state.record_undo_snapshot();
    let holes = state.holes_mut();
    let insert_at = holes.partition_point(|h| h.number < number);
    holes.insert(insert_at, CourseHole::new(number, options.default_par));
    state.current_hole = number;
    state.selected_element = None;
    state.reset_drawing();
    log::info!("Loch {number} angelegt (Par {})", options.default_par);
    true
}

/// Löscht ein Loch samt Elementen. Das letzte Loch bleibt immer erhalten.
pub fn delete_hole(state: &mut EditingState, number: u32) -> bool {
    if state.holes.len() <= 1 {
        log::warn!("Das letzte Loch kann nicht gelöscht werden");
        return false;
    }
    let Some(idx) = state.holes.iter().position(|h| h.number == number) else {
        log::warn!("Löschen ignoriert: Loch {number} existiert nicht");
        return false;
    };

    state.record_undo_snapshot();
    let removed = state.holes_mut().remove(idx);
    if state
        .selected_element
        .as_ref()
        .is_some_and(|id| removed.element(id).is_some())
    {
        state.selected_element = None;
    }
    if state.current_hole == number {
        state.reset_drawing();
        if let Some(fallback) = state.lowest_hole_number() {
            state.current_hole = fallback;
        }
    }
    log::info!(
        "Loch {number} mit {} Elementen gelöscht",
        removed.elements.len()
    );
    true
}

/// Ändert die Attribute eines Lochs.
pub fn update_hole(state: &mut EditingState, number: u32, patch: HolePatch) -> bool {
    if state.hole(number).is_none() {
        log::warn!("Update ignoriert: Loch {number} existiert nicht");
        return false;
    }
    if let Some(par) = patch.par {
        if !CourseHole::is_valid_par(par) {
            log::warn!("Par {par} für Loch {number} außerhalb des gültigen Bereichs");
            return false;
        }
    }

    state.record_undo_snapshot();
    if let (Some(hole), Some(par)) = (state.hole_mut(number), patch.par) {
        hole.par = par;
    }
    log::info!("Loch {number} aktualisiert");
    true
}
