//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::EditingState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut EditingState) -> bool {
    let current = Snapshot::from_state(state);
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        prev.apply_to(state);
        state.recompute_distances();
        log::info!("Undo ausgeführt");
        true
    } else {
        log::debug!("Undo: nichts zu tun");
        false
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut EditingState) -> bool {
    let current = Snapshot::from_state(state);
    if let Some(next) = state.history.pop_redo_with_current(current) {
        next.apply_to(state);
        state.recompute_distances();
        log::info!("Redo ausgeführt");
        true
    } else {
        log::debug!("Redo: nichts zu tun");
        false
    }
}
