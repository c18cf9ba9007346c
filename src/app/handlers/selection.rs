//! Handler für Selektions-Operationen.
//!
//! Selektion ist kein History-Ereignis.

use crate::app::EditingState;
use crate::core::ElementId;

/// Selektiert ein Element oder hebt die Selektion auf (`None`).
///
/// Eine Selektion beendet jede laufende Zeichen-Sitzung.
pub fn select_element(state: &mut EditingState, id: Option<ElementId>) -> bool {
    let Some(id) = id else {
        clear(state);
        return true;
    };
    if state.find_element(&id).is_none() {
        log::warn!("Selektion ignoriert: Element {id} existiert nicht");
        return false;
    }

    state.reset_drawing();
    log::debug!("Element {id} selektiert");
    state.selected_element = Some(id);
    true
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut EditingState) {
    if state.selected_element.take().is_some() {
        log::debug!("Selektion aufgehoben");
    }
}
