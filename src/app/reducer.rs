//! Reducer: einziger Mutationspunkt des Editor-Zustands.

use super::handlers;
use super::{EditingState, EditorAction};
use crate::shared::EditorOptions;

/// Reine Übergangsfunktion: nimmt den Zustand, liefert den Folgezustand.
///
/// Ungültige Actions liefern den Eingangszustand unverändert zurück.
pub fn reduce(mut state: EditingState, action: EditorAction, options: &EditorOptions) -> EditingState {
    apply_action(&mut state, action, options);
    state
}

/// Führt eine Action auf dem Zustand aus.
/// Dispatcht an Feature-Handler in `handlers/`. Gibt `true` zurück, wenn die
/// Action angenommen wurde.
pub fn apply_action(
    state: &mut EditingState,
    action: EditorAction,
    options: &EditorOptions,
) -> bool {
    match action {
        // === Zeichnen ===
        EditorAction::SetDrawingMode { mode } => handlers::drawing::set_drawing_mode(state, mode),
        EditorAction::StartDrawing { position } => {
            handlers::drawing::start_drawing(state, position)
        }
        EditorAction::ContinueDrawing { position } => {
            handlers::drawing::continue_drawing(state, position)
        }
        EditorAction::FinishDrawing => handlers::drawing::finish_drawing(state),
        EditorAction::CancelDrawing => handlers::drawing::cancel_drawing(state),

        // === Elemente ===
        EditorAction::AddElement { element } => handlers::elements::add_element(state, element),
        EditorAction::UpdateElement { id, patch } => {
            handlers::elements::update_element(state, &id, &patch)
        }
        EditorAction::DeleteElement { id } => handlers::elements::delete_element(state, &id),

        // === Selektion ===
        EditorAction::SelectElement { id } => handlers::selection::select_element(state, id),

        // === Löcher ===
        EditorAction::SetCurrentHole { number } => handlers::holes::set_current_hole(state, number),
        EditorAction::AddHole { number } => handlers::holes::add_hole(state, number, options),
        EditorAction::DeleteHole { number } => handlers::holes::delete_hole(state, number),
        EditorAction::UpdateHole { number, patch } => {
            handlers::holes::update_hole(state, number, patch)
        }

        // === History ===
        EditorAction::Undo => handlers::history::undo(state),
        EditorAction::Redo => handlers::history::redo(state),
    }
}
