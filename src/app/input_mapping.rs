//! Mapping von Karten- und Tastatur-Eingaben auf Editor-Actions.
//!
//! Die Übersetzung hängt von der aktuellen Zeichen-Phase ab und liest den
//! Zustand nur; mutiert wird ausschließlich im Reducer.

use super::state::DrawingPhase;
use super::{EditingState, EditorAction, EditorKey, InputEvent};
use crate::core::{CourseElement, HolePatch, Position};

/// Übersetzt ein `InputEvent` in eine Sequenz ausführbarer `EditorAction`s.
pub fn map_input_to_actions(state: &EditingState, input: InputEvent) -> Vec<EditorAction> {
    match input {
        InputEvent::MapClicked { position } => map_click(state, position),
        InputEvent::MapDoubleClicked { position } => map_double_click(state, position),
        InputEvent::ElementClicked { id, position } => match state.drawing_phase() {
            DrawingPhase::Idle => vec![EditorAction::SelectElement { id: Some(id) }],
            // Während eines aktiven Werkzeugs zählt der Klick als Kartenklick
            _ => map_click(state, position),
        },
        InputEvent::KeyPressed { key } => map_key(state, key),
        InputEvent::DrawingModeRequested { mode } => {
            vec![EditorAction::SetDrawingMode { mode }]
        }
        InputEvent::HoleSelected { number } => vec![EditorAction::SetCurrentHole { number }],
        InputEvent::AddHoleRequested => match state.next_hole_number() {
            Some(number) => vec![EditorAction::AddHole { number }],
            None => {
                log::warn!("Keine freie Lochnummer mehr");
                Vec::new()
            }
        },
        InputEvent::DeleteHoleRequested { number } => vec![EditorAction::DeleteHole { number }],
        InputEvent::ParChanged { number, par } => vec![EditorAction::UpdateHole {
            number,
            patch: HolePatch { par: Some(par) },
        }],
    }
}

fn map_click(state: &EditingState, position: Position) -> Vec<EditorAction> {
    match state.drawing_phase() {
        DrawingPhase::Idle => vec![EditorAction::SelectElement { id: None }],
        DrawingPhase::ArmedPoint(element_type) => {
            match CourseElement::new_point(state.current_hole, element_type, position) {
                Some(element) => vec![EditorAction::AddElement { element }],
                None => {
                    log::warn!("Ungültige Klickposition {position:?} ignoriert");
                    Vec::new()
                }
            }
        }
        DrawingPhase::ArmedPath(_) => vec![EditorAction::StartDrawing { position }],
        DrawingPhase::Drawing { .. } => vec![EditorAction::ContinueDrawing { position }],
    }
}

fn map_double_click(state: &EditingState, position: Position) -> Vec<EditorAction> {
    match state.drawing_phase() {
        DrawingPhase::Drawing { points, .. } => {
            // Der erste Klick des Doppelklicks hat den Punkt meist schon angehängt
            if points.last() == Some(&position) {
                vec![EditorAction::FinishDrawing]
            } else {
                vec![
                    EditorAction::ContinueDrawing { position },
                    EditorAction::FinishDrawing,
                ]
            }
        }
        _ => map_click(state, position),
    }
}

fn map_key(state: &EditingState, key: EditorKey) -> Vec<EditorAction> {
    match key {
        EditorKey::Escape => {
            if state.drawing_mode.is_some() {
                vec![EditorAction::CancelDrawing]
            } else if state.selected_element.is_some() {
                vec![EditorAction::SelectElement { id: None }]
            } else {
                Vec::new()
            }
        }
        EditorKey::Delete => match &state.selected_element {
            Some(id) => vec![EditorAction::DeleteElement { id: id.clone() }],
            None => Vec::new(),
        },
        EditorKey::Undo => vec![EditorAction::Undo],
        EditorKey::Redo => vec![EditorAction::Redo],
    }
}
