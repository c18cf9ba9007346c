use crate::app::state::DrawingMode;
use crate::core::{CourseElement, ElementId, ElementPatch, HolePatch, Position};

/// Actions sind die einzigen Übergänge des Editor-Zustands.
///
/// Jede Action wird zentral vom Reducer ausgeführt; ungültige Actions
/// lassen den Zustand unverändert.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Zeichenwerkzeug wechseln (`None` = Selektion); bricht Zeichnen und Selektion ab
    SetDrawingMode { mode: Option<DrawingMode> },
    /// Aktuelles Loch wechseln
    SetCurrentHole { number: u32 },
    /// Fertiges Element einfügen
    AddElement { element: CourseElement },
    /// Element per Patch ändern
    UpdateElement { id: ElementId, patch: ElementPatch },
    /// Element löschen
    DeleteElement { id: ElementId },
    /// Element selektieren oder Selektion aufheben
    SelectElement { id: Option<ElementId> },
    /// Pfad mit erstem Punkt beginnen
    StartDrawing { position: Position },
    /// Punkt an laufenden Pfad anhängen
    ContinueDrawing { position: Position },
    /// Laufenden Pfad abschließen
    FinishDrawing,
    /// Laufenden Pfad verwerfen
    CancelDrawing,
    /// Neues Loch anlegen
    AddHole { number: u32 },
    /// Loch samt Elementen löschen
    DeleteHole { number: u32 },
    /// Loch-Attribute ändern
    UpdateHole { number: u32, patch: HolePatch },
    /// Letzte Aktion rückgängig machen
    Undo,
    /// Rückgängig gemachte Aktion wiederherstellen
    Redo,
}

impl EditorAction {
    /// Kurzname für Logging.
    pub fn name(&self) -> &'static str {
        match self {
            EditorAction::SetDrawingMode { .. } => "SET_DRAWING_MODE",
            EditorAction::SetCurrentHole { .. } => "SET_CURRENT_HOLE",
            EditorAction::AddElement { .. } => "ADD_ELEMENT",
            EditorAction::UpdateElement { .. } => "UPDATE_ELEMENT",
            EditorAction::DeleteElement { .. } => "DELETE_ELEMENT",
            EditorAction::SelectElement { .. } => "SELECT_ELEMENT",
            EditorAction::StartDrawing { .. } => "START_DRAWING",
            EditorAction::ContinueDrawing { .. } => "CONTINUE_DRAWING",
            EditorAction::FinishDrawing => "FINISH_DRAWING",
            EditorAction::CancelDrawing => "CANCEL_DRAWING",
            EditorAction::AddHole { .. } => "ADD_HOLE",
            EditorAction::DeleteHole { .. } => "DELETE_HOLE",
            EditorAction::UpdateHole { .. } => "UPDATE_HOLE",
            EditorAction::Undo => "UNDO",
            EditorAction::Redo => "REDO",
        }
    }
}
