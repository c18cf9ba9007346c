use crate::app::state::DrawingMode;
use crate::core::{ElementId, Position};

/// Tastatur-Kürzel, die der Editor versteht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Escape,
    Delete,
    Undo,
    Redo,
}

/// Eingaben aus UI/Karte ohne direkte Mutationslogik.
/// Werden über `map_input_to_actions` in Actions übersetzt.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Klick auf freie Kartenfläche
    MapClicked { position: Position },
    /// Doppelklick auf die Karte
    MapDoubleClicked { position: Position },
    /// Klick auf ein gerendertes Element
    ElementClicked { id: ElementId, position: Position },
    /// Tastendruck
    KeyPressed { key: EditorKey },
    /// Werkzeugleiste: Modus wählen (`None` = Selektion)
    DrawingModeRequested { mode: Option<DrawingMode> },
    /// Lochliste: Loch gewählt
    HoleSelected { number: u32 },
    /// Lochliste: neues Loch mit nächster freier Nummer
    AddHoleRequested,
    /// Lochliste: Loch löschen
    DeleteHoleRequested { number: u32 },
    /// Par eines Lochs geändert
    ParChanged { number: u32, par: u8 },
}
