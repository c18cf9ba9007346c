use crate::core::ElementId;
use thiserror::Error;

/// Fehler beim Import einer Kurs-Datei.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("JSON konnte nicht gelesen werden: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Kurs enthält keine Löcher")]
    NoHoles,

    #[error("Ungültige Lochnummer {0}")]
    InvalidHoleNumber(u32),

    #[error("Lochnummer {0} ist mehrfach vergeben")]
    DuplicateHole(u32),

    #[error("Par {par} von Loch {hole} liegt außerhalb von 1..=10")]
    InvalidPar { hole: u32, par: u8 },

    #[error("Element in Loch {hole} hat eine leere ID")]
    EmptyElementId { hole: u32 },

    #[error("Element {id} gehört laut Daten zu Loch {claimed}, liegt aber in Loch {hole}")]
    ElementHoleMismatch { id: ElementId, claimed: u32, hole: u32 },

    #[error("Element-ID {0} ist mehrfach vergeben")]
    DuplicateElement(ElementId),

    #[error("Pfad von Element {id} hat weniger als drei gültige Punkte")]
    DegeneratePath { id: ElementId },

    #[error("Element {id} hat eine ungültige Position")]
    InvalidPosition { id: ElementId },
}
