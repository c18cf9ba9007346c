//! Zeichenmodus und daraus abgeleitete Zeichen-Phase.

use crate::core::{ElementType, Position};
use serde::{Deserialize, Serialize};

/// Aktives Zeichenwerkzeug. `None` im Zustand bedeutet Selektionsmodus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawingMode {
    Tee,
    Basket,
    ObZone,
    Hazard,
    Mandatory,
    /// Messwerkzeug: sammelt Punkte, erzeugt nie ein Element
    Measure,
}

impl DrawingMode {
    /// Element-Typ, den dieser Modus erzeugt. `None` für `Measure`.
    pub fn element_type(self) -> Option<ElementType> {
        match self {
            DrawingMode::Tee => Some(ElementType::Tee),
            DrawingMode::Basket => Some(ElementType::Basket),
            DrawingMode::ObZone => Some(ElementType::ObZone),
            DrawingMode::Hazard => Some(ElementType::Hazard),
            DrawingMode::Mandatory => Some(ElementType::Mandatory),
            DrawingMode::Measure => None,
        }
    }

    /// Ein Klick platziert sofort ein Punkt-Element.
    pub fn places_point(self) -> bool {
        self.element_type().is_some_and(ElementType::is_point_kind)
    }

    /// Klicks sammeln Punkte in `temp_path` (Polygon-Typen und Messen).
    pub fn accumulates_path(self) -> bool {
        !self.places_point()
    }
}

impl From<ElementType> for DrawingMode {
    fn from(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Tee => DrawingMode::Tee,
            ElementType::Basket => DrawingMode::Basket,
            ElementType::ObZone => DrawingMode::ObZone,
            ElementType::Hazard => DrawingMode::Hazard,
            ElementType::Mandatory => DrawingMode::Mandatory,
        }
    }
}

/// Zustand der Zeichen-State-Machine, abgeleitet aus
/// `drawing_mode`, `is_drawing` und `temp_path`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingPhase<'a> {
    /// Selektionsmodus
    Idle,
    /// Nächster Klick platziert ein Punkt-Element
    ArmedPoint(ElementType),
    /// Nächster Klick startet einen Pfad
    ArmedPath(DrawingMode),
    /// Pfad wird gesammelt
    Drawing {
        mode: DrawingMode,
        points: &'a [Position],
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_and_path_modes() {
        assert!(DrawingMode::Tee.places_point());
        assert!(DrawingMode::Mandatory.places_point());
        assert!(DrawingMode::ObZone.accumulates_path());
        assert!(DrawingMode::Measure.accumulates_path());
        assert_eq!(DrawingMode::Measure.element_type(), None);
    }

    #[test]
    fn serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&DrawingMode::ObZone).unwrap(),
            "\"ob-zone\""
        );
        assert_eq!(
            serde_json::from_str::<DrawingMode>("\"measure\"").unwrap(),
            DrawingMode::Measure
        );
    }
}
