//! Ein nummeriertes Loch mit Par, abgeleiteter Distanz und Elementen.

use super::{CourseElement, ElementId, ElementType};
use crate::shared::geometry::haversine_distance_m;
use serde::{Deserialize, Serialize};

/// Kleinster erlaubter Par-Wert.
pub const PAR_MIN: u8 = 1;
/// Größter erlaubter Par-Wert.
pub const PAR_MAX: u8 = 10;
/// Par eines neu angelegten Lochs.
pub const DEFAULT_PAR: u8 = 3;

/// Ein Loch des Kurses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseHole {
    /// Lochnummer (>= 1, eindeutig im Kurs)
    pub number: u32,
    /// Par (1..=10)
    pub par: u8,
    /// Abgeleitet: Distanz erstes Tee → erster Korb in Metern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Alle Elemente dieses Lochs
    #[serde(default)]
    pub elements: Vec<CourseElement>,
}

/// Teil-Update eines Lochs (UPDATE_HOLE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HolePatch {
    pub par: Option<u8>,
}

impl CourseHole {
    /// Erstellt ein leeres Loch.
    pub fn new(number: u32, par: u8) -> Self {
        Self {
            number,
            par,
            distance: None,
            elements: Vec::new(),
        }
    }

    /// Prüft ob ein Par-Wert im erlaubten Bereich liegt.
    pub fn is_valid_par(par: u8) -> bool {
        (PAR_MIN..=PAR_MAX).contains(&par)
    }

    /// Erstes Element eines Typs (Einfügereihenfolge).
    pub fn first_of(&self, element_type: ElementType) -> Option<&CourseElement> {
        self.elements
            .iter()
            .find(|e| e.element_type() == element_type)
    }

    /// Anzahl der Elemente eines Typs.
    pub fn count_of(&self, element_type: ElementType) -> usize {
        self.elements
            .iter()
            .filter(|e| e.element_type() == element_type)
            .count()
    }

    /// Sucht ein Element per ID.
    pub fn element(&self, id: &ElementId) -> Option<&CourseElement> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Mutable Variante von [`CourseHole::element`].
    pub fn element_mut(&mut self, id: &ElementId) -> Option<&mut CourseElement> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    /// Berechnet die Distanz Tee → Korb neu.
    pub fn compute_distance(&self) -> Option<f64> {
        let tee = self.first_of(ElementType::Tee)?.position()?;
        let basket = self.first_of(ElementType::Basket)?.position()?;
        Some(haversine_distance_m(tee, basket))
    }

    /// Aktualisiert das abgeleitete `distance`-Feld.
    pub fn recompute_distance(&mut self) {
        self.distance = self.compute_distance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use approx::assert_relative_eq;

    #[test]
    fn distance_is_none_without_tee_or_basket() {
        let mut hole = CourseHole::new(1, 3);
        hole.elements.push(
            CourseElement::new_point(1, ElementType::Tee, Position::new(46.0, 2.0)).unwrap(),
        );
        hole.recompute_distance();
        assert!(hole.distance.is_none());
    }

    #[test]
    fn distance_uses_first_tee_and_first_basket() {
        let mut hole = CourseHole::new(1, 3);
        for (t, lng) in [
            (ElementType::Tee, 2.0),
            (ElementType::Basket, 2.001),
            (ElementType::Basket, 2.01),
        ] {
            hole.elements
                .push(CourseElement::new_point(1, t, Position::new(46.0, lng)).unwrap());
        }
        hole.recompute_distance();
        assert_relative_eq!(hole.distance.unwrap(), 77.2, epsilon = 1.0);
    }

    #[test]
    fn par_range() {
        assert!(!CourseHole::is_valid_par(0));
        assert!(CourseHole::is_valid_par(1));
        assert!(CourseHole::is_valid_par(10));
        assert!(!CourseHole::is_valid_par(11));
    }
}
