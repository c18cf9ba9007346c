//! Abgeleitete Kurs-Statistiken für Anzeige und Export.

use super::{CourseHole, ElementType};

/// Kennzahlen eines einzelnen Lochs.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleStats {
    pub number: u32,
    pub par: u8,
    /// Distanz Tee → Korb, falls beide vorhanden
    pub distance_m: Option<f64>,
    pub element_count: usize,
    pub ob_zone_count: usize,
    pub hazard_count: usize,
    pub mandatory_count: usize,
}

impl HoleStats {
    /// Berechnet die Kennzahlen eines Lochs.
    pub fn from_hole(hole: &CourseHole) -> Self {
        Self {
            number: hole.number,
            par: hole.par,
            distance_m: hole.compute_distance(),
            element_count: hole.elements.len(),
            ob_zone_count: hole.count_of(ElementType::ObZone),
            hazard_count: hole.count_of(ElementType::Hazard),
            mandatory_count: hole.count_of(ElementType::Mandatory),
        }
    }
}

/// Kennzahlen des gesamten Kurses.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseStats {
    pub hole_count: usize,
    pub total_par: u32,
    /// Summe aller bekannten Loch-Distanzen
    pub total_distance_m: f64,
    /// Löcher ohne Tee oder Korb
    pub holes_without_distance: Vec<u32>,
    pub element_count: usize,
    pub holes: Vec<HoleStats>,
}

impl CourseStats {
    /// Aggregiert die Kennzahlen über alle Löcher.
    pub fn from_holes(holes: &[CourseHole]) -> Self {
        let holes: Vec<HoleStats> = holes.iter().map(HoleStats::from_hole).collect();
        Self {
            hole_count: holes.len(),
            total_par: holes.iter().map(|h| u32::from(h.par)).sum(),
            total_distance_m: holes.iter().filter_map(|h| h.distance_m).sum(),
            holes_without_distance: holes
                .iter()
                .filter(|h| h.distance_m.is_none())
                .map(|h| h.number)
                .collect(),
            element_count: holes.iter().map(|h| h.element_count).sum(),
            holes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CourseElement, Position};

    #[test]
    fn aggregates_par_distance_and_missing_holes() {
        let mut first = CourseHole::new(1, 3);
        first.elements.push(
            CourseElement::new_point(1, ElementType::Tee, Position::new(46.0, 2.0)).unwrap(),
        );
        first.elements.push(
            CourseElement::new_point(1, ElementType::Basket, Position::new(46.0, 2.001)).unwrap(),
        );
        let second = CourseHole::new(2, 4);

        let stats = CourseStats::from_holes(&[first, second]);

        assert_eq!(stats.hole_count, 2);
        assert_eq!(stats.total_par, 7);
        assert_eq!(stats.element_count, 2);
        assert_eq!(stats.holes_without_distance, vec![2]);
        assert!((stats.total_distance_m - 77.2).abs() < 1.0);
    }
}
