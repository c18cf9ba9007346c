use super::{DrawingMode, DrawingPhase};
use crate::app::history::{EditHistory, Snapshot};
use crate::core::{CourseElement, CourseHole, CourseStats, ElementId, Position};
use crate::shared::geometry::polyline_length_m;
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Wurzel-Aggregat des Editors.
///
/// `holes` liegt hinter einem `Arc`: Snapshots teilen sich die Daten, jede
/// Mutation läuft über [`EditingState::holes_mut`] (Copy-on-Write).
#[derive(Debug, Clone)]
pub struct EditingState {
    /// Löcher, aufsteigend nach Nummer; nie leer
    pub holes: Arc<Vec<CourseHole>>,
    /// Nummer des aktuell bearbeiteten Lochs
    pub current_hole: u32,
    /// Aktives Zeichenwerkzeug (`None` = Selektion)
    pub drawing_mode: Option<DrawingMode>,
    /// Selektiertes Element (exklusiv zu aktivem Zeichnen)
    pub selected_element: Option<ElementId>,
    /// Ob gerade ein Pfad gesammelt wird
    pub is_drawing: bool,
    /// Punkte des laufenden Pfads bzw. der Messung
    pub temp_path: Vec<Position>,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
}

impl EditingState {
    /// Standard-Startzustand: ein Loch (Nr. 1, Par aus `default_par`), keine Elemente.
    pub fn new(options: &EditorOptions) -> Self {
        Self {
            holes: Arc::new(vec![CourseHole::new(1, options.default_par)]),
            current_hole: 1,
            drawing_mode: None,
            selected_element: None,
            is_drawing: false,
            temp_path: Vec::new(),
            history: EditHistory::new_with_capacity(options.history_max_depth),
        }
    }

    /// Baut einen Zustand aus vorhandenen Löchern.
    ///
    /// Sortiert, berechnet Distanzen neu und setzt das aktuelle Loch auf das
    /// niedrigste. `None` für eine leere Liste.
    pub fn from_holes(mut holes: Vec<CourseHole>, history: EditHistory) -> Option<Self> {
        holes.sort_by_key(|h| h.number);
        let current_hole = holes.first()?.number;
        let mut state = Self {
            holes: Arc::new(holes),
            current_hole,
            drawing_mode: None,
            selected_element: None,
            is_drawing: false,
            temp_path: Vec::new(),
            history,
        };
        state.recompute_distances();
        Some(state)
    }

    /// Mutabler Zugriff auf die Löcher (klont nur, wenn ein Snapshot sie teilt).
    #[inline]
    pub fn holes_mut(&mut self) -> &mut Vec<CourseHole> {
        Arc::make_mut(&mut self.holes)
    }

    /// Sucht ein Loch per Nummer.
    pub fn hole(&self, number: u32) -> Option<&CourseHole> {
        self.holes.iter().find(|h| h.number == number)
    }

    /// Mutable Variante von [`EditingState::hole`].
    pub fn hole_mut(&mut self, number: u32) -> Option<&mut CourseHole> {
        self.holes_mut().iter_mut().find(|h| h.number == number)
    }

    /// Das aktuell bearbeitete Loch.
    pub fn current(&self) -> Option<&CourseHole> {
        self.hole(self.current_hole)
    }

    /// Niedrigste vorhandene Lochnummer.
    pub fn lowest_hole_number(&self) -> Option<u32> {
        self.holes.iter().map(|h| h.number).min()
    }

    /// Nächste freie Lochnummer: max + 1, bei Überlauf die kleinste freie Nummer.
    ///
    /// `None`, wenn keine Nummer mehr frei ist.
    pub fn next_hole_number(&self) -> Option<u32> {
        let highest = self.holes.iter().map(|h| h.number).max().unwrap_or(0);
        highest.checked_add(1).or_else(|| self.lowest_free_hole_number())
    }

    /// Kleinste nicht vergebene Lochnummer (Löcher sind aufsteigend sortiert).
    fn lowest_free_hole_number(&self) -> Option<u32> {
        let mut candidate = 1u32;
        for hole in self.holes.iter() {
            if hole.number != candidate {
                break;
            }
            candidate = candidate.checked_add(1)?;
        }
        Some(candidate)
    }

    /// Iterator über alle Elemente aller Löcher.
    pub fn elements(&self) -> impl Iterator<Item = &CourseElement> {
        self.holes.iter().flat_map(|h| h.elements.iter())
    }

    /// Sucht ein Element per ID über alle Löcher.
    pub fn find_element(&self, id: &ElementId) -> Option<&CourseElement> {
        self.elements().find(|e| &e.id == id)
    }

    /// Position (Loch-Index, Element-Index) eines Elements.
    pub fn locate_element(&self, id: &ElementId) -> Option<(usize, usize)> {
        self.holes.iter().enumerate().find_map(|(hole_idx, hole)| {
            hole.elements
                .iter()
                .position(|e| &e.id == id)
                .map(|elem_idx| (hole_idx, elem_idx))
        })
    }

    /// Berechnet die Distanz aller Löcher neu.
    pub fn recompute_distances(&mut self) {
        let stale = self
            .holes
            .iter()
            .any(|h| h.distance != h.compute_distance());
        if stale {
            for hole in self.holes_mut().iter_mut() {
                hole.recompute_distance();
            }
        }
    }

    /// Beendet jede Zeichen-Sitzung und kehrt in den Selektionsmodus zurück.
    pub fn reset_drawing(&mut self) {
        self.drawing_mode = None;
        self.is_drawing = false;
        self.temp_path.clear();
    }

    /// Leitet die Phase der Zeichen-State-Machine ab.
    pub fn drawing_phase(&self) -> DrawingPhase<'_> {
        match self.drawing_mode {
            None => DrawingPhase::Idle,
            Some(mode) => match mode.element_type() {
                Some(t) if t.is_point_kind() => DrawingPhase::ArmedPoint(t),
                _ if self.is_drawing => DrawingPhase::Drawing {
                    mode,
                    points: &self.temp_path,
                },
                _ => DrawingPhase::ArmedPath(mode),
            },
        }
    }

    /// Laufende Messdistanz über `temp_path`; `None` außerhalb des Messmodus.
    pub fn measure_distance_m(&self) -> Option<f64> {
        (self.drawing_mode == Some(DrawingMode::Measure))
            .then(|| polyline_length_m(&self.temp_path))
    }

    /// Kurs-Statistiken für Anzeige und Export.
    pub fn stats(&self) -> CourseStats {
        CourseStats::from_holes(&self.holes)
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Muss VOR jeder Mutation aufgerufen werden.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}
