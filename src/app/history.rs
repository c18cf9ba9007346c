use super::{DrawingMode, EditingState};
use crate::core::{CourseHole, ElementId, Position};
use crate::shared::options::HISTORY_MAX_DEPTH;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1) für
/// die Löcher, der eigentliche Klon passiert erst beim nächsten
/// `Arc::make_mut()` in einem Handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Löcher (Arc-Klon für O(1)-Snapshot)
    pub holes: Arc<Vec<CourseHole>>,
    pub current_hole: u32,
    pub drawing_mode: Option<DrawingMode>,
    pub selected_element: Option<ElementId>,
    pub is_drawing: bool,
    pub temp_path: Vec<Position>,
}

impl Snapshot {
    /// Erstellt einen Snapshot aller undo-relevanten Felder (ohne History).
    pub fn from_state(state: &EditingState) -> Self {
        Self {
            holes: Arc::clone(&state.holes),
            current_hole: state.current_hole,
            drawing_mode: state.drawing_mode,
            selected_element: state.selected_element.clone(),
            is_drawing: state.is_drawing,
            temp_path: state.temp_path.clone(),
        }
    }

    /// Stellt den Snapshot wieder her. Die History des Zustands bleibt unberührt.
    pub fn apply_to(self, state: &mut EditingState) {
        state.holes = self.holes;
        state.current_hole = self.current_hole;
        state.drawing_mode = self.drawing_mode;
        state.selected_element = self.selected_element;
        state.is_drawing = self.is_drawing;
        state.temp_path = self.temp_path;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
///
/// Beide Stacks sind auf `max_depth` begrenzt; beim Überlauf fällt der
/// älteste Eintrag weg.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new_with_capacity(HISTORY_MAX_DEPTH)
    }
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe (mindestens 1).
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth,
        }
    }

    /// Stellt eine History aus gespeicherten Stacks wieder her.
    /// Überzählige Einträge werden vom ältesten Ende her verworfen.
    pub fn from_stacks(past: Vec<Snapshot>, future: Vec<Snapshot>, max_depth: usize) -> Self {
        let mut history = Self::new_with_capacity(max_depth);
        history.undo_stack = past;
        history.redo_stack = future;
        Self::truncate_oldest(&mut history.undo_stack, history.max_depth);
        Self::truncate_oldest(&mut history.redo_stack, history.max_depth);
        history
    }

    fn truncate_oldest(stack: &mut Vec<Snapshot>, max_depth: usize) {
        if stack.len() > max_depth {
            let excess = stack.len() - max_depth;
            stack.drain(..excess);
        }
    }

    /// Record a pre-built snapshot. Accepting a Snapshot avoids simultaneous
    /// mutable/immutable borrows on the full `EditingState`.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }

    /// Undo-Stack, ältester Eintrag zuerst.
    pub fn past(&self) -> &[Snapshot] {
        &self.undo_stack
    }

    /// Redo-Stack; der zuletzt rückgängig gemachte Zustand liegt am Ende.
    pub fn future(&self) -> &[Snapshot] {
        &self.redo_stack
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Verwirft beide Stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::EditorOptions;

    fn make_snapshot_with_par(par: u8) -> Snapshot {
        let mut state = EditingState::new(&EditorOptions::default());
        state.holes_mut()[0].par = par;
        Snapshot::from_state(&state)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_enables_undo() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_par(3));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_par(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_par(5))
            .expect("undo vorhanden");

        assert_eq!(restored.holes[0].par, 2);
        assert!(history.can_redo());
        assert_eq!(history.future()[0].holes[0].par, 5);
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_par(2));
        let _ = history.pop_undo_with_current(make_snapshot_with_par(5));

        let restored = history
            .pop_redo_with_current(make_snapshot_with_par(2))
            .expect("redo vorhanden");

        assert_eq!(restored.holes[0].par, 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_par(2));
        let _ = history.pop_undo_with_current(make_snapshot_with_par(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_par(4));
        assert!(!history.can_redo());
    }

    #[test]
    fn oldest_entry_is_dropped_at_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for par in 1..=5 {
            history.record_snapshot(make_snapshot_with_par(par));
        }
        let pars: Vec<u8> = history.past().iter().map(|s| s.holes[0].par).collect();
        assert_eq!(pars, vec![3, 4, 5]);
    }

    #[test]
    fn from_stacks_truncates_oldest_entries() {
        let past: Vec<Snapshot> = (1..=6).map(make_snapshot_with_par).collect();
        let history = EditHistory::from_stacks(past, Vec::new(), 4);
        let pars: Vec<u8> = history.past().iter().map(|s| s.holes[0].par).collect();
        assert_eq!(pars, vec![3, 4, 5, 6]);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut history = EditHistory::new_with_capacity(0);
        history.record_snapshot(make_snapshot_with_par(1));
        history.record_snapshot(make_snapshot_with_par(2));
        assert_eq!(history.past().len(), 1);
        assert_eq!(history.max_depth(), 1);
    }
}
