//! Editor-Store: besitzt den Zustand und ist der einzige Dispatch-Punkt.

use super::input_mapping;
use super::reducer;
use super::{EditingState, EditorAction, InputEvent};
use crate::core::CourseStats;
use crate::persistence::{self, ImportError, PersistenceAdapter};
use crate::shared::{curved_path_length_m, EditorOptions};
use std::sync::Arc;

/// Orchestriert Eingaben, Reducer und Persistenz.
pub struct EditorStore {
    state: EditingState,
    options: EditorOptions,
    persistence: Option<PersistenceAdapter>,
    /// Name der letzten Action, die den Kurs verändert hat (Statuszeile)
    last_change: Option<&'static str>,
}

impl EditorStore {
    /// Erstellt einen Store mit Standard-Startzustand ohne Persistenz.
    pub fn new(options: EditorOptions) -> Self {
        Self {
            state: EditingState::new(&options),
            options,
            persistence: None,
            last_change: None,
        }
    }

    /// Erstellt einen Store, dessen Zustand aus dem Speicher geladen wird.
    ///
    /// Fehlende oder defekte Daten ergeben den Standard-Startzustand.
    pub fn with_persistence(options: EditorOptions, adapter: PersistenceAdapter) -> Self {
        let state = adapter.load_state(&options);
        log::info!(
            "Zustand geladen: {} Löcher, {} Elemente",
            state.holes.len(),
            state.elements().count()
        );
        Self {
            state,
            options,
            persistence: Some(adapter),
            last_change: None,
        }
    }

    /// Verarbeitet eine Eingabe über Input->Action Mapping.
    pub fn handle_input(&mut self, input: InputEvent) -> &EditingState {
        let actions = input_mapping::map_input_to_actions(&self.state, input);
        for action in actions {
            self.apply(action);
        }
        self.persist_if_enabled();
        &self.state
    }

    /// Führt eine Action aus und liefert den Folgezustand.
    pub fn dispatch(&mut self, action: EditorAction) -> &EditingState {
        self.apply(action);
        self.persist_if_enabled();
        &self.state
    }

    fn apply(&mut self, action: EditorAction) {
        let name = action.name();
        log::debug!("Action {name}");
        let holes_before = Arc::clone(&self.state.holes);
        let accepted = reducer::apply_action(&mut self.state, action, &self.options);
        // Kurs-Mutationen und Undo/Redo tauschen immer den Arc der Löcher aus
        if accepted && !Arc::ptr_eq(&holes_before, &self.state.holes) {
            self.last_change = Some(name);
        }
    }

    fn persist_if_enabled(&mut self) {
        if !self.options.persist_on_change {
            return;
        }
        if let Err(e) = self.persist() {
            log::warn!("Zustand konnte nicht gespeichert werden: {e:#}");
        }
    }

    /// Schreibt den aktuellen Zustand sofort in den Speicher.
    pub fn persist(&mut self) -> anyhow::Result<()> {
        match self.persistence.as_mut() {
            Some(adapter) => adapter.save_state(&self.state),
            None => Ok(()),
        }
    }

    /// Ersetzt den Kurs durch eine importierte JSON-Datei.
    ///
    /// Bei Fehlern bleibt der aktuelle Zustand unverändert.
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        let imported = persistence::import_course(json, &self.options)?;
        log::info!(
            "Kurs importiert: {} Löcher, {} Elemente",
            imported.holes.len(),
            imported.elements().count()
        );
        self.state = imported;
        self.last_change = None;
        self.persist_if_enabled();
        Ok(())
    }

    /// Serialisiert den aktuellen Zustand als JSON.
    pub fn export_json(&self) -> anyhow::Result<String> {
        persistence::serialize(&self.state)
    }

    /// Read-only Zugriff auf den Zustand.
    pub fn state(&self) -> &EditingState {
        &self.state
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Angeschlossener Persistenz-Adapter, falls vorhanden.
    pub fn persistence(&self) -> Option<&PersistenceAdapter> {
        self.persistence.as_ref()
    }

    /// Letzte Action, die Löcher oder Elemente verändert hat, z.B. `"ADD_ELEMENT"`.
    ///
    /// Selektion, Werkzeugwechsel und Zwischenschritte beim Zeichnen zählen nicht.
    pub fn last_change(&self) -> Option<&'static str> {
        self.last_change
    }

    /// Geglättete Länge der laufenden Messung (Catmull-Rom), nur zur Anzeige.
    pub fn smoothed_measure_distance_m(&self) -> Option<f64> {
        self.state.measure_distance_m().map(|_| {
            curved_path_length_m(
                &self.state.temp_path,
                self.options.spline_samples_per_segment,
            )
        })
    }

    /// Kurs-Statistiken des aktuellen Zustands.
    pub fn stats(&self) -> CourseStats {
        self.state.stats()
    }
}
