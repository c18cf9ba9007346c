//! Seitentabelle für Render-Engine-Handles.
//!
//! Live-Handles der Karten-Engine (Layer, Marker-Objekte, …) gehören dem
//! Rendering-Layer und werden nie im Domänenmodell gespeichert. Die Zuordnung
//! läuft ausschließlich über die `ElementId`.

use crate::app::EditingState;
use crate::core::ElementId;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Handles pro Element, in Einfügereihenfolge.
#[derive(Debug)]
pub struct RenderHandles<H> {
    handles: IndexMap<ElementId, H>,
}

impl<H> Default for RenderHandles<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RenderHandles<H> {
    /// Erstellt eine leere Tabelle.
    pub fn new() -> Self {
        Self {
            handles: IndexMap::new(),
        }
    }

    /// Registriert ein Handle; ein vorhandenes wird ersetzt und zurückgegeben.
    pub fn insert(&mut self, id: ElementId, handle: H) -> Option<H> {
        self.handles.insert(id, handle)
    }

    pub fn get(&self, id: &ElementId) -> Option<&H> {
        self.handles.get(id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut H> {
        self.handles.get_mut(id)
    }

    /// Entfernt das Handle eines Elements.
    pub fn remove(&mut self, id: &ElementId) -> Option<H> {
        self.handles.shift_remove(id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Iterator über alle (ID, Handle)-Paare.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &H)> {
        self.handles.iter()
    }

    /// Entfernt alle Handles, deren Element im Zustand nicht mehr existiert
    /// (z.B. nach Delete, Undo oder Laden) und gibt sie zum Aufräumen zurück.
    pub fn retain_existing(&mut self, state: &EditingState) -> Vec<(ElementId, H)> {
        let alive: HashSet<&ElementId> = state.elements().map(|e| &e.id).collect();
        let stale: Vec<ElementId> = self
            .handles
            .keys()
            .filter(|id| !alive.contains(id))
            .cloned()
            .collect();
        let removed: Vec<(ElementId, H)> = stale
            .into_iter()
            .filter_map(|id| self.handles.shift_remove(&id).map(|h| (id, h)))
            .collect();
        if !removed.is_empty() {
            log::debug!("{} verwaiste Render-Handles entfernt", removed.len());
        }
        removed
    }
}
