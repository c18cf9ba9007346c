//! Persistenz des Editor-Zustands als JSON.
//!
//! Der Zustand wird nach jeder Action in einen Schlüssel-Wert-Speicher
//! geschrieben und beim Start wieder gelesen. Gespeicherte Daten aus der
//! eigenen Sitzung werden tolerant gelesen ([`deserialize`]), vom Nutzer
//! gewählte Dateien streng geprüft ([`import_course`]).

pub mod document;
pub mod error;
pub mod reader;
pub mod storage;
pub mod writer;

pub use document::{CourseDocument, PersistedSnapshot, PersistedState};
pub use error::ImportError;
pub use reader::{deserialize, import_course};
pub use storage::{FileStorage, MemoryStorage, StateStorage};
pub use writer::{export_course, serialize};

use crate::app::EditingState;
use crate::shared::EditorOptions;

/// Verbindet einen Speicher-Backend mit dem Schlüssel des Editor-Zustands.
pub struct PersistenceAdapter {
    storage: Box<dyn StateStorage>,
    key: String,
}

impl PersistenceAdapter {
    /// Erstellt einen Adapter für `key` im gegebenen Speicher.
    pub fn new(storage: Box<dyn StateStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Adapter mit dem Schlüssel aus den Optionen.
    pub fn from_options(storage: Box<dyn StateStorage>, options: &EditorOptions) -> Self {
        Self::new(storage, options.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read-only Zugriff auf den Speicher.
    pub fn storage(&self) -> &dyn StateStorage {
        self.storage.as_ref()
    }

    /// Lädt den gespeicherten Zustand. Fehlt er oder ist er unbrauchbar,
    /// wird der Standard-Startzustand geliefert.
    pub fn load_state(&self, options: &EditorOptions) -> EditingState {
        match self.storage.load(&self.key) {
            Ok(Some(json)) => deserialize(&json, options),
            Ok(None) => {
                log::info!("Kein gespeicherter Zustand unter '{}'", self.key);
                EditingState::new(options)
            }
            Err(e) => {
                log::warn!("Gespeicherter Zustand nicht lesbar: {e:#}");
                EditingState::new(options)
            }
        }
    }

    /// Schreibt den Zustand unter dem Schlüssel des Adapters.
    pub fn save_state(&mut self, state: &EditingState) -> anyhow::Result<()> {
        let json = serialize(state)?;
        self.storage.save(&self.key, &json)
    }
}
