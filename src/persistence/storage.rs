//! Schlüssel-Wert-Speicher für den serialisierten Zustand.

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Minimaler synchroner Schlüssel-Wert-Speicher.
pub trait StateStorage {
    /// Liest den Wert zu `key`; `None`, wenn nichts gespeichert ist.
    fn load(&self, key: &str) -> Result<Option<String>>;
    /// Schreibt `value` unter `key` (überschreibt).
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
    /// Entfernt den Wert zu `key`, falls vorhanden.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Flüchtiger Speicher im Arbeitsspeicher (Tests, Headless-Betrieb).
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Speichert jeden Schlüssel als `<key>.json` in einem Verzeichnis.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Erstellt den Speicher; das Verzeichnis wird beim ersten Schreiben angelegt.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Pfad der Datei zu `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && !key.starts_with('.');
        if !valid {
            bail!("Ungültiger Speicher-Schlüssel: '{key}'");
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl StateStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Konnte {} nicht lesen", path.display()))?;
        Ok(Some(content))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Konnte {} nicht anlegen", self.dir.display()))?;
        fs::write(&path, value)
            .with_context(|| format!("Konnte {} nicht schreiben", path.display()))?;
        log::debug!("Zustand gespeichert: {}", path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Konnte {} nicht löschen", path.display()))?;
        }
        Ok(())
    }
}
