//! Zentrale Konfiguration für den Kurs-Editor.
//!
//! `EditorOptions` wird explizit an Store und Persistenz übergeben.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo- bzw. Redo-Schritte.
pub const HISTORY_MAX_DEPTH: usize = 100;

// ── Geometrie ───────────────────────────────────────────────────────

/// Zwischenpunkte pro Catmull-Rom-Segment bei der Längenberechnung.
pub const SPLINE_SAMPLES_PER_SEGMENT: usize = 16;

// ── Kurs ────────────────────────────────────────────────────────────

/// Par für neu angelegte Löcher.
pub const DEFAULT_HOLE_PAR: u8 = crate::core::DEFAULT_PAR;

// ── Persistenz ──────────────────────────────────────────────────────

/// Schlüssel, unter dem der Editor-Zustand gespeichert wird.
pub const STORAGE_KEY: &str = "course-editor-state";

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `course_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Maximale Undo/Redo-Tiefe
    #[serde(default = "default_history_max_depth")]
    pub history_max_depth: usize,
    /// Sampling-Dichte für geglättete Pfadlängen
    #[serde(default = "default_spline_samples")]
    pub spline_samples_per_segment: usize,
    /// Par für neue Löcher
    #[serde(default = "default_hole_par")]
    pub default_par: u8,
    /// Schlüssel im Key-Value-Speicher
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Zustand nach jeder Aktion speichern
    #[serde(default = "default_true")]
    pub persist_on_change: bool,
    /// Debug-Logging aktivieren (ersetzt globale Debug-Flags)
    #[serde(default)]
    pub debug_logging: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_max_depth: HISTORY_MAX_DEPTH,
            spline_samples_per_segment: SPLINE_SAMPLES_PER_SEGMENT,
            default_par: DEFAULT_HOLE_PAR,
            storage_key: STORAGE_KEY.to_string(),
            persist_on_change: true,
            debug_logging: false,
        }
    }
}

fn default_history_max_depth() -> usize {
    HISTORY_MAX_DEPTH
}

fn default_spline_samples() -> usize {
    SPLINE_SAMPLES_PER_SEGMENT
}

fn default_hole_par() -> u8 {
    DEFAULT_HOLE_PAR
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

fn default_true() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("course_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("course_editor.toml")
    }

    /// Korrigiert Werte außerhalb des gültigen Bereichs.
    pub fn sanitized(mut self) -> Self {
        self.history_max_depth = self.history_max_depth.max(1);
        self.spline_samples_per_segment = self.spline_samples_per_segment.clamp(1, 256);
        if !crate::core::CourseHole::is_valid_par(self.default_par) {
            self.default_par = DEFAULT_HOLE_PAR;
        }
        if self.storage_key.trim().is_empty() {
            self.storage_key = STORAGE_KEY.to_string();
        }
        self
    }

    /// Log-Level passend zu `debug_logging`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug_logging {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
