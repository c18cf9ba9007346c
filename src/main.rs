//! Kurs-Editor (Headless).
//!
//! Lädt den gespeicherten Editor-Zustand aus einem Verzeichnis, importiert
//! optional eine Kurs-Datei und gibt eine Übersicht des Kurses aus.
//!
//! Aufruf: `course_editor [STATE_DIR] [IMPORT_FILE]`

use anyhow::Context;
use course_editor::persistence::{FileStorage, PersistenceAdapter};
use course_editor::{EditorOptions, EditorStore};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Optionen zuerst, damit `debug_logging` das Level bestimmt; RUST_LOG hat Vorrang
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_from_file(&config_path);
        env_logger::Builder::new()
            .filter_level(options.log_level())
            .parse_default_env()
            .init();

        log::info!("Kurs-Editor v{} startet...", env!("CARGO_PKG_VERSION"));
        log::debug!("Optionen aus {}", config_path.display());

        let mut args = std::env::args().skip(1);
        let state_dir = args.next().unwrap_or_else(|| ".".to_string());
        let import_path = args.next();

        let storage = FileStorage::new(&state_dir);
        let adapter = PersistenceAdapter::from_options(Box::new(storage), &options);
        let mut store = EditorStore::with_persistence(options, adapter);

        if let Some(path) = import_path {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Konnte {path} nicht lesen"))?;
            store
                .import_json(&json)
                .with_context(|| format!("Import von {path} fehlgeschlagen"))?;
            store.persist().context("Importierter Kurs konnte nicht gespeichert werden")?;
        }

        print_summary(&store);
        Ok(())
    }
}

fn print_summary(store: &EditorStore) {
    let stats = store.stats();
    println!(
        "{} Löcher, Par {}, {} Elemente, Gesamtdistanz {:.0} m",
        stats.hole_count, stats.total_par, stats.element_count, stats.total_distance_m
    );
    for hole in &stats.holes {
        let distance = hole
            .distance_m
            .map_or_else(|| "-".to_string(), |d| format!("{d:.0} m"));
        let marker = if hole.number == store.state().current_hole {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} Loch {:>2}  Par {:>2}  {:>8}  {} Elemente",
            hole.number, hole.par, distance, hole.element_count
        );
    }
    if !stats.holes_without_distance.is_empty() {
        println!(
            "Ohne Distanz (Tee oder Korb fehlt): {:?}",
            stats.holes_without_distance
        );
    }
}
