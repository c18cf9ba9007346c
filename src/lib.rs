//! Kurs-Editor Library.
//! Zustands-Engine für das Bearbeiten von Mehr-Loch-Kursen auf einer Karte:
//! Datenmodell, Zeichen-State-Machine, Undo/Redo, Geometrie und Persistenz.

pub mod app;
pub mod core;
pub mod persistence;
pub mod shared;

pub use app::{
    reduce, DrawingMode, DrawingPhase, EditingState, EditorAction, EditorKey, EditorStore,
    InputEvent,
};
pub use core::{
    CourseElement, CourseHole, CourseStats, ElementId, ElementKind, ElementPatch,
    ElementProperties, ElementType, HolePatch, HoleStats, Position, PropertiesPatch,
};
pub use persistence::{ImportError, PersistenceAdapter};
pub use shared::{EditorOptions, RenderHandles};
