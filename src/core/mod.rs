//! Core-Domänentypen: Positionen, Kurs-Elemente, Löcher und Statistiken.
//!
//! Reine Daten ohne Engine-Handles; alles hier ist serialisierbar.

pub mod course_stats;
pub mod element;
pub mod hole;
pub mod position;

pub use course_stats::{CourseStats, HoleStats};
pub use element::{
    CourseElement, ElementId, ElementKind, ElementPatch, ElementProperties, ElementType,
    PatchRejection, PropertiesPatch, MIN_PATH_POINTS,
};
pub use hole::{CourseHole, HolePatch, DEFAULT_PAR, PAR_MAX, PAR_MIN};
pub use position::Position;
