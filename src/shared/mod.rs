//! Geteilte Typen und reine Funktionen für layer-übergreifende Verträge.
//!
//! Enthält Geometrie, Konfiguration und die Render-Handle-Seitentabelle,
//! damit `app`, `persistence` und Render-Layer nicht direkt voneinander abhängen.

pub mod geometry;
pub mod options;
pub mod render_handles;
pub mod spline_geometry;

pub use geometry::{
    bounds, curved_path_length_m, haversine_distance_m, polygon_centroid, polyline_length_m,
    GeoBounds,
};
pub use options::EditorOptions;
pub use render_handles::RenderHandles;
