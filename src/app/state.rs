//! Application State: zentrale Datenhaltung des Editors.
//!
//! Der gesamte Zustand ist reine Daten; Render-Handles leben in
//! [`crate::shared::RenderHandles`] außerhalb dieses Moduls.

mod drawing;
mod editing_state;

pub use drawing::{DrawingMode, DrawingPhase};
pub use editing_state::EditingState;
