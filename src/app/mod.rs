//! Application-Layer: Store, State, Events, Reducer und History.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod input_mapping;
pub mod reducer;
/// Editor-Zustand und Zeichen-State-Machine
pub mod state;

pub use controller::EditorStore;
pub use events::{EditorAction, EditorKey, InputEvent};
pub use history::{EditHistory, Snapshot};
pub use input_mapping::map_input_to_actions;
pub use reducer::{apply_action, reduce};
pub use state::{DrawingMode, DrawingPhase, EditingState};
