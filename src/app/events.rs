//! EditorAction- und InputEvent-Enums für den Input/Action-Datenfluss.

mod action;
mod input;

pub use action::EditorAction;
pub use input::{EditorKey, InputEvent};
