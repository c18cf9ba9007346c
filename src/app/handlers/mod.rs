//! Feature-Handler für die Action-Verarbeitung.
//!
//! Jeder Handler gruppiert die Zustandsübergänge eines Feature-Bereichs.
//! Der Reducer dispatcht an die passende Handler-Funktion. Rückgabewert ist
//! `true`, wenn die Action angenommen wurde; abgelehnte Actions werden geloggt
//! und lassen Zustand und History unverändert.

pub mod drawing;
pub mod elements;
pub mod history;
pub mod holes;
pub mod selection;
