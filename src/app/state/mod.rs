//! Application State und Interaktionsphasen.
//!
//! Dieses Modul verwaltet den Zustand der Engine (Annotation-Set,
//! Bildkontext, Interaktionsphase, Tools, Optionen).

mod app_state;
mod interaction;
mod signals;

pub use app_state::AppState;
pub use interaction::{DragTarget, InteractionPhase};
pub use signals::HostSignals;
