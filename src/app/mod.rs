//! Application-Layer: Controller, State, Events, Handler und Tools.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Interaktionsphasen
///
/// Dieses Modul verwaltet den Zustand der Engine (Annotation-Set,
/// Bildkontext, Phase, Tools, Optionen).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DragTarget, HostSignals, InteractionPhase};
pub use tools::bidirectional::BidirectionalTool;
pub use tools::{AnnotationTool, HitKind, MoveOutcome, ToolRegistry};
