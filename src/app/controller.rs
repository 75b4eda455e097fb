//! Application Controller für zentrale Event-Verarbeitung.
//!
//! Ein Event wird vollständig verarbeitet bevor das nächste angenommen
//! wird; der Controller hält keinen eigenen Iterationszustand zwischen
//! den Aufrufen.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Use-Cases auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über das Intent→Command-Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Erstellung ===
            AppCommand::BeginCreation {
                origin,
                timestamp_ms,
            } => handlers::creation::begin(state, origin, timestamp_ms),
            AppCommand::UpdateCreation { image_pos } => {
                handlers::creation::update(state, image_pos)
            }
            AppCommand::FinishCreation { timestamp_ms } => {
                handlers::creation::finish(state, timestamp_ms)
            }
            AppCommand::CancelCreation => handlers::creation::cancel(state),

            // === Drags ===
            AppCommand::BeginHandleDrag {
                measurement_id,
                key,
            } => handlers::drag::begin_handle(state, measurement_id, key),
            AppCommand::UpdateHandleDrag { image_pos } => {
                handlers::drag::update_handle(state, image_pos)
            }
            AppCommand::EndHandleDrag => handlers::drag::end_handle(state),
            AppCommand::BeginWholeDrag {
                measurement_id,
                image_pos,
            } => handlers::drag::begin_whole(state, measurement_id, image_pos),
            AppCommand::UpdateWholeDrag { image_pos } => {
                handlers::drag::update_whole(state, image_pos)
            }
            AppCommand::EndWholeDrag => handlers::drag::end_whole(state),

            // === Hover & Selektion ===
            AppCommand::UpdateHover { display_pos } => handlers::hover::update(state, display_pos),
            AppCommand::ClearSelection => handlers::selection::clear_all(state),

            // === Lebenszyklus ===
            AppCommand::DeleteMeasurement { measurement_id } => {
                handlers::lifecycle::delete_measurement(state, measurement_id)
            }
            AppCommand::RequestRelabel { measurement_id } => {
                handlers::lifecycle::request_relabel(state, measurement_id)
            }
            AppCommand::SetImageContext { context } => {
                handlers::lifecycle::set_image_context(state, context)
            }
            AppCommand::SetViewTransform { transform } => {
                handlers::lifecycle::set_view_transform(state, transform)
            }
            AppCommand::ApplyOptions { options } => {
                handlers::lifecycle::apply_options(state, options)
            }
            AppCommand::SelectAnnotationTool { index } => {
                handlers::lifecycle::select_tool(state, index)
            }
            AppCommand::CancelActiveInteraction => {
                handlers::lifecycle::cancel_active_interaction(state)
            }
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
