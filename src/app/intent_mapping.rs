//! Mapping von Host-Intents auf mutierende App-Commands.
//!
//! Das Mapping konsultiert den aktuellen Zustand: Pointer-Down wird
//! über das Targeting (HitTester) zu Handle-Drag, Ganz-Drag oder
//! Neu-Erstellung; Move/Release folgen der aktuellen Phase.

use crate::app::state::{DragTarget, InteractionPhase};
use crate::app::tools::HitKind;
use crate::app::use_cases::targeting;

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            image_pos,
            display_pos,
            timestamp_ms,
        } => {
            if !state.phase.is_idle() {
                return vec![];
            }
            match targeting::pick(state, display_pos) {
                Some((measurement_id, HitKind::Handle(key))) => {
                    vec![AppCommand::BeginHandleDrag {
                        measurement_id,
                        key,
                    }]
                }
                Some((measurement_id, HitKind::Body)) => vec![AppCommand::BeginWholeDrag {
                    measurement_id,
                    image_pos,
                }],
                None => vec![AppCommand::BeginCreation {
                    origin: image_pos,
                    timestamp_ms,
                }],
            }
        }

        AppIntent::PointerMoved {
            image_pos,
            display_pos,
        } => match state.phase {
            InteractionPhase::Idle => vec![AppCommand::UpdateHover { display_pos }],
            InteractionPhase::Creating { .. } => vec![AppCommand::UpdateCreation { image_pos }],
            InteractionPhase::Dragging {
                target: DragTarget::Handle(_),
                ..
            } => vec![AppCommand::UpdateHandleDrag { image_pos }],
            InteractionPhase::Dragging {
                target: DragTarget::Whole,
                ..
            } => vec![AppCommand::UpdateWholeDrag { image_pos }],
        },

        AppIntent::PointerReleased { timestamp_ms, .. } => match state.phase {
            InteractionPhase::Idle => vec![],
            InteractionPhase::Creating { .. } => {
                vec![AppCommand::FinishCreation { timestamp_ms }]
            }
            InteractionPhase::Dragging {
                target: DragTarget::Handle(_),
                ..
            } => vec![AppCommand::EndHandleDrag],
            InteractionPhase::Dragging {
                target: DragTarget::Whole,
                ..
            } => vec![AppCommand::EndWholeDrag],
        },

        AppIntent::DoubleClicked { display_pos } => match targeting::pick(state, display_pos) {
            Some((measurement_id, _)) => vec![AppCommand::RequestRelabel { measurement_id }],
            None => vec![],
        },

        AppIntent::EscapePressed => {
            // Stufenweise: laufende Erstellung abbrechen, sonst Selektion räumen
            if state.phase.is_creating() {
                vec![AppCommand::CancelCreation]
            } else {
                vec![AppCommand::ClearSelection]
            }
        }

        AppIntent::DeleteMeasurementRequested { measurement_id } => {
            vec![AppCommand::DeleteMeasurement { measurement_id }]
        }

        AppIntent::ImageChanged { context } => {
            let mut commands = Vec::new();
            if !state.phase.is_idle() {
                commands.push(AppCommand::CancelActiveInteraction);
            }
            commands.push(AppCommand::SetImageContext { context });
            commands
        }

        AppIntent::ViewTransformChanged { transform } => {
            vec![AppCommand::SetViewTransform { transform }]
        }

        AppIntent::ToolDeactivated | AppIntent::EnlargementToggled => {
            vec![AppCommand::CancelActiveInteraction]
        }

        AppIntent::MeasurementsActivatedElsewhere => vec![AppCommand::ClearSelection],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],

        AppIntent::SelectAnnotationToolRequested { index } => {
            vec![AppCommand::SelectAnnotationTool { index }]
        }
    }
}
