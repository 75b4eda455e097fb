//! Handler für Bildwechsel, View-Updates, Optionen, Löschungen und
//! kooperative Abbrüche.

use crate::app::state::InteractionPhase;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{HandleKey, ImageContext, ViewTransform};
use crate::shared::CaliperOptions;

use super::creation;

/// Setzt den Bildkontext. Ein Identitätswechsel verwirft das gesamte
/// Annotation-Set (Messungen sind an ein Bild gebunden; Persistenz
/// liegt beim Host).
pub fn set_image_context(state: &mut AppState, context: ImageContext) {
    if state.image.image_id != context.image_id {
        let discarded = state.annotations.len();
        state.annotations.clear();
        state.phase = InteractionPhase::Idle;
        if discarded > 0 {
            log::info!(
                "Bildwechsel auf {}: {} Messungen verworfen",
                context.image_id,
                discarded
            );
        }
        state.signals.geometry_changed = true;
    }
    state.image = context;
    state.signals.needs_redraw = true;
}

/// Übernimmt die aktuelle Pixel↔Display-Transformation vom Host.
pub fn set_view_transform(state: &mut AppState, transform: ViewTransform) {
    state.view = transform;
    // Label-Boxen sind Display-Raum: Anker wandern mit dem View
    use_cases::labels::refresh_all_labels(state);
    state.signals.needs_redraw = true;
}

/// Wendet geänderte Laufzeit-Optionen sofort an.
pub fn apply_options(state: &mut AppState, options: CaliperOptions) {
    state.options = options;
    use_cases::labels::refresh_all_labels(state);
    state.signals.needs_redraw = true;
    log::info!("Optionen angewendet");
}

/// Löscht eine Messung explizit (externer Lösch-Kollaborateur).
pub fn delete_measurement(state: &mut AppState, measurement_id: u64) {
    if state.phase.active_measurement() == Some(measurement_id) {
        state.phase = InteractionPhase::Idle;
    }
    if state.annotations.remove(measurement_id).is_some() {
        use_cases::labels::refresh_all_labels(state);
        state.signals.geometry_changed = true;
        state.signals.selection_changed = true;
        state.signals.needs_redraw = true;
        log::info!("Messung {} gelöscht", measurement_id);
    }
}

/// Reicht eine Relabel-Anforderung an den Host durch (Geometrie
/// bleibt unberührt).
pub fn request_relabel(state: &mut AppState, measurement_id: u64) {
    if state.annotations.get(measurement_id).is_some() {
        state.signals.relabel_requested = Some(measurement_id);
    }
}

/// Aktiviert ein Annotations-Tool per Registry-Index.
pub fn select_tool(state: &mut AppState, index: usize) {
    cancel_active_interaction(state);
    state.tools.set_active(index);
    log::info!("Annotations-Tool aktiviert: Index {}", index);
}

/// Bricht die laufende Interaktion kooperativ ab (Tool deaktiviert,
/// Vergrößerung umgeschaltet, Bildwechsel).
pub fn cancel_active_interaction(state: &mut AppState) {
    match state.phase {
        InteractionPhase::Idle => {}
        InteractionPhase::Creating { .. } => creation::cancel(state),
        InteractionPhase::Dragging { measurement_id, .. } => {
            state.phase = InteractionPhase::Idle;
            if let Some(measurement) = state.annotations.get_mut(measurement_id) {
                for key in HandleKey::AXIS_KEYS {
                    measurement.handles.get_mut(key).moving = false;
                }
                measurement.handles.label.moving = false;
            }
            state.annotations.rebuild_spatial_index();
            state.signals.needs_redraw = true;
            log::debug!("Drag abgebrochen: Messung {}", measurement_id);
        }
    }

    // Hover-Reste räumen: das Tool ist ggf. nicht mehr aktiv
    let mut changed = false;
    for measurement in state.annotations.iter_mut() {
        for key in HandleKey::AXIS_KEYS {
            let handle = measurement.handles.get_mut(key);
            changed |= handle.hover || handle.active;
            handle.hover = false;
            handle.active = false;
        }
        changed |= measurement.active;
        measurement.active = false;
    }
    if changed {
        state.signals.needs_redraw = true;
    }
}
