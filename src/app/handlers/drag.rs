//! Handler für Handle- und Ganz-Messungs-Drags.

use glam::Vec2;

use crate::app::state::{DragTarget, InteractionPhase};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::HandleKey;

/// Beginnt einen Drag auf ein einzelnes Handle.
///
/// Markiert das Handle als `moving`, wählt alle anderen Handles der
/// Messung ab und unterdrückt das Hover-Tracking (Phase verlässt Idle).
pub fn begin_handle(state: &mut AppState, measurement_id: u64, key: HandleKey) {
    if !state.phase.is_idle() {
        return;
    }
    let Some(measurement) = state.annotations.get_mut(measurement_id) else {
        return;
    };

    let mut selection_changed = false;
    for k in HandleKey::AXIS_KEYS.into_iter().chain([HandleKey::Label]) {
        let handle = measurement.handles.get_mut(k);
        selection_changed |= handle.selected || handle.hover;
        handle.clear_interaction_flags();
    }

    let grabbed = measurement.handles.get_mut(key);
    grabbed.moving = true;
    measurement.active = true;

    state.phase = InteractionPhase::Dragging {
        measurement_id,
        target: DragTarget::Handle(key),
        last_pos: grabbed.position,
    };
    if selection_changed {
        state.signals.selection_changed = true;
    }
    state.signals.needs_redraw = true;
    log::debug!("Handle-Drag begonnen: Messung {} {:?}", measurement_id, key);
}

/// Verschiebt das gegriffene Handle zum Zielpunkt (über den Solver).
pub fn update_handle(state: &mut AppState, image_pos: Vec2) {
    let InteractionPhase::Dragging {
        measurement_id,
        target: DragTarget::Handle(key),
        ..
    } = state.phase
    else {
        return;
    };

    if use_cases::drag::apply_handle_move(state, measurement_id, key, image_pos) {
        use_cases::labels::refresh_label(state, measurement_id);
        state.signals.geometry_changed = true;
        state.signals.needs_redraw = true;
    }
}

/// Beendet den Handle-Drag: Handle wird selektiert (Einzel-Selektion
/// über das gesamte Set), Bildgrenzen werden revalidiert.
pub fn end_handle(state: &mut AppState) {
    let InteractionPhase::Dragging {
        measurement_id,
        target: DragTarget::Handle(key),
        ..
    } = state.phase
    else {
        return;
    };
    state.phase = InteractionPhase::Idle;

    if let Some(measurement) = state.annotations.get_mut(measurement_id) {
        let handle = measurement.handles.get_mut(key);
        handle.moving = false;
        // Label-Anker nimmt nicht an der Selektion teil
        if key != HandleKey::Label {
            handle.selected = true;
        }
    }

    // Einzel-Selektions-Disziplin über alle Messungen des Sets
    for measurement in state.annotations.iter_mut() {
        if measurement.id != measurement_id {
            measurement.clear_selection();
        }
    }

    let deleted = use_cases::drag::revalidate_bounds(state, measurement_id);
    if deleted {
        // Ziel-Nummern rücken nach
        use_cases::labels::refresh_all_labels(state);
    } else {
        state.annotations.rebuild_spatial_index();
        use_cases::labels::refresh_label(state, measurement_id);
    }

    state.signals.geometry_changed = true;
    state.signals.selection_changed = true;
    state.signals.needs_redraw = true;
}

/// Beginnt einen Ganz-Messungs-Drag (Zeiger nahe Segment, kein Handle).
pub fn begin_whole(state: &mut AppState, measurement_id: u64, image_pos: Vec2) {
    if !state.phase.is_idle() || !image_pos.is_finite() {
        return;
    }
    let Some(measurement) = state.annotations.get_mut(measurement_id) else {
        return;
    };
    measurement.active = true;

    state.phase = InteractionPhase::Dragging {
        measurement_id,
        target: DragTarget::Whole,
        last_pos: image_pos,
    };
    state.signals.needs_redraw = true;
    log::debug!("Ganz-Drag begonnen: Messung {}", measurement_id);
}

/// Verschiebt die gesamte Messung um das Zeiger-Delta.
pub fn update_whole(state: &mut AppState, image_pos: Vec2) {
    let InteractionPhase::Dragging {
        measurement_id,
        target: DragTarget::Whole,
        last_pos,
    } = state.phase
    else {
        return;
    };
    if !image_pos.is_finite() {
        return;
    }

    if use_cases::drag::apply_whole_move(state, measurement_id, image_pos - last_pos) {
        state.phase = InteractionPhase::Dragging {
            measurement_id,
            target: DragTarget::Whole,
            last_pos: image_pos,
        };
        use_cases::labels::refresh_label(state, measurement_id);
        state.signals.geometry_changed = true;
        state.signals.needs_redraw = true;
    }
}

/// Beendet den Ganz-Messungs-Drag und revalidiert die Bildgrenzen.
pub fn end_whole(state: &mut AppState) {
    let InteractionPhase::Dragging {
        measurement_id,
        target: DragTarget::Whole,
        ..
    } = state.phase
    else {
        return;
    };
    state.phase = InteractionPhase::Idle;

    let deleted = use_cases::drag::revalidate_bounds(state, measurement_id);
    if deleted {
        use_cases::labels::refresh_all_labels(state);
    } else {
        state.annotations.rebuild_spatial_index();
        use_cases::labels::refresh_label(state, measurement_id);
    }

    state.signals.geometry_changed = true;
    state.signals.needs_redraw = true;
}
