//! Handler für den Erstellungs-Lebenszyklus einer Messung.

use glam::Vec2;

use crate::app::state::InteractionPhase;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::HandleKey;

use super::selection;

/// Beginnt eine neue Messung am Ursprungspunkt (Start = Ende).
pub fn begin(state: &mut AppState, origin: Vec2, timestamp_ms: f64) {
    if !state.phase.is_idle() || !origin.is_finite() {
        return;
    }

    let id = state.annotations.generate_id();
    let measurement = {
        let Some(tool) = state.tools.active_tool() else {
            return;
        };
        tool.create_measurement(id, origin)
    };

    // Eine neue Erstellung beendet jede bestehende Selektion
    selection::clear_all(state);

    state.annotations.insert(measurement);
    use_cases::labels::refresh_label(state, id);
    state.phase = InteractionPhase::Creating {
        measurement_id: id,
        started_at_ms: timestamp_ms,
    };
    state.signals.geometry_changed = true;
    state.signals.needs_redraw = true;
    log::debug!("Erstellung begonnen: Messung {}", id);
}

/// Führt das `end`-Handle der entstehenden Messung dem Zeiger nach.
pub fn update(state: &mut AppState, image_pos: Vec2) {
    let InteractionPhase::Creating { measurement_id, .. } = state.phase else {
        return;
    };

    if use_cases::drag::apply_handle_move(state, measurement_id, HandleKey::End, image_pos) {
        use_cases::labels::refresh_label(state, measurement_id);
        state.signals.geometry_changed = true;
        state.signals.needs_redraw = true;
    }
}

/// Setzt die Erstellung ab oder verwirft sie (Größe, Dauer, Grenzen).
pub fn finish(state: &mut AppState, timestamp_ms: f64) {
    let InteractionPhase::Creating {
        measurement_id,
        started_at_ms,
    } = state.phase
    else {
        return;
    };
    state.phase = InteractionPhase::Idle;

    let elapsed_ms = timestamp_ms - started_at_ms;
    let verdict = state.annotations.get(measurement_id).map(|measurement| {
        use_cases::creation::validate_settle(
            measurement,
            elapsed_ms,
            &state.image,
            &state.options,
        )
    });

    match verdict {
        Some(Ok(())) => {
            if let Some(measurement) = state.annotations.get_mut(measurement_id) {
                measurement.is_creating = false;
                measurement.handles.end.moving = false;
            }
            state.annotations.rebuild_spatial_index();
            use_cases::labels::refresh_label(state, measurement_id);
            state.signals.geometry_changed = true;
            state.signals.needs_redraw = true;
            log::info!("Messung {} abgesetzt", measurement_id);
        }
        Some(Err(reason)) => {
            discard(state, measurement_id);
            log::info!("Erstellung verworfen ({:?}): Messung {}", reason, measurement_id);
        }
        None => {}
    }
}

/// Bricht die laufende Erstellung ab (Escape, Bildwechsel, Deaktivierung).
pub fn cancel(state: &mut AppState) {
    let InteractionPhase::Creating { measurement_id, .. } = state.phase else {
        return;
    };
    state.phase = InteractionPhase::Idle;
    discard(state, measurement_id);
    log::info!("Erstellung abgebrochen: Messung {}", measurement_id);
}

/// Entfernt eine verworfene Erstellung ohne persistente Nebeneffekte.
fn discard(state: &mut AppState, measurement_id: u64) {
    if let Some(measurement) = state.annotations.get_mut(measurement_id) {
        measurement.cancelled = true;
    }
    state.annotations.remove(measurement_id);
    state.signals.needs_redraw = true;
}
