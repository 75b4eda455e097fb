//! Use-Case: Anwendung von Handle- und Ganz-Messungs-Verschiebungen.

use glam::Vec2;

use crate::app::tools::MoveOutcome;
use crate::app::AppState;
use crate::core::HandleKey;

/// Schlägt eine Handle-Verschiebung beim aktiven Tool vor und wendet
/// ein akzeptiertes Ergebnis an.
///
/// Gibt `true` zurück wenn die Geometrie übernommen wurde; Ablehnungen
/// lassen den letzten gültigen Zustand unberührt.
pub fn apply_handle_move(
    state: &mut AppState,
    measurement_id: u64,
    key: HandleKey,
    image_pos: Vec2,
) -> bool {
    let outcome = {
        let Some(tool) = state.tools.active_tool() else {
            return false;
        };
        let Some(measurement) = state.annotations.get(measurement_id) else {
            return false;
        };
        tool.propose_move(
            measurement,
            key,
            image_pos,
            state.image.spacing,
            &state.options,
        )
    };

    match outcome {
        MoveOutcome::Accepted(next) => {
            if let Some(measurement) = state.annotations.get_mut(measurement_id) {
                *measurement = next;
                true
            } else {
                false
            }
        }
        MoveOutcome::Rejected => {
            log::debug!(
                "Verschiebung abgelehnt: Messung {} Handle {:?}",
                measurement_id,
                key
            );
            false
        }
    }
}

/// Verschiebt die gesamte Messung (inklusive Label) um `delta`.
///
/// Gibt `true` zurück wenn verschoben wurde.
pub fn apply_whole_move(state: &mut AppState, measurement_id: u64, delta: Vec2) -> bool {
    if !delta.is_finite() || delta == Vec2::ZERO {
        return false;
    }
    let Some(measurement) = state.annotations.get_mut(measurement_id) else {
        return false;
    };
    measurement.translate(delta);
    true
}

/// Prüft die Bildgrenzen nach einem abgeschlossenen Edit.
///
/// Grenzverletzung löscht die Messung (Policy des Controllers, nicht
/// des Geometrie-Solvers). Gibt `true` zurück wenn gelöscht wurde.
pub fn revalidate_bounds(state: &mut AppState, measurement_id: u64) -> bool {
    let violates = state
        .annotations
        .get(measurement_id)
        .map(|m| !m.handles_within(&state.image.bounds))
        .unwrap_or(false);

    if violates {
        state.annotations.remove(measurement_id);
        log::info!(
            "Messung {} liegt nach dem Edit außerhalb des Bildes — gelöscht",
            measurement_id
        );
    }
    violates
}
