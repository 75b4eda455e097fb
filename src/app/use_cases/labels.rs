//! Use-Case: autoritative Neuberechnung der Label-Bounding-Box.
//!
//! Einziger Schreiber von `Measurement::label_bounds`. Wird bei jeder
//! Geometrie-, View- oder Nummerierungs-Änderung gerufen; Rendering und
//! Hit-Tests lesen ausschließlich.

use crate::app::AppState;

/// Berechnet Label-Zeilen und Bounding-Box einer Messung neu.
pub fn refresh_label(state: &mut AppState, measurement_id: u64) {
    let Some(target_number) = state.annotations.target_number(measurement_id) else {
        return;
    };

    let (lines, anchor) = {
        let Some(tool) = state.tools.active_tool() else {
            return;
        };
        let Some(measurement) = state.annotations.get(measurement_id) else {
            return;
        };
        (
            tool.label_lines(measurement, target_number, &state.options),
            state.view.to_display(measurement.handles.label.position),
        )
    };

    let bounds = state.label_layout.measure(&lines, anchor);
    if let Some(measurement) = state.annotations.get_mut(measurement_id) {
        measurement.label_bounds = Some(bounds);
    }
}

/// Berechnet die Labels aller Messungen neu (nach Löschungen oder
/// View-Änderungen, wenn Ziel-Nummern bzw. Anker-Positionen wandern).
pub fn refresh_all_labels(state: &mut AppState) {
    let ids: Vec<u64> = state.annotations.iter().map(|m| m.id).collect();
    for id in ids {
        refresh_label(state, id);
    }
}
