//! Handler für die Selektions-Disziplin.
//!
//! Über das gesamte Annotation-Set gilt Einzel-Selektion: Klick ins
//! Leere oder die Benachrichtigung "Messungen anderswo aktiviert"
//! räumt alle `selected`/`active`-Flags.

use crate::app::AppState;

/// Hebt Selektion und Aktiv-Flags auf allen Messungen auf.
pub fn clear_all(state: &mut AppState) {
    let mut changed = false;
    for measurement in state.annotations.iter_mut() {
        changed |= measurement.clear_selection();
    }
    if changed {
        state.signals.selection_changed = true;
        state.signals.needs_redraw = true;
    }
}
