//! Handler für das Hover-Tracking.

use glam::Vec2;

use crate::app::use_cases;
use crate::app::AppState;

/// Berechnet die Hover-Flags neu (nur in der Idle-Phase; während
/// Erstellung und Drags ist Hover-Tracking unterdrückt).
pub fn update(state: &mut AppState, display_pos: Vec2) {
    if !state.phase.is_idle() || !display_pos.is_finite() {
        return;
    }
    if use_cases::hover::update_hover(state, display_pos) {
        state.signals.needs_redraw = true;
    }
}
