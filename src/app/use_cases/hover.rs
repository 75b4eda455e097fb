//! Use-Case: Hover-Tracking über alle abgesetzten Messungen.

use glam::Vec2;

use crate::app::AppState;
use crate::core::HandleKey;

use super::targeting::point_near_tool;

/// Berechnet Hover- und Aktiv-Flags für die aktuelle Zeiger-Position neu.
///
/// Pro abgesetzter Messung bekommt nur das nächstgelegene Handle
/// innerhalb der Schwelle `hover`/`active`; das Messungs-`active`-Flag
/// folgt der Trefferprüfung gegen Label-Box und Achsen.
///
/// Gibt `true` zurück wenn sich ein Flag geändert hat (Redraw-Bedarf).
pub fn update_hover(state: &mut AppState, display_pos: Vec2) -> bool {
    let view = state.view;
    let threshold = state.options.hit_threshold_px;
    let mut changed = false;

    for measurement in state.annotations.iter_mut() {
        if !measurement.is_settled() {
            continue;
        }

        // Nächstes Achsen-Handle dieser Messung innerhalb der Schwelle
        let mut nearest: Option<(HandleKey, f32)> = None;
        for key in HandleKey::AXIS_KEYS {
            let distance = view
                .to_display(measurement.handles.get(key).position)
                .distance(display_pos);
            if distance <= threshold && nearest.map_or(true, |(_, d)| distance < d) {
                nearest = Some((key, distance));
            }
        }

        for key in HandleKey::AXIS_KEYS {
            let is_nearest = nearest.map(|(k, _)| k) == Some(key);
            let handle = measurement.handles.get_mut(key);
            if handle.hover != is_nearest {
                handle.hover = is_nearest;
                changed = true;
            }
            if handle.active != is_nearest {
                handle.active = is_nearest;
                changed = true;
            }
        }

        let near = point_near_tool(measurement, display_pos, &view, threshold);
        if measurement.active != near {
            measurement.active = near;
            changed = true;
        }
    }

    changed
}
