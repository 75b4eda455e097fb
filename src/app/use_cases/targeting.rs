//! Use-Case: Zeiger-Targeting (Proximity-Tests und Handle-Pick).
//!
//! Alle Schwellen sind in Display-Pixeln definiert; der Spatial-Index
//! arbeitet im Bildraum und bekommt den Radius über die
//! View-Transformation übersetzt.

use glam::Vec2;

use crate::app::tools::HitKind;
use crate::app::AppState;
use crate::core::{Measurement, Segment, ViewTransform};

/// Gibt `true` zurück wenn `display_pos` innerhalb der Schwelle am
/// Segment liegt (senkrechte Distanz, auf das Segment geklemmt).
pub fn point_near_segment(display_pos: Vec2, segment: &Segment, threshold: f32) -> bool {
    segment.distance_to_point(display_pos) <= threshold
}

/// Gibt `true` zurück wenn der Zeiger die Messung trifft: innerhalb der
/// Label-Bounding-Box oder nahe einer der beiden Achsen.
pub fn point_near_tool(
    measurement: &Measurement,
    display_pos: Vec2,
    view: &ViewTransform,
    threshold: f32,
) -> bool {
    if let Some(bounds) = measurement.label_bounds {
        if bounds.contains(display_pos) {
            return true;
        }
    }

    let handles = &measurement.handles;
    let long = Segment::new(
        view.to_display(handles.start.position),
        view.to_display(handles.end.position),
    );
    let short = Segment::new(
        view.to_display(handles.perpendicular_start.position),
        view.to_display(handles.perpendicular_end.position),
    );

    point_near_segment(display_pos, &long, threshold)
        || point_near_segment(display_pos, &short, threshold)
}

/// Findet das Ziel unter dem Zeiger.
///
/// Zuerst Achsen-Handles über den Spatial-Index (über alle abgesetzten
/// Messungen), danach Label-Box und Segment-Nähe pro Messung, oberste
/// (zuletzt erstellte) Messung zuerst.
pub fn pick(state: &AppState, display_pos: Vec2) -> Option<(u64, HitKind)> {
    let image_pos = state.view.to_image(display_pos);
    let radius = state
        .view
        .display_radius_to_image(state.options.hit_threshold_px);

    if let Some(hit) = state.annotations.nearest_axis_handle(image_pos) {
        if hit.distance <= radius {
            return Some((hit.handle.measurement_id, HitKind::Handle(hit.handle.key)));
        }
    }

    let tool = state.tools.active_tool()?;
    for measurement in state.annotations.iter_settled().rev() {
        if let Some(kind) = tool.hit_test(measurement, display_pos, &state.view, &state.options) {
            return Some((measurement.id, kind));
        }
    }

    None
}
