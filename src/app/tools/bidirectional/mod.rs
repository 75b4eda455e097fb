//! Bidirektionales Kaliper-Tool: Langachse plus stets senkrechte
//! Kurzachse, vier Endpunkt-Handles und ein frei platzierbarer
//! Label-Anker.

mod geometry;
mod render;

use glam::Vec2;

use crate::core::{HandleKey, Measurement, PixelSpacing, Segment, ViewTransform};
use crate::shared::{CaliperOptions, MeasurementPrimitives};

use super::{AnnotationTool, HitKind, MoveOutcome};

/// Bidirektionales Kaliper-Tool.
pub struct BidirectionalTool;

impl BidirectionalTool {
    /// Erstellt das Tool.
    pub fn new() -> Self {
        Self
    }
}

impl Default for BidirectionalTool {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnotationTool for BidirectionalTool {
    fn name(&self) -> &str {
        "Bidirektionaler Kaliper"
    }

    fn description(&self) -> &str {
        "Misst Länge und senkrechte Breite über zwei gekoppelte Achsen"
    }

    fn create_measurement(&self, id: u64, origin: Vec2) -> Measurement {
        let mut measurement = Measurement::new(id, origin);
        // Das Ende folgt während der Erstellung dem Zeiger
        measurement.handles.end.moving = true;
        measurement
    }

    fn propose_move(
        &self,
        measurement: &Measurement,
        key: HandleKey,
        proposed: Vec2,
        spacing: PixelSpacing,
        options: &CaliperOptions,
    ) -> MoveOutcome {
        match key {
            HandleKey::Start | HandleKey::End => {
                geometry::propose_long_axis_move(measurement, key, proposed, spacing)
            }
            HandleKey::PerpendicularStart | HandleKey::PerpendicularEnd => {
                geometry::propose_short_axis_move(measurement, key, proposed, spacing, options)
            }
            HandleKey::Label => {
                if !proposed.is_finite() {
                    return MoveOutcome::Rejected;
                }
                let mut next = measurement.clone();
                next.handles.label.position = proposed;
                MoveOutcome::Accepted(next)
            }
        }
    }

    fn hit_test(
        &self,
        measurement: &Measurement,
        display_pos: Vec2,
        view: &ViewTransform,
        options: &CaliperOptions,
    ) -> Option<HitKind> {
        let threshold = options.hit_threshold_px;

        // Achsen-Handles: nächstes Handle innerhalb der Schwelle
        let mut best: Option<(HandleKey, f32)> = None;
        for key in HandleKey::AXIS_KEYS {
            let distance = view
                .to_display(measurement.handles.get(key).position)
                .distance(display_pos);
            if distance <= threshold && best.map_or(true, |(_, d)| distance < d) {
                best = Some((key, distance));
            }
        }
        if let Some((key, _)) = best {
            return Some(HitKind::Handle(key));
        }

        // Label-Box: Treffer zieht den Label-Anker
        if let Some(bounds) = measurement.label_bounds {
            if bounds.contains(display_pos) {
                return Some(HitKind::Handle(HandleKey::Label));
            }
        }

        // Segment-Nähe im Display-Raum
        let handles = &measurement.handles;
        let long = Segment::new(
            view.to_display(handles.start.position),
            view.to_display(handles.end.position),
        );
        let short = Segment::new(
            view.to_display(handles.perpendicular_start.position),
            view.to_display(handles.perpendicular_end.position),
        );
        if long.distance_to_point(display_pos) <= threshold
            || short.distance_to_point(display_pos) <= threshold
        {
            return Some(HitKind::Body);
        }

        None
    }

    fn label_lines(
        &self,
        measurement: &Measurement,
        target_number: usize,
        options: &CaliperOptions,
    ) -> Vec<String> {
        render::label_lines(measurement, target_number, options)
    }

    fn render(
        &self,
        measurement: &Measurement,
        target_number: usize,
        view: &ViewTransform,
        options: &CaliperOptions,
    ) -> MeasurementPrimitives {
        render::build_primitives(measurement, target_number, view, options)
    }
}

#[cfg(test)]
mod tests;
