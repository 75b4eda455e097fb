//! Projektion einer Kaliper-Messung auf zeichenbare Primitives.
//!
//! Zustandslos: liest ausschließlich Messung + Optionen; die
//! Label-Bounding-Box wurde vorher autoritativ vom Layout-Kollaborateur
//! berechnet und an der Messung gespeichert.

use crate::core::{Handle, HandleKey, Measurement, Segment, ViewTransform};
use crate::shared::{CaliperOptions, HandleMarker, LabelBlock, MeasurementPrimitives, SceneSegment};

/// Baut die Primitives einer Messung in Display-Koordinaten.
pub(crate) fn build_primitives(
    measurement: &Measurement,
    target_number: usize,
    view: &ViewTransform,
    options: &CaliperOptions,
) -> MeasurementPrimitives {
    let handles = &measurement.handles;

    let long_axis = SceneSegment {
        start: view.to_display(handles.start.position),
        end: view.to_display(handles.end.position),
        color: options.long_axis_color,
        thickness: options.axis_thickness_px,
        dashed: false,
    };
    let short_axis = SceneSegment {
        start: view.to_display(handles.perpendicular_start.position),
        end: view.to_display(handles.perpendicular_end.position),
        color: options.short_axis_color,
        thickness: options.axis_thickness_px,
        dashed: false,
    };

    let markers = HandleKey::AXIS_KEYS
        .into_iter()
        .filter(|key| marker_visible(measurement, handles.get(*key)))
        .map(|key| HandleMarker {
            key,
            position: view.to_display(handles.get(key).position),
            radius: options.handle_radius_px,
            color: marker_color(handles.get(key), options),
        })
        .collect();

    let selection_ray = measurement
        .single_selected_axis_handle()
        .and_then(|key| selection_ray(measurement, key, view, options));

    let label = measurement.label_bounds.map(|bounds| LabelBlock {
        anchor: view.to_display(handles.label.position),
        lines: label_lines(measurement, target_number, options),
        bounds,
    });

    let leader_line = label
        .as_ref()
        .and_then(|block| leader_line(measurement, block, view, options));

    MeasurementPrimitives {
        measurement_id: measurement.id,
        long_axis,
        short_axis,
        handles: markers,
        selection_ray,
        leader_line,
        label,
    }
}

/// Textzeilen des Labels: Ziel-Nummer, Länge und Breite.
pub(crate) fn label_lines(
    measurement: &Measurement,
    target_number: usize,
    options: &CaliperOptions,
) -> Vec<String> {
    vec![
        format!("Target {}", target_number),
        format!(
            "L {:.1} {}",
            measurement.longest_diameter, options.diameter_unit
        ),
        format!(
            "W {:.1} {}",
            measurement.shortest_diameter, options.diameter_unit
        ),
    ]
}

/// Sichtbarkeit eines Handle-Markers aus den Flags abgeleitet.
fn marker_visible(measurement: &Measurement, handle: &Handle) -> bool {
    measurement.is_creating
        || measurement.active
        || handle.active
        || handle.hover
        || handle.selected
        || handle.moving
}

/// Marker-Farbe aus den Handle-Flags abgeleitet.
fn marker_color(handle: &Handle, options: &CaliperOptions) -> [f32; 4] {
    if handle.selected || handle.moving {
        options.handle_color_selected
    } else if handle.hover || handle.active {
        options.handle_color_hover
    } else {
        options.handle_color_default
    }
}

/// Selektions-Strahl: von weit außerhalb des Bildes durch den Arm des
/// selektierten Handles bis zum gegenüberliegenden Ende.
fn selection_ray(
    measurement: &Measurement,
    key: HandleKey,
    view: &ViewTransform,
    options: &CaliperOptions,
) -> Option<SceneSegment> {
    let opposite_key = key.opposite()?;
    let selected = view.to_display(measurement.handles.get(key).position);
    let opposite = view.to_display(measurement.handles.get(opposite_key).position);

    let delta = selected - opposite;
    let length = delta.length();
    if length < f32::EPSILON {
        return None;
    }
    let far = selected + (delta / length) * options.selection_ray_extent_px;

    Some(SceneSegment {
        start: far,
        end: opposite,
        color: options.handle_color_selected,
        thickness: options.axis_thickness_px,
        dashed: false,
    })
}

/// Gestrichelte Leader-Linie: vom nächsten Punkt aus {Lang-Start,
/// Lang-Ende, Lang-Mitte} zum nächsten Seiten-Mittelpunkt der Label-Box.
fn leader_line(
    measurement: &Measurement,
    label: &LabelBlock,
    view: &ViewTransform,
    options: &CaliperOptions,
) -> Option<SceneSegment> {
    let long: Segment = measurement.handles.long_axis();
    let candidates = [
        view.to_display(long.start),
        view.to_display(long.end),
        view.to_display(long.midpoint()),
    ];

    let box_center = label.bounds.center();
    let source = candidates
        .into_iter()
        .min_by(|a, b| a.distance(box_center).total_cmp(&b.distance(box_center)))?;

    let target = label
        .bounds
        .side_midpoints()
        .into_iter()
        .min_by(|a, b| a.distance(source).total_cmp(&b.distance(source)))?;

    Some(SceneSegment {
        start: source,
        end: target,
        color: options.leader_color,
        thickness: options.leader_thickness_px,
        dashed: true,
    })
}
