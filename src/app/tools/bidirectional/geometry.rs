//! Constraint-Solver des bidirektionalen Kaliper-Tools.
//!
//! Alle Funktionen sind rein: sie lesen eine Messung und liefern
//! entweder eine vollständige neue Messung oder eine Ablehnung.
//! Senkrechtstellung wird ausschließlich konstruktiv erzeugt
//! (90°-Rotation des Langachsen-Einheitsvektors), nie nachträglich
//! geprüft. Degenerierte Eingaben führen zu Ablehnung statt zu
//! NaN-Koordinaten.

use glam::Vec2;

use crate::app::tools::MoveOutcome;
use crate::core::{
    line_intersection, rotate90, HandleKey, HandleSet, Measurement, PixelSpacing, Segment,
};
use crate::shared::CaliperOptions;

/// Berechnet die Kurzachse aus der Langachse neu, solange sie `locked` ist:
/// zentriert am Mittelpunkt, senkrecht zur Langachse, Gesamtlänge =
/// halbe Langachsen-Länge.
pub(crate) fn recompute_locked_short_axis(handles: &mut HandleSet) {
    let long = handles.long_axis();
    let Some(dir) = long.direction() else {
        // Null-Länge: keine Senkrechten-Berechnung möglich,
        // beide Kurzachsen-Handles kollabieren auf den Punkt
        let origin = handles.start.position;
        handles.perpendicular_start.position = origin;
        handles.perpendicular_end.position = origin;
        return;
    };

    let midpoint = long.midpoint();
    let quarter = long.length() * 0.25;
    let perp = rotate90(dir);
    handles.perpendicular_start.position = midpoint + perp * quarter;
    handles.perpendicular_end.position = midpoint - perp * quarter;
}

/// Verschiebung eines Langachsen-Endpunkts (Index 0 oder 1).
pub(crate) fn propose_long_axis_move(
    measurement: &Measurement,
    key: HandleKey,
    proposed: Vec2,
    spacing: PixelSpacing,
) -> MoveOutcome {
    if !proposed.is_finite() {
        return MoveOutcome::Rejected;
    }
    let Some(opposite_key) = key.opposite() else {
        return MoveOutcome::Rejected;
    };

    // Solange die Kurzachse gekoppelt ist, folgt sie jeder
    // Langachsen-Änderung durch vollständige Neuberechnung.
    if measurement.short_axis_locked() {
        let mut next = measurement.clone();
        next.handles.get_mut(key).position = proposed;
        recompute_locked_short_axis(&mut next.handles);
        if !next.handles.all_finite() {
            return MoveOutcome::Rejected;
        }
        next.update_diameters(spacing);
        return MoveOutcome::Accepted(next);
    }

    let handles = &measurement.handles;
    let long = handles.long_axis();
    let short = handles.short_axis();
    let stationary = handles.get(opposite_key).position;

    // Aktueller Schnittpunkt der beiden Trägergeraden
    let Some(intersection) = line_intersection(&long, &short) else {
        return MoveOutcome::Rejected;
    };

    let distance_to_stationary = stationary.distance(intersection);
    let new_length = stationary.distance(proposed);
    // Der Drag würde den Drehpunkt über das fixe Ende hinausziehen —
    // die Orientierung wäre undefiniert
    if new_length <= distance_to_stationary {
        return MoveOutcome::Rejected;
    }

    // Neuen Schnittpunkt vom fixen Ende Richtung Zielpunkt wandern lassen
    let ratio = distance_to_stationary / new_length;
    let new_intersection = stationary + (proposed - stationary) * ratio;

    // Vorzeichenbehaftete Abstände der Kurzachsen-Handles zum alten
    // Schnittpunkt (erhält Länge und Aufteilung der Kurzachse)
    let Some(old_dir) = long.direction() else {
        return MoveOutcome::Rejected;
    };
    let old_perp = rotate90(old_dir);
    let signed_start = (handles.perpendicular_start.position - intersection).dot(old_perp);
    let signed_end = (handles.perpendicular_end.position - intersection).dot(old_perp);

    let (new_start, new_end) = match key {
        HandleKey::Start => (proposed, stationary),
        _ => (stationary, proposed),
    };
    let Some(new_dir) = Segment::new(new_start, new_end).direction() else {
        return MoveOutcome::Rejected;
    };
    let new_perp = rotate90(new_dir);

    let mut next = measurement.clone();
    next.handles.get_mut(key).position = proposed;
    next.handles.perpendicular_start.position = new_intersection + new_perp * signed_start;
    next.handles.perpendicular_end.position = new_intersection + new_perp * signed_end;
    if !next.handles.all_finite() {
        return MoveOutcome::Rejected;
    }
    next.update_diameters(spacing);
    MoveOutcome::Accepted(next)
}

/// Verschiebung eines Kurzachsen-Endpunkts (Index 2 oder 3).
pub(crate) fn propose_short_axis_move(
    measurement: &Measurement,
    key: HandleKey,
    proposed: Vec2,
    spacing: PixelSpacing,
    options: &CaliperOptions,
) -> MoveOutcome {
    if !proposed.is_finite() {
        return MoveOutcome::Rejected;
    }
    let Some(opposite_key) = key.opposite() else {
        return MoveOutcome::Rejected;
    };

    let handles = &measurement.handles;
    let long = handles.long_axis();
    // Null-Länge-Guard: ohne Achsenrichtung keine Senkrechte
    let Some(dir) = long.direction() else {
        return MoveOutcome::Rejected;
    };
    let length = long.length();
    let perp = rotate90(dir);

    let fixed = handles.get(opposite_key).position;
    let distance_from_fixed = long.distance_to_point(fixed);
    let distance_from_moved = long.distance_to_point(proposed);
    let total = distance_from_fixed + distance_from_moved;

    // Der bewegte Punkt hat den fixen Punkt relativ zur Langachse
    // nicht überquert
    if fixed.distance(proposed) <= distance_from_fixed {
        return MoveOutcome::Rejected;
    }

    // Gegenhandle auf der anderen Seite der Langachse platzieren,
    // sodass die Kurzachse die Gesamtlänge `total` behält
    let signed_moved = (proposed - long.start).dot(perp);
    let side = if signed_moved >= 0.0 { 1.0 } else { -1.0 };
    let opposite_pos = proposed - perp * side * total;

    // Schnittpunkt-Parameter der neuen Kurzachse entlang der Langachse
    let t = (proposed - long.start).dot(dir);
    let margin = options.endpoint_margin;
    if !(t >= margin && t <= length - margin) {
        if t >= 0.0 && t <= length {
            // Schnittpunkt liegt im Segment, aber unter der
            // Endpunkt-Marge
            return MoveOutcome::Rejected;
        }
        // Schnittpunkt verfehlt das Segment: Langachse am näheren Ende
        // um die Fudge-Marge verlängern und erneut prüfen
        let fudge = options.intersection_fudge;
        if !(t >= -fudge && t <= length + fudge) {
            return MoveOutcome::Rejected;
        }
    }

    let mut next = measurement.clone();
    next.handles.get_mut(key).position = proposed;
    next.handles.get_mut(opposite_key).position = opposite_pos;
    // Die erste manuelle Kurzachsen-Verschiebung löst die automatische
    // Kopplung dauerhaft
    next.handles.perpendicular_start.locked = false;
    if !next.handles.all_finite() {
        return MoveOutcome::Rejected;
    }
    next.update_diameters(spacing);
    MoveOutcome::Accepted(next)
}
