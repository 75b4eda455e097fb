use approx::assert_relative_eq;
use glam::Vec2;

use super::BidirectionalTool;
use crate::app::tools::{AnnotationTool, HitKind, MoveOutcome};
use crate::core::{BoundingBox, HandleKey, Measurement, PixelSpacing, ViewTransform};
use crate::shared::CaliperOptions;

fn spacing() -> PixelSpacing {
    PixelSpacing::uniform(1.0)
}

fn options() -> CaliperOptions {
    CaliperOptions::default()
}

/// Abgesetzte Messung mit manuell platzierter (entkoppelter) Kurzachse:
/// Langachse (0,0)→(100,0), Kurzachse (50,25)→(50,-25).
fn settled_measurement() -> Measurement {
    let mut m = Measurement::new(1, Vec2::ZERO);
    m.handles.end.position = Vec2::new(100.0, 0.0);
    m.handles.perpendicular_start.position = Vec2::new(50.0, 25.0);
    m.handles.perpendicular_end.position = Vec2::new(50.0, -25.0);
    m.handles.perpendicular_start.locked = false;
    m.is_creating = false;
    m.update_diameters(spacing());
    m
}

/// Frisch erstellte Messung (0,0)→(100,0), Kurzachse noch gekoppelt.
fn locked_measurement() -> Measurement {
    let tool = BidirectionalTool::new();
    let created = tool.create_measurement(1, Vec2::ZERO);
    match tool.propose_move(
        &created,
        HandleKey::End,
        Vec2::new(100.0, 0.0),
        spacing(),
        &options(),
    ) {
        MoveOutcome::Accepted(m) => m,
        MoveOutcome::Rejected => panic!("Erstellungs-Drag sollte akzeptiert werden"),
    }
}

fn accept(outcome: MoveOutcome) -> Measurement {
    match outcome {
        MoveOutcome::Accepted(m) => m,
        MoveOutcome::Rejected => panic!("Akzeptierte Verschiebung erwartet"),
    }
}

// ── Erstellung / gekoppelte Kurzachse ────────────────────────────

#[test]
fn creation_drag_centers_locked_short_axis_at_half_length() {
    let m = locked_measurement();

    let short = m.handles.short_axis();
    assert_relative_eq!(short.midpoint().x, 50.0);
    assert_relative_eq!(short.midpoint().y, 0.0);
    assert_relative_eq!(short.length(), 50.0);

    let dir = short.direction().expect("Richtung erwartet");
    assert_relative_eq!(dir.x, 0.0);
    assert_relative_eq!(dir.y.abs(), 1.0);
}

#[test]
fn locked_long_axis_move_recomputes_short_axis_from_scratch() {
    let tool = BidirectionalTool::new();
    let m = locked_measurement();

    let moved = accept(tool.propose_move(
        &m,
        HandleKey::End,
        Vec2::new(200.0, 0.0),
        spacing(),
        &options(),
    ));

    let short = moved.handles.short_axis();
    assert_relative_eq!(short.midpoint().x, 100.0);
    assert_relative_eq!(short.length(), 100.0);

    let long_dir = moved.handles.long_axis().direction().expect("Richtung");
    let short_dir = short.direction().expect("Richtung");
    assert_relative_eq!(long_dir.dot(short_dir), 0.0, epsilon = 1e-5);
}

#[test]
fn unlocked_long_axis_move_repositions_short_axis_rigidly() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    let moved = accept(tool.propose_move(
        &m,
        HandleKey::End,
        Vec2::new(200.0, 0.0),
        spacing(),
        &options(),
    ));

    // Länge und Aufteilung der Kurzachse bleiben erhalten
    let short = moved.handles.short_axis();
    assert_relative_eq!(short.length(), 50.0, epsilon = 1e-4);

    // Schnittpunkt wandert mit dem Verhältnis 50/200 vom fixen Ende
    assert_relative_eq!(short.midpoint().x, 50.0, epsilon = 1e-4);
    assert_relative_eq!(short.midpoint().y, 0.0, epsilon = 1e-4);

    let long_dir = moved.handles.long_axis().direction().expect("Richtung");
    let short_dir = short.direction().expect("Richtung");
    assert_relative_eq!(long_dir.dot(short_dir), 0.0, epsilon = 1e-5);
}

#[test]
fn zero_length_long_axis_collapses_locked_short_axis() {
    let tool = BidirectionalTool::new();
    let created = tool.create_measurement(7, Vec2::new(10.0, 10.0));

    let moved = accept(tool.propose_move(
        &created,
        HandleKey::End,
        Vec2::new(10.0, 10.0),
        spacing(),
        &options(),
    ));

    assert_eq!(
        moved.handles.perpendicular_start.position,
        Vec2::new(10.0, 10.0)
    );
    assert_eq!(
        moved.handles.perpendicular_end.position,
        Vec2::new(10.0, 10.0)
    );
    assert_relative_eq!(moved.longest_diameter, 0.0);
}

// ── Langachsen-Verschiebung (Index 0/1) ──────────────────────────

#[test]
fn pivot_rejection_keeps_end_unchanged() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    // Schnittpunkt bei (50,0), fixes Ende (0,0): neue Länge 30 <= 50
    let outcome = tool.propose_move(
        &m,
        HandleKey::End,
        Vec2::new(30.0, 0.0),
        spacing(),
        &options(),
    );

    assert_eq!(outcome, MoveOutcome::Rejected);
    assert_eq!(m.handles.end.position, Vec2::new(100.0, 0.0));
}

#[test]
fn accepted_long_axis_move_stays_perpendicular() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    let moved = accept(tool.propose_move(
        &m,
        HandleKey::End,
        Vec2::new(150.0, 80.0),
        spacing(),
        &options(),
    ));

    let long_dir = moved.handles.long_axis().direction().expect("Richtung");
    let short_dir = moved.handles.short_axis().direction().expect("Richtung");
    assert_relative_eq!(long_dir.dot(short_dir), 0.0, epsilon = 1e-5);
    assert_relative_eq!(moved.handles.short_axis().length(), 50.0, epsilon = 1e-3);
    assert_eq!(moved.handles.end.position, Vec2::new(150.0, 80.0));
}

#[test]
fn dragging_start_walks_intersection_from_the_end() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    let moved = accept(tool.propose_move(
        &m,
        HandleKey::Start,
        Vec2::new(-100.0, 0.0),
        spacing(),
        &options(),
    ));

    // Fixes Ende (100,0), Abstand zum Schnittpunkt 50, neue Länge 200:
    // neuer Schnittpunkt bei (100,0) + 50/200 * (-200,0) = (50,0)
    let short = moved.handles.short_axis();
    assert_relative_eq!(short.midpoint().x, 50.0, epsilon = 1e-4);
    assert_relative_eq!(short.length(), 50.0, epsilon = 1e-4);
    assert_eq!(moved.handles.start.position, Vec2::new(-100.0, 0.0));
}

#[test]
fn nan_coordinates_are_rejected() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    let outcome = tool.propose_move(
        &m,
        HandleKey::End,
        Vec2::new(f32::NAN, 0.0),
        spacing(),
        &options(),
    );
    assert_eq!(outcome, MoveOutcome::Rejected);
}

// ── Kurzachsen-Verschiebung (Index 2/3) ──────────────────────────

#[test]
fn short_axis_drag_preserves_total_length() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    // dist(fix) = 25, dist(neu) = 55 → total = 80
    let moved = accept(tool.propose_move(
        &m,
        HandleKey::PerpendicularStart,
        Vec2::new(50.0, 55.0),
        spacing(),
        &options(),
    ));

    assert_relative_eq!(moved.handles.short_axis().length(), 80.0, epsilon = 1e-4);
    assert!(!moved.short_axis_locked());
}

#[test]
fn short_axis_move_rejects_without_crossing() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    // Zielpunkt näher am fixen Handle als dessen Achsenabstand
    let outcome = tool.propose_move(
        &m,
        HandleKey::PerpendicularStart,
        Vec2::new(50.0, -10.0),
        spacing(),
        &options(),
    );

    assert_eq!(outcome, MoveOutcome::Rejected);
    assert_eq!(
        m.handles.perpendicular_start.position,
        Vec2::new(50.0, 25.0)
    );
}

#[test]
fn margin_rejection_keeps_perpendicular_start_unchanged() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    // Schnittpunkt bei t = 2 — innerhalb des Segments, aber unter der
    // 3er-Marge zum Startpunkt
    let outcome = tool.propose_move(
        &m,
        HandleKey::PerpendicularStart,
        Vec2::new(2.0, 10.0),
        spacing(),
        &options(),
    );

    assert_eq!(outcome, MoveOutcome::Rejected);
    assert_eq!(
        m.handles.perpendicular_start.position,
        Vec2::new(50.0, 25.0)
    );
}

#[test]
fn fudge_fallback_rescues_near_miss_intersections() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    // t = -0.5: verfehlt das Segment, liegt aber in der Fudge-Marge
    let moved = accept(tool.propose_move(
        &m,
        HandleKey::PerpendicularStart,
        Vec2::new(-0.5, 10.0),
        spacing(),
        &options(),
    ));

    // total = 25 + 10 = 35
    assert_relative_eq!(moved.handles.short_axis().length(), 35.0, epsilon = 1e-4);
}

#[test]
fn fudge_fallback_rejects_far_miss_intersections() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    let outcome = tool.propose_move(
        &m,
        HandleKey::PerpendicularStart,
        Vec2::new(-5.0, 10.0),
        spacing(),
        &options(),
    );
    assert_eq!(outcome, MoveOutcome::Rejected);
}

#[test]
fn opposite_handle_lands_on_the_other_side() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    let moved = accept(tool.propose_move(
        &m,
        HandleKey::PerpendicularEnd,
        Vec2::new(50.0, -40.0),
        spacing(),
        &options(),
    ));

    // total = 25 + 40 = 65; Gegenhandle bei (50, -40 + 65) = (50, 25)
    assert_eq!(
        moved.handles.perpendicular_end.position,
        Vec2::new(50.0, -40.0)
    );
    assert_relative_eq!(
        moved.handles.perpendicular_start.position.y,
        25.0,
        epsilon = 1e-4
    );
}

#[test]
fn diameter_ordering_swaps_roles_not_handles() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    let moved = accept(tool.propose_move(
        &m,
        HandleKey::PerpendicularStart,
        Vec2::new(50.0, 120.0),
        spacing(),
        &options(),
    ));

    // Kurzachse (145) ist jetzt physisch länger als die Langachse (100)
    assert_relative_eq!(moved.longest_diameter, 145.0, epsilon = 1e-3);
    assert_relative_eq!(moved.shortest_diameter, 100.0, epsilon = 1e-3);
    assert_relative_eq!(moved.handles.long_axis().length(), 100.0);
}

#[test]
fn rejected_short_axis_move_keeps_lock() {
    let tool = BidirectionalTool::new();
    let mut m = locked_measurement();
    m.is_creating = false;

    let outcome = tool.propose_move(
        &m,
        HandleKey::PerpendicularStart,
        Vec2::new(50.0, -5.0),
        spacing(),
        &options(),
    );

    assert_eq!(outcome, MoveOutcome::Rejected);
    assert!(m.short_axis_locked());
}

#[test]
fn short_axis_move_on_degenerate_long_axis_is_rejected() {
    let tool = BidirectionalTool::new();
    let mut m = settled_measurement();
    m.handles.end.position = m.handles.start.position;

    let outcome = tool.propose_move(
        &m,
        HandleKey::PerpendicularStart,
        Vec2::new(10.0, 10.0),
        spacing(),
        &options(),
    );
    assert_eq!(outcome, MoveOutcome::Rejected);
}

// ── Purheit / Label ──────────────────────────────────────────────

#[test]
fn propose_move_is_idempotent() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();
    let proposed = Vec2::new(160.0, 45.0);

    let first = tool.propose_move(&m, HandleKey::End, proposed, spacing(), &options());
    let second = tool.propose_move(&m, HandleKey::End, proposed, spacing(), &options());

    assert_eq!(first, second);
}

#[test]
fn label_moves_freely_without_geometry_change() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    let moved = accept(tool.propose_move(
        &m,
        HandleKey::Label,
        Vec2::new(300.0, -40.0),
        spacing(),
        &options(),
    ));

    assert_eq!(moved.handles.label.position, Vec2::new(300.0, -40.0));
    assert_eq!(moved.handles.long_axis(), m.handles.long_axis());
    assert_eq!(moved.handles.short_axis(), m.handles.short_axis());
}

// ── Hit-Test ─────────────────────────────────────────────────────

#[test]
fn hit_test_prefers_handles_over_body() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();
    let view = ViewTransform::identity();

    let hit = tool.hit_test(&m, Vec2::new(101.0, 1.0), &view, &options());
    assert_eq!(hit, Some(HitKind::Handle(HandleKey::End)));

    let hit = tool.hit_test(&m, Vec2::new(25.0, 4.0), &view, &options());
    assert_eq!(hit, Some(HitKind::Body));

    let hit = tool.hit_test(&m, Vec2::new(25.0, 40.0), &view, &options());
    assert_eq!(hit, None);
}

#[test]
fn hit_test_uses_display_space_threshold() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();
    // 2× Zoom: 5 Display-Pixel neben dem Handle sind 2.5 Bild-Pixel
    let view = ViewTransform {
        scale: 2.0,
        offset: Vec2::ZERO,
    };

    let hit = tool.hit_test(&m, Vec2::new(205.0, 0.0), &view, &options());
    assert_eq!(hit, Some(HitKind::Handle(HandleKey::End)));

    // 14 Display-Pixel daneben: außerhalb der 6er-Schwelle
    let hit = tool.hit_test(&m, Vec2::new(214.0, 0.0), &view, &options());
    assert_eq!(hit, None);
}

#[test]
fn hit_inside_label_box_targets_the_label_handle() {
    let tool = BidirectionalTool::new();
    let mut m = settled_measurement();
    m.label_bounds = Some(BoundingBox::new(
        Vec2::new(200.0, 200.0),
        Vec2::new(260.0, 240.0),
    ));

    let hit = tool.hit_test(
        &m,
        Vec2::new(230.0, 220.0),
        &ViewTransform::identity(),
        &options(),
    );
    assert_eq!(hit, Some(HitKind::Handle(HandleKey::Label)));
}

// ── Render-Projektion ────────────────────────────────────────────

#[test]
fn label_lines_report_both_diameters() {
    let tool = BidirectionalTool::new();
    let m = settled_measurement();

    let lines = tool.label_lines(&m, 3, &options());
    assert_eq!(lines[0], "Target 3");
    assert_eq!(lines[1], "L 100.0 mm");
    assert_eq!(lines[2], "W 50.0 mm");
}

#[test]
fn selection_ray_requires_exactly_one_selected_handle() {
    let tool = BidirectionalTool::new();
    let view = ViewTransform::identity();
    let mut m = settled_measurement();

    let primitives = tool.render(&m, 1, &view, &options());
    assert!(primitives.selection_ray.is_none());

    m.handles.end.selected = true;
    let primitives = tool.render(&m, 1, &view, &options());
    let ray = primitives.selection_ray.expect("Strahl erwartet");
    // Strahl endet am gegenüberliegenden Arm-Ende (Start-Handle)
    assert_eq!(ray.end, Vec2::ZERO);
    assert!(ray.start.x > 1000.0);

    m.handles.start.selected = true;
    let primitives = tool.render(&m, 1, &view, &options());
    assert!(primitives.selection_ray.is_none());
}

#[test]
fn leader_line_connects_nearest_points() {
    let tool = BidirectionalTool::new();
    let mut m = settled_measurement();
    // Box rechts neben dem Langachsen-Ende
    m.label_bounds = Some(BoundingBox::new(
        Vec2::new(140.0, -10.0),
        Vec2::new(200.0, 20.0),
    ));

    let primitives = tool.render(&m, 1, &ViewTransform::identity(), &options());
    let leader = primitives.leader_line.expect("Leader-Linie erwartet");

    assert!(leader.dashed);
    // Quelle: Langachsen-Ende (100,0) ist der Box am nächsten
    assert_eq!(leader.start, Vec2::new(100.0, 0.0));
    // Ziel: linker Seiten-Mittelpunkt der Box
    assert_eq!(leader.end, Vec2::new(140.0, 5.0));
}

#[test]
fn hidden_measurement_renders_no_markers() {
    let tool = BidirectionalTool::new();
    let mut m = settled_measurement();
    m.active = false;

    let primitives = tool.render(&m, 1, &ViewTransform::identity(), &options());
    assert!(primitives.handles.is_empty());

    m.handles.start.hover = true;
    let primitives = tool.render(&m, 1, &ViewTransform::identity(), &options());
    assert_eq!(primitives.handles.len(), 1);
    assert_eq!(primitives.handles[0].key, HandleKey::Start);
}
