//! Reine 2D-Segment-Geometrie für die Kaliper-Achsen.
//!
//! Layer-neutral: wird von `tools`, `use_cases` und dem Render-Model
//! importiert ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec2;

/// Liniensegment zwischen zwei Punkten (Bild-Pixel-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    /// Erstellt ein Segment von `start` nach `end`.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Gibt die euklidische Länge zurück.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Gibt den Mittelpunkt zurück.
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    /// Einheits-Richtungsvektor von `start` nach `end`.
    ///
    /// Gibt `None` zurück wenn das Segment (nahezu) Null-Länge hat.
    pub fn direction(&self) -> Option<Vec2> {
        let delta = self.end - self.start;
        let length = delta.length();
        if length < f32::EPSILON {
            return None;
        }
        Some(delta / length)
    }

    /// Distanz von `point` zum Segment (Projektion auf [0, Länge] geklemmt).
    pub fn distance_to_point(&self, point: Vec2) -> f32 {
        let delta = self.end - self.start;
        let length_sq = delta.length_squared();
        if length_sq < f32::EPSILON {
            return self.start.distance(point);
        }
        let t = ((point - self.start).dot(delta) / length_sq).clamp(0.0, 1.0);
        (self.start + delta * t).distance(point)
    }

    /// Parameter der ungeklemmten Projektion von `point` auf die Trägergerade,
    /// in Längeneinheiten (0 = `start`, `length()` = `end`).
    ///
    /// Gibt 0.0 zurück wenn das Segment Null-Länge hat.
    pub fn project_param(&self, point: Vec2) -> f32 {
        match self.direction() {
            Some(dir) => (point - self.start).dot(dir),
            None => 0.0,
        }
    }

}

/// Dreht einen Vektor um 90° gegen den Uhrzeigersinn.
pub fn rotate90(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Schnittpunkt der Trägergeraden zweier Segmente (nicht der Segmente selbst).
///
/// Gibt `None` zurück wenn die Geraden parallel sind oder eines der
/// Segmente Null-Länge hat.
pub fn line_intersection(a: &Segment, b: &Segment) -> Option<Vec2> {
    let d1 = a.end - a.start;
    let d2 = b.end - b.start;
    let denom = d1.perp_dot(d2);
    if denom.abs() < f32::EPSILON {
        return None;
    }
    let t = (b.start - a.start).perp_dot(d2) / denom;
    let point = a.start + d1 * t;
    if !point.is_finite() {
        return None;
    }
    Some(point)
}
