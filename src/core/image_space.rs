//! Bildraum-Typen: Pixel-Spacing, Bildgrenzen, Bounding-Boxen und die
//! Transformation zwischen Bild-Pixel- und Display-Koordinaten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Segment;

/// Physikalische Pixel-Abstände eines Bildes (Einheiten pro Pixel,
/// typisch mm), getrennt nach Zeile und Spalte.
///
/// Wird vom Host geliefert (Kalibrierung); ohne gültiges Spacing darf
/// der Tool-Zustand nicht instanziiert werden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSpacing {
    /// Physikalischer Abstand zweier Zeilen (Y-Richtung)
    pub row: f32,
    /// Physikalischer Abstand zweier Spalten (X-Richtung)
    pub column: f32,
}

impl PixelSpacing {
    /// Erstellt ein Pixel-Spacing aus Zeilen- und Spaltenabstand.
    pub fn new(row: f32, column: f32) -> Self {
        Self { row, column }
    }

    /// Isotropes Spacing (Zeile = Spalte).
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value)
    }

    /// Gibt `true` zurück wenn beide Abstände endlich und positiv sind.
    pub fn is_valid(&self) -> bool {
        self.row.is_finite() && self.column.is_finite() && self.row > 0.0 && self.column > 0.0
    }

    /// Physikalische Länge eines Segments (Spacing pro Komponente).
    pub fn segment_length(&self, segment: &Segment) -> f32 {
        let dx = (segment.end.x - segment.start.x) * self.column;
        let dy = (segment.end.y - segment.start.y) * self.row;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Bildgrenzen in Pixel-Koordinaten (Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageBounds {
    pub width: f32,
    pub height: f32,
}

impl ImageBounds {
    /// Erstellt Bildgrenzen aus Breite und Höhe.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Gibt `true` zurück wenn der Punkt innerhalb des Bildes liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

/// Identität und Kalibrierung des aktuell angezeigten Bildes.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageContext {
    /// Host-seitige Bild-Identität (z.B. Instance-UID)
    pub image_id: String,
    /// Bildgrenzen in Pixeln
    pub bounds: ImageBounds,
    /// Physikalisches Pixel-Spacing
    pub spacing: PixelSpacing,
}

impl ImageContext {
    /// Erstellt einen Bild-Kontext.
    pub fn new(image_id: impl Into<String>, bounds: ImageBounds, spacing: PixelSpacing) -> Self {
        Self {
            image_id: image_id.into(),
            bounds,
            spacing,
        }
    }
}

/// Achsenparallele Bounding-Box (beim Label: Display-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// Erstellt eine Box aus Minimum- und Maximum-Ecke.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Gibt `true` zurück wenn der Punkt innerhalb der Box liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Gibt den Mittelpunkt der Box zurück.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Mittelpunkte der vier Seiten (links, rechts, oben, unten).
    pub fn side_midpoints(&self) -> [Vec2; 4] {
        let center = self.center();
        [
            Vec2::new(self.min.x, center.y),
            Vec2::new(self.max.x, center.y),
            Vec2::new(center.x, self.min.y),
            Vec2::new(center.x, self.max.y),
        ]
    }
}

/// Transformation zwischen Bild-Pixel- und Display-Koordinaten.
///
/// Uniform skaliert (keine Rotation); wird vom Host bei Pan/Zoom
/// aktualisiert. Hit-Schwellen sind in Display-Pixeln definiert und
/// werden über `display_radius_to_image` in den Bildraum übersetzt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Display-Pixel pro Bild-Pixel
    pub scale: f32,
    /// Display-Position des Bild-Ursprungs
    pub offset: Vec2,
}

impl ViewTransform {
    /// Identitäts-Transformation (1 Bild-Pixel = 1 Display-Pixel).
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Konvertiert Bild-Pixel- zu Display-Koordinaten.
    pub fn to_display(&self, image_pos: Vec2) -> Vec2 {
        image_pos * self.scale + self.offset
    }

    /// Konvertiert Display- zu Bild-Pixel-Koordinaten.
    pub fn to_image(&self, display_pos: Vec2) -> Vec2 {
        (display_pos - self.offset) / self.scale.max(f32::EPSILON)
    }

    /// Übersetzt einen Radius von Display- in Bild-Pixel.
    pub fn display_radius_to_image(&self, radius: f32) -> f32 {
        radius / self.scale.max(f32::EPSILON)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}
