//! Schnittstelle zum externen Label-Layout-Kollaborateur.
//!
//! Die Engine misst keinen Text selbst: der Host liefert zu Textzeilen
//! und Anker-Position eine Bounding-Box, die für Hit-Tests und die
//! Leader-Linien-Führung konsumiert wird.

use glam::Vec2;

use crate::core::BoundingBox;

/// Misst Label-Zeilen zu einer Bounding-Box in Display-Koordinaten.
pub trait LabelLayout {
    /// Berechnet die Bounding-Box für `lines` mit Anker oben links.
    fn measure(&self, lines: &[String], anchor: Vec2) -> BoundingBox;
}

/// Einfaches Layout mit festen Zeichenmetriken.
///
/// Dient als Fallback und für Tests; reale Hosts messen mit ihrer
/// Text-Engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetricsLayout {
    /// Breite eines Zeichens in Display-Pixeln
    pub char_width: f32,
    /// Zeilenhöhe in Display-Pixeln
    pub line_height: f32,
    /// Innenabstand der Box in Display-Pixeln
    pub padding: f32,
}

impl Default for FixedMetricsLayout {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 14.0,
            padding: 4.0,
        }
    }
}

impl LabelLayout for FixedMetricsLayout {
    fn measure(&self, lines: &[String], anchor: Vec2) -> BoundingBox {
        let max_chars = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let width = max_chars as f32 * self.char_width + 2.0 * self.padding;
        let height = lines.len() as f32 * self.line_height + 2.0 * self.padding;
        BoundingBox::new(anchor, anchor + Vec2::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn box_grows_with_longest_line() {
        let layout = FixedMetricsLayout::default();
        let lines = vec!["Target 1".to_string(), "L 42.0 mm".to_string()];
        let bbox = layout.measure(&lines, Vec2::new(100.0, 100.0));

        assert_relative_eq!(bbox.min.x, 100.0);
        // "L 42.0 mm" = 9 Zeichen
        assert_relative_eq!(bbox.max.x, 100.0 + 9.0 * 7.0 + 8.0);
        assert_relative_eq!(bbox.max.y, 100.0 + 2.0 * 14.0 + 8.0);
    }

    #[test]
    fn empty_lines_yield_padding_only() {
        let layout = FixedMetricsLayout::default();
        let bbox = layout.measure(&[], Vec2::ZERO);
        assert_relative_eq!(bbox.max.x, 8.0);
        assert_relative_eq!(bbox.max.y, 8.0);
    }
}
