//! Die Kaliper-Messung: Langachse, Kurzachse, Label-Anker und
//! abgeleitete Durchmesser.

use glam::Vec2;

use super::{BoundingBox, HandleKey, HandleSet, ImageBounds, PixelSpacing};

/// Bidirektionale Kaliper-Messung.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Eindeutige ID innerhalb des Annotation-Sets
    pub id: u64,
    /// Die fünf Handles (Langachse, Kurzachse, Label)
    pub handles: HandleSet,
    /// Messung wird gerade erstellt (Pointer noch gedrückt)
    pub is_creating: bool,
    /// Messung ist im Fokus des Zeigers
    pub active: bool,
    /// Messung wurde verworfen (Erstellung abgebrochen)
    pub cancelled: bool,
    /// Längster Durchmesser in physikalischen Einheiten (abgeleitet)
    pub longest_diameter: f32,
    /// Kürzester Durchmesser in physikalischen Einheiten (abgeleitet)
    pub shortest_diameter: f32,
    /// Bounding-Box des Labels in Display-Koordinaten
    /// (vom externen Layout-Kollaborateur, siehe `LabelLayout`)
    pub label_bounds: Option<BoundingBox>,
}

impl Measurement {
    /// Erstellt eine neue Messung mit allen Handles am Ursprungspunkt.
    pub fn new(id: u64, origin: Vec2) -> Self {
        Self {
            id,
            handles: HandleSet::from_origin(origin),
            is_creating: true,
            active: true,
            cancelled: false,
            longest_diameter: 0.0,
            shortest_diameter: 0.0,
            label_bounds: None,
        }
    }

    /// Gibt `true` zurück solange die Kurzachse der Langachse automatisch folgt.
    pub fn short_axis_locked(&self) -> bool {
        self.handles.perpendicular_start.locked
    }

    /// Gibt `true` zurück wenn die Messung abgesetzt (nicht mehr in Erstellung) ist.
    pub fn is_settled(&self) -> bool {
        !self.is_creating && !self.cancelled
    }

    /// Berechnet beide Durchmesser neu und tauscht bei Bedarf die Rollen,
    /// sodass stets `longest_diameter >= shortest_diameter` gilt.
    /// Die Handles selbst werden nie getauscht.
    pub fn update_diameters(&mut self, spacing: PixelSpacing) {
        let long = spacing.segment_length(&self.handles.long_axis());
        let short = spacing.segment_length(&self.handles.short_axis());
        self.longest_diameter = long.max(short);
        self.shortest_diameter = long.min(short);
    }

    /// Genau ein ausgewähltes Achsen-Handle, sonst `None`.
    pub fn single_selected_axis_handle(&self) -> Option<HandleKey> {
        let mut found = None;
        for key in HandleKey::AXIS_KEYS {
            if self.handles.get(key).selected {
                if found.is_some() {
                    return None;
                }
                found = Some(key);
            }
        }
        found
    }

    /// Setzt `selected`/`active` auf allen Handles zurück.
    ///
    /// Gibt `true` zurück wenn sich dadurch etwas geändert hat.
    pub fn clear_selection(&mut self) -> bool {
        let mut changed = self.active;
        self.active = false;
        for key in HandleKey::AXIS_KEYS {
            let handle = self.handles.get_mut(key);
            changed |= handle.selected || handle.active;
            handle.selected = false;
            handle.active = false;
        }
        changed
    }

    /// Prüft, ob alle grenzpflichtigen Handles innerhalb des Bildes liegen.
    ///
    /// Handles mit `allowed_outside_image` (Label) werden übersprungen.
    pub fn handles_within(&self, bounds: &ImageBounds) -> bool {
        self.handles
            .iter()
            .filter(|(_, handle)| !handle.allowed_outside_image)
            .all(|(_, handle)| bounds.contains(handle.position))
    }

    /// Verschiebt die gesamte Messung um `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.handles.translate(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn settled_measurement() -> Measurement {
        let mut m = Measurement::new(1, Vec2::ZERO);
        m.handles.end.position = Vec2::new(100.0, 0.0);
        m.handles.perpendicular_start.position = Vec2::new(50.0, 25.0);
        m.handles.perpendicular_end.position = Vec2::new(50.0, -25.0);
        m.is_creating = false;
        m
    }

    #[test]
    fn diameters_swap_roles_but_not_handles() {
        let mut m = settled_measurement();
        // Kurzachse physisch länger machen
        m.handles.perpendicular_start.position = Vec2::new(50.0, 120.0);
        m.handles.perpendicular_end.position = Vec2::new(50.0, -120.0);
        m.update_diameters(PixelSpacing::uniform(1.0));

        assert_relative_eq!(m.longest_diameter, 240.0);
        assert_relative_eq!(m.shortest_diameter, 100.0);
        // Handles unverändert: Index 0/1 bleibt die (kürzere) Langachse
        assert_relative_eq!(m.handles.long_axis().length(), 100.0);
    }

    #[test]
    fn anisotropic_spacing_scales_each_component() {
        let mut m = settled_measurement();
        m.update_diameters(PixelSpacing::new(2.0, 1.0));

        // Langachse rein horizontal: 100 * 1.0; Kurzachse rein vertikal: 50 * 2.0
        assert_relative_eq!(m.longest_diameter, 100.0);
        assert_relative_eq!(m.shortest_diameter, 100.0);
    }

    #[test]
    fn single_selection_detects_exactly_one() {
        let mut m = settled_measurement();
        assert_eq!(m.single_selected_axis_handle(), None);

        m.handles.end.selected = true;
        assert_eq!(m.single_selected_axis_handle(), Some(HandleKey::End));

        m.handles.start.selected = true;
        assert_eq!(m.single_selected_axis_handle(), None);
    }

    #[test]
    fn bounds_check_skips_label() {
        let mut m = settled_measurement();
        m.handles.label.position = Vec2::new(-50.0, -50.0);
        assert!(m.handles_within(&ImageBounds::new(512.0, 512.0)));

        m.handles.end.position = Vec2::new(600.0, 0.0);
        assert!(!m.handles_within(&ImageBounds::new(512.0, 512.0)));
    }
}
