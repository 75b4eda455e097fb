//! Spatial-Index (KD-Tree) für schnelle Handle-Abfragen über alle
//! abgesetzten Messungen hinweg.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::{HandleKey, Measurement};

/// Referenz auf ein Achsen-Handle einer Messung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleRef {
    /// ID der Messung
    pub measurement_id: u64,
    /// Schlüssel des Handles innerhalb der Messung
    pub key: HandleKey,
}

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Gefundenes Handle
    pub handle: HandleRef,
    /// Euklidische Distanz zum Suchpunkt (Bild-Pixel)
    pub distance: f32,
}

/// Read-only Spatial-Index über den Achsen-Handles aller abgesetzten
/// Messungen. Label-Anker werden nicht indexiert (Hit über die
/// Label-Bounding-Box, nicht über Handle-Nähe).
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    entries: Vec<HandleRef>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            entries: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den Achsen-Handles der übergebenen Messungen.
    pub fn from_measurements<'a, I>(measurements: I) -> Self
    where
        I: IntoIterator<Item = &'a Measurement>,
    {
        let mut entries = Vec::new();
        let mut points = Vec::new();

        for measurement in measurements {
            for key in HandleKey::AXIS_KEYS {
                let position = measurement.handles.get(key).position;
                entries.push(HandleRef {
                    measurement_id: measurement.id,
                    key,
                });
                points.push([position.x as f64, position.y as f64]);
            }
        }

        let tree: KdTree<f64, 2> = (&points).into();
        Self { tree, entries }
    }

    /// Gibt die Anzahl indexierter Handles zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück wenn keine Handles im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Findet das nächste Achsen-Handle zur gegebenen Bild-Position.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let handle = *self.entries.get(result.item as usize)?;

        Some(SpatialMatch {
            handle,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Achsen-Handles innerhalb eines Radius, sortiert nach Distanz.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], (radius * radius) as f64)
            .into_iter()
            .filter_map(|entry| {
                let handle = *self.entries.get(entry.item as usize)?;
                Some(SpatialMatch {
                    handle,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_measurements() -> Vec<Measurement> {
        let mut a = Measurement::new(1, Vec2::ZERO);
        a.handles.end.position = Vec2::new(100.0, 0.0);
        a.handles.perpendicular_start.position = Vec2::new(50.0, 25.0);
        a.handles.perpendicular_end.position = Vec2::new(50.0, -25.0);

        let mut b = Measurement::new(2, Vec2::new(200.0, 200.0));
        b.handles.end.position = Vec2::new(260.0, 200.0);
        b.handles.perpendicular_start.position = Vec2::new(230.0, 215.0);
        b.handles.perpendicular_end.position = Vec2::new(230.0, 185.0);

        vec![a, b]
    }

    #[test]
    fn nearest_returns_expected_handle() {
        let measurements = sample_measurements();
        let index = SpatialIndex::from_measurements(measurements.iter());

        let hit = index
            .nearest(Vec2::new(51.0, 24.0))
            .expect("Treffer erwartet");

        assert_eq!(hit.handle.measurement_id, 1);
        assert_eq!(hit.handle.key, HandleKey::PerpendicularStart);
        assert!(hit.distance < 2.0);
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let measurements = sample_measurements();
        let index = SpatialIndex::from_measurements(measurements.iter());

        let matches = index.within_radius(Vec2::new(0.0, 0.0), 60.0);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].handle.key, HandleKey::Start);
        assert!(matches[0].distance <= matches[1].distance);
    }

    #[test]
    fn label_handles_are_not_indexed() {
        let measurements = sample_measurements();
        let index = SpatialIndex::from_measurements(measurements.iter());
        // 2 Messungen × 4 Achsen-Handles
        assert_eq!(index.len(), 8);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(Vec2::ZERO).is_none());
    }
}
