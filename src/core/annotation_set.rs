//! Der geordnete Container aller Messungen eines Bildes.

use glam::Vec2;
use indexmap::IndexMap;

use super::{Measurement, SpatialIndex, SpatialMatch};

/// Container für alle Messungen des aktuell angezeigten Bildes.
///
/// Die Einfüge-Reihenfolge ist stabil und bestimmt die Ziel-Nummerierung
/// ("Target N") sowie die Render-Reihenfolge.
#[derive(Debug, Clone)]
pub struct AnnotationSet {
    measurements: IndexMap<u64, Measurement>,
    next_id: u64,
    /// Persistenter Spatial-Index über den Handles abgesetzter Messungen
    spatial_index: SpatialIndex,
}

impl AnnotationSet {
    /// Erstellt ein leeres Annotation-Set.
    pub fn new() -> Self {
        Self {
            measurements: IndexMap::new(),
            next_id: 1,
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Erzeugt eine neue eindeutige Messungs-ID.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fügt eine Messung hinzu.
    pub fn insert(&mut self, measurement: Measurement) {
        self.measurements.insert(measurement.id, measurement);
        self.rebuild_spatial_index();
    }

    /// Entfernt eine Messung.
    pub fn remove(&mut self, id: u64) -> Option<Measurement> {
        let removed = self.measurements.shift_remove(&id);
        if removed.is_some() {
            self.rebuild_spatial_index();
        }
        removed
    }

    /// Entfernt alle Messungen (z.B. bei Bildwechsel).
    pub fn clear(&mut self) {
        self.measurements.clear();
        self.spatial_index = SpatialIndex::empty();
    }

    /// Gibt eine Referenz auf die Messung zurück.
    pub fn get(&self, id: u64) -> Option<&Measurement> {
        self.measurements.get(&id)
    }

    /// Gibt eine mutable Referenz auf die Messung zurück.
    ///
    /// Nach Geometrie-Änderungen muss `rebuild_spatial_index` gerufen werden.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Measurement> {
        self.measurements.get_mut(&id)
    }

    /// Iteriert über alle Messungen in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Measurement> {
        self.measurements.values()
    }

    /// Iteriert mutable über alle Messungen in Einfüge-Reihenfolge.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Measurement> {
        self.measurements.values_mut()
    }

    /// Iteriert über alle abgesetzten Messungen.
    pub fn iter_settled(&self) -> impl DoubleEndedIterator<Item = &Measurement> {
        self.measurements.values().filter(|m| m.is_settled())
    }

    /// Gibt die Anzahl der Messungen zurück.
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Gibt `true` zurück wenn keine Messungen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Stabile 1-basierte Ziel-Nummer einer Messung ("Target N").
    pub fn target_number(&self, id: u64) -> Option<usize> {
        self.measurements.get_index_of(&id).map(|index| index + 1)
    }

    /// Baut den Spatial-Index über den Achsen-Handles aller abgesetzten
    /// Messungen neu auf. Einzige autoritative Stelle; Rendering und
    /// Hit-Tests lesen nur.
    pub fn rebuild_spatial_index(&mut self) {
        let index = SpatialIndex::from_measurements(self.iter_settled());
        self.spatial_index = index;
    }

    /// Findet das nächste Achsen-Handle einer abgesetzten Messung.
    pub fn nearest_axis_handle(&self, query: Vec2) -> Option<SpatialMatch> {
        self.spatial_index.nearest(query)
    }
}

impl Default for AnnotationSet {
    fn default() -> Self {
        Self::new()
    }
}
