//! Render-Szene als expliziter Übergabevertrag zwischen Engine und Host.
//!
//! Lebt im shared-Modul, da `app` sie baut und der externe Renderer sie
//! konsumiert. Alle Koordinaten sind Display-Koordinaten; der Host
//! zeichnet ohne weitere Transformation.

use glam::Vec2;

use crate::core::{BoundingBox, HandleKey};

/// Gezeichnetes Liniensegment in Display-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSegment {
    pub start: Vec2,
    pub end: Vec2,
    /// Farbe (RGBA)
    pub color: [f32; 4],
    /// Linienstärke in Display-Pixeln
    pub thickness: f32,
    /// Gestrichelt zeichnen (Leader-Linie)
    pub dashed: bool,
}

/// Marker für ein sichtbares Handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    /// Schlüssel des Handles innerhalb seiner Messung
    pub key: HandleKey,
    /// Position in Display-Koordinaten
    pub position: Vec2,
    /// Marker-Radius in Display-Pixeln
    pub radius: f32,
    /// Farbe (RGBA), abgeleitet aus den Handle-Flags
    pub color: [f32; 4],
}

/// Textblock des Labels mit Anker und Bounding-Box.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelBlock {
    /// Anker-Position in Display-Koordinaten
    pub anchor: Vec2,
    /// Textzeilen ("Target N", "L …", "W …")
    pub lines: Vec<String>,
    /// Bounding-Box vom Layout-Kollaborateur
    pub bounds: BoundingBox,
}

/// Zeichenbare Primitives einer einzelnen Messung.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementPrimitives {
    /// ID der Messung
    pub measurement_id: u64,
    /// Langachse
    pub long_axis: SceneSegment,
    /// Kurzachse
    pub short_axis: SceneSegment,
    /// Sichtbare Handle-Marker (0–4)
    pub handles: Vec<HandleMarker>,
    /// Selektions-Strahl durch den Arm des einzigen selektierten Handles
    pub selection_ray: Option<SceneSegment>,
    /// Gestrichelte Leader-Linie zur Label-Box
    pub leader_line: Option<SceneSegment>,
    /// Label-Block (nur wenn eine Bounding-Box vorliegt)
    pub label: Option<LabelBlock>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderScene {
    /// Primitives aller Messungen in Ziel-Reihenfolge
    pub measurements: Vec<MeasurementPrimitives>,
}

impl RenderScene {
    /// Gibt zurück, ob etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}
