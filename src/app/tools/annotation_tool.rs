//! AnnotationTool-Trait — Schnittstelle für alle Annotations-Tools.

use glam::Vec2;

use crate::core::{HandleKey, Measurement, PixelSpacing, ViewTransform};
use crate::shared::{CaliperOptions, MeasurementPrimitives};

use super::{HitKind, MoveOutcome};

/// Schnittstelle für alle Annotations-Tools (Kaliper, …).
///
/// Tools sind zustandslos: jede Operation ist eine reine Funktion über
/// Messungs-Daten. Der Controller wählt das aktive Tool über die
/// `ToolRegistry` und wendet akzeptierte Ergebnisse zentral an.
pub trait AnnotationTool {
    /// Anzeigename für die Host-Toolbar
    fn name(&self) -> &str;

    /// Kurzbeschreibung / Tooltip
    fn description(&self) -> &str;

    /// Erstellt eine neue Messung am Ursprungspunkt (Start = Ende = `origin`).
    fn create_measurement(&self, id: u64, origin: Vec2) -> Measurement;

    /// Schlägt eine Handle-Verschiebung vor.
    ///
    /// Pure Funktion: identische Eingaben liefern identische Ergebnisse.
    /// Abgelehnte Verschiebungen lassen den übergebenen Zustand unberührt.
    fn propose_move(
        &self,
        measurement: &Measurement,
        key: HandleKey,
        proposed: Vec2,
        spacing: PixelSpacing,
        options: &CaliperOptions,
    ) -> MoveOutcome;

    /// Hit-Test gegen eine Messung in Display-Koordinaten.
    ///
    /// Prüft Handle-Nähe, die Label-Bounding-Box und Segment-Nähe.
    fn hit_test(
        &self,
        measurement: &Measurement,
        display_pos: Vec2,
        view: &ViewTransform,
        options: &CaliperOptions,
    ) -> Option<HitKind>;

    /// Textzeilen des Labels für die gegebene Ziel-Nummer.
    fn label_lines(
        &self,
        measurement: &Measurement,
        target_number: usize,
        options: &CaliperOptions,
    ) -> Vec<String>;

    /// Projiziert eine Messung auf zeichenbare Primitives (Display-Raum).
    fn render(
        &self,
        measurement: &Measurement,
        target_number: usize,
        view: &ViewTransform,
        options: &CaliperOptions,
    ) -> MeasurementPrimitives;
}
