//! App-Intents: Eingaben aus Host/UI ohne direkte Mutationslogik.
//!
//! Zeiger-Intents tragen Bild- und Display-Koordinaten sowie einen
//! Host-Zeitstempel; die Zustandsmaschine besitzt keine eigene Uhr.

use glam::Vec2;

use crate::core::{ImageContext, ViewTransform};
use crate::shared::CaliperOptions;

/// Eingabe-Ereignis vom Host. Wird über das Intent→Command-Mapping in
/// ausführbare `AppCommand`s übersetzt.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primärtaste gedrückt
    PointerPressed {
        image_pos: Vec2,
        display_pos: Vec2,
        timestamp_ms: f64,
    },
    /// Zeiger bewegt (mit oder ohne gedrückte Taste)
    PointerMoved { image_pos: Vec2, display_pos: Vec2 },
    /// Primärtaste losgelassen
    PointerReleased {
        image_pos: Vec2,
        display_pos: Vec2,
        timestamp_ms: f64,
    },
    /// Doppelklick (Relabel-Durchreichung an den externen Kollaborateur)
    DoubleClicked { display_pos: Vec2 },
    /// Escape gedrückt (Erstellung abbrechen bzw. Selektion aufheben)
    EscapePressed,
    /// Externe Lösch-Anforderung (Delete/Ctrl+D lebt beim Host)
    DeleteMeasurementRequested { measurement_id: u64 },
    /// Angezeigtes Bild hat die Identität gewechselt
    ImageChanged { context: ImageContext },
    /// Pixel↔Display-Transformation hat sich geändert (Pan/Zoom)
    ViewTransformChanged { transform: ViewTransform },
    /// Das Tool wurde host-seitig deaktiviert
    ToolDeactivated,
    /// Vergrößerungs-Modus des Viewers wurde umgeschaltet
    EnlargementToggled,
    /// Messungen eines anderen Viewports wurden aktiviert
    MeasurementsActivatedElsewhere,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: CaliperOptions },
    /// Annotations-Tool per Registry-Index wechseln
    SelectAnnotationToolRequested { index: usize },
}
