//! App-Commands: mutierende Operationen auf dem AppState.

use glam::Vec2;

use crate::core::{HandleKey, ImageContext, ViewTransform};
use crate::shared::CaliperOptions;

/// Ausführbarer Command. Ein Intent kann zu mehreren Commands werden;
/// jeder Command wird vollständig verarbeitet bevor der nächste beginnt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Erstellung ──────────────────────────────────────────────
    /// Neue Messung am Ursprungspunkt beginnen (Start = Ende)
    BeginCreation { origin: Vec2, timestamp_ms: f64 },
    /// `end`-Handle der entstehenden Messung dem Zeiger nachführen
    UpdateCreation { image_pos: Vec2 },
    /// Erstellung absetzen (Validierung: Größe, Dauer, Bildgrenzen)
    FinishCreation { timestamp_ms: f64 },
    /// Erstellung verwerfen (Escape, Bildwechsel, Deaktivierung)
    CancelCreation,

    // ── Drags ───────────────────────────────────────────────────
    /// Drag auf ein Handle beginnen
    BeginHandleDrag { measurement_id: u64, key: HandleKey },
    /// Gegriffenes Handle zum Zielpunkt verschieben
    UpdateHandleDrag { image_pos: Vec2 },
    /// Handle-Drag beenden (Handle wird selektiert, Grenzen geprüft)
    EndHandleDrag,
    /// Ganz-Messungs-Drag beginnen (Zeiger nahe Segment, kein Handle)
    BeginWholeDrag { measurement_id: u64, image_pos: Vec2 },
    /// Gesamte Messung um das Zeiger-Delta verschieben
    UpdateWholeDrag { image_pos: Vec2 },
    /// Ganz-Messungs-Drag beenden (Grenzen geprüft)
    EndWholeDrag,

    // ── Hover & Selektion ───────────────────────────────────────
    /// Hover-Flags für die aktuelle Zeiger-Position neu berechnen
    UpdateHover { display_pos: Vec2 },
    /// Selektion und Aktiv-Flags auf allen Messungen aufheben
    ClearSelection,

    // ── Lebenszyklus ────────────────────────────────────────────
    /// Messung löschen
    DeleteMeasurement { measurement_id: u64 },
    /// Relabel-Anforderung an den Host durchreichen
    RequestRelabel { measurement_id: u64 },
    /// Bildkontext setzen (Bildwechsel verwirft das Set)
    SetImageContext { context: ImageContext },
    /// Pixel↔Display-Transformation setzen
    SetViewTransform { transform: ViewTransform },
    /// Laufzeit-Optionen anwenden
    ApplyOptions { options: CaliperOptions },
    /// Annotations-Tool per Registry-Index aktivieren
    SelectAnnotationTool { index: usize },
    /// Laufende Interaktion kooperativ abbrechen
    /// (Tool deaktiviert, Vergrößerung umgeschaltet, Bildwechsel)
    CancelActiveInteraction,
}
