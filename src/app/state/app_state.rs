//! Hauptzustand der Kaliper-Engine.

use crate::app::tools::ToolRegistry;
use crate::app::CommandLog;
use crate::core::{AnnotationSet, ImageContext, ViewTransform};
use crate::shared::{CaliperOptions, FixedMetricsLayout, LabelLayout};

use super::{HostSignals, InteractionPhase};

/// Hauptzustand der Engine für genau ein angezeigtes Bild.
pub struct AppState {
    /// Alle Messungen des aktuellen Bildes
    pub annotations: AnnotationSet,
    /// Identität und Kalibrierung des aktuellen Bildes
    pub image: ImageContext,
    /// Transformation Bild-Pixel ↔ Display (vom Host bei Pan/Zoom gesetzt)
    pub view: ViewTransform,
    /// Aktuelle Interaktionsphase
    pub phase: InteractionPhase,
    /// Registrierte Annotations-Tools
    pub tools: ToolRegistry,
    /// Externer Label-Layout-Kollaborateur
    pub label_layout: Box<dyn LabelLayout>,
    /// Laufzeit-Optionen (Schwellen, Margen, Farben)
    pub options: CaliperOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Gesammelte Änderungs-Signale an den Host
    pub signals: HostSignals,
}

impl AppState {
    /// Erstellt den Engine-Zustand für ein Bild.
    ///
    /// Gültiges Pixel-Spacing ist eine Precondition des Aufrufers; ohne
    /// Kalibrierung darf das Tool nicht instanziiert werden.
    pub fn new(
        image: ImageContext,
        options: CaliperOptions,
        label_layout: Box<dyn LabelLayout>,
    ) -> Self {
        debug_assert!(
            image.spacing.is_valid(),
            "Pixel-Spacing muss gültig sein (Caller-Precondition)"
        );
        Self {
            annotations: AnnotationSet::new(),
            image,
            view: ViewTransform::identity(),
            phase: InteractionPhase::Idle,
            tools: ToolRegistry::new(),
            label_layout,
            options,
            command_log: CommandLog::new(),
            signals: HostSignals::default(),
        }
    }

    /// Erstellt den Zustand mit Standard-Optionen und festem Label-Layout.
    pub fn with_defaults(image: ImageContext) -> Self {
        Self::new(
            image,
            CaliperOptions::default(),
            Box::new(FixedMetricsLayout::default()),
        )
    }

    /// Gibt die Anzahl der Messungen zurück (für Host-Anzeige).
    pub fn measurement_count(&self) -> usize {
        self.annotations.len()
    }
}
