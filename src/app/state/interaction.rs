//! Phasen der Interaktions-Zustandsmaschine.

use glam::Vec2;

use crate::core::HandleKey;

/// Ziel eines aktiven Drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragTarget {
    /// Einzelnes Handle (Achsen-Endpunkt oder Label-Anker)
    Handle(HandleKey),
    /// Gesamte Messung (Translation aller Handles)
    Whole,
}

/// Phase der Interaktions-Zustandsmaschine.
///
/// `Idle → Creating → {abgesetzt | verworfen}`; aus `Idle` heraus
/// starten Handle- und Ganz-Messungs-Drags. Hover-Tracking läuft nur
/// in `Idle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionPhase {
    /// Keine aktive Interaktion
    Idle,
    /// Messung wird erstellt; das `end`-Handle folgt dem Zeiger
    Creating {
        /// ID der entstehenden Messung
        measurement_id: u64,
        /// Host-Zeitstempel des Erstellungs-Beginns (Millisekunden)
        started_at_ms: f64,
    },
    /// Aktiver Drag auf ein Handle oder die gesamte Messung
    Dragging {
        /// ID der gezogenen Messung
        measurement_id: u64,
        /// Handle oder Ganz-Messung
        target: DragTarget,
        /// Letzte Zeiger-Position in Bild-Pixeln (für Ganz-Drag-Deltas)
        last_pos: Vec2,
    },
}

impl InteractionPhase {
    /// Gibt `true` zurück wenn keine Interaktion aktiv ist.
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionPhase::Idle)
    }

    /// Gibt `true` zurück während einer Erstellung.
    pub fn is_creating(&self) -> bool {
        matches!(self, InteractionPhase::Creating { .. })
    }

    /// ID der Messung, auf der gerade interagiert wird.
    pub fn active_measurement(&self) -> Option<u64> {
        match self {
            InteractionPhase::Idle => None,
            InteractionPhase::Creating { measurement_id, .. }
            | InteractionPhase::Dragging { measurement_id, .. } => Some(*measurement_id),
        }
    }
}
