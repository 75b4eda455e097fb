//! Änderungs-Signale an den Host, pro Event-Runde gesammelt.

/// Benachrichtigungen für den Host ("geometry changed",
/// "selection changed", Redraw-Bedarf, Relabel-Durchreichung).
///
/// Der Host liest die Signale nach jeder Event-Verarbeitung mit
/// `take()` ab und entscheidet selbst über Redraws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostSignals {
    /// Messungs-Geometrie hat sich geändert
    pub geometry_changed: bool,
    /// Selektions- oder Aktiv-Flags haben sich geändert
    pub selection_changed: bool,
    /// Die Szene muss neu gezeichnet werden
    pub needs_redraw: bool,
    /// Doppelklick auf eine Messung: ID für den externen
    /// Relabel-Kollaborateur
    pub relabel_requested: Option<u64>,
}

impl HostSignals {
    /// Gibt die gesammelten Signale zurück und setzt sie zurück.
    pub fn take(&mut self) -> HostSignals {
        std::mem::take(self)
    }

    /// Gibt `true` zurück wenn irgendein Signal gesetzt ist.
    pub fn any(&self) -> bool {
        self.geometry_changed
            || self.selection_changed
            || self.needs_redraw
            || self.relabel_requested.is_some()
    }
}
