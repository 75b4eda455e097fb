//! Trait-basiertes Annotations-Tool-System.
//!
//! Jedes Annotations-Tool implementiert den `AnnotationTool`-Trait und
//! wird in der `ToolRegistry` registriert. Tools sind zustandslos und
//! rechnen rein auf Messungs-Daten; Mutation erfolgt zentral in den
//! Handlern.

/// AnnotationTool-Trait — Schnittstelle für alle Annotations-Tools.
mod annotation_tool;
/// Bidirektionales Kaliper-Tool (Langachse + senkrechte Kurzachse).
pub mod bidirectional;

pub use annotation_tool::AnnotationTool;

use crate::core::{HandleKey, Measurement};

// ── Typen ────────────────────────────────────────────────────────

/// Ergebnis eines Verschiebe-Vorschlags — reine Daten, keine Mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveOutcome {
    /// Verschiebung akzeptiert; enthält die vollständige neue Messung
    Accepted(Measurement),
    /// Verschiebung verletzt eine Invariante; der alte Zustand bleibt
    Rejected,
}

impl MoveOutcome {
    /// Gibt `true` zurück wenn die Verschiebung akzeptiert wurde.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }
}

/// Treffer eines Hit-Tests innerhalb einer Messung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// Zeiger ist nahe einem Handle (bzw. in der Label-Box)
    Handle(HandleKey),
    /// Zeiger ist nahe einem Achsen-Segment, aber keinem Handle
    Body,
}

// ── ToolRegistry ─────────────────────────────────────────────────

/// Verwaltet registrierte Annotations-Tools und den aktiven Tool-Index.
pub struct ToolRegistry {
    tools: Vec<Box<dyn AnnotationTool>>,
    active_index: usize,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Erstellt eine neue Registry mit vorregistrierten Standard-Tools.
    pub fn new() -> Self {
        let mut registry = Self {
            tools: Vec::new(),
            active_index: 0,
        };
        registry.register(Box::new(bidirectional::BidirectionalTool::new()));
        registry
    }

    /// Registriert ein neues Annotations-Tool.
    pub fn register(&mut self, tool: Box<dyn AnnotationTool>) {
        self.tools.push(tool);
    }

    /// Gibt die Anzahl registrierter Tools zurück.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Gibt Name und Index aller registrierten Tools zurück.
    pub fn tool_names(&self) -> Vec<(usize, &str)> {
        self.tools
            .iter()
            .enumerate()
            .map(|(i, t)| (i, t.name()))
            .collect()
    }

    /// Setzt das aktive Tool per Index.
    pub fn set_active(&mut self, index: usize) {
        if index < self.tools.len() {
            self.active_index = index;
        }
    }

    /// Gibt den Index des aktiven Tools zurück.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Gibt eine Referenz auf das aktive Tool zurück.
    pub fn active_tool(&self) -> Option<&dyn AnnotationTool> {
        self.tools.get(self.active_index).map(|t| t.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_starts_with_bidirectional_tool() {
        let registry = ToolRegistry::new();
        assert_eq!(registry.tool_count(), 1);
        let tool = registry.active_tool().expect("aktives Tool erwartet");
        assert!(tool.name().contains("Bidirektional"));
    }

    #[test]
    fn set_active_ignores_out_of_range_index() {
        let mut registry = ToolRegistry::new();
        registry.set_active(5);
        assert_eq!(registry.active_index(), 0);
    }
}
