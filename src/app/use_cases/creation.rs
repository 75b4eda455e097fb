//! Use-Case: Validierung einer Erstellung beim Absetzen.

use crate::core::{ImageContext, Measurement};
use crate::shared::CaliperOptions;

/// Grund für das Verwerfen einer Erstellung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationRejection {
    /// Zwischen Drücken und Loslassen lag weniger als die Mindestdauer
    TooFast,
    /// Mindestens ein Durchmesser unterschreitet die Mindestgröße
    TooSmall,
    /// Ein grenzpflichtiges Handle liegt außerhalb des Bildes
    OutOfBounds,
}

/// Prüft ob eine Erstellung abgesetzt werden darf.
///
/// `elapsed_ms` ist die Differenz zweier Host-Zeitstempel (Druck →
/// Loslassen); verworfene Erstellungen hinterlassen keine Spuren.
pub fn validate_settle(
    measurement: &Measurement,
    elapsed_ms: f64,
    image: &ImageContext,
    options: &CaliperOptions,
) -> Result<(), CreationRejection> {
    if elapsed_ms < options.min_creation_ms {
        return Err(CreationRejection::TooFast);
    }
    if measurement.longest_diameter < options.min_diameter
        || measurement.shortest_diameter < options.min_diameter
    {
        return Err(CreationRejection::TooSmall);
    }
    if !measurement.handles_within(&image.bounds) {
        return Err(CreationRejection::OutOfBounds);
    }
    Ok(())
}
