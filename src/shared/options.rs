//! Zentrale Konfiguration der Kaliper-Engine.
//!
//! `CaliperOptions` enthält alle zur Laufzeit änderbaren Werte und wird
//! als ein Objekt in Solver, Controller und Render-Model injiziert.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Hit-Tests ───────────────────────────────────────────────────────

/// Hit-Schwelle für Segment- und Handle-Nähe in Display-Pixeln.
pub const HIT_THRESHOLD_PX: f32 = 6.0;

// ── Geometrie-Solver ────────────────────────────────────────────────

/// Mindestabstand des Kurzachsen-Schnittpunkts zu beiden
/// Langachsen-Endpunkten (Bild-Pixel).
pub const ENDPOINT_MARGIN: f32 = 3.0;
/// Verlängerung der Langachse als Rettung für Schnittpunkte, die das
/// Segment knapp verfehlen (Bild-Pixel).
pub const INTERSECTION_FUDGE: f32 = 1.0;

// ── Erstellung ──────────────────────────────────────────────────────

/// Minimaler Durchmesser beider Achsen beim Absetzen (physikalische Einheiten).
pub const MIN_DIAMETER: f32 = 1.0;
/// Minimale Erstellungsdauer in Millisekunden (filtert versehentliche Klicks).
pub const MIN_CREATION_MS: f64 = 150.0;

// ── Rendering ───────────────────────────────────────────────────────

/// Handle-Marker-Radius in Display-Pixeln.
pub const HANDLE_RADIUS_PX: f32 = 6.0;
/// Linienstärke der Achsen in Display-Pixeln.
pub const AXIS_THICKNESS_PX: f32 = 1.5;
/// Linienstärke der Leader-Linie in Display-Pixeln.
pub const LEADER_THICKNESS_PX: f32 = 1.0;
/// Länge des Selektions-Strahls in Display-Pixeln ("weit außerhalb des Bildes").
pub const SELECTION_RAY_EXTENT_PX: f32 = 100_000.0;
/// Farbe der Langachse (RGBA).
pub const LONG_AXIS_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Kurzachse (RGBA).
pub const SHORT_AXIS_COLOR: [f32; 4] = [0.2, 0.7, 1.0, 1.0];
/// Standard-Farbe der Handle-Marker (RGBA).
pub const HANDLE_COLOR_DEFAULT: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe für Hover-/aktive Handles (RGBA).
pub const HANDLE_COLOR_HOVER: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Farbe für selektierte und bewegte Handles (RGBA).
pub const HANDLE_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe der gestrichelten Leader-Linie (RGBA).
pub const LEADER_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
/// Masseinheit der gemeldeten Durchmesser.
pub const DIAMETER_UNIT: &str = "mm";

// ── Laufzeit-Optionen (serialisierbar) ──────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen der Kaliper-Engine.
/// Kann vom Host als TOML-Datei persistiert werden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaliperOptions {
    // ── Hit-Tests ───────────────────────────────────────────────
    /// Hit-Schwelle für Segment-/Handle-Nähe in Display-Pixeln
    pub hit_threshold_px: f32,

    // ── Geometrie-Solver ────────────────────────────────────────
    /// Mindestabstand des Kurzachsen-Schnittpunkts zu den Endpunkten
    pub endpoint_margin: f32,
    /// Langachsen-Verlängerung für grenzwertige Schnittpunkte
    pub intersection_fudge: f32,

    // ── Erstellung ──────────────────────────────────────────────
    /// Minimaler Durchmesser beider Achsen beim Absetzen
    pub min_diameter: f32,
    /// Minimale Erstellungsdauer in Millisekunden
    pub min_creation_ms: f64,

    // ── Rendering ───────────────────────────────────────────────
    /// Handle-Marker-Radius in Display-Pixeln
    pub handle_radius_px: f32,
    /// Linienstärke der Achsen in Display-Pixeln
    pub axis_thickness_px: f32,
    /// Linienstärke der Leader-Linie in Display-Pixeln
    pub leader_thickness_px: f32,
    /// Länge des Selektions-Strahls in Display-Pixeln
    #[serde(default = "default_selection_ray_extent_px")]
    pub selection_ray_extent_px: f32,
    /// Farbe der Langachse (RGBA)
    pub long_axis_color: [f32; 4],
    /// Farbe der Kurzachse (RGBA)
    pub short_axis_color: [f32; 4],
    /// Standard-Farbe der Handle-Marker (RGBA)
    pub handle_color_default: [f32; 4],
    /// Farbe für Hover-/aktive Handles (RGBA)
    pub handle_color_hover: [f32; 4],
    /// Farbe für selektierte und bewegte Handles (RGBA)
    pub handle_color_selected: [f32; 4],
    /// Farbe der Leader-Linie (RGBA)
    pub leader_color: [f32; 4],
    /// Masseinheit der gemeldeten Durchmesser
    #[serde(default = "default_diameter_unit")]
    pub diameter_unit: String,
}

impl Default for CaliperOptions {
    fn default() -> Self {
        Self {
            hit_threshold_px: HIT_THRESHOLD_PX,

            endpoint_margin: ENDPOINT_MARGIN,
            intersection_fudge: INTERSECTION_FUDGE,

            min_diameter: MIN_DIAMETER,
            min_creation_ms: MIN_CREATION_MS,

            handle_radius_px: HANDLE_RADIUS_PX,
            axis_thickness_px: AXIS_THICKNESS_PX,
            leader_thickness_px: LEADER_THICKNESS_PX,
            selection_ray_extent_px: SELECTION_RAY_EXTENT_PX,
            long_axis_color: LONG_AXIS_COLOR,
            short_axis_color: SHORT_AXIS_COLOR,
            handle_color_default: HANDLE_COLOR_DEFAULT,
            handle_color_hover: HANDLE_COLOR_HOVER,
            handle_color_selected: HANDLE_COLOR_SELECTED,
            leader_color: LEADER_COLOR,
            diameter_unit: DIAMETER_UNIT.to_string(),
        }
    }
}

/// Serde-Default für `selection_ray_extent_px` (Abwärtskompatibilität).
fn default_selection_ray_extent_px() -> f32 {
    SELECTION_RAY_EXTENT_PX
}

/// Serde-Default für `diameter_unit` (Abwärtskompatibilität).
fn default_diameter_unit() -> String {
    DIAMETER_UNIT.to_string()
}

impl CaliperOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_constants() {
        let opts = CaliperOptions::default();
        assert_eq!(opts.hit_threshold_px, HIT_THRESHOLD_PX);
        assert_eq!(opts.endpoint_margin, ENDPOINT_MARGIN);
        assert_eq!(opts.min_creation_ms, MIN_CREATION_MS);
        assert_eq!(opts.diameter_unit, DIAMETER_UNIT);
    }

    #[test]
    fn options_round_trip_through_toml() {
        let mut opts = CaliperOptions::default();
        opts.hit_threshold_px = 9.0;
        opts.diameter_unit = "cm".to_string();

        let content = toml::to_string_pretty(&opts).expect("TOML-Serialisierung erwartet");
        let parsed: CaliperOptions = toml::from_str(&content).expect("TOML-Parse erwartet");

        assert_eq!(parsed, opts);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let opts = CaliperOptions::load_from_file(std::path::Path::new(
            "/nonexistent/bicaliper_options.toml",
        ));
        assert_eq!(opts, CaliperOptions::default());
    }
}
