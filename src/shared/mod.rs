//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host geteilt werden
//! (Optionen, Render-Szene, Label-Layout), um direkte Abhängigkeiten
//! zu vermeiden.

pub mod label_layout;
pub mod options;
mod render_scene;

pub use label_layout::{FixedMetricsLayout, LabelLayout};
pub use options::CaliperOptions;
pub use render_scene::{HandleMarker, LabelBlock, MeasurementPrimitives, RenderScene, SceneSegment};
