//! Baut die Render-Szene aus dem aktuellen App-Zustand.
//!
//! Reine Projektion: liest Messungen, Optionen und View-Transformation
//! und erzeugt Display-Raum-Primitives für den externen Renderer.

use crate::shared::RenderScene;

use super::AppState;

/// Projiziert alle Messungen (abgesetzte und die entstehende) auf
/// zeichenbare Primitives in Ziel-Reihenfolge.
pub fn build(state: &AppState) -> RenderScene {
    let Some(tool) = state.tools.active_tool() else {
        return RenderScene::default();
    };

    let measurements = state
        .annotations
        .iter()
        .enumerate()
        .filter(|(_, measurement)| !measurement.cancelled)
        .map(|(index, measurement)| {
            tool.render(measurement, index + 1, &state.view, &state.options)
        })
        .collect();

    RenderScene { measurements }
}
