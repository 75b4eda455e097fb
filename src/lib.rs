//! Bidirektionale Kaliper-Messungen für Bild-Viewer.
//! Core-Funktionalität als Library exportiert für Host-Viewer und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AnnotationTool, AppCommand, AppController, AppIntent, AppState, BidirectionalTool, DragTarget,
    HitKind, HostSignals, InteractionPhase, MoveOutcome, ToolRegistry,
};
pub use core::{
    AnnotationSet, BoundingBox, Handle, HandleKey, HandleRef, HandleSet, ImageBounds, ImageContext,
    Measurement, PixelSpacing, Segment, SpatialIndex, SpatialMatch, ViewTransform,
};
pub use shared::{
    CaliperOptions, FixedMetricsLayout, LabelLayout, MeasurementPrimitives, RenderScene,
};
