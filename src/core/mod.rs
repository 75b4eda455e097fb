//! Core-Domänentypen: Handles, Messung, Annotation-Set, Bildraum,
//! Segment-Geometrie und Spatial-Index.

pub mod annotation_set;
pub mod handle;
pub mod image_space;
pub mod measurement;
pub mod segment;
pub mod spatial;

pub use annotation_set::AnnotationSet;
pub use handle::{Handle, HandleKey, HandleSet};
pub use image_space::{BoundingBox, ImageBounds, ImageContext, PixelSpacing, ViewTransform};
pub use measurement::Measurement;
pub use segment::{line_intersection, rotate90, Segment};
pub use spatial::{HandleRef, SpatialIndex, SpatialMatch};
