//! Use-Cases: mutierende und abfragende Logik über dem AppState.
//!
//! Handler orchestrieren, Use-Cases rechnen: dieses Modul enthält die
//! eigentliche Erstellungs-, Drag-, Hover- und Targeting-Logik.

pub mod creation;
pub mod drag;
pub mod hover;
pub mod labels;
pub mod targeting;
