// Copyright (c) 2024 Mike Tsao

//! The curve model: a grid, the targets placed on it, and the math that snaps
//! coordinates to the grid and interpolates between targets.
//!
//! A [CurveModel] knows nothing about how it's displayed. When its targets
//! change it sends a [CurveEvent] to anyone who subscribed, which is how the
//! [CurveSetCoordinator](crate::CurveSetCoordinator) learns that the preview
//! needs repainting.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{CurveEvent, CurveModel, CurveModelBuilder, DisplayFormat, Target};
}

pub use model::{CurveModel, CurveModelBuilder, CurveModelBuilderError};
pub use types::{CurveEvent, DisplayFormat, Target};

mod model;
mod types;
