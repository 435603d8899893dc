// Copyright (c) 2024 Mike Tsao

#![deny(unused_imports, unused_variables)]
#![warn(missing_docs)]
#![allow(rustdoc::private_intra_doc_links)]

//! Paramdraw lets a user sketch parameter curves by clicking on a plot.
//!
//! Each curve lives on a [Grid](types::Grid) of allowed x and y values. Clicks
//! are snapped to the nearest grid point and become targets, and the curve
//! moves linearly from target to target.
//!
//! * [CurveModel] holds one curve and does all the math: snapping, target
//! editing, and interpolation. It's usable on its own.
//! * [CurveSetCoordinator] owns a set of curves and two plotting surfaces, one
//! for drawing the selected curve and one previewing all of them at once. Feed
//! it pointer events and it keeps everything in sync.
//! * [CurveCanvas](surfaces::CurveCanvas) is the seam to an actual plotting
//! library. [RecordingCanvas](surfaces::RecordingCanvas) implements it in
//! memory, which is handy for tests and headless use.
//! * [CurveSetSettings](util::CurveSetSettings) saves and loads curves as JSON.

/// A collection of imports that are useful to users of this crate. `use
/// paramdraw::prelude::*;` for easier onboarding.
pub mod prelude {
    pub use super::{
        curve::prelude::*, error::CurveError, surfaces::prelude::*, types::prelude::*,
        util::prelude::*, CurveSetCoordinator,
    };
}

// Fundamental structures that are important enough to re-export at top level.
pub use {coordinator::CurveSetCoordinator, curve::CurveModel, error::CurveError};

pub mod curve;
pub mod error;
pub mod surfaces;
pub mod types;
pub mod util;

mod coordinator;
