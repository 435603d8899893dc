// Copyright (c) 2024 Mike Tsao

//! Common data types used throughout the system.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{Axis, AxisKind, CurveName, Grid, LineHandle, SurfaceUid};
}

pub use {
    grid::{Axis, AxisKind, Grid},
    names::{CurveName, LineHandle, SurfaceUid},
};

mod grid;
mod names;
