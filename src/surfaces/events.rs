// Copyright (c) 2024 Mike Tsao

use crate::types::SurfaceUid;
use strum_macros::Display;

/// The pointer button was released over a surface, at the given data
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerRelease {
    /// Data x under the pointer.
    pub x: f64,
    /// Data y under the pointer.
    pub y: f64,
    /// The surface under the pointer.
    pub surface: SurfaceUid,
}

/// The user clicked on one of a line's markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerPick {
    /// The position of the picked point in the line's data.
    pub index: usize,
    /// The surface the line lives on.
    pub surface: SurfaceUid,
}

/// The pointer moved over a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerMotion {
    /// Data x under the pointer.
    pub x: f64,
    /// Data y under the pointer.
    pub y: f64,
    /// The surface under the pointer.
    pub surface: SurfaceUid,
    /// Text to show instead of the curve's own formatted position.
    pub message: Option<String>,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Right,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Bottom,
}

/// Where and how to show the pointer's position on the draw surface. The text
/// is anchored at (x, y) and aligned so that it grows toward the middle of the
/// plot rather than off its edge.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionReadout {
    /// The text to show.
    pub text: String,
    /// Anchor x.
    pub x: f64,
    /// Anchor y.
    pub y: f64,
    #[allow(missing_docs)]
    pub horizontal: HorizontalAlign,
    #[allow(missing_docs)]
    pub vertical: VerticalAlign,
}
