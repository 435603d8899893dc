// Copyright (c) 2024 Mike Tsao

use crate::types::{AxisKind, LineHandle, SurfaceUid};
use core::ops::RangeInclusive;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The marker drawn at each data point of a line.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    /// An x-shaped cross.
    Cross,
    /// A filled circle.
    Dot,
}

/// How a line should look. The backend is free to approximate anything it
/// can't render exactly.
#[derive(Clone, Debug, Derivative, PartialEq, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(default, rename_all = "kebab-case")]
pub struct LineStyle {
    /// A CSS-style color, such as `#204a87`.
    #[derivative(Default(value = "String::from(\"#333333\")"))]
    pub color: String,
    /// Stroke width, in backend units.
    #[derivative(Default(value = "1.0"))]
    pub width: f64,
    /// Whether the stroke is dashed.
    pub dashed: bool,
    /// The marker at each point, if any.
    pub marker: Option<Marker>,
    /// Opacity, 0.0..=1.0.
    #[derivative(Default(value = "1.0"))]
    pub alpha: f64,
    /// Whether the backend should report picks on this line's markers.
    pub pickable: bool,
}
impl LineStyle {
    /// The draw surface's line through the targets themselves.
    pub fn targets() -> Self {
        Self {
            color: "#666666".to_string(),
            width: 1.0,
            dashed: true,
            marker: Some(Marker::Cross),
            alpha: 1.0,
            pickable: true,
        }
    }

    /// The draw surface's line through the interpolated series.
    pub fn interpolation() -> Self {
        Self {
            alpha: 0.5,
            ..Default::default()
        }
    }
}

/// The plotting backend that the core drives. The core never reads anything
/// back except the [LineHandle] that [CurveCanvas::add_line()] returns; every
/// other call is a side effect on the backend's own state.
#[allow(unused_variables)]
pub trait CurveCanvas {
    /// Creates an empty line on the given surface.
    fn add_line(&mut self, surface: SurfaceUid, style: &LineStyle) -> LineHandle;

    /// Replaces a line's data. `ys` has one entry per `xs` entry; [None] marks
    /// a gap.
    fn set_line_data(&mut self, line: LineHandle, xs: &[f64], ys: &[Option<f64>]);

    /// Repaints the surface.
    fn redraw_canvas(&mut self, surface: SurfaceUid);

    /// Places tick marks on an axis.
    fn set_axis_ticks(&mut self, surface: SurfaceUid, axis: AxisKind, ticks: &[f64]) {}

    /// Shows or hides the labels next to an axis's tick marks.
    fn set_axis_tick_labels(&mut self, surface: SurfaceUid, axis: AxisKind, visible: bool) {}

    /// Sets the visible range of an axis.
    fn set_axis_limits(&mut self, surface: SurfaceUid, axis: AxisKind, limits: RangeInclusive<f64>) {
    }

    /// Shows or hides grid lines along an axis's ticks.
    fn set_axis_grid(&mut self, surface: SurfaceUid, axis: AxisKind, visible: bool) {}

    /// Sets the surface's title.
    fn set_title(&mut self, surface: SurfaceUid, title: &str) {}
}
