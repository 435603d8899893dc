// Copyright (c) 2024 Mike Tsao

use super::{
    CurveCanvas, HorizontalAlign, LineStyle, MarkerPick, PointerMotion, PointerRelease,
    PositionReadout, VerticalAlign,
};
use crate::{
    curve::CurveModel,
    error::Result,
    types::{AxisKind, CurveName, LineHandle, SurfaceUid},
};

/// Turns clicks on the draw surface into edits of the active curve, and keeps
/// the surface's two lines (the targets, and the interpolation through them)
/// in sync with it.
///
/// Clicking a target's marker deletes it. The backend reports that click
/// twice, once as a pick and then as a release, so a pick arms a guard that
/// swallows the next release instead of adding a new target where the old one
/// was.
#[derive(Debug)]
pub struct DrawSurfaceController {
    surface: SurfaceUid,
    active: Option<CurveName>,
    target_line: LineHandle,
    interpolation_line: LineHandle,
    is_deleting_marker: bool,
}
impl DrawSurfaceController {
    /// Creates the controller and its (empty) lines on the given surface.
    pub fn new_with(canvas: &mut dyn CurveCanvas, surface: SurfaceUid) -> Self {
        canvas.set_axis_tick_labels(surface, AxisKind::X, false);
        let target_line = canvas.add_line(surface, &LineStyle::targets());
        let interpolation_line = canvas.add_line(surface, &LineStyle::interpolation());
        canvas.set_axis_grid(surface, AxisKind::X, true);
        canvas.set_axis_grid(surface, AxisKind::Y, false);
        Self {
            surface,
            active: None,
            target_line,
            interpolation_line,
            is_deleting_marker: false,
        }
    }

    #[allow(missing_docs)]
    pub fn surface(&self) -> SurfaceUid {
        self.surface
    }

    /// The name of the curve being edited, if one has been selected.
    pub fn active_curve(&self) -> Option<&CurveName> {
        self.active.as_ref()
    }

    #[allow(missing_docs)]
    pub fn target_line(&self) -> LineHandle {
        self.target_line
    }

    #[allow(missing_docs)]
    pub fn interpolation_line(&self) -> LineHandle {
        self.interpolation_line
    }

    /// Whether the next release will be swallowed.
    pub fn is_deleting_marker(&self) -> bool {
        self.is_deleting_marker
    }

    /// Makes `curve` the one being edited: restyles the axes for its grid and
    /// draws it.
    pub fn bind(&mut self, canvas: &mut dyn CurveCanvas, curve: &CurveModel) {
        self.active = Some(curve.name().clone());
        self.is_deleting_marker = false;
        self.style_axes(canvas, curve);
        self.refresh(canvas, curve);
    }

    /// Handles a pointer release. Returns whether the curve was edited.
    pub fn on_pointer_release(
        &mut self,
        canvas: &mut dyn CurveCanvas,
        curve: &mut CurveModel,
        event: &PointerRelease,
    ) -> Result<bool> {
        if event.surface != self.surface {
            log::debug!("release on {} ignored", event.surface);
            return Ok(false);
        }
        if self.is_deleting_marker {
            self.is_deleting_marker = false;
            return Ok(false);
        }
        curve.add_target(event.x, event.y)?;
        self.refresh(canvas, curve);
        Ok(true)
    }

    /// Handles a pick on one of the target line's markers by deleting that
    /// target. Returns whether the pick was for this surface.
    pub fn on_marker_pick(
        &mut self,
        canvas: &mut dyn CurveCanvas,
        curve: &mut CurveModel,
        event: &MarkerPick,
    ) -> bool {
        if event.surface != self.surface {
            return false;
        }
        self.is_deleting_marker = true;
        curve.delete_target_by_index(event.index);
        self.refresh(canvas, curve);
        true
    }

    /// Works out the position readout for a pointer motion over this surface.
    pub fn position_readout(
        &self,
        curve: &CurveModel,
        event: &PointerMotion,
    ) -> Option<PositionReadout> {
        if event.surface != self.surface {
            return None;
        }
        let grid = curve.grid();
        let horizontal = if event.x >= grid.mean(AxisKind::X) {
            HorizontalAlign::Right
        } else {
            HorizontalAlign::Left
        };
        let vertical = if event.y >= grid.mean(AxisKind::Y) {
            VerticalAlign::Top
        } else {
            VerticalAlign::Bottom
        };
        Some(PositionReadout {
            text: event
                .message
                .clone()
                .unwrap_or_else(|| curve.format_position(event.x, event.y)),
            x: event.x,
            y: event.y,
            horizontal,
            vertical,
        })
    }

    fn style_axes(&self, canvas: &mut dyn CurveCanvas, curve: &CurveModel) {
        let grid = curve.grid();
        let y = grid.y();
        canvas.set_axis_grid(self.surface, AxisKind::X, true);
        canvas.set_axis_grid(self.surface, AxisKind::Y, y.len() > 2);
        canvas.set_axis_limits(self.surface, AxisKind::Y, y[0]..=y[y.len() - 1]);
        canvas.set_axis_ticks(self.surface, AxisKind::X, grid.x());
        canvas.set_axis_ticks(self.surface, AxisKind::Y, y);
        canvas.set_title(self.surface, &format!("Drawing parameter: {}", curve.name()));
    }

    /// Redraws both lines from `curve`. Call it after editing the curve
    /// outside this controller.
    pub fn refresh(&self, canvas: &mut dyn CurveCanvas, curve: &CurveModel) {
        let ys: Vec<Option<f64>> = curve.ys().into_iter().map(Some).collect();
        canvas.set_line_data(self.target_line, &curve.xs(), &ys);
        canvas.set_line_data(
            self.interpolation_line,
            curve.grid_x(),
            &curve.interpolated_series(),
        );
        canvas.redraw_canvas(self.surface);
    }
}
