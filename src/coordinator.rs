// Copyright (c) 2024 Mike Tsao

use crate::{
    curve::{CurveEvent, CurveModel},
    error::{CurveError, Result},
    surfaces::{
        CurveCanvas, DrawSurfaceController, MarkerPick, PointerMotion, PointerRelease,
        PositionReadout, PreviewSurfaceController,
    },
    types::{AxisKind, CurveName, SurfaceUid},
    util::{CurveSetSettings, CurveSettings},
};
use core::ops::RangeInclusive;
use crossbeam::channel::{unbounded, Receiver};
use rustc_hash::FxHashMap;

/// Owns a fixed set of [CurveModel]s, the draw and preview surfaces, and the
/// canvas they're drawn on. It's the object an application builds, and the one
/// it feeds pointer events into.
///
/// Every curve reports its changes on a single channel that the coordinator
/// drains before any of its methods returns, so the preview is always current
/// and sees changes in the order they happened.
#[derive(Debug)]
pub struct CurveSetCoordinator<C: CurveCanvas> {
    curves: FxHashMap<CurveName, CurveModel>,
    domain: RangeInclusive<f64>,
    draw: DrawSurfaceController,
    preview: PreviewSurfaceController,
    events: Receiver<CurveEvent>,
    canvas: C,
}
impl<C: CurveCanvas> CurveSetCoordinator<C> {
    /// Takes ownership of the curves and the canvas, adds each curve's
    /// boundary targets if they're missing, and lays out both surfaces. Fails
    /// if there are no curves or two of them share a name.
    pub fn new_with(curves: impl IntoIterator<Item = CurveModel>, mut canvas: C) -> Result<Self> {
        let curves: Vec<CurveModel> = curves.into_iter().collect();
        if curves.is_empty() {
            return Err(CurveError::EmptyCurveSet);
        }
        let start = curves
            .iter()
            .map(|c| c.grid().first_x())
            .fold(f64::INFINITY, f64::min);
        let end = curves
            .iter()
            .map(|c| c.grid().last_x())
            .fold(f64::NEG_INFINITY, f64::max);
        let domain = start..=end;

        let draw = DrawSurfaceController::new_with(&mut canvas, SurfaceUid::DRAW);
        let mut preview = PreviewSurfaceController::new_with(&mut canvas, SurfaceUid::PREVIEW);
        for surface in [draw.surface(), preview.surface()] {
            canvas.set_axis_limits(surface, AxisKind::X, domain.clone());
        }

        let (sender, events) = unbounded();
        let mut map: FxHashMap<CurveName, CurveModel> = Default::default();
        for mut curve in curves {
            if map.contains_key(curve.name()) {
                return Err(CurveError::DuplicateCurve(curve.name().clone()));
            }
            curve.subscribe(sender.clone());
            Self::add_boundary_targets(&mut curve)?;
            preview.add_curve(&mut canvas, &curve);
            map.insert(curve.name().clone(), curve);
        }
        // Each curve was drawn after seeding, so these need no redraw.
        let seeded = events.try_iter().count();
        log::debug!(
            "coordinating {} curves over {start}..={end}; {seeded} boundary targets added",
            map.len()
        );

        Ok(Self {
            curves: map,
            domain,
            draw,
            preview,
            events,
            canvas,
        })
    }

    fn add_boundary_targets(curve: &mut CurveModel) -> Result<()> {
        let default_y = curve.default_y();
        for x in [curve.grid().first_x(), curve.grid().last_x()] {
            if !curve.has_target_at(x) {
                curve.add_target(x, default_y)?;
            }
        }
        Ok(())
    }

    /// The union of every curve's x range. Both surfaces show this range.
    pub fn domain(&self) -> RangeInclusive<f64> {
        self.domain.clone()
    }

    /// Returns the named curve.
    pub fn curve(&self, name: &str) -> Option<&CurveModel> {
        self.curves.get(name)
    }

    /// The curve names, in the order the curves were supplied.
    pub fn curve_names(&self) -> impl Iterator<Item = &CurveName> {
        self.preview.curve_names()
    }

    /// The curve bound to the draw surface, if any.
    pub fn active_curve(&self) -> Option<&CurveModel> {
        self.draw
            .active_curve()
            .and_then(|name| self.curves.get(name.as_str()))
    }

    #[allow(missing_docs)]
    pub fn draw_surface(&self) -> &DrawSurfaceController {
        &self.draw
    }

    #[allow(missing_docs)]
    pub fn preview_surface(&self) -> &PreviewSurfaceController {
        &self.preview
    }

    #[allow(missing_docs)]
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    #[allow(missing_docs)]
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Binds the named curve to the draw surface.
    pub fn select_curve(&mut self, name: &str) -> Result<()> {
        let curve = self
            .curves
            .get(name)
            .ok_or_else(|| CurveError::UnknownCurve(name.into()))?;
        self.draw.bind(&mut self.canvas, curve);
        log::debug!("{name} selected for drawing");
        Ok(())
    }

    /// Adds a target to the named curve. See [CurveModel::add_target()].
    pub fn add_target_to(&mut self, name: &str, x: f64, y: f64) -> Result<()> {
        let result = self.curve_mut(name)?.add_target(x, y);
        self.refresh_if_active(name);
        self.handle_curve_events();
        result
    }

    /// Deletes a target from the named curve. See
    /// [CurveModel::delete_target()].
    pub fn delete_target_from(&mut self, name: &str, x: f64) -> Result<()> {
        let result = self.curve_mut(name)?.delete_target(x);
        self.refresh_if_active(name);
        self.handle_curve_events();
        result
    }

    /// Routes a pointer release to the draw surface. Returns whether the
    /// active curve changed. Problems are logged, not returned, so that one bad
    /// click can't end an editing session.
    pub fn on_pointer_release(&mut self, event: &PointerRelease) -> bool {
        let Some(name) = self.draw.active_curve().cloned() else {
            log::debug!("release ignored; no curve is selected");
            return false;
        };
        let edited = match self.curves.get_mut(name.as_str()) {
            Some(curve) => self
                .draw
                .on_pointer_release(&mut self.canvas, curve, event)
                .unwrap_or_else(|e| {
                    log::warn!("ignoring release at ({}, {}): {e}", event.x, event.y);
                    false
                }),
            None => false,
        };
        self.handle_curve_events();
        edited
    }

    /// Routes a marker pick to the draw surface. Returns whether the pick was
    /// handled.
    pub fn on_marker_pick(&mut self, event: &MarkerPick) -> bool {
        let Some(name) = self.draw.active_curve().cloned() else {
            log::debug!("pick ignored; no curve is selected");
            return false;
        };
        let handled = match self.curves.get_mut(name.as_str()) {
            Some(curve) => self.draw.on_marker_pick(&mut self.canvas, curve, event),
            None => false,
        };
        self.handle_curve_events();
        handled
    }

    /// Works out the position readout for a pointer motion over the draw
    /// surface. Purely cosmetic; nothing is edited.
    pub fn on_pointer_motion(&self, event: &PointerMotion) -> Option<PositionReadout> {
        self.active_curve()
            .and_then(|curve| self.draw.position_readout(curve, event))
    }

    /// Describes every curve as it is now, suitable for saving.
    pub fn settings(&self) -> CurveSetSettings {
        CurveSetSettings {
            curves: self
                .curve_names()
                .filter_map(|name| self.curves.get(name.as_str()))
                .map(CurveSettings::from)
                .collect(),
        }
    }

    fn curve_mut(&mut self, name: &str) -> Result<&mut CurveModel> {
        self.curves
            .get_mut(name)
            .ok_or_else(|| CurveError::UnknownCurve(name.into()))
    }

    fn refresh_if_active(&mut self, name: &str) {
        if self.draw.active_curve().map(|n| n.as_str()) == Some(name) {
            if let Some(curve) = self.curves.get(name) {
                self.draw.refresh(&mut self.canvas, curve);
            }
        }
    }

    // Each change notification repaints the preview once, in arrival order.
    fn handle_curve_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_recv() {
            match event {
                CurveEvent::DataChanged { curve_name } => {
                    log::debug!("{curve_name} changed; redrawing preview");
                    self.preview.redraw(&mut self.canvas, &self.curves);
                }
            }
            handled += 1;
        }
        handled
    }
}
