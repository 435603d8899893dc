// Copyright (c) 2024 Mike Tsao

use super::{CurveEvent, DisplayFormat, Target};
use crate::{
    error::Result,
    surfaces::LineStyle,
    types::{Axis, AxisKind, CurveName, Grid},
};
use crossbeam::channel::Sender;
use derive_builder::Builder;

/// A parameter curve drawn on a [Grid]. The curve is defined by a list of
/// [Target]s, kept sorted by x with no repeated x, and moves linearly from
/// target to target.
///
/// Every coordinate that enters the model is snapped to the grid first. The
/// targets at the first and last grid x are boundary targets: they can be
/// moved up and down with [CurveModel::add_target()], but never deleted.
#[derive(Debug, Builder)]
#[builder(build_fn(private, name = "build_from_builder"))]
pub struct CurveModel {
    /// The curve's unique name.
    #[builder(setter(into))]
    name: CurveName,

    /// The lattice that targets snap to.
    grid: Grid,

    /// The y that boundary targets start at. Set through
    /// [CurveModelBuilder::default_y()]; otherwise it's the grid's mean y. Either
    /// way it's resolved onto the grid in [CurveModelBuilder::build()].
    #[builder(setter(custom), default = "0.0")]
    default_y: f64,

    /// How x values appear in position readouts.
    #[builder(default)]
    x_format: DisplayFormat,

    /// How y values appear in position readouts.
    #[builder(default)]
    y_format: DisplayFormat,

    /// How this curve looks in the preview.
    #[builder(default)]
    line_style: LineStyle,

    /// Initial targets. They're snapped and sorted at build time.
    #[builder(default)]
    targets: Vec<Target>,

    #[builder(setter(skip))]
    e: CurveModelEphemerals,
}
#[derive(Debug, Default)]
struct CurveModelEphemerals {
    subscribers: Vec<Sender<CurveEvent>>,
}
impl CurveModelBuilder {
    /// Sets the y that boundary targets start at.
    pub fn default_y(&mut self, value: f64) -> &mut Self {
        self.default_y = Some(value);
        self
    }

    /// Adds one initial target.
    pub fn target(&mut self, target: impl Into<Target>) -> &mut Self {
        self.targets
            .get_or_insert_with(Vec::default)
            .push(target.into());
        self
    }

    /// Builds the item, placing the default y and any initial targets on the
    /// grid.
    pub fn build(&self) -> Result<CurveModel> {
        let mut model = self.build_from_builder()?;
        let requested = self
            .default_y
            .unwrap_or_else(|| model.grid.mean(AxisKind::Y));
        model.default_y = model.place_y(requested)?;

        let targets = core::mem::take(&mut model.targets);
        for target in targets {
            let placed = model.place(target.x, target.y)?;
            model.insert_target(placed);
        }
        Ok(model)
    }
}
impl CurveModel {
    /// The curve's unique name.
    pub fn name(&self) -> &CurveName {
        &self.name
    }

    /// The curve's grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The grid's domain values.
    pub fn grid_x(&self) -> &[f64] {
        self.grid.x()
    }

    /// The grid's range values.
    pub fn grid_y(&self) -> &[f64] {
        self.grid.y()
    }

    /// The snapped y that boundary targets start at.
    pub fn default_y(&self) -> f64 {
        self.default_y
    }

    #[allow(missing_docs)]
    pub fn x_format(&self) -> &DisplayFormat {
        &self.x_format
    }

    #[allow(missing_docs)]
    pub fn y_format(&self) -> &DisplayFormat {
        &self.y_format
    }

    #[allow(missing_docs)]
    pub fn line_style(&self) -> &LineStyle {
        &self.line_style
    }

    /// The targets, sorted by x.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// The x of each target.
    pub fn xs(&self) -> Vec<f64> {
        self.targets.iter().map(|t| t.x).collect()
    }

    /// The y of each target.
    pub fn ys(&self) -> Vec<f64> {
        self.targets.iter().map(|t| t.y).collect()
    }

    /// Whether a target sits exactly at the given (already snapped) x.
    pub fn has_target_at(&self, x: f64) -> bool {
        self.targets.iter().any(|t| t.x == x)
    }

    /// Registers a channel that receives a [CurveEvent] after every mutation.
    /// Subscribers whose receiving end has gone away are forgotten.
    pub fn subscribe(&mut self, sender: Sender<CurveEvent>) {
        self.e.subscribers.push(sender);
    }

    /// Snaps the point to the grid and adds it as a target. If a target already
    /// exists at the snapped x, its y is replaced instead, which is also how a
    /// boundary target gets moved.
    pub fn add_target(&mut self, x: f64, y: f64) -> Result<()> {
        let target = self.place(x, y)?;
        self.insert_target(target);
        log::debug!("{}: target set at ({}, {})", self.name, target.x, target.y);
        self.notify();
        Ok(())
    }

    // Snaps to the grid, then keeps the result inside the grid's bounds. Only a
    // continuous axis can snap outside them.
    fn place(&self, x: f64, y: f64) -> Result<Target> {
        let x = self
            .grid
            .snap_x(x)?
            .clamp(self.grid.first_x(), self.grid.last_x());
        Ok(Target::new(x, self.place_y(y)?))
    }

    fn place_y(&self, y: f64) -> Result<f64> {
        Ok(self
            .grid
            .snap_y(y)?
            .clamp(self.grid.min_y(), self.grid.max_y()))
    }

    // Keeps targets sorted by x, overwriting on an exact x match.
    fn insert_target(&mut self, target: Target) {
        if let Some(index) = self.targets.iter().position(|t| t.x >= target.x) {
            if self.targets[index].x == target.x {
                self.targets[index].y = target.y;
            } else {
                self.targets.insert(index, target);
            }
        } else {
            self.targets.push(target);
        }
    }

    /// Deletes the target at the snapped x. Boundary targets, and x values
    /// with no target, are silently left alone.
    pub fn delete_target(&mut self, x: f64) -> Result<()> {
        let x = self.grid.snap_x(x)?;
        if self.grid.is_boundary_x(x) {
            log::debug!("{}: boundary target at {x} can't be deleted", self.name);
            return Ok(());
        }
        if let Some(index) = self.targets.iter().position(|t| t.x == x) {
            self.targets.remove(index);
            log::debug!("{}: target at {x} deleted", self.name);
            self.notify();
        }
        Ok(())
    }

    /// Deletes the target at the given position in [CurveModel::targets()].
    /// The first and last positions are protected, and an index past the end
    /// does nothing.
    pub fn delete_target_by_index(&mut self, index: usize) {
        if index == 0 || index + 1 >= self.targets.len() {
            log::debug!("{}: target #{index} is protected or missing", self.name);
            return;
        }
        let removed = self.targets.remove(index);
        log::debug!(
            "{}: target #{index} at ({}, {}) deleted",
            self.name,
            removed.x,
            removed.y
        );
        self.notify();
    }

    /// Snaps values to the nearest member of the requested grid axis. See
    /// [Grid::snap()].
    pub fn snap_to_grid(&self, axis: Axis) -> Result<Vec<f64>> {
        self.grid.snap(axis)
    }

    /// Returns one y for every grid x, by interpolating linearly (in grid
    /// steps, not in x units) between consecutive targets and snapping each
    /// result back onto the grid. Positions that no pair of targets covers are
    /// [None]. Targets that don't sit on a grid x, which can happen only on a
    /// continuous x axis, don't anchor a segment.
    pub fn interpolated_series(&self) -> Vec<Option<f64>> {
        let mut series = vec![None; self.grid.x().len()];
        let anchors: Vec<(usize, f64)> = self
            .targets
            .iter()
            .filter_map(|t| self.grid.index_of_x(t.x).map(|index| (index, t.y)))
            .collect();
        for pair in anchors.windows(2) {
            let (start, start_y) = pair[0];
            let (end, end_y) = pair[1];
            let steps = end - start;
            let step = (end_y - start_y) / steps as f64;
            for offset in 0..=steps {
                let value = if offset == steps {
                    end_y
                } else {
                    start_y + step * offset as f64
                };
                series[start + offset] = Some(self.grid.snap_unchecked(AxisKind::Y, value));
            }
        }
        series
    }

    /// Like [CurveModel::interpolated_series()], but shifted so the lowest
    /// value is zero and scaled by the grid's y span. A flat grid (zero span)
    /// returns the series unchanged.
    pub fn normalized_interpolated_series(&self) -> Vec<Option<f64>> {
        let series = self.interpolated_series();
        let span = self.grid.y_span();
        if span == 0.0 {
            return series;
        }
        let min = series
            .iter()
            .flatten()
            .copied()
            .fold(f64::INFINITY, f64::min);
        series
            .into_iter()
            .map(|value| value.map(|v| (v - min) / span))
            .collect()
    }

    /// Text for a position readout, using this curve's display formats.
    pub fn format_position(&self, x: f64, y: f64) -> String {
        format!("x={}, y={}", self.x_format.format(x), self.y_format.format(y))
    }

    fn notify(&mut self) {
        let event = CurveEvent::DataChanged {
            curve_name: self.name.clone(),
        };
        self.e
            .subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}
