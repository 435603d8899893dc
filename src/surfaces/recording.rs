// Copyright (c) 2024 Mike Tsao

use super::{CurveCanvas, LineStyle};
use crate::types::{AxisKind, LineHandle, SurfaceUid};
use core::ops::RangeInclusive;
use rustc_hash::FxHashMap;

/// Everything a [RecordingCanvas] knows about one line.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedLine {
    /// The surface the line was added to.
    pub surface: SurfaceUid,
    /// The style it was created with.
    pub style: LineStyle,
    /// The most recent x data.
    pub xs: Vec<f64>,
    /// The most recent y data.
    pub ys: Vec<Option<f64>>,
}

/// Per-surface axis state captured by a [RecordingCanvas].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordedAxis {
    /// The most recent ticks.
    pub ticks: Option<Vec<f64>>,
    /// Whether tick labels are shown. Labels are shown until told otherwise.
    pub tick_labels_hidden: bool,
    /// The most recent limits.
    pub limits: Option<RangeInclusive<f64>>,
    /// Whether grid lines are shown.
    pub grid: bool,
}

/// A headless [CurveCanvas] that remembers what it was asked to draw. Handy for
/// tests, and for driving a curve set without any GUI attached.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    next_line: usize,
    lines: FxHashMap<LineHandle, RecordedLine>,
    axes: FxHashMap<(SurfaceUid, AxisKind), RecordedAxis>,
    titles: FxHashMap<SurfaceUid, String>,
    redraws: FxHashMap<SurfaceUid, usize>,
}
impl RecordingCanvas {
    /// Returns the recorded state of a line.
    pub fn line(&self, line: LineHandle) -> Option<&RecordedLine> {
        self.lines.get(&line)
    }

    /// Returns every line on a surface, in creation order.
    pub fn lines_on(&self, surface: SurfaceUid) -> Vec<(LineHandle, &RecordedLine)> {
        let mut lines: Vec<_> = self
            .lines
            .iter()
            .filter(|(_, line)| line.surface == surface)
            .map(|(handle, line)| (*handle, line))
            .collect();
        lines.sort_by_key(|(handle, _)| handle.0);
        lines
    }

    /// Returns the recorded state of an axis.
    pub fn axis(&self, surface: SurfaceUid, axis: AxisKind) -> Option<&RecordedAxis> {
        self.axes.get(&(surface, axis))
    }

    /// Returns the surface's title, if one was set.
    pub fn title(&self, surface: SurfaceUid) -> Option<&str> {
        self.titles.get(&surface).map(|t| t.as_str())
    }

    /// How many times the surface has been redrawn.
    pub fn redraw_count(&self, surface: SurfaceUid) -> usize {
        self.redraws.get(&surface).copied().unwrap_or_default()
    }

    fn axis_mut(&mut self, surface: SurfaceUid, axis: AxisKind) -> &mut RecordedAxis {
        self.axes.entry((surface, axis)).or_default()
    }
}
impl CurveCanvas for RecordingCanvas {
    fn add_line(&mut self, surface: SurfaceUid, style: &LineStyle) -> LineHandle {
        self.next_line += 1;
        let handle = LineHandle(self.next_line);
        self.lines.insert(
            handle,
            RecordedLine {
                surface,
                style: style.clone(),
                xs: Vec::default(),
                ys: Vec::default(),
            },
        );
        handle
    }

    fn set_line_data(&mut self, line: LineHandle, xs: &[f64], ys: &[Option<f64>]) {
        if let Some(recorded) = self.lines.get_mut(&line) {
            recorded.xs = xs.to_vec();
            recorded.ys = ys.to_vec();
        } else {
            log::warn!("set_line_data() called for unknown line {line}");
        }
    }

    fn redraw_canvas(&mut self, surface: SurfaceUid) {
        *self.redraws.entry(surface).or_default() += 1;
    }

    fn set_axis_ticks(&mut self, surface: SurfaceUid, axis: AxisKind, ticks: &[f64]) {
        self.axis_mut(surface, axis).ticks = Some(ticks.to_vec());
    }

    fn set_axis_tick_labels(&mut self, surface: SurfaceUid, axis: AxisKind, visible: bool) {
        self.axis_mut(surface, axis).tick_labels_hidden = !visible;
    }

    fn set_axis_limits(&mut self, surface: SurfaceUid, axis: AxisKind, limits: RangeInclusive<f64>) {
        self.axis_mut(surface, axis).limits = Some(limits);
    }

    fn set_axis_grid(&mut self, surface: SurfaceUid, axis: AxisKind, visible: bool) {
        self.axis_mut(surface, axis).grid = visible;
    }

    fn set_title(&mut self, surface: SurfaceUid, title: &str) {
        self.titles.insert(surface, title.to_string());
    }
}
