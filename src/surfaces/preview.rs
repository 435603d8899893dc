// Copyright (c) 2024 Mike Tsao

use super::CurveCanvas;
use crate::{
    curve::CurveModel,
    types::{AxisKind, CurveName, LineHandle, SurfaceUid},
};
use delegate::delegate;
use rustc_hash::FxHashMap;

/// A read-only surface that overlays every registered curve, each normalized
/// to 0..=1 so curves with different ranges can be compared.
#[derive(Debug)]
pub struct PreviewSurfaceController {
    surface: SurfaceUid,
    // Insertion order is drawing order.
    lines: Vec<(CurveName, LineHandle)>,
}
impl PreviewSurfaceController {
    /// Creates the controller for the given surface.
    pub fn new_with(canvas: &mut dyn CurveCanvas, surface: SurfaceUid) -> Self {
        canvas.set_axis_tick_labels(surface, AxisKind::Y, false);
        Self {
            surface,
            lines: Vec::default(),
        }
    }

    #[allow(missing_docs)]
    pub fn surface(&self) -> SurfaceUid {
        self.surface
    }

    delegate! {
        to self.lines {
            /// The number of registered curves.
            pub fn len(&self) -> usize;

            /// Whether no curves are registered.
            pub fn is_empty(&self) -> bool;
        }
    }

    /// Adds a line for the curve, styled with the curve's own line style, and
    /// draws it. Registering the same name twice keeps the first line.
    pub fn add_curve(&mut self, canvas: &mut dyn CurveCanvas, curve: &CurveModel) {
        if self.line_for(curve.name()).is_some() {
            log::warn!("{} is already in the preview", curve.name());
            return;
        }
        let line = canvas.add_line(self.surface, curve.line_style());
        canvas.set_line_data(line, curve.grid_x(), &curve.normalized_interpolated_series());
        canvas.redraw_canvas(self.surface);
        self.lines.push((curve.name().clone(), line));
    }

    /// The line drawn for the named curve.
    pub fn line_for(&self, name: &CurveName) -> Option<LineHandle> {
        self.lines
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, line)| *line)
    }

    /// The registered curve names, in the order they were added.
    pub fn curve_names(&self) -> impl Iterator<Item = &CurveName> {
        self.lines.iter().map(|(name, _)| name)
    }

    /// Refreshes every line from its curve, then redraws the surface once.
    pub fn redraw(&self, canvas: &mut dyn CurveCanvas, curves: &FxHashMap<CurveName, CurveModel>) {
        for (name, line) in self.lines.iter() {
            if let Some(curve) = curves.get(name) {
                canvas.set_line_data(
                    *line,
                    curve.grid_x(),
                    &curve.normalized_interpolated_series(),
                );
            } else {
                log::warn!("preview has a line for {name}, but there's no such curve");
            }
        }
        canvas.redraw_canvas(self.surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        curve::CurveModelBuilder,
        surfaces::{LineStyle, RecordingCanvas},
        types::Grid,
    };

    fn curve(name: &str, color: &str) -> CurveModel {
        CurveModelBuilder::default()
            .name(name)
            .grid(Grid::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap())
            .line_style(LineStyle {
                color: color.to_string(),
                ..Default::default()
            })
            .target((0.0, 1.0))
            .target((2.0, 1.0))
            .build()
            .unwrap()
    }

    #[test]
    fn preview_keeps_insertion_order() {
        let mut canvas = RecordingCanvas::default();
        let mut preview = PreviewSurfaceController::new_with(&mut canvas, SurfaceUid::PREVIEW);
        assert!(preview.is_empty());
        assert!(
            canvas
                .axis(SurfaceUid::PREVIEW, AxisKind::Y)
                .unwrap()
                .tick_labels_hidden
        );

        let zeta = curve("zeta", "#ff0000");
        let alpha = curve("alpha", "#00ff00");
        preview.add_curve(&mut canvas, &zeta);
        preview.add_curve(&mut canvas, &alpha);
        preview.add_curve(&mut canvas, &zeta);
        assert_eq!(preview.len(), 2);
        let names: Vec<&str> = preview.curve_names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);

        let zeta_line = canvas.line(preview.line_for(zeta.name()).unwrap()).unwrap();
        assert_eq!(zeta_line.style.color, "#ff0000");
        assert_eq!(zeta_line.ys, vec![Some(0.0), Some(0.0), Some(0.0)]);
        assert_eq!(canvas.redraw_count(SurfaceUid::PREVIEW), 2);
    }

    #[test]
    fn redraw_refreshes_all_lines() {
        let mut canvas = RecordingCanvas::default();
        let mut preview = PreviewSurfaceController::new_with(&mut canvas, SurfaceUid::PREVIEW);
        let mut curves: FxHashMap<CurveName, CurveModel> = Default::default();
        for (name, color) in [("a", "#111111"), ("b", "#222222")] {
            let c = curve(name, color);
            preview.add_curve(&mut canvas, &c);
            curves.insert(c.name().clone(), c);
        }

        if let Some(b) = curves.get_mut("b") {
            b.add_target(1.0, 2.0).unwrap();
        }
        preview.redraw(&mut canvas, &curves);

        let b_line = canvas
            .line(preview.line_for(&CurveName::from("b")).unwrap())
            .unwrap();
        assert_eq!(b_line.ys, vec![Some(0.0), Some(0.5), Some(0.0)]);
        let a_line = canvas
            .line(preview.line_for(&CurveName::from("a")).unwrap())
            .unwrap();
        assert_eq!(a_line.ys, vec![Some(0.0), Some(0.0), Some(0.0)]);
        assert_eq!(canvas.redraw_count(SurfaceUid::PREVIEW), 3);
    }
}
