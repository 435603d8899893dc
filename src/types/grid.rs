// Copyright (c) 2024 Mike Tsao

use crate::error::{CurveError, Result};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Names one of the two axes of a [Grid].
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "kebab-case")]
pub enum AxisKind {
    /// The domain axis.
    X,
    /// The range axis.
    Y,
}

/// A request to snap coordinates onto one axis of a [Grid]. Only the y axis
/// accepts more than one value at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Axis<'a> {
    /// Snap a single domain value.
    X(f64),
    /// Snap one or more range values.
    Y(&'a [f64]),
}
impl Axis<'_> {
    /// Which axis this request addresses.
    pub fn kind(&self) -> AxisKind {
        match self {
            Axis::X(_) => AxisKind::X,
            Axis::Y(_) => AxisKind::Y,
        }
    }
}

/// The fixed lattice that a curve's coordinates snap to.
///
/// The x values must be strictly increasing. The y values must be monotonic,
/// but may repeat, so a flat `[5, 5]` range is allowed. An axis with exactly
/// two values is continuous: values on it pass through snapping unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    x: Vec<f64>,
    y: Vec<f64>,
}
impl Grid {
    /// Validates and creates a grid.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        Self::validate_axis(AxisKind::X, &x)?;
        Self::validate_axis(AxisKind::Y, &y)?;
        if !x.windows(2).all(|w| w[0] < w[1]) {
            return Err(CurveError::InvalidGrid {
                axis: AxisKind::X,
                reason: "values must be strictly increasing".to_string(),
            });
        }
        let ascending = y.windows(2).all(|w| w[0] <= w[1]);
        let descending = y.windows(2).all(|w| w[0] >= w[1]);
        if !(ascending || descending) {
            return Err(CurveError::InvalidGrid {
                axis: AxisKind::Y,
                reason: "values must be monotonic".to_string(),
            });
        }
        Ok(Self { x, y })
    }

    fn validate_axis(axis: AxisKind, values: &[f64]) -> Result<()> {
        if values.len() < 2 {
            return Err(CurveError::InvalidGrid {
                axis,
                reason: format!("needs at least two values, got {}", values.len()),
            });
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(CurveError::InvalidGrid {
                axis,
                reason: format!("{bad} is not a finite value"),
            });
        }
        Ok(())
    }

    /// The domain values.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The range values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The values of the given axis.
    pub fn axis(&self, axis: AxisKind) -> &[f64] {
        match axis {
            AxisKind::X => &self.x,
            AxisKind::Y => &self.y,
        }
    }

    /// The first domain value, where the left boundary target lives.
    pub fn first_x(&self) -> f64 {
        self.x[0]
    }

    /// The last domain value, where the right boundary target lives.
    pub fn last_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// Whether the given x is one of the two boundary values.
    pub fn is_boundary_x(&self, x: f64) -> bool {
        x == self.first_x() || x == self.last_x()
    }

    /// Whether values on this axis pass through snapping unchanged.
    pub fn is_continuous(&self, axis: AxisKind) -> bool {
        self.axis(axis).len() == 2
    }

    /// The position of `x` in the domain values, if it's exactly one of them.
    pub fn index_of_x(&self, x: f64) -> Option<usize> {
        self.x.iter().position(|gx| *gx == x)
    }

    /// The lowest range value.
    pub fn min_y(&self) -> f64 {
        self.y.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// The highest range value.
    pub fn max_y(&self) -> f64 {
        self.y.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// The distance between the lowest and highest range values.
    pub fn y_span(&self) -> f64 {
        self.max_y() - self.min_y()
    }

    /// The arithmetic mean of the values on an axis.
    pub fn mean(&self, axis: AxisKind) -> f64 {
        let values = self.axis(axis);
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Snaps values to the nearest member of the requested axis. Returns one
    /// value per input value. Non-finite input is rejected because there's no
    /// grid member nearest to it.
    pub fn snap(&self, request: Axis) -> Result<Vec<f64>> {
        match request {
            Axis::X(value) => Ok(vec![self.snap_scalar(AxisKind::X, value)?]),
            Axis::Y(values) => values
                .iter()
                .map(|v| self.snap_scalar(AxisKind::Y, *v))
                .collect(),
        }
    }

    /// Snaps a single domain value.
    pub fn snap_x(&self, value: f64) -> Result<f64> {
        self.snap_scalar(AxisKind::X, value)
    }

    /// Snaps a single range value.
    pub fn snap_y(&self, value: f64) -> Result<f64> {
        self.snap_scalar(AxisKind::Y, value)
    }

    fn snap_scalar(&self, axis: AxisKind, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(CurveError::InvalidValue { axis, value });
        }
        Ok(self.snap_unchecked(axis, value))
    }

    /// Snaps a value already known to be finite, such as one derived from
    /// other snapped values.
    pub(crate) fn snap_unchecked(&self, axis: AxisKind, value: f64) -> f64 {
        if self.is_continuous(axis) {
            value
        } else {
            Self::nearest(self.axis(axis), value)
        }
    }

    // Ties go to whichever candidate comes first in stored order.
    fn nearest(values: &[f64], value: f64) -> f64 {
        let mut best = values[0];
        let mut best_distance = (best - value).abs();
        for candidate in values.iter().skip(1) {
            let distance = (candidate - value).abs();
            if distance < best_distance {
                best = *candidate;
                best_distance = distance;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_by_three() -> Grid {
        Grid::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 10.0, 20.0]).unwrap()
    }

    #[test]
    fn grid_validation() {
        assert!(Grid::new(vec![0.0], vec![0.0, 1.0]).is_err());
        assert!(Grid::new(vec![0.0, 1.0], vec![]).is_err());
        assert!(
            Grid::new(vec![0.0, 0.0, 1.0], vec![0.0, 1.0]).is_err(),
            "repeated x should be rejected"
        );
        assert!(
            Grid::new(vec![2.0, 1.0], vec![0.0, 1.0]).is_err(),
            "descending x should be rejected"
        );
        assert!(
            Grid::new(vec![0.0, 1.0], vec![0.0, 2.0, 1.0]).is_err(),
            "non-monotonic y should be rejected"
        );
        assert!(Grid::new(vec![0.0, f64::NAN], vec![0.0, 1.0]).is_err());
        assert!(Grid::new(vec![0.0, 1.0], vec![0.0, f64::INFINITY]).is_err());

        assert!(Grid::new(vec![0.0, 1.0], vec![5.0, 5.0]).is_ok());
        assert!(Grid::new(vec![0.0, 1.0], vec![3.0, 2.0, 1.0]).is_ok());
    }

    #[test]
    fn snapping_picks_nearest_member() {
        let grid = five_by_three();
        assert_eq!(grid.snap_x(2.4).unwrap(), 2.0);
        assert_eq!(grid.snap_x(2.6).unwrap(), 3.0);
        assert_eq!(grid.snap_x(-100.0).unwrap(), 0.0);
        assert_eq!(grid.snap_x(100.0).unwrap(), 4.0);
        assert_eq!(grid.snap_y(17.0).unwrap(), 20.0);
        assert_eq!(
            grid.snap(Axis::Y(&[-3.0, 4.0, 6.0, 99.0])).unwrap(),
            vec![0.0, 0.0, 10.0, 20.0]
        );
    }

    #[test]
    fn snapping_ties_go_to_first_member() {
        let grid = five_by_three();
        assert_eq!(grid.snap_y(15.0).unwrap(), 10.0);
        assert_eq!(grid.snap_y(5.0).unwrap(), 0.0);
        assert_eq!(grid.snap_x(1.5).unwrap(), 1.0);

        let descending = Grid::new(vec![0.0, 1.0], vec![20.0, 10.0, 0.0]).unwrap();
        assert_eq!(
            descending.snap_y(15.0).unwrap(),
            20.0,
            "ties follow stored order, not numeric order"
        );
    }

    #[test]
    fn snapping_always_returns_a_member() {
        let grid = Grid::new(
            vec![0.0, 0.25, 0.5, 1.0],
            vec![-2.0, -1.0, 0.0, 1.0, 2.0],
        )
        .unwrap();
        for i in -40..=40 {
            let v = i as f64 * 0.13;
            assert!(grid.x().contains(&grid.snap_x(v).unwrap()));
            assert!(grid.y().contains(&grid.snap_y(v).unwrap()));
        }
    }

    #[test]
    fn two_value_axes_are_continuous() {
        let grid = Grid::new(vec![0.0, 10.0], vec![-1.0, 1.0]).unwrap();
        assert!(grid.is_continuous(AxisKind::X));
        assert!(grid.is_continuous(AxisKind::Y));
        assert_eq!(grid.snap_x(3.3).unwrap(), 3.3);
        assert_eq!(grid.snap_y(0.123).unwrap(), 0.123);
        assert_eq!(grid.snap_x(-50.0).unwrap(), -50.0);
        assert_eq!(
            grid.snap(Axis::Y(&[0.5, 7.0])).unwrap(),
            vec![0.5, 7.0],
            "continuous axis shouldn't clamp either"
        );
    }

    #[test]
    fn snapping_rejects_non_finite_values() {
        let grid = five_by_three();
        assert!(matches!(
            grid.snap(Axis::X(f64::NAN)),
            Err(CurveError::InvalidValue {
                axis: AxisKind::X,
                ..
            })
        ));
        assert!(grid.snap(Axis::Y(&[1.0, f64::INFINITY])).is_err());

        let continuous = Grid::new(vec![0.0, 1.0], vec![0.0, 1.0]).unwrap();
        assert!(continuous.snap_y(f64::NAN).is_err());
    }

    #[test]
    fn axis_statistics() {
        let grid = Grid::new(vec![0.0, 1.0, 2.0], vec![20.0, 10.0, 0.0]).unwrap();
        assert_eq!(grid.first_x(), 0.0);
        assert_eq!(grid.last_x(), 2.0);
        assert!(grid.is_boundary_x(0.0));
        assert!(grid.is_boundary_x(2.0));
        assert!(!grid.is_boundary_x(1.0));
        assert_eq!(grid.min_y(), 0.0);
        assert_eq!(grid.max_y(), 20.0);
        assert_eq!(grid.y_span(), 20.0);
        assert_eq!(grid.mean(AxisKind::X), 1.0);
        assert_eq!(grid.mean(AxisKind::Y), 10.0);
        assert_eq!(grid.index_of_x(1.0), Some(1));
        assert_eq!(grid.index_of_x(1.5), None);
        assert_eq!(Axis::X(1.0).kind(), AxisKind::X);
        assert_eq!(Axis::Y(&[]).kind(), AxisKind::Y);
    }
}
