// Copyright (c) 2024 Mike Tsao

//! The error type shared by the curve model and the coordinator.

use crate::{curve::CurveModelBuilderError, types::CurveName};

/// Shorthand for results whose error is a [CurveError].
pub type Result<T> = core::result::Result<T, CurveError>;

/// Everything that can go wrong while building or editing curves. Interactive
/// no-ops, such as deleting a boundary target or a target that doesn't exist,
/// are not errors and never produce one of these.
#[derive(thiserror::Error, Debug)]
pub enum CurveError {
    /// A grid axis failed validation.
    #[error("Invalid grid on the {axis} axis: {reason}")]
    InvalidGrid {
        /// Which axis was rejected.
        axis: crate::types::AxisKind,
        /// Why.
        reason: String,
    },

    /// A coordinate couldn't be snapped to either axis.
    #[error("Invalid value {value} for the {axis} axis")]
    InvalidValue {
        /// The axis the value was meant for.
        axis: crate::types::AxisKind,
        /// The offending value.
        value: f64,
    },

    /// The named curve isn't part of the set.
    #[error("Unknown curve: {0}")]
    UnknownCurve(CurveName),

    /// Two curves in the same set share a name.
    #[error("Duplicate curve name: {0}")]
    DuplicateCurve(CurveName),

    /// A coordinator needs at least one curve to lay out its axes.
    #[error("A curve set needs at least one curve")]
    EmptyCurveSet,

    /// A display format spec couldn't be parsed.
    #[error("Invalid display format \"{0}\"")]
    InvalidFormat(String),

    /// The builder was missing a required field or failed validation.
    #[error(transparent)]
    Builder(#[from] CurveModelBuilderError),
}
