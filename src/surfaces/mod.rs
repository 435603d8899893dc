// Copyright (c) 2024 Mike Tsao

//! The two plotting surfaces and the seam to whatever actually draws them.
//!
//! Rendering is somebody else's job. The controllers here decide *what* should
//! be on each surface and tell a [CurveCanvas] about it; an application
//! implements [CurveCanvas] on top of its plotting library, and feeds pointer
//! events back in through the [CurveSetCoordinator](crate::CurveSetCoordinator).

/// The most commonly used imports.
pub mod prelude {
    pub use super::{
        CurveCanvas, DrawSurfaceController, LineStyle, MarkerPick, PointerMotion,
        PointerRelease, PreviewSurfaceController, RecordingCanvas,
    };
}

pub use draw::DrawSurfaceController;
pub use events::{
    HorizontalAlign, MarkerPick, PointerMotion, PointerRelease, PositionReadout, VerticalAlign,
};
pub use preview::PreviewSurfaceController;
pub use recording::{RecordedAxis, RecordedLine, RecordingCanvas};
pub use traits::{CurveCanvas, LineStyle, Marker};

mod draw;
mod events;
mod preview;
mod recording;
mod traits;
