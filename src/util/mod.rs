// Copyright (c) 2024 Mike Tsao

//! Saving and loading curves.

/// Commonly used imports.
pub mod prelude {
    pub use super::{CurveSetSettings, CurveSettings};
}

pub use settings::{CurveSetSettings, CurveSettings};

mod settings;
