// Copyright (c) 2024 Mike Tsao

//! Identifiers for curves, surfaces, and the lines drawn on them.

use core::borrow::Borrow;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use synonym::Synonym;

/// The unique name of a curve within a curve set. It's also what the user sees
/// in the draw surface's title, so keep it short.
#[derive(
    Clone, Debug, Default, Display, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CurveName(pub String);
impl CurveName {
    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl From<&str> for CurveName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
impl From<String> for CurveName {
    fn from(value: String) -> Self {
        Self(value)
    }
}
impl AsRef<str> for CurveName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
// Lets maps keyed by CurveName be queried with a plain &str.
impl Borrow<str> for CurveName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Identifies one of the plotting surfaces that the rendering backend manages.
#[derive(Synonym, Serialize, Deserialize, Eq, PartialEq)]
// Derived rather than left to Synonym so the consts below work in patterns.
#[synonym(skip(PartialEq))]
pub struct SurfaceUid(pub usize);
impl SurfaceUid {
    /// The surface where the active curve is edited.
    pub const DRAW: Self = Self(1);
    /// The read-only surface that compares every curve in the set.
    pub const PREVIEW: Self = Self(2);
}

/// An opaque handle to a line that the rendering backend created.
#[derive(Synonym, Serialize, Deserialize)]
pub struct LineHandle(pub usize);

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn curve_name_lookup_by_str() {
        let mut map: FxHashMap<CurveName, usize> = Default::default();
        map.insert(CurveName::from("pitch"), 1);
        map.insert(CurveName::from(String::from("intensity")), 2);

        assert_eq!(map.get("pitch"), Some(&1));
        assert_eq!(map.get("intensity"), Some(&2));
        assert_eq!(map.get("tempo"), None);
    }

    #[test]
    fn curve_name_displays_plainly() {
        assert_eq!(CurveName::from("pitch").to_string(), "pitch");
        assert_eq!(CurveName::from("pitch").as_str(), "pitch");
    }

    #[test]
    fn surfaces_are_distinct() {
        assert_ne!(SurfaceUid::DRAW, SurfaceUid::PREVIEW);
        let label = match SurfaceUid(2) {
            SurfaceUid::DRAW => "draw",
            SurfaceUid::PREVIEW => "preview",
            _ => "other",
        };
        assert_eq!(label, "preview");
    }
}
