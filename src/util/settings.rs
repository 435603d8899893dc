// Copyright (c) 2024 Mike Tsao

//! Structs that describe curves in a form that's easy to save and load.
//! Intended to be serialized.

use crate::{
    curve::{CurveModel, CurveModelBuilder, DisplayFormat, Target},
    surfaces::LineStyle,
    types::{CurveName, Grid},
};
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Everything needed to rebuild one [CurveModel].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CurveSettings {
    #[allow(missing_docs)]
    pub name: CurveName,
    /// The grid's x values.
    pub grid_x: Vec<f64>,
    /// The grid's y values.
    pub grid_y: Vec<f64>,
    /// Where boundary targets start. Omitted means the grid's mean y.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_y: Option<f64>,
    #[allow(missing_docs)]
    #[serde(default)]
    pub x_format: DisplayFormat,
    #[allow(missing_docs)]
    #[serde(default)]
    pub y_format: DisplayFormat,
    #[allow(missing_docs)]
    #[serde(default)]
    pub line_style: LineStyle,
    /// Targets, in any order. They're snapped when the curve is built.
    #[serde(default)]
    pub targets: Vec<Target>,
}
impl CurveSettings {
    /// Builds the curve these settings describe.
    pub fn build(&self) -> anyhow::Result<CurveModel> {
        let grid = Grid::new(self.grid_x.clone(), self.grid_y.clone())
            .with_context(|| format!("bad grid for curve {}", self.name))?;
        let mut builder = CurveModelBuilder::default();
        builder
            .name(self.name.clone())
            .grid(grid)
            .x_format(self.x_format.clone())
            .y_format(self.y_format.clone())
            .line_style(self.line_style.clone())
            .targets(self.targets.clone());
        if let Some(default_y) = self.default_y {
            builder.default_y(default_y);
        }
        builder
            .build()
            .with_context(|| format!("couldn't build curve {}", self.name))
    }
}
impl From<&CurveModel> for CurveSettings {
    fn from(curve: &CurveModel) -> Self {
        Self {
            name: curve.name().clone(),
            grid_x: curve.grid_x().to_vec(),
            grid_y: curve.grid_y().to_vec(),
            default_y: Some(curve.default_y()),
            x_format: curve.x_format().clone(),
            y_format: curve.y_format().clone(),
            line_style: curve.line_style().clone(),
            targets: curve.targets().to_vec(),
        }
    }
}

/// A whole set of curves, in display order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CurveSetSettings {
    #[allow(missing_docs)]
    pub curves: Vec<CurveSettings>,
}
impl CurveSetSettings {
    /// Parses settings from JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("couldn't parse curve settings")
    }

    /// Renders the settings as pretty-printed JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("couldn't serialize curve settings")
    }

    /// Builds every curve, in order. Stops at the first one that fails.
    pub fn build_curves(&self) -> anyhow::Result<Vec<CurveModel>> {
        self.curves.iter().map(CurveSettings::build).collect()
    }
}
