// Copyright (c) 2024 Mike Tsao

use crate::{
    error::{CurveError, Result},
    types::CurveName,
};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// A breakpoint of a piecewise-linear curve. Once it's part of a
/// [CurveModel](super::CurveModel), both coordinates have been snapped to the
/// model's grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Target {
    /// The domain coordinate.
    pub x: f64,
    /// The range coordinate.
    pub y: f64,
}
impl Target {
    /// Creates a new [Target].
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
impl From<(f64, f64)> for Target {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Notifications that a [CurveModel](super::CurveModel) sends to its
/// subscribers.
#[derive(Clone, Debug, PartialEq)]
pub enum CurveEvent {
    /// The curve's target list changed.
    DataChanged {
        /// The curve that changed.
        curve_name: CurveName,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormatKind {
    Fixed,
    Exponent,
    Integer,
    General,
}

/// How a coordinate is rendered as text in a position readout. Parsed from a
/// compact spec such as `"0.3f"`, `".1f"`, `"8.2e"`, `"d"` or `""`:
///
/// * a leading `0` pads with zeros instead of spaces,
/// * digits set a minimum width,
/// * `.N` sets the precision,
/// * a trailing `f` (fixed), `e` (exponent), `d` (integer) or `g` (general)
///   picks the notation; general is the default. Exponents are signed and at
///   least two digits wide (`1.50e+03`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayFormat {
    spec: String,
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
    kind: FormatKind,
}
impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            spec: "0.3f".to_string(),
            zero_pad: true,
            width: 0,
            precision: Some(3),
            kind: FormatKind::Fixed,
        }
    }
}
impl DisplayFormat {
    /// The spec this format was parsed from.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// Renders a value according to this format.
    pub fn format(&self, value: f64) -> String {
        let body = match (self.kind, self.precision) {
            (FormatKind::Fixed, p) => format!("{:.*}", p.unwrap_or(6), value),
            (FormatKind::Exponent, p) => Self::exponent(value, p.unwrap_or(6)),
            (FormatKind::Integer, _) => format!("{}", value.round() as i64),
            (FormatKind::General, Some(p)) => format!("{:.*}", p, value),
            (FormatKind::General, None) => format!("{value}"),
        };
        self.pad(body)
    }

    // Signed exponent with at least two digits, as in 1.50e+03.
    fn exponent(value: f64, precision: usize) -> String {
        let rendered = format!("{:.*e}", precision, value);
        match rendered.split_once('e') {
            Some((mantissa, exponent)) => match exponent.parse::<i32>() {
                Ok(e) => {
                    let sign = if e < 0 { '-' } else { '+' };
                    format!("{mantissa}e{sign}{:02}", e.abs())
                }
                Err(_) => rendered,
            },
            None => rendered,
        }
    }

    fn pad(&self, body: String) -> String {
        let len = body.chars().count();
        if len >= self.width {
            return body;
        }
        let fill = self.width - len;
        if self.zero_pad {
            match body.strip_prefix('-') {
                Some(digits) => format!("-{}{digits}", "0".repeat(fill)),
                None => format!("{}{body}", "0".repeat(fill)),
            }
        } else {
            format!("{}{body}", " ".repeat(fill))
        }
    }
}
impl FromStr for DisplayFormat {
    type Err = CurveError;

    fn from_str(spec: &str) -> Result<Self> {
        let invalid = || CurveError::InvalidFormat(spec.to_string());
        let (rest, kind) = match spec.chars().last() {
            Some('f') | Some('F') => (&spec[..spec.len() - 1], FormatKind::Fixed),
            Some('e') | Some('E') => (&spec[..spec.len() - 1], FormatKind::Exponent),
            Some('d') => (&spec[..spec.len() - 1], FormatKind::Integer),
            Some('g') | Some('G') => (&spec[..spec.len() - 1], FormatKind::General),
            _ => (spec, FormatKind::General),
        };
        let (width_part, precision_part) = match rest.split_once('.') {
            Some((w, p)) => (w, Some(p)),
            None => (rest, None),
        };
        if !width_part.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let zero_pad = width_part.starts_with('0');
        let width = if width_part.is_empty() {
            0
        } else {
            width_part.parse::<usize>().map_err(|_| invalid())?
        };
        let precision = match precision_part {
            Some(p) if !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()) => {
                Some(p.parse::<usize>().map_err(|_| invalid())?)
            }
            Some(_) => return Err(invalid()),
            None => None,
        };
        if kind == FormatKind::Integer && precision.is_some() {
            return Err(invalid());
        }
        Ok(Self {
            spec: spec.to_string(),
            zero_pad,
            width,
            precision,
            kind,
        })
    }
}
impl TryFrom<String> for DisplayFormat {
    type Error = CurveError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
impl From<DisplayFormat> for String {
    fn from(value: DisplayFormat) -> Self {
        value.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_matches_parsed() {
        assert_eq!(DisplayFormat::default(), "0.3f".parse().unwrap());
        assert_eq!(DisplayFormat::default().format(1.0), "1.000");
    }

    #[test]
    fn format_notations() {
        let f: DisplayFormat = ".1f".parse().unwrap();
        assert_eq!(f.format(2.26), "2.3");
        assert_eq!(f.format(-0.06), "-0.1");

        let d: DisplayFormat = "d".parse().unwrap();
        assert_eq!(d.format(41.6), "42");

        let e: DisplayFormat = ".2e".parse().unwrap();
        assert_eq!(e.format(1500.0), "1.50e+03");
        assert_eq!(e.format(-0.00042), "-4.20e-04");
        let e: DisplayFormat = ".1e".parse().unwrap();
        assert_eq!(e.format(2.0e123), "2.0e+123");

        let g: DisplayFormat = "".parse().unwrap();
        assert_eq!(g.format(0.5), "0.5");
        let g: DisplayFormat = ".2g".parse().unwrap();
        assert_eq!(g.format(0.5), "0.50");
    }

    #[test]
    fn format_padding() {
        let f: DisplayFormat = "7.2f".parse().unwrap();
        assert_eq!(f.format(12.3456), "  12.35");
        let f: DisplayFormat = "07.2f".parse().unwrap();
        assert_eq!(f.format(12.3456), "0012.35");
        assert_eq!(f.format(-12.3456), "-012.35");
        let f: DisplayFormat = "2d".parse().unwrap();
        assert_eq!(f.format(12345.0), "12345", "width is a minimum");
    }

    #[test]
    fn bad_format_specs() {
        for spec in ["x.3f", ".f", "3.2.1f", "1.5d", "-3f", ".3q"] {
            assert!(
                spec.parse::<DisplayFormat>().is_err(),
                "{spec} should be rejected"
            );
        }
    }

    #[test]
    fn format_serializes_as_its_spec() {
        let f: DisplayFormat = "05.1f".parse().unwrap();
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, "\"05.1f\"");
        let back: DisplayFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
        assert!(serde_json::from_str::<DisplayFormat>("\"zz\"").is_err());
    }

    #[test]
    fn target_from_tuple() {
        assert_eq!(Target::from((1.0, 2.0)), Target::new(1.0, 2.0));
    }
}
