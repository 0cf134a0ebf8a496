// SPDX-License-Identifier: GPL-3.0-only

//! Filter expressions and the preset library
//!
//! A filter expression is an ordered list of colour adjustments written in the
//! CSS filter syntax, for example `hue-rotate(300deg) saturate(200%) brightness(1.1)`.
//! Expressions are parsed into [`FilterOp`]s, rendered back to the same text, and
//! compiled into colour matrices by the [`color`] module for per-pixel use.
//!
//! - [`library`]: fixed presets plus the procedurally generated ones
//! - [`color`]: colour-matrix evaluation of an expression

pub mod color;
pub mod library;

pub use color::CompiledFilter;
pub use library::{FilterLibrary, ProceduralParams, procedural_params};

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Numeric argument of a filter function, remembering how it was written
///
/// `saturate(200%)` and `saturate(2)` are the same adjustment, but the
/// expression text is kept as authored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Percentage, e.g. `140%`
    Percent(f64),
    /// Plain factor, e.g. `1.2`
    Number(f64),
}

impl Amount {
    /// Multiplicative factor (1.0 = unchanged for saturate/contrast/brightness)
    pub fn factor(&self) -> f64 {
        match self {
            Amount::Percent(p) => p / 100.0,
            Amount::Number(n) => *n,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Percent(p) => write!(f, "{}%", p),
            Amount::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A single visual adjustment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterOp {
    /// Rotate hue by the given number of degrees
    HueRotate(f64),
    /// Scale saturation (1.0 = unchanged, 0.0 = greyscale)
    Saturate(Amount),
    /// Scale contrast around mid grey
    Contrast(Amount),
    /// Scale all channels linearly
    Brightness(Amount),
    /// Blend towards sepia (0.0 = none, 1.0 = full)
    Sepia(Amount),
}

impl FilterOp {
    /// CSS function name of this operation
    pub fn function_name(&self) -> &'static str {
        match self {
            FilterOp::HueRotate(_) => "hue-rotate",
            FilterOp::Saturate(_) => "saturate",
            FilterOp::Contrast(_) => "contrast",
            FilterOp::Brightness(_) => "brightness",
            FilterOp::Sepia(_) => "sepia",
        }
    }

    fn parse(name: &str, arg: &str) -> Result<Self, FilterParseError> {
        match name {
            "hue-rotate" => parse_angle(arg).map(FilterOp::HueRotate),
            "saturate" => parse_amount(arg).map(FilterOp::Saturate),
            "contrast" => parse_amount(arg).map(FilterOp::Contrast),
            "brightness" => parse_amount(arg).map(FilterOp::Brightness),
            "sepia" => parse_amount(arg).map(FilterOp::Sepia),
            other => Err(FilterParseError::UnknownFunction(other.to_string())),
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOp::HueRotate(deg) => write!(f, "hue-rotate({}deg)", deg),
            FilterOp::Saturate(a)
            | FilterOp::Contrast(a)
            | FilterOp::Brightness(a)
            | FilterOp::Sepia(a) => write!(f, "{}({})", self.function_name(), a),
        }
    }
}

/// Ordered composition of filter operations
///
/// The empty expression is the identity and renders as `none`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterExpression {
    ops: Vec<FilterOp>,
}

impl FilterExpression {
    /// The no-op expression
    pub fn identity() -> Self {
        Self::default()
    }

    /// Build an expression from operations applied left to right
    pub fn from_ops(ops: Vec<FilterOp>) -> Self {
        Self { ops }
    }

    /// Operations in application order
    pub fn ops(&self) -> &[FilterOp] {
        &self.ops
    }

    /// Whether this expression leaves pixels untouched
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Compile into colour matrices for per-pixel evaluation
    pub fn compile(&self) -> CompiledFilter {
        CompiledFilter::new(self)
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ops.is_empty() {
            return write!(f, "none");
        }
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

impl FromStr for FilterExpression {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            return Ok(Self::identity());
        }

        let mut ops = Vec::new();
        let mut rest = trimmed;
        while !rest.is_empty() {
            let open = rest
                .find('(')
                .ok_or_else(|| FilterParseError::Malformed(rest.to_string()))?;
            let close = rest[open..]
                .find(')')
                .map(|i| open + i)
                .ok_or_else(|| FilterParseError::Malformed(rest.to_string()))?;

            let name = rest[..open].trim().to_ascii_lowercase();
            let arg = rest[open + 1..close].trim();
            ops.push(FilterOp::parse(&name, arg)?);

            rest = rest[close + 1..].trim_start();
        }

        Ok(Self { ops })
    }
}

impl Serialize for FilterExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A named, immutable filter preset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterDescriptor {
    pub name: String,
    pub expression: FilterExpression,
}

impl FilterDescriptor {
    pub fn new(name: impl Into<String>, expression: FilterExpression) -> Self {
        Self {
            name: name.into(),
            expression,
        }
    }
}

/// Errors from parsing filter expression text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterParseError {
    /// Function name is not one of the supported adjustments
    UnknownFunction(String),
    /// Argument could not be read as a number with a valid unit
    InvalidArgument(String),
    /// Text is not a sequence of `name(argument)` calls
    Malformed(String),
}

impl fmt::Display for FilterParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterParseError::UnknownFunction(name) => {
                write!(f, "Unknown filter function: {}", name)
            }
            FilterParseError::InvalidArgument(arg) => write!(f, "Invalid filter argument: {}", arg),
            FilterParseError::Malformed(text) => write!(f, "Malformed filter expression: {}", text),
        }
    }
}

impl std::error::Error for FilterParseError {}

fn parse_number(text: &str) -> Result<f64, FilterParseError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FilterParseError::InvalidArgument(text.to_string()))
}

fn parse_amount(arg: &str) -> Result<Amount, FilterParseError> {
    let amount = match arg.strip_suffix('%') {
        Some(pct) => Amount::Percent(parse_number(pct)?),
        None => Amount::Number(parse_number(arg)?),
    };
    if amount.factor() < 0.0 {
        return Err(FilterParseError::InvalidArgument(arg.to_string()));
    }
    Ok(amount)
}

fn parse_angle(arg: &str) -> Result<f64, FilterParseError> {
    if let Some(deg) = arg.strip_suffix("deg") {
        parse_number(deg)
    } else if let Some(turn) = arg.strip_suffix("turn") {
        parse_number(turn).map(|t| t * 360.0)
    } else if let Some(rad) = arg.strip_suffix("rad") {
        parse_number(rad).map(f64::to_degrees)
    } else if parse_number(arg)? == 0.0 {
        // Unitless zero is the only bare angle CSS accepts
        Ok(0.0)
    } else {
        Err(FilterParseError::InvalidArgument(arg.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_identity() {
        let expr: FilterExpression = "none".parse().unwrap();
        assert!(expr.is_identity());
        assert_eq!(expr.to_string(), "none");
        assert_eq!("  ".parse::<FilterExpression>().unwrap(), expr);
    }

    #[test]
    fn test_cyberpink_round_trips_text() {
        let text = "hue-rotate(300deg) saturate(200%) brightness(1.1)";
        let expr: FilterExpression = text.parse().unwrap();
        assert_eq!(expr.ops().len(), 3);
        assert_eq!(expr.ops()[0], FilterOp::HueRotate(300.0));
        assert_eq!(expr.to_string(), text);
    }

    #[test]
    fn test_percent_and_number_factors_agree() {
        assert_eq!(Amount::Percent(120.0).factor(), Amount::Number(1.2).factor());
    }

    #[test]
    fn test_angle_units() {
        let expr: FilterExpression = "hue-rotate(0.5turn)".parse().unwrap();
        assert_eq!(expr.ops()[0], FilterOp::HueRotate(180.0));
        let expr: FilterExpression = "hue-rotate(0)".parse().unwrap();
        assert_eq!(expr.ops()[0], FilterOp::HueRotate(0.0));
        assert!("hue-rotate(45)".parse::<FilterExpression>().is_err());
    }

    #[test]
    fn test_rejects_unknown_and_malformed() {
        assert_eq!(
            "blur(4px)".parse::<FilterExpression>(),
            Err(FilterParseError::UnknownFunction("blur".to_string()))
        );
        assert!(matches!(
            "saturate(200%".parse::<FilterExpression>(),
            Err(FilterParseError::Malformed(_))
        ));
        assert!(matches!(
            "contrast(-1)".parse::<FilterExpression>(),
            Err(FilterParseError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_serializes_as_text() {
        let descriptor = FilterDescriptor::new(
            "Warm",
            FilterExpression::from_ops(vec![FilterOp::Sepia(Amount::Number(0.2))]),
        );
        let json = serde_json::to_string(&descriptor).unwrap();
        assert_eq!(json, r#"{"name":"Warm","expression":"sepia(0.2)"}"#);
    }
}
