use std::fmt;

use crate::foundation::error::{GridishError, GridishResult};

/// A gutter or margin as written in configuration: a bare number or a string
/// such as `"25px"` or `"1.25rem"`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DimensionInput {
    /// Unitless number; the configured default unit applies.
    Number(f64),
    /// Number followed by an optional unit token.
    Text(String),
}

impl DimensionInput {
    /// Parse this input into a value/unit pair.
    pub fn parse(&self, default_unit: &str) -> GridishResult<ParsedDimension> {
        match self {
            Self::Number(n) => {
                if !n.is_finite() || *n < 0.0 {
                    return Err(GridishError::validation(format!(
                        "dimension {n} must be a finite, non-negative number"
                    )));
                }
                parse_unit(&n.to_string(), default_unit)
            }
            Self::Text(s) => parse_unit(s, default_unit),
        }
    }
}

impl From<&str> for DimensionInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for DimensionInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A numeric CSS length split into its value and unit token.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParsedDimension {
    /// Numeric part.
    pub value: f64,
    /// CSS unit, e.g. `px` or `rem`.
    pub unit: String,
}

impl ParsedDimension {
    /// Build a dimension from parts.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Build a `rem` dimension.
    pub fn rem(value: f64) -> Self {
        Self::new(value, "rem")
    }

    /// Build a `px` dimension.
    pub fn px(value: f64) -> Self {
        Self::new(value, "px")
    }

    /// Half of this dimension, same unit.
    pub fn half(&self) -> Self {
        Self::new(self.value / 2.0, self.unit.clone())
    }
}

impl fmt::Display for ParsedDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Split `input` into a number and a unit.
///
/// The first run of ASCII digits (with an optional `.digits` fraction) is the
/// value; the word characters immediately after it are the unit. When no unit
/// token follows, `default_unit` is used. Input without any digit is rejected.
pub fn parse_unit(input: &str, default_unit: &str) -> GridishResult<ParsedDimension> {
    let bytes = input.as_bytes();
    let Some(start) = bytes.iter().position(u8::is_ascii_digit) else {
        return Err(GridishError::validation(format!(
            "dimension '{input}' has no numeric value"
        )));
    };

    let digits_from = |from: usize| {
        from + bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = digits_from(start);
    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        end = digits_from(end + 1);
    }

    let value: f64 = input[start..end]
        .parse()
        .map_err(|_| GridishError::validation(format!("dimension '{input}' is not a number")))?;

    let unit_end = end
        + bytes[end..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
            .count();
    let unit = if unit_end > end {
        &input[end..unit_end]
    } else {
        default_unit
    };

    Ok(ParsedDimension::new(value, unit))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/units.rs"]
mod tests;
