use std::collections::BTreeMap;

use crate::{
    config::options::BreakpointSpec,
    foundation::error::{GridishError, GridishResult},
    foundation::units::{DimensionInput, ParsedDimension},
};

/// A breakpoint with its name attached and gutter/margin parsed.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedBreakpoint {
    /// Key of the tier in the configuration map.
    pub name: String,
    /// Minimum viewport width, in `rem`.
    pub threshold: f64,
    /// Total column count at this tier.
    pub columns: u32,
    /// Space between columns.
    pub gutter: ParsedDimension,
    /// Horizontal padding of the column container.
    pub margin: ParsedDimension,
    /// Baseline row height, in `rem`.
    pub row_height: f64,
}

/// Resolve every tier and sort ascending by threshold.
///
/// The map yields names in ascending order and the sort is stable, so tiers
/// with equal thresholds stay in name order.
#[tracing::instrument(skip(breakpoints), fields(tiers = breakpoints.len()))]
pub fn normalize_breakpoints(
    breakpoints: &BTreeMap<String, BreakpointSpec>,
    default_unit: &str,
) -> GridishResult<Vec<ResolvedBreakpoint>> {
    let mut out = Vec::with_capacity(breakpoints.len());
    for (name, spec) in breakpoints {
        out.push(ResolvedBreakpoint {
            name: name.clone(),
            threshold: spec.threshold,
            columns: spec.columns,
            gutter: parse_field(name, "gutter", &spec.gutter, default_unit)?,
            margin: parse_field(name, "margin", &spec.margin, default_unit)?,
            row_height: spec.row_height,
        });
    }
    out.sort_by(|a, b| a.threshold.total_cmp(&b.threshold));
    Ok(out)
}

fn parse_field(
    name: &str,
    field: &str,
    input: &DimensionInput,
    default_unit: &str,
) -> GridishResult<ParsedDimension> {
    input.parse(default_unit).map_err(|err| match err {
        GridishError::Validation(msg) => {
            GridishError::validation(format!("breakpoint '{name}' {field}: {msg}"))
        }
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/normalize.rs"]
mod tests;
