use crate::{
    compile::{
        classes::GridClasses,
        css::{MediaQuery, MediaRule, StyleRule},
        normalize::ResolvedBreakpoint,
    },
    config::options::StyleBag,
    foundation::error::{GridishError, GridishResult},
    foundation::units::ParsedDimension,
};

/// Most row markers a single grid may emit.
///
/// Overlay heights that would need more are rejected by [`compile_rows`].
pub const MAX_ROW_MARKERS: usize = 100_000;

/// One baseline row marker.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RowElement {
    /// Tier whose row density introduced this marker.
    pub tier: String,
    /// Repeating label, `1..=rows_per_cycle`.
    pub label: u32,
}

/// Row markers plus the media rules that size, reveal and label them.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayer {
    /// Every marker, in document order.
    pub elements: Vec<RowElement>,
    /// Sizing rules, then visibility rules, then the narrow-layout override.
    pub media_rules: Vec<MediaRule>,
}

/// Inputs that decide how many row markers exist and how labels look.
#[derive(Clone, Debug, PartialEq)]
pub struct RowMetrics {
    /// Height of the overlay the markers must fill, in pixels.
    pub overlay_height_px: f64,
    /// Pixels per `rem`.
    pub rem_px: f64,
    /// Labels per repeating cycle.
    pub rows_per_cycle: u32,
    /// CSS length used to offset labels from the row edge.
    pub label_font_size: String,
}

impl RowMetrics {
    /// Whole rows of `row_height_rem` that fit in the overlay.
    ///
    /// Saturates at `usize::MAX`; [`compile_rows`] bounds the result by
    /// [`MAX_ROW_MARKERS`].
    pub fn rows_that_fit(&self, row_height_rem: f64) -> usize {
        let rows = (self.overlay_height_px / (self.rem_px * row_height_rem)).floor();
        if rows.is_finite() && rows > 0.0 {
            rows as usize
        } else {
            0
        }
    }
}

/// Compile row markers and their media rules from ascending tiers.
///
/// Marker count is driven by the shortest row height: tiers are walked in
/// descending row height and each contributes the rows it needs beyond those
/// already emitted. Labels cycle over the global marker index.
#[tracing::instrument(skip(classes, sorted), fields(tiers = sorted.len()))]
pub fn compile_rows(
    classes: &GridClasses,
    sorted: &[ResolvedBreakpoint],
    metrics: &RowMetrics,
) -> GridishResult<RowLayer> {
    if metrics.rows_per_cycle == 0 {
        return Err(GridishError::validation("rows per cycle must be > 0"));
    }

    let item_class = classes.row_item();
    let item = GridClasses::selector(&item_class);
    let before = format!("{item}::before");
    let after = format!("{item}::after");
    let font = metrics.label_font_size.as_str();

    let mut media_rules = Vec::with_capacity(sorted.len() * 2 + 1);

    for (idx, bp) in sorted.iter().enumerate() {
        media_rules.push(MediaRule::new(
            MediaQuery::tier(idx, bp.threshold),
            vec![
                StyleRule::new(item.as_str())
                    .decl("height", ParsedDimension::rem(bp.row_height).to_string())
                    .decl("direction", "ltr"),
                StyleRule::new(format!("{before}, {after}")).decl(
                    "top",
                    format!("calc({} - {font})", ParsedDimension::rem(bp.row_height / 2.0)),
                ),
            ],
        ));
    }

    let mut by_height: Vec<&ResolvedBreakpoint> = sorted.iter().collect();
    by_height.sort_by(|a, b| b.row_height.total_cmp(&a.row_height));

    let cycle = metrics.rows_per_cycle as usize;
    let mut elements = Vec::new();
    let mut emitted = 0usize;

    for (idx, bp) in by_height.iter().enumerate() {
        let query = match idx.checked_sub(1).map(|prev| by_height[prev]) {
            None => MediaQuery::min_width(ParsedDimension::px(0.0)),
            Some(taller) => MediaQuery::max_width(ParsedDimension::rem(taller.threshold)),
        };
        media_rules.push(MediaRule::new(
            query,
            vec![
                StyleRule::new(GridClasses::tier_selector(&item_class, &bp.name))
                    .decl("display", "block"),
            ],
        ));

        let fit = metrics.rows_that_fit(bp.row_height);
        if fit > MAX_ROW_MARKERS {
            return Err(GridishError::validation(format!(
                "breakpoint '{}' needs {fit} row markers at overlay height {}px, limit is {}",
                bp.name, metrics.overlay_height_px, MAX_ROW_MARKERS
            )));
        }
        elements.extend((emitted..fit).map(|index| RowElement {
            tier: bp.name.clone(),
            label: (index % cycle) as u32 + 1,
        }));
        emitted = emitted.max(fit);
    }

    if let Some(widest) = sorted.last() {
        media_rules.push(MediaRule::new(
            MediaQuery::max_width(ParsedDimension::rem(widest.threshold)),
            vec![
                StyleRule::new(before.as_str())
                    .decl("left", format!("calc({font} * 4)"))
                    .decl("direction", "ltr"),
                StyleRule::new(after.as_str())
                    .decl("right", format!("calc({font} * 4)"))
                    .decl("direction", "rtl"),
            ],
        ));
    }

    tracing::debug!(rows = elements.len(), "compiled row layer");
    Ok(RowLayer {
        elements,
        media_rules,
    })
}

/// Unconditional rules for row markers and their label pseudo-elements.
pub(crate) fn row_base_rules(
    classes: &GridClasses,
    decoration: &StyleBag,
    label_font_size: &str,
) -> Vec<StyleRule> {
    let item = GridClasses::selector(&classes.row_item());
    vec![
        StyleRule::new(item.as_str())
            .bag(decoration)
            .decl("box-sizing", "border-box")
            .decl("position", "relative")
            .decl("display", "none"),
        StyleRule::new(format!("{item}::before, {item}::after"))
            .decl("content", "attr(data-key)")
            .decl("position", "absolute")
            .decl("width", "0"),
        StyleRule::new(format!("{item}::before"))
            .decl("left", format!("-{label_font_size}"))
            .decl("direction", "rtl"),
        StyleRule::new(format!("{item}::after")).decl("right", format!("-{label_font_size}")),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/compile/rows.rs"]
mod tests;
