use crate::{
    compile::{
        classes::GridClasses,
        css::{MediaQuery, MediaRule, StyleRule},
        normalize::ResolvedBreakpoint,
    },
    config::options::StyleBag,
    foundation::error::{GridishError, GridishResult},
};

/// One column strip, tagged with the tier that introduced it.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ColumnElement {
    /// Name of the introducing tier.
    pub tier: String,
}

/// Column strips plus the per-tier media rules that size and reveal them.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnLayer {
    /// Every strip, in tier order.
    pub elements: Vec<ColumnElement>,
    /// One rule per tier, in ascending threshold order.
    pub media_rules: Vec<MediaRule>,
}

impl ColumnLayer {
    /// Number of strips introduced by `tier`.
    pub fn count_for(&self, tier: &str) -> usize {
        self.elements.iter().filter(|e| e.tier == tier).count()
    }
}

/// Fail when a wider tier declares fewer columns than a narrower one.
pub(crate) fn check_column_growth(sorted: &[ResolvedBreakpoint]) -> GridishResult<()> {
    for pair in sorted.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.columns < prev.columns {
            return Err(GridishError::validation(format!(
                "breakpoint '{}' declares {} columns, fewer than the {} of narrower breakpoint '{}'",
                next.name, next.columns, prev.columns, prev.name
            )));
        }
    }
    Ok(())
}

/// Compile column strips and visibility rules from ascending tiers.
///
/// Each tier adds `columns[i] - columns[i - 1]` strips; its media rule reveals
/// exactly those strips, so the cascade shows every strip introduced at or
/// below the current width.
#[tracing::instrument(skip(classes, sorted), fields(tiers = sorted.len()))]
pub fn compile_columns(
    classes: &GridClasses,
    sorted: &[ResolvedBreakpoint],
) -> GridishResult<ColumnLayer> {
    check_column_growth(sorted)?;

    let container = GridClasses::selector(&classes.columns());
    let item_class = classes.column_item();
    let item = GridClasses::selector(&item_class);

    let mut elements = Vec::new();
    let mut media_rules = Vec::with_capacity(sorted.len());
    let mut previous = 0u32;

    for (idx, bp) in sorted.iter().enumerate() {
        let added = bp.columns - previous;
        previous = bp.columns;
        elements.extend((0..added).map(|_| ColumnElement {
            tier: bp.name.clone(),
        }));

        media_rules.push(MediaRule::new(
            MediaQuery::tier(idx, bp.threshold),
            vec![
                StyleRule::new(container.as_str()).decl("padding", format!("0 {}", bp.margin)),
                StyleRule::new(item.as_str()).decl("margin", format!("0 {}", bp.gutter.half())),
                StyleRule::new(GridClasses::tier_selector(&item_class, &bp.name))
                    .decl("display", "initial"),
            ],
        ));
    }

    tracing::debug!(columns = elements.len(), "compiled column layer");
    Ok(ColumnLayer {
        elements,
        media_rules,
    })
}

/// Unconditional rules for the column container and strips.
pub(crate) fn column_base_rules(classes: &GridClasses, decoration: &StyleBag) -> Vec<StyleRule> {
    vec![
        StyleRule::new(GridClasses::selector(&classes.columns()))
            .decl("display", "flex")
            .decl("box-sizing", "border-box")
            .decl("height", "100%")
            .decl("width", "100%")
            .decl("position", "absolute"),
        StyleRule::new(GridClasses::selector(&classes.column_item()))
            .bag(decoration)
            .decl("display", "none")
            .decl("flex", "1"),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/compile/columns.rs"]
mod tests;
