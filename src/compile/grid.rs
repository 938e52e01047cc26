use crate::{
    compile::{
        classes::GridClasses,
        columns::{ColumnLayer, column_base_rules, compile_columns},
        css::{StyleRule, Stylesheet},
        normalize::{ResolvedBreakpoint, normalize_breakpoints},
        rows::{RowLayer, RowMetrics, compile_rows, row_base_rules},
    },
    config::options::GridOptions,
    foundation::error::{GridishError, GridishResult},
    foundation::units::ParsedDimension,
};

/// Everything the overlay needs: sorted tiers, both layers and their CSS.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledGrid {
    /// Class names for the configured prefix.
    pub classes: GridClasses,
    /// Tiers in ascending threshold order.
    pub breakpoints: Vec<ResolvedBreakpoint>,
    /// Overlay height the row layer was sized for, in pixels.
    pub overlay_height_px: f64,
    /// Overlay container rule.
    pub root_rule: StyleRule,
    /// Unconditional column rules.
    pub column_rules: Vec<StyleRule>,
    /// Column strips and their media rules.
    pub columns: ColumnLayer,
    /// Unconditional row rules.
    pub row_rules: Vec<StyleRule>,
    /// Row markers and their media rules.
    pub rows: RowLayer,
}

impl CompiledGrid {
    /// Full stylesheet: container, column rules, column media, row rules, row media.
    pub fn stylesheet(&self) -> Stylesheet {
        let mut sheet = Stylesheet::default();
        sheet.extend_rules(std::iter::once(&self.root_rule));
        sheet.extend_rules(&self.column_rules);
        sheet.extend_media(&self.columns.media_rules);
        sheet.extend_rules(&self.row_rules);
        sheet.extend_media(&self.rows.media_rules);
        sheet
    }
}

/// Validate `options` and compile the grid for an overlay of the given height.
#[tracing::instrument(skip(options), fields(prefix = %options.prefix))]
pub fn compile_grid(options: &GridOptions, overlay_height_px: f64) -> GridishResult<CompiledGrid> {
    options.validate()?;
    if !(overlay_height_px.is_finite() && overlay_height_px >= 0.0) {
        return Err(GridishError::validation(format!(
            "overlay height {overlay_height_px} must be finite and >= 0"
        )));
    }

    let breakpoints = normalize_breakpoints(&options.breakpoints, &options.default_unit)?;
    let Some(widest) = breakpoints.last() else {
        return Err(GridishError::validation(
            "at least one breakpoint is required",
        ));
    };

    let classes = GridClasses::new(options.prefix.as_str());
    let root_rule = StyleRule::new(GridClasses::selector(classes.root()))
        .decl("font-size", ParsedDimension::px(options.rem).to_string())
        .decl("max-width", ParsedDimension::rem(widest.threshold).to_string())
        .decl("width", "100%")
        .decl("margin", "0 auto")
        .decl("pointer-events", "none")
        .decl("position", "absolute")
        .decl("line-height", "normal")
        .decl("left", "0")
        .decl("right", "0")
        .decl("top", "1px")
        .decl("z-index", "9999");

    let label_font_size = options.settings.label_font_size();
    let metrics = RowMetrics {
        overlay_height_px,
        rem_px: options.rem,
        rows_per_cycle: options.rows,
        label_font_size: label_font_size.to_string(),
    };

    let column_rules = column_base_rules(&classes, &options.settings.columns);
    let columns = compile_columns(&classes, &breakpoints)?;
    let row_rules = row_base_rules(&classes, &options.settings.rows, label_font_size);
    let rows = compile_rows(&classes, &breakpoints, &metrics)?;

    Ok(CompiledGrid {
        classes,
        breakpoints,
        overlay_height_px,
        root_rule,
        column_rules,
        columns,
        row_rules,
        rows,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compile/grid.rs"]
mod tests;
