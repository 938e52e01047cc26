use std::collections::BTreeMap;

use crate::{
    compile::{columns::check_column_growth, normalize::normalize_breakpoints},
    foundation::error::{GridishError, GridishResult},
    foundation::units::DimensionInput,
};

/// CSS property bag: property name (camelCase or hyphen-case) to value.
pub type StyleBag = BTreeMap<String, String>;

/// Label font size used when the row style bag does not set one.
pub const DEFAULT_LABEL_FONT_SIZE: &str = "0.6em";

/// Key code for `L`, the default overlay toggle key.
pub const KEY_L: u32 = 76;

/// One named tier of the responsive grid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BreakpointSpec {
    /// Minimum viewport width of this tier, in `rem`.
    #[serde(alias = "breakpoint")]
    pub threshold: f64,
    /// Total column count at this tier.
    pub columns: u32,
    /// Space between columns.
    pub gutter: DimensionInput,
    /// Horizontal padding of the column container.
    pub margin: DimensionInput,
    /// Height of one baseline row, in `rem`.
    #[serde(alias = "row-height", alias = "row_height")]
    pub row_height: f64,
}

impl Default for BreakpointSpec {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            columns: 0,
            gutter: DimensionInput::Number(0.0),
            margin: DimensionInput::Number(0.0),
            row_height: 1.0,
        }
    }
}

impl BreakpointSpec {
    /// Build a tier from its parts.
    pub fn new(
        threshold: f64,
        columns: u32,
        gutter: impl Into<DimensionInput>,
        margin: impl Into<DimensionInput>,
        row_height: f64,
    ) -> Self {
        Self {
            threshold,
            columns,
            gutter: gutter.into(),
            margin: margin.into(),
            row_height,
        }
    }
}

/// Decoration applied to row markers and column strips.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    /// Properties applied to every row marker.
    pub rows: StyleBag,
    /// Properties applied to every column strip.
    pub columns: StyleBag,
}

impl Default for StyleSettings {
    fn default() -> Self {
        let bag = |pairs: &[(&str, &str)]| -> StyleBag {
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect()
        };
        Self {
            rows: bag(&[
                ("fontSize", DEFAULT_LABEL_FONT_SIZE),
                ("fontFamily", "sans-serif"),
                ("color", "darkturquoise"),
                ("borderBottom", "1px solid darkturquoise"),
            ]),
            columns: bag(&[
                ("borderLeft", "1px solid darkturquoise"),
                ("borderRight", "1px solid darkturquoise"),
                ("backgroundColor", "rgba(0,206,209, .2)"),
            ]),
        }
    }
}

impl StyleSettings {
    /// Font size of row labels, taken from the row bag.
    pub fn label_font_size(&self) -> &str {
        self.rows
            .get("fontSize")
            .or_else(|| self.rows.get("font-size"))
            .map_or(DEFAULT_LABEL_FONT_SIZE, String::as_str)
    }
}

/// Which overlay layers a key binding acts on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerSet {
    /// Columns and rows together.
    #[default]
    All,
    /// Column strips only.
    Columns,
    /// Row markers only.
    Rows,
}

impl LayerSet {
    /// Whether the column layer is part of this set.
    pub fn includes_columns(self) -> bool {
        matches!(self, Self::All | Self::Columns)
    }

    /// Whether the row layer is part of this set.
    pub fn includes_rows(self) -> bool {
        matches!(self, Self::All | Self::Rows)
    }
}

/// Keyboard chord that toggles overlay layers.
///
/// Modifiers set to `true` must be held; modifiers left `false` are ignored.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyBinding {
    /// Legacy DOM key code, e.g. `76` for `L`.
    #[serde(alias = "key-code", alias = "key_code")]
    pub key_code: u32,
    /// Control must be held.
    pub ctrl: bool,
    /// Shift must be held.
    pub shift: bool,
    /// Alt must be held.
    pub alt: bool,
    /// Meta must be held.
    pub meta: bool,
    /// Layers toggled by this chord.
    pub layers: LayerSet,
}

impl Default for KeyBinding {
    fn default() -> Self {
        Self::ctrl(KEY_L, LayerSet::All)
    }
}

impl KeyBinding {
    /// A `Ctrl+<key>` binding.
    pub fn ctrl(key_code: u32, layers: LayerSet) -> Self {
        Self {
            key_code,
            ctrl: true,
            shift: false,
            alt: false,
            meta: false,
            layers,
        }
    }
}

/// Process-wide overlay configuration.
///
/// Absent JSON keys keep the defaults below, field by field.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridOptions {
    /// Class prefix for every emitted element and selector.
    pub prefix: String,
    /// Named tiers; order is irrelevant, tiers are sorted by threshold.
    pub breakpoints: BTreeMap<String, BreakpointSpec>,
    /// Base font size in pixels (`1rem`).
    pub rem: f64,
    /// Row labels per repeating cycle.
    pub rows: u32,
    /// Unit applied to gutters and margins written without one.
    #[serde(alias = "default-unit", alias = "default_unit")]
    pub default_unit: String,
    /// Row and column decoration.
    pub settings: StyleSettings,
    /// Toggle chords, checked in order.
    #[serde(alias = "key-bindings", alias = "key_bindings")]
    pub key_bindings: Vec<KeyBinding>,
}

impl Default for GridOptions {
    fn default() -> Self {
        let mut breakpoints = BTreeMap::new();
        breakpoints.insert(
            "small".to_string(),
            BreakpointSpec::new(47.0, 2, "25px", 0.0, 2.0),
        );
        breakpoints.insert(
            "medium".to_string(),
            BreakpointSpec::new(64.0, 12, "30px", 0.0, 3.0),
        );
        breakpoints.insert(
            "large".to_string(),
            BreakpointSpec::new(90.0, 12, "30px", 0.0, 4.0),
        );
        Self {
            prefix: "grid".to_string(),
            breakpoints,
            rem: 16.0,
            rows: 30,
            default_unit: "rem".to_string(),
            settings: StyleSettings::default(),
            key_bindings: vec![KeyBinding::default()],
        }
    }
}

impl GridOptions {
    /// Parse options from JSON, keeping defaults for absent keys.
    pub fn from_json(s: &str) -> GridishResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Replace the breakpoint map.
    pub fn with_breakpoints<I, S>(mut self, breakpoints: I) -> Self
    where
        I: IntoIterator<Item = (S, BreakpointSpec)>,
        S: Into<String>,
    {
        self.breakpoints = breakpoints
            .into_iter()
            .map(|(name, spec)| (name.into(), spec))
            .collect();
        self
    }

    /// Check every constraint the compilers rely on.
    pub fn validate(&self) -> GridishResult<()> {
        if !is_css_ident(&self.prefix) {
            return Err(GridishError::validation(format!(
                "prefix '{}' is not a valid CSS class name",
                self.prefix
            )));
        }
        if self.breakpoints.is_empty() {
            return Err(GridishError::validation(
                "at least one breakpoint is required",
            ));
        }
        if !(self.rem.is_finite() && self.rem > 0.0) {
            return Err(GridishError::validation("rem must be > 0"));
        }
        if self.rows == 0 {
            return Err(GridishError::validation("rows must be > 0"));
        }
        if self.default_unit.is_empty()
            || !self.default_unit.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(GridishError::validation(format!(
                "default unit '{}' is not a CSS unit",
                self.default_unit
            )));
        }

        for (name, spec) in &self.breakpoints {
            if !name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
                || name.is_empty()
            {
                return Err(GridishError::validation(format!(
                    "breakpoint name '{name}' must be alphanumeric"
                )));
            }
            if !(spec.threshold.is_finite() && spec.threshold >= 0.0) {
                return Err(GridishError::validation(format!(
                    "breakpoint '{name}' threshold must be finite and >= 0"
                )));
            }
            if !(spec.row_height.is_finite() && spec.row_height > 0.0) {
                return Err(GridishError::validation(format!(
                    "breakpoint '{name}' rowHeight must be > 0"
                )));
            }
        }

        for binding in &self.key_bindings {
            if binding.key_code == 0 {
                return Err(GridishError::validation("key binding keyCode must be > 0"));
            }
        }

        let sorted = normalize_breakpoints(&self.breakpoints, &self.default_unit)?;
        check_column_growth(&sorted)
    }
}

fn is_css_ident(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '-')
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
