//! Typed stylesheet IR emitted by the grid compilers.
//!
//! Emission order is part of the output contract: media rules are written in
//! the order they were pushed, which is what the mobile-first cascade relies on.

use std::fmt;

use crate::{config::options::StyleBag, foundation::units::ParsedDimension};

/// One `property: value` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Hyphen-case property name.
    pub property: String,
    /// Raw value text.
    pub value: String,
}

impl Declaration {
    /// Build a declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A selector with its declaration block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    /// Selector text.
    pub selector: String,
    /// Declarations in emission order.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Start an empty rule for `selector`.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    /// Append one declaration.
    pub fn decl(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    /// Append every entry of a style bag, converting names to hyphen-case.
    pub fn bag(mut self, bag: &StyleBag) -> Self {
        self.declarations.extend(
            bag.iter()
                .map(|(name, value)| Declaration::new(camel_to_kebab(name), value.clone())),
        );
        self
    }

    /// Value of the last declaration for `property`, if any.
    pub fn value_of(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        writeln!(f, "{indent}{} {{", self.selector)?;
        for d in &self.declarations {
            writeln!(f, "{indent}  {}: {};", d.property, d.value)?;
        }
        writeln!(f, "{indent}}}")
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, "")
    }
}

/// Width feature tested by a media query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaFeature {
    /// `min-width`
    MinWidth,
    /// `max-width`
    MaxWidth,
}

impl fmt::Display for MediaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MinWidth => "min-width",
            Self::MaxWidth => "max-width",
        })
    }
}

/// A single-feature width query such as `(min-width: 64rem)`.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQuery {
    /// Tested feature.
    pub feature: MediaFeature,
    /// Boundary length.
    pub length: ParsedDimension,
}

impl MediaQuery {
    /// `(min-width: <length>)`.
    pub fn min_width(length: ParsedDimension) -> Self {
        Self {
            feature: MediaFeature::MinWidth,
            length,
        }
    }

    /// `(max-width: <length>)`.
    pub fn max_width(length: ParsedDimension) -> Self {
        Self {
            feature: MediaFeature::MaxWidth,
            length,
        }
    }

    /// Query for the tier at `index` in ascending-threshold order.
    ///
    /// The first tier is anchored at `0rem` so it applies at every width.
    pub fn tier(index: usize, threshold_rem: f64) -> Self {
        let at = if index == 0 { 0.0 } else { threshold_rem };
        Self::min_width(ParsedDimension::rem(at))
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}: {})", self.feature, self.length)
    }
}

/// An `@media` block.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaRule {
    /// Condition.
    pub query: MediaQuery,
    /// Rules applied while the condition holds.
    pub rules: Vec<StyleRule>,
}

impl MediaRule {
    /// Build a media block.
    pub fn new(query: MediaQuery, rules: Vec<StyleRule>) -> Self {
        Self { query, rules }
    }
}

impl fmt::Display for MediaRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@media {} {{", self.query)?;
        for rule in &self.rules {
            rule.write_indented(f, "  ")?;
        }
        writeln!(f, "}}")
    }
}

/// Top-level stylesheet entry.
#[derive(Clone, Debug, PartialEq)]
pub enum CssItem {
    /// Plain rule.
    Style(StyleRule),
    /// `@media` block.
    Media(MediaRule),
}

impl fmt::Display for CssItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(rule) => fmt::Display::fmt(rule, f),
            Self::Media(rule) => fmt::Display::fmt(rule, f),
        }
    }
}

/// Ordered list of rules and media blocks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stylesheet {
    /// Entries in emission order.
    pub items: Vec<CssItem>,
}

impl Stylesheet {
    /// Append plain rules.
    pub fn extend_rules<'a>(&mut self, rules: impl IntoIterator<Item = &'a StyleRule>) {
        self.items
            .extend(rules.into_iter().cloned().map(CssItem::Style));
    }

    /// Append media blocks.
    pub fn extend_media<'a>(&mut self, rules: impl IntoIterator<Item = &'a MediaRule>) {
        self.items
            .extend(rules.into_iter().cloned().map(CssItem::Media));
    }

    /// All media blocks, in order.
    pub fn media_rules(&self) -> impl Iterator<Item = &MediaRule> {
        self.items.iter().filter_map(|item| match item {
            CssItem::Media(m) => Some(m),
            CssItem::Style(_) => None,
        })
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            fmt::Display::fmt(item, f)?;
        }
        Ok(())
    }
}

/// Convert a camelCase property name to hyphen-case (`zIndex` -> `z-index`).
///
/// Names that are already hyphenated come back unchanged.
pub fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c.to_ascii_lowercase());
        if c.is_ascii_alphabetic() && chars.peek().is_some_and(char::is_ascii_uppercase) {
            out.push('-');
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compile/css.rs"]
mod tests;
