//! Gridish compiles responsive breakpoint definitions into a visual grid overlay.
//!
//! Given named tiers (threshold, column count, gutter, margin, row height), the
//! compiler derives the column strips and baseline row markers needed across
//! every tier, plus the media-query CSS that sizes and reveals them. An overlay
//! controller attaches the result to a document and toggles it from the
//! keyboard.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: `GridOptions -> Vec<ResolvedBreakpoint>` (ascending threshold)
//! 2. **Compile**: tiers -> `ColumnLayer` + `RowLayer` + base rules (`CompiledGrid`)
//! 3. **Attach**: `GridOverlay::init` builds the elements and `<style>` in a [`Dom`]
//!
//! Compilation is pure and deterministic for a given configuration and
//! overlay height. See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compile;
mod config;
mod dom;
mod foundation;
mod overlay;

/// Standalone walkthrough of the grid model and overlay lifecycle.
pub mod guide;

pub use compile::classes::GridClasses;
pub use compile::columns::{ColumnElement, ColumnLayer, compile_columns};
pub use compile::css::{
    CssItem, Declaration, MediaFeature, MediaQuery, MediaRule, StyleRule, Stylesheet,
    camel_to_kebab,
};
pub use compile::grid::{CompiledGrid, compile_grid};
pub use compile::normalize::{ResolvedBreakpoint, normalize_breakpoints};
pub use compile::rows::{MAX_ROW_MARKERS, RowElement, RowLayer, RowMetrics, compile_rows};
pub use config::options::{
    BreakpointSpec, DEFAULT_LABEL_FONT_SIZE, GridOptions, KEY_L, KeyBinding, LayerSet, StyleBag,
    StyleSettings,
};
pub use dom::document::{Document, Dom, Element, KeyEvent, ListenerId, NodeId};
pub use foundation::error::{GridishError, GridishResult};
pub use foundation::units::{DimensionInput, ParsedDimension, parse_unit};
pub use overlay::controller::{GridOverlay, OverlayState, Visibility};
