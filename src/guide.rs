//! # Gridish guide
//!
//! This module walks through the grid model, what the compiler emits, and how
//! the overlay behaves once attached to a page.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`GridOptions`](crate::GridOptions): prefix, tiers, `rem` size, label cycle, decoration, key bindings
//! - [`BreakpointSpec`](crate::BreakpointSpec): one named tier as written in configuration
//! - [`ResolvedBreakpoint`](crate::ResolvedBreakpoint): a tier with its name attached and
//!   gutter/margin parsed by [`parse_unit`](crate::parse_unit)
//! - [`CompiledGrid`](crate::CompiledGrid): both layers plus every CSS rule
//! - [`GridOverlay`](crate::GridOverlay): owns the listener and the overlay subtree
//! - [`Dom`](crate::Dom): host document seam; [`Document`](crate::Document) is the in-memory host
//!
//! ---
//!
//! ## Columns
//!
//! Tiers are sorted by threshold. Each tier adds only the columns it declares
//! beyond the previous tier, tagging them `--<tier>`. A `min-width` media rule
//! per tier reveals that tier's strips, so at any width every strip introduced
//! at or below it is visible. The first tier is anchored at `0rem`.
//!
//! A wider tier declaring fewer columns than a narrower one is rejected with
//! [`GridishError::Validation`](crate::GridishError::Validation).
//!
//! ## Rows
//!
//! Row height changes per tier, so the number of markers is decided by the
//! shortest row height: `floor(overlay_height / (rem * row_height))`. Tiers are
//! walked from tallest to shortest rows and each adds the markers it needs on
//! top of those already emitted. Labels run `1..=rows` and repeat, counted
//! over all markers.
//!
//! ```
//! use gridish::{Document, GridOptions, GridOverlay};
//!
//! let mut doc = Document::new(960.0);
//! let mut overlay = GridOverlay::new(GridOptions::default())?;
//! overlay.init(&mut doc)?;
//! overlay.show(&mut doc)?;
//!
//! let grid = overlay.compiled().expect("active overlay");
//! assert_eq!(grid.columns.elements.len(), 12);
//! assert_eq!(grid.rows.elements.len(), 30);
//!
//! overlay.destroy(&mut doc)?;
//! # Ok::<(), gridish::GridishError>(())
//! ```
//!
//! ## Lifecycle
//!
//! `Uninitialized -> Active -> TornDown`. While active, each layer is either
//! attached to the overlay container or not; `show`/`hide` check containment
//! first and never duplicate or fail on an absent layer. `destroy` is a no-op
//! unless active. Everything else outside `Active` returns
//! [`GridishError::Lifecycle`](crate::GridishError::Lifecycle).
//!
//! The grid is compiled once, at `init`, against the body height at that
//! moment. Width changes are handled by the emitted media queries alone.
