use crate::{
    compile::classes::GridClasses,
    compile::grid::{CompiledGrid, compile_grid},
    config::options::{GridOptions, LayerSet},
    dom::document::{Dom, KeyEvent, ListenerId, NodeId},
    foundation::error::{GridishError, GridishResult},
    overlay::keys::binding_for,
};

/// Public view of the overlay lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayState {
    /// Constructed, not yet attached.
    Uninitialized,
    /// Attached and listening for key events.
    Active,
    /// Detached; the listener is gone.
    TornDown,
}

/// Which layers are currently attached to the overlay container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    /// Column strips attached.
    pub columns: bool,
    /// Row markers attached.
    pub rows: bool,
}

#[derive(Debug)]
struct ActiveOverlay {
    listener: ListenerId,
    container: NodeId,
    columns: NodeId,
    rows: NodeId,
    grid: CompiledGrid,
}

#[derive(Debug)]
enum Lifecycle {
    Uninitialized,
    Active(ActiveOverlay),
    TornDown,
}

/// Grid overlay controller.
///
/// Owns the page-wide key listener and the overlay subtree while active.
/// Layers start hidden after [`GridOverlay::init`]; the configured key
/// bindings or [`GridOverlay::show`] reveal them.
#[derive(Debug)]
pub struct GridOverlay {
    options: GridOptions,
    state: Lifecycle,
}

impl GridOverlay {
    /// Validate `options` and build an uninitialized overlay.
    pub fn new(options: GridOptions) -> GridishResult<Self> {
        options.validate()?;
        Ok(Self {
            options,
            state: Lifecycle::Uninitialized,
        })
    }

    /// Configuration this overlay was built with.
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Current lifecycle state.
    pub fn state(&self) -> OverlayState {
        match self.state {
            Lifecycle::Uninitialized => OverlayState::Uninitialized,
            Lifecycle::Active(_) => OverlayState::Active,
            Lifecycle::TornDown => OverlayState::TornDown,
        }
    }

    /// Compiled grid, while active.
    pub fn compiled(&self) -> Option<&CompiledGrid> {
        match &self.state {
            Lifecycle::Active(active) => Some(&active.grid),
            _ => None,
        }
    }

    /// Overlay container element, while active.
    pub fn container(&self) -> Option<NodeId> {
        match &self.state {
            Lifecycle::Active(active) => Some(active.container),
            _ => None,
        }
    }

    /// Attach the overlay to `dom` and start listening for key events.
    ///
    /// The grid is compiled for the current body height; later height
    /// changes are not picked up.
    #[tracing::instrument(skip_all, fields(prefix = %self.options.prefix))]
    pub fn init<D: Dom + ?Sized>(&mut self, dom: &mut D) -> GridishResult<()> {
        match self.state {
            Lifecycle::Uninitialized => {}
            Lifecycle::Active(_) => {
                return Err(GridishError::lifecycle("overlay is already initialized"));
            }
            Lifecycle::TornDown => {
                return Err(GridishError::lifecycle("overlay was destroyed"));
            }
        }

        let height = dom.body_height();
        let grid = compile_grid(&self.options, height)?;

        let container = dom.create_element("div");
        let columns = dom.create_element("div");
        let rows = dom.create_element("div");
        if let Err(err) = build_overlay(dom, &grid, height, container, columns, rows) {
            for node in [columns, rows, container] {
                if let Err(cleanup) = dom.discard(node) {
                    tracing::debug!(%cleanup, "discard after failed init");
                }
            }
            return Err(err);
        }

        let listener = dom.add_key_listener();
        tracing::debug!(
            height,
            columns = grid.columns.elements.len(),
            rows = grid.rows.elements.len(),
            "overlay initialized"
        );

        self.state = Lifecycle::Active(ActiveOverlay {
            listener,
            container,
            columns,
            rows,
            grid,
        });
        Ok(())
    }

    /// Detach the overlay and stop listening.
    ///
    /// A no-op unless the overlay is active, so repeated calls are harmless.
    pub fn destroy<D: Dom + ?Sized>(&mut self, dom: &mut D) -> GridishResult<()> {
        let active = match std::mem::replace(&mut self.state, Lifecycle::TornDown) {
            Lifecycle::Active(active) => active,
            Lifecycle::Uninitialized => {
                self.state = Lifecycle::Uninitialized;
                tracing::debug!("destroy before init ignored");
                return Ok(());
            }
            Lifecycle::TornDown => {
                tracing::debug!("destroy on torn-down overlay ignored");
                return Ok(());
            }
        };

        dom.remove_key_listener(active.listener);
        dom.discard(active.columns)?;
        dom.discard(active.rows)?;
        dom.discard(active.container)?;
        tracing::debug!("overlay destroyed");
        Ok(())
    }

    /// Attach both layers.
    pub fn show<D: Dom + ?Sized>(&mut self, dom: &mut D) -> GridishResult<()> {
        self.show_layers(dom, LayerSet::All)
    }

    /// Detach both layers.
    pub fn hide<D: Dom + ?Sized>(&mut self, dom: &mut D) -> GridishResult<()> {
        self.hide_layers(dom, LayerSet::All)
    }

    /// Attach the given layers; already attached layers are left alone.
    pub fn show_layers<D: Dom + ?Sized>(
        &mut self,
        dom: &mut D,
        layers: LayerSet,
    ) -> GridishResult<()> {
        let active = self.active("show")?;
        for layer in active.layers(layers) {
            if !dom.contains(active.container, layer) {
                dom.append_child(active.container, layer)?;
            }
        }
        tracing::debug!(?layers, "layers shown");
        Ok(())
    }

    /// Detach the given layers; absent layers are left alone.
    pub fn hide_layers<D: Dom + ?Sized>(
        &mut self,
        dom: &mut D,
        layers: LayerSet,
    ) -> GridishResult<()> {
        let active = self.active("hide")?;
        for layer in active.layers(layers) {
            if dom.contains(active.container, layer) {
                dom.detach(layer)?;
            }
        }
        tracing::debug!(?layers, "layers hidden");
        Ok(())
    }

    /// Flip the given layers.
    ///
    /// For [`LayerSet::All`] the column layer decides: both layers are shown
    /// when columns are hidden, otherwise both are hidden.
    pub fn toggle_layers<D: Dom + ?Sized>(
        &mut self,
        dom: &mut D,
        layers: LayerSet,
    ) -> GridishResult<()> {
        let visible = self.visibility(dom)?;
        let shown = match layers {
            LayerSet::All | LayerSet::Columns => visible.columns,
            LayerSet::Rows => visible.rows,
        };
        if shown {
            self.hide_layers(dom, layers)
        } else {
            self.show_layers(dom, layers)
        }
    }

    /// Which layers are attached.
    pub fn visibility<D: Dom + ?Sized>(&self, dom: &D) -> GridishResult<Visibility> {
        let active = self.active("query visibility of")?;
        Ok(Visibility {
            columns: dom.contains(active.container, active.columns),
            rows: dom.contains(active.container, active.rows),
        })
    }

    /// React to a key event; returns whether a binding fired.
    ///
    /// Events are ignored unless the overlay is active and its listener is
    /// still registered with `dom`.
    pub fn handle_key<D: Dom + ?Sized>(
        &mut self,
        dom: &mut D,
        event: &KeyEvent,
    ) -> GridishResult<bool> {
        let Lifecycle::Active(active) = &self.state else {
            return Ok(false);
        };
        if !dom.has_key_listener(active.listener) {
            return Ok(false);
        }
        let Some(binding) = binding_for(&self.options.key_bindings, event) else {
            return Ok(false);
        };
        let layers = binding.layers;
        tracing::debug!(key_code = event.key_code, ?layers, "toggle key");
        self.toggle_layers(dom, layers)?;
        Ok(true)
    }

    fn active(&self, op: &str) -> GridishResult<&ActiveOverlay> {
        match &self.state {
            Lifecycle::Active(active) => Ok(active),
            Lifecycle::Uninitialized => Err(GridishError::lifecycle(format!(
                "cannot {op} overlay before init"
            ))),
            Lifecycle::TornDown => Err(GridishError::lifecycle(format!(
                "cannot {op} overlay after destroy"
            ))),
        }
    }
}

/// Fill the detached layer nodes and attach `container` first in the body.
fn build_overlay<D: Dom + ?Sized>(
    dom: &mut D,
    grid: &CompiledGrid,
    height: f64,
    container: NodeId,
    columns: NodeId,
    rows: NodeId,
) -> GridishResult<()> {
    let classes = &grid.classes;

    dom.add_class(container, classes.root())?;
    dom.set_attribute(
        container,
        "style",
        &format!("height: {height}px; position: absolute"),
    )?;

    dom.add_class(columns, &classes.columns())?;
    let column_item = classes.column_item();
    for column in &grid.columns.elements {
        let el = dom.create_element("div");
        dom.add_class(el, &column_item)?;
        dom.add_class(el, &GridClasses::tier(&column.tier))?;
        dom.append_child(columns, el)?;
    }

    dom.add_class(rows, &classes.rows())?;
    let row_item = classes.row_item();
    for row in &grid.rows.elements {
        let el = dom.create_element("div");
        dom.add_class(el, &row_item)?;
        dom.add_class(el, &GridClasses::tier(&row.tier))?;
        dom.set_attribute(el, "data-key", &row.label.to_string())?;
        dom.append_child(rows, el)?;
    }

    let styles = dom.create_element("style");
    dom.append_child(container, styles)?;
    dom.set_text(styles, &grid.stylesheet().to_string())?;

    let body = dom.body();
    dom.prepend_child(body, container)
}

impl ActiveOverlay {
    fn layers(&self, set: LayerSet) -> impl Iterator<Item = NodeId> {
        let columns = set.includes_columns().then_some(self.columns);
        let rows = set.includes_rows().then_some(self.rows);
        columns.into_iter().chain(rows)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/controller.rs"]
mod tests;
