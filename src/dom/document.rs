use std::collections::BTreeMap;

use crate::foundation::error::{GridishError, GridishResult};

/// Handle to an element owned by a [`Dom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

/// Handle to a registered key listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A keyboard event as seen by the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// Legacy DOM key code.
    pub key_code: u32,
    /// Control held.
    pub ctrl: bool,
    /// Shift held.
    pub shift: bool,
    /// Alt held.
    pub alt: bool,
    /// Meta held.
    pub meta: bool,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub fn key(key_code: u32) -> Self {
        Self {
            key_code,
            ..Self::default()
        }
    }

    /// A key press with Control held.
    pub fn ctrl(key_code: u32) -> Self {
        Self {
            key_code,
            ctrl: true,
            ..Self::default()
        }
    }
}

/// Host document operations the overlay controller drives.
///
/// [`Document`] is the in-memory implementation; a browser binding would
/// forward these calls to the live page.
pub trait Dom {
    /// The page body element.
    fn body(&self) -> NodeId;

    /// Rendered height of the page body, in pixels.
    fn body_height(&self) -> f64;

    /// Create a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Add a class to an element.
    fn add_class(&mut self, node: NodeId, class: &str) -> GridishResult<()>;

    /// Set an attribute on an element.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> GridishResult<()>;

    /// Replace the text content of an element.
    fn set_text(&mut self, node: NodeId, text: &str) -> GridishResult<()>;

    /// Move `child` to the end of `parent`'s children.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> GridishResult<()>;

    /// Move `child` to the front of `parent`'s children.
    fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> GridishResult<()>;

    /// Remove `node` from its parent; a no-op for detached nodes.
    fn detach(&mut self, node: NodeId) -> GridishResult<()>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    /// Detach `node` and release it together with its subtree.
    fn discard(&mut self, node: NodeId) -> GridishResult<()>;

    /// Register a page-wide key listener.
    fn add_key_listener(&mut self) -> ListenerId;

    /// Unregister a key listener; returns whether it was registered.
    fn remove_key_listener(&mut self, id: ListenerId) -> bool;

    /// Whether a key listener is currently registered.
    fn has_key_listener(&self, id: ListenerId) -> bool;
}

/// An element in a [`Document`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name.
    pub tag: String,
    /// Class list, in insertion order.
    pub classes: Vec<String>,
    /// Attributes other than `class`.
    pub attributes: BTreeMap<String, String>,
    /// Text content, written before any children.
    pub text: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// Child elements in order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent element, if attached.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute value, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// In-memory arena document.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Option<Element>>, // discarded slots are never reused
    body: NodeId,
    body_height_px: f64,
    listeners: Vec<ListenerId>,
    next_listener: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Document {
    /// An empty page whose body renders `body_height_px` tall.
    pub fn new(body_height_px: f64) -> Self {
        Self {
            nodes: vec![Some(Element::new("body"))],
            body: NodeId(0),
            body_height_px,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Change the reported body height.
    pub fn set_body_height(&mut self, body_height_px: f64) {
        self.body_height_px = body_height_px;
    }

    /// Look up a live element.
    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Number of live elements, body included.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Whether only the body is left.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Registered key listeners, oldest first.
    pub fn key_listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Elements under `root` (inclusive) carrying `class`, in document order.
    pub fn find_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(el) = self.element(id) else {
                continue;
            };
            if el.has_class(class) {
                out.push(id);
            }
            stack.extend(el.children.iter().rev().copied());
        }
        out
    }

    /// Serialize `root` and its subtree as HTML.
    ///
    /// Text inside `<style>` is written raw; everything else is escaped.
    pub fn to_html(&self, root: NodeId) -> GridishResult<String> {
        let mut out = String::new();
        self.write_html(root, &mut out)?;
        Ok(out)
    }

    fn write_html(&self, id: NodeId, out: &mut String) -> GridishResult<()> {
        let el = self.get(id)?;
        out.push('<');
        out.push_str(&el.tag);
        if !el.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_html(&el.classes.join(" ")));
            out.push('"');
        }
        for (name, value) in &el.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        if let Some(text) = &el.text {
            if el.tag == "style" {
                out.push_str(text);
            } else {
                out.push_str(&escape_html(text));
            }
        }
        for &child in &el.children {
            self.write_html(child, out)?;
        }
        out.push_str("</");
        out.push_str(&el.tag);
        out.push('>');
        Ok(())
    }

    fn get(&self, id: NodeId) -> GridishResult<&Element> {
        self.element(id)
            .ok_or_else(|| GridishError::document(format!("unknown element {id:?}")))
    }

    fn get_mut(&mut self, id: NodeId) -> GridishResult<&mut Element> {
        self.nodes
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or_else(|| GridishError::document(format!("unknown element {id:?}")))
    }

    fn insert_child(&mut self, parent: NodeId, child: NodeId, front: bool) -> GridishResult<()> {
        self.get(parent)?;
        self.get(child)?;
        if child == self.body || self.contains(child, parent) {
            return Err(GridishError::document(format!(
                "cannot insert {child:?} under its own descendant {parent:?}"
            )));
        }
        self.detach(child)?;
        let siblings = &mut self.get_mut(parent)?.children;
        if front {
            siblings.insert(0, child);
        } else {
            siblings.push(child);
        }
        self.get_mut(child)?.parent = Some(parent);
        Ok(())
    }
}

impl Dom for Document {
    fn body(&self) -> NodeId {
        self.body
    }

    fn body_height(&self) -> f64 {
        self.body_height_px
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Some(Element::new(tag)));
        NodeId((self.nodes.len() - 1) as u32)
    }

    fn add_class(&mut self, node: NodeId, class: &str) -> GridishResult<()> {
        let el = self.get_mut(node)?;
        if !el.has_class(class) {
            el.classes.push(class.to_string());
        }
        Ok(())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> GridishResult<()> {
        self.get_mut(node)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> GridishResult<()> {
        self.get_mut(node)?.text = Some(text.to_string());
        Ok(())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> GridishResult<()> {
        self.insert_child(parent, child, false)
    }

    fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> GridishResult<()> {
        self.insert_child(parent, child, true)
    }

    fn detach(&mut self, node: NodeId) -> GridishResult<()> {
        let Some(parent) = self.get_mut(node)?.parent.take() else {
            return Ok(());
        };
        self.get_mut(parent)?.children.retain(|&c| c != node);
        Ok(())
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if self.element(ancestor).is_none() {
            return false;
        }
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.element(id).and_then(Element::parent);
        }
        false
    }

    fn discard(&mut self, node: NodeId) -> GridishResult<()> {
        if node == self.body {
            return Err(GridishError::document("the body cannot be discarded"));
        }
        self.detach(node)?;
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(el) = self.nodes.get_mut(id.0 as usize).and_then(Option::take) {
                stack.extend(el.children);
            }
        }
        Ok(())
    }

    fn add_key_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(id);
        id
    }

    fn remove_key_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|&l| l != id);
        self.listeners.len() != before
    }

    fn has_key_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains(&id)
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/dom/document.rs"]
mod tests;
