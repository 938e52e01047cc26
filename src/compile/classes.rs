/// Class names derived from the configured prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridClasses {
    prefix: String,
}

impl GridClasses {
    /// Class names for `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Overlay container class (the bare prefix).
    pub fn root(&self) -> &str {
        &self.prefix
    }

    /// Column container class.
    pub fn columns(&self) -> String {
        format!("{}__columns", self.prefix)
    }

    /// Column strip class.
    pub fn column_item(&self) -> String {
        format!("{}__columns__item", self.prefix)
    }

    /// Row container class.
    pub fn rows(&self) -> String {
        format!("{}__rows", self.prefix)
    }

    /// Row marker class.
    pub fn row_item(&self) -> String {
        format!("{}__row__item", self.prefix)
    }

    /// Modifier class tagging an element with the tier that introduced it.
    pub fn tier(name: &str) -> String {
        format!("--{name}")
    }

    /// Class selector for `class`.
    pub fn selector(class: &str) -> String {
        format!(".{class}")
    }

    /// Selector matching `base` elements that carry the tier modifier.
    ///
    /// The leading hyphen of the modifier is escaped.
    pub fn tier_selector(base: &str, name: &str) -> String {
        format!(".{base}.\\--{name}")
    }
}
