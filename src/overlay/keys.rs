use crate::{config::options::KeyBinding, dom::document::KeyEvent};

impl KeyBinding {
    /// Whether `event` triggers this binding.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.key_code == self.key_code
            && (!self.ctrl || event.ctrl)
            && (!self.shift || event.shift)
            && (!self.alt || event.alt)
            && (!self.meta || event.meta)
    }
}

/// First binding triggered by `event`.
pub(crate) fn binding_for<'a>(
    bindings: &'a [KeyBinding],
    event: &KeyEvent,
) -> Option<&'a KeyBinding> {
    bindings.iter().find(|b| b.matches(event))
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/keys.rs"]
mod tests;
