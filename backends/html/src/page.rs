use alloc::rc::Rc;
use core::cell::RefCell;
use std::collections::BTreeMap;

/// An in-memory page holding container elements by id.
///
/// Clones share the same document, the way DOM handles do.
#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: Rc<RefCell<BTreeMap<String, String>>>,
}

impl Page {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty container and returns the page.
    #[must_use]
    pub fn with_container(self, id: impl Into<String>) -> Self {
        self.insert_container(id);
        self
    }

    /// Adds an empty container, clearing it if it already exists.
    pub fn insert_container(&self, id: impl Into<String>) {
        self.containers.borrow_mut().insert(id.into(), String::new());
    }

    /// Removes a container, returning its last contents.
    pub fn remove_container(&self, id: &str) -> Option<String> {
        self.containers.borrow_mut().remove(id)
    }

    /// Returns `true` if a container with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.containers.borrow().contains_key(id)
    }

    /// The current markup of a container.
    #[must_use]
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.containers.borrow().get(id).cloned()
    }

    /// Replaces a container's markup. Returns `false` if the container is gone.
    pub fn set_inner_html(&self, id: &str, html: String) -> bool {
        match self.containers.borrow_mut().get_mut(id) {
            Some(slot) => {
                *slot = html;
                true
            }
            None => false,
        }
    }
}
