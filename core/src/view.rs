//! The element tree widgets render into.
//!
//! Views are plain data: rendering the same snapshot twice yields equal trees,
//! which is what makes render output comparable in tests and diffable by hosts.

use alloc::{borrow::Cow, string::String, vec::Vec};

/// Text content of a view.
pub type Str = Cow<'static, str>;

/// A node in a rendered view.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with a tag, attributes and children.
    Element(Element),
    /// A run of text.
    Text(Str),
}

impl Node {
    /// Concatenated text of this node and all of its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Returns the element, if this node is one.
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// All elements in this subtree carrying `class`, in document order.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if element.has_class(class) {
                found.push(element);
            }
        });
        found
    }

    fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        if let Self::Element(element) = self {
            f(element);
            for child in &element.children {
                child.walk(f);
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&'static str> for Node {
    fn from(text: &'static str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

/// Creates a text node.
pub fn text(content: impl Into<Str>) -> Node {
    Node::Text(content.into())
}

/// An element node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    class: Option<Str>,
    attributes: Vec<(&'static str, Str)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the class list.
    #[must_use]
    pub fn class(mut self, class: impl Into<Str>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Adds an attribute. Later values for the same name win.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<Str>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends several children in order.
    #[must_use]
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends a child only when `child` is `Some`.
    #[must_use]
    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// The tag name.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        self.tag
    }

    /// The class list, if any.
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Returns `true` if `class` is one of this element's classes.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(&'static str, Str)] {
        &self.attributes
    }

    /// Looks up one attribute.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_ref())
    }

    /// Child nodes in order.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of this element's subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        Node::Element(self.clone()).text_content()
    }
}
