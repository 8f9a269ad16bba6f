//! The backend-related interface.
//!
//! A backend provides the DOM construction capability used by the materializer,
//! the templates, the custom element hosts and the static renderer.
//! `MemBackend` is a backend without any platform dependency;
//! the `jsx-elements-dom` crate provides the browser backend.

use crate::error::Error;

pub mod mem;
pub use mem::{
    MemBackend, MemConstructor, MemElement, MemFragment, MemNode, MemRegistry, MemTemplate,
};

/// The kind of a backend node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
    /// Comments, fragments and other node kinds.
    Other,
}

/// The interface that a backend should implement.
pub trait Backend {
    /// The general node type.
    type Node: BackendNode<Element = Self::Element>;

    /// The element type.
    type Element: BackendElement<Node = Self::Node>;

    /// The template type.
    type Template: BackendTemplate<Node = Self::Node>;

    /// Create an element with the tag name.
    fn create_element(&self, tag_name: &str) -> Result<Self::Element, Error>;

    /// Create a text node.
    fn create_text_node(&self, content: &str) -> Result<Self::Node, Error>;

    /// Create an empty template.
    fn create_template(&self) -> Result<Self::Template, Error>;
}

/// A node in the backend, which can be an element or a text node.
pub trait BackendNode: Clone {
    /// The related element type.
    type Element: BackendElement<Node = Self>;

    fn kind(&self) -> NodeKind;

    /// The text content of a text node.
    ///
    /// `None` for nodes other than text nodes.
    fn text_content(&self) -> Option<String>;

    /// Cast to an element.
    fn as_element(&self) -> Option<Self::Element>;
}

/// A node that contains children, i.e. an element or a fragment.
pub trait BackendParent {
    /// The general node type.
    type Node: BackendNode;

    /// Append a child.
    ///
    /// The child is moved if it already has a parent.
    fn append_child(&self, child: &Self::Node) -> Result<(), Error>;

    /// Get the child list.
    fn child_nodes(&self) -> Vec<Self::Node>;

    fn has_child_nodes(&self) -> bool {
        !self.child_nodes().is_empty()
    }

    /// Remove all children.
    fn clear_children(&self) -> Result<(), Error>;
}

/// An element in the backend.
pub trait BackendElement: BackendParent + Clone {
    /// The fragment type used by shadow roots.
    type Fragment: BackendParent<Node = Self::Node>;

    /// Convert to a general node.
    fn to_node(&self) -> Self::Node;

    /// The tag name as reported by the backend (may be upper-cased).
    fn tag_name(&self) -> String;

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Error>;

    fn get_attribute(&self, name: &str) -> Option<String>;

    fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute(name).is_some()
    }

    /// The attribute names in attribute order.
    fn attribute_names(&self) -> Vec<String>;

    /// Set a boolean object property (not an attribute).
    fn set_property(&self, name: &str, value: bool) -> Result<(), Error>;

    /// Get a boolean object property.
    fn property(&self, name: &str) -> Option<bool>;

    /// Attach an open shadow root.
    fn attach_shadow(&self) -> Result<Self::Fragment, Error>;

    /// Get the shadow root if attached.
    fn shadow_root(&self) -> Option<Self::Fragment>;

    /// Whether the element is in the document.
    fn is_connected(&self) -> bool;
}

/// A template which holds a content fragment.
pub trait BackendTemplate {
    /// The general node type.
    type Node: BackendNode;

    /// The content fragment type.
    type Fragment: BackendParent<Node = Self::Node>;

    /// The content fragment itself.
    fn content(&self) -> Self::Fragment;

    /// A deep clone of the content fragment.
    fn clone_content(&self) -> Result<Self::Fragment, Error>;
}
