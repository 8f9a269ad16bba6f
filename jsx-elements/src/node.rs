//! The virtual node model.
//!
//! A tree of `VNode` describes the DOM that should be created.
//! It is usually built with `h` (the JSX pragma helper) and the `nodes!` / `props!` macros:
//!
//! ```rust
//! use jsx_elements::{h, nodes, props};
//!
//! let tree = h(
//!     "div",
//!     Some(props! { "id" => "test", "hidden" => true }),
//!     nodes![h("span", None, nodes!["hello"])],
//! );
//! assert_eq!(tree.children.len(), 1);
//! ```

use std::{fmt, rc::Rc};

use crate::component::Component;

/// The constructor of a function component.
pub type FunctionComponent = Rc<dyn Fn(Props) -> NodeLike>;

/// The constructor of a stateful component.
pub type StatefulComponent = Rc<dyn Fn(Props) -> Box<dyn Component>>;

/// What a virtual node refers to.
///
/// A `Tag` refers to an intrinsic element (DOM native or a custom element tag).
/// The other variants refer to components,
/// which are invoked with the node props during materialization.
#[derive(Clone)]
pub enum NodeType {
    /// An element tag name.
    Tag(String),
    /// A function from props to a node-like.
    Function(FunctionComponent),
    /// A component type constructed from props and then rendered.
    Stateful(StatefulComponent),
}

impl NodeType {
    /// Wrap a function component.
    pub fn function(f: impl 'static + Fn(Props) -> NodeLike) -> Self {
        Self::Function(Rc::new(f))
    }

    /// Refer to a stateful component type.
    pub fn stateful<C: 'static + Component>() -> Self {
        Self::Stateful(Rc::new(|props: Props| -> Box<dyn Component> {
            Box::new(C::new(props))
        }))
    }

    /// The tag name, if this is an element tag.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Tag(x) => Some(x.as_str()),
            _ => None,
        }
    }

    /// Whether this refers to a component.
    pub fn is_component(&self) -> bool {
        !matches!(self, Self::Tag(_))
    }
}

impl fmt::Debug for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(x) => f.debug_tuple("Tag").field(x).finish(),
            Self::Function(_) => write!(f, "Function"),
            Self::Stateful(_) => write!(f, "Stateful"),
        }
    }
}

impl From<&str> for NodeType {
    fn from(x: &str) -> Self {
        Self::Tag(x.to_string())
    }
}

impl From<String> for NodeType {
    fn from(x: String) -> Self {
        Self::Tag(x)
    }
}

/// The value of a single property.
#[derive(Clone)]
pub enum PropValue {
    Bool(bool),
    Str(String),
    Nodes(Vec<NodeLike>),
    Callback(Rc<dyn Fn()>),
}

impl PropValue {
    /// Wrap a callback.
    pub fn callback(f: impl 'static + Fn()) -> Self {
        Self::Callback(Rc::new(f))
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(x) => f.debug_tuple("Bool").field(x).finish(),
            Self::Str(x) => f.debug_tuple("Str").field(x).finish(),
            Self::Nodes(x) => f.debug_tuple("Nodes").field(x).finish(),
            Self::Callback(_) => write!(f, "Callback"),
        }
    }
}

impl From<bool> for PropValue {
    fn from(x: bool) -> Self {
        Self::Bool(x)
    }
}

impl From<&str> for PropValue {
    fn from(x: &str) -> Self {
        Self::Str(x.to_string())
    }
}

impl From<String> for PropValue {
    fn from(x: String) -> Self {
        Self::Str(x)
    }
}

impl From<Vec<NodeLike>> for PropValue {
    fn from(x: Vec<NodeLike>) -> Self {
        Self::Nodes(x)
    }
}

/// The property map of a virtual node.
///
/// Keys are unique; iteration follows insertion order.
#[derive(Clone, Debug, Default)]
pub struct Props {
    entries: Vec<(String, PropValue)>,
}

impl Props {
    /// The key under which component children are passed.
    pub const CHILDREN: &'static str = "children";

    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property, returning the replaced value.
    ///
    /// A replaced property keeps its original position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Builder-style `insert`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        let index = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterate the properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The children passed to a component.
    ///
    /// Empty when there is no `children` entry or it is not a node list.
    pub fn children(&self) -> Vec<NodeLike> {
        match self.get(Self::CHILDREN) {
            Some(PropValue::Nodes(x)) => x.clone(),
            _ => vec![],
        }
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut ret = Self::new();
        for (k, v) in iter {
            ret.insert(k, v);
        }
        ret
    }
}

/// Anything that can be materialized.
#[derive(Clone, Debug, Default)]
pub enum NodeLike {
    /// Nothing at all; materializes into no node.
    #[default]
    Empty,
    Text(String),
    Node(VNode),
    /// A list which is flattened when appended.
    List(Vec<NodeLike>),
}

impl From<&str> for NodeLike {
    fn from(x: &str) -> Self {
        Self::Text(x.to_string())
    }
}

impl From<String> for NodeLike {
    fn from(x: String) -> Self {
        Self::Text(x)
    }
}

impl From<&String> for NodeLike {
    fn from(x: &String) -> Self {
        Self::Text(x.clone())
    }
}

impl From<VNode> for NodeLike {
    fn from(x: VNode) -> Self {
        Self::Node(x)
    }
}

impl From<Vec<NodeLike>> for NodeLike {
    fn from(x: Vec<NodeLike>) -> Self {
        Self::List(x)
    }
}

impl<T: Into<NodeLike>> From<Option<T>> for NodeLike {
    fn from(x: Option<T>) -> Self {
        match x {
            Some(x) => x.into(),
            None => Self::Empty,
        }
    }
}

impl From<()> for NodeLike {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

/// A virtual node.
///
/// A node without `ty` (or with an empty tag name) materializes into nothing.
#[derive(Clone, Debug, Default)]
pub struct VNode {
    pub ty: Option<NodeType>,
    pub props: Props,
    pub children: Vec<NodeLike>,
}

impl VNode {
    // components receive their children as a prop
    pub(crate) fn props_with_children(&self) -> Props {
        let mut props = self.props.clone();
        props.insert(Props::CHILDREN, PropValue::Nodes(self.children.clone()));
        props
    }
}

/// The JSX pragma helper.
///
/// Missing props default to an empty map. The `ty` is not validated.
pub fn h(ty: impl Into<NodeType>, props: Option<Props>, children: Vec<NodeLike>) -> VNode {
    VNode {
        ty: Some(ty.into()),
        props: props.unwrap_or_default(),
        children,
    }
}

/// Collect children of different types into a `Vec<NodeLike>`.
#[macro_export]
macro_rules! nodes {
    ($($child:expr),* $(,)?) => {{
        let children: ::std::vec::Vec<$crate::node::NodeLike> =
            ::std::vec![$($crate::node::NodeLike::from($child)),*];
        children
    }};
}

/// Build a `Props` literal.
#[macro_export]
macro_rules! props {
    ($($name:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut props = $crate::node::Props::new();
        $(props.insert($name, $value);)*
        props
    }};
}
