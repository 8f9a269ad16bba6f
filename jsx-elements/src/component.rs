use crate::node::{NodeLike, Props};

/// A component that is constructed from props and renders a node-like.
///
/// Refer to it in a virtual node with `NodeType::stateful::<T>()`.
/// The children of the node are available through `Props::children`.
///
/// ```rust
/// use jsx_elements::{h, nodes, Component, NodeLike, NodeType, Props};
///
/// struct Wrapper {
///     props: Props,
/// }
///
/// impl Component for Wrapper {
///     fn new(props: Props) -> Self {
///         Self { props }
///     }
///
///     fn render(&self) -> NodeLike {
///         h("div", None, self.props.children()).into()
///     }
/// }
///
/// let node = h(NodeType::stateful::<Wrapper>(), None, nodes!["hello"]);
/// # let _ = node;
/// ```
pub trait Component {
    /// Create the component with the node props.
    fn new(props: Props) -> Self
    where
        Self: Sized;

    /// Generate the content of the component.
    fn render(&self) -> NodeLike;
}

/// The basic component which keeps its props and renders an empty text.
#[derive(Debug, Clone, Default)]
pub struct StatelessComponent {
    props: Props,
}

impl StatelessComponent {
    pub fn props(&self) -> &Props {
        &self.props
    }
}

impl Component for StatelessComponent {
    fn new(props: Props) -> Self {
        Self { props }
    }

    fn render(&self) -> NodeLike {
        NodeLike::from("")
    }
}
