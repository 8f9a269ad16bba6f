//! Materialize virtual nodes into backend nodes.

use crate::{
    backend::{Backend, BackendElement, BackendParent, BackendTemplate},
    error::Error,
    node::{NodeLike, NodeType, VNode},
    property::set_props,
};

/// The result of materializing a node-like.
///
/// A list keeps the nesting of the source lists.
/// It is flattened when appended.
#[derive(Debug, Clone)]
pub enum Materialized<N> {
    Node(N),
    List(Vec<Option<Materialized<N>>>),
}

impl<N> Materialized<N> {
    /// Flatten into nodes, skipping absent entries and keeping the order.
    pub fn into_nodes(self) -> Vec<N> {
        let mut ret = vec![];
        self.collect_into(&mut ret);
        ret
    }

    fn collect_into(self, ret: &mut Vec<N>) {
        match self {
            Self::Node(x) => ret.push(x),
            Self::List(list) => {
                for item in list.into_iter().flatten() {
                    item.collect_into(ret);
                }
            }
        }
    }

    /// Get the node if materialized into a single node.
    pub fn into_node(self) -> Option<N> {
        match self {
            Self::Node(x) => Some(x),
            Self::List(_) => None,
        }
    }
}

/// Creates backend nodes from a node-like.
///
/// Returns `None` for an empty node-like and for a virtual node without type.
/// Components are invoked with their props, which contain the children under `children`.
pub fn create_element<B: Backend>(
    backend: &B,
    node: &NodeLike,
) -> Result<Option<Materialized<B::Node>>, Error> {
    match node {
        NodeLike::Empty => Ok(None),
        NodeLike::Text(x) => Ok(Some(Materialized::Node(backend.create_text_node(x)?))),
        NodeLike::List(list) => {
            let items = list
                .iter()
                .map(|x| create_element(backend, x))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(Materialized::List(items)))
        }
        NodeLike::Node(x) => create_vnode(backend, x),
    }
}

fn create_vnode<B: Backend>(
    backend: &B,
    node: &VNode,
) -> Result<Option<Materialized<B::Node>>, Error> {
    let tag_name = match &node.ty {
        None => return Ok(None),
        Some(NodeType::Function(f)) => {
            let content = f(node.props_with_children());
            return create_element(backend, &content);
        }
        Some(NodeType::Stateful(ctor)) => {
            let component = ctor(node.props_with_children());
            return create_element(backend, &component.render());
        }
        Some(NodeType::Tag(x)) => x,
    };
    if tag_name.is_empty() {
        return Ok(None);
    }
    log::trace!("create element <{}>", tag_name);
    let el = backend.create_element(tag_name)?;
    set_props(&el, Some(&node.props))?;
    for child in node.children.iter() {
        let child = create_element(backend, child)?;
        append_to(&el, child)?;
    }
    Ok(Some(Materialized::Node(el.to_node())))
}

fn append_to<P: BackendParent>(
    parent: &P,
    child: Option<Materialized<P::Node>>,
) -> Result<(), Error> {
    match child {
        None => Ok(()),
        Some(Materialized::Node(x)) => parent.append_child(&x),
        Some(Materialized::List(list)) => {
            for item in list {
                append_to(parent, item)?;
            }
            Ok(())
        }
    }
}

/// Creates a template with the materialized `node` as its content.
///
/// Fails with `Error::NoNodeCreated` if nothing is materialized.
/// A list is appended as all of its flattened nodes.
pub fn create_template<B: Backend>(backend: &B, node: &NodeLike) -> Result<B::Template, Error> {
    let template = backend.create_template()?;
    let nodes = create_element(backend, node)?
        .ok_or(Error::NoNodeCreated)?
        .into_nodes();
    if nodes.is_empty() {
        return Err(Error::NoNodeCreated);
    }
    let content = template.content();
    for n in nodes.iter() {
        content.append_child(n)?;
    }
    Ok(template)
}
