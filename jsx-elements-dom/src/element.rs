use jsx_elements::{backend::*, error::Error};
use wasm_bindgen::{JsCast, JsValue};

use crate::js_error;

/// A DOM node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomNode(pub web_sys::Node);

impl DomNode {
    /// The underlying DOM node.
    pub fn dom(&self) -> &web_sys::Node {
        &self.0
    }
}

impl BackendNode for DomNode {
    type Element = DomElement;

    fn kind(&self) -> NodeKind {
        match self.0.node_type() {
            web_sys::Node::ELEMENT_NODE => NodeKind::Element,
            web_sys::Node::TEXT_NODE => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn text_content(&self) -> Option<String> {
        match self.kind() {
            NodeKind::Text => Some(self.0.text_content().unwrap_or_default()),
            _ => None,
        }
    }

    fn as_element(&self) -> Option<DomElement> {
        self.0.dyn_ref::<web_sys::Element>().cloned().map(DomElement)
    }
}

fn append_child(parent: &web_sys::Node, child: &DomNode) -> Result<(), Error> {
    parent
        .append_child(&child.0)
        .map(|_| ())
        .map_err(|err| js_error("Cannot append child", err))
}

fn child_nodes(parent: &web_sys::Node) -> Vec<DomNode> {
    let list = parent.child_nodes();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(DomNode)
        .collect()
}

fn clear_children(parent: &web_sys::Node) -> Result<(), Error> {
    while let Some(child) = parent.first_child() {
        parent
            .remove_child(&child)
            .map_err(|err| js_error("Cannot remove child", err))?;
    }
    Ok(())
}

/// A DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement(pub web_sys::Element);

impl DomElement {
    /// The underlying DOM element.
    pub fn dom(&self) -> &web_sys::Element {
        &self.0
    }

    /// Remove the element from its parent.
    pub fn remove(&self) {
        self.0.remove();
    }
}

impl BackendParent for DomElement {
    type Node = DomNode;

    fn append_child(&self, child: &DomNode) -> Result<(), Error> {
        append_child(&self.0, child)
    }

    fn child_nodes(&self) -> Vec<DomNode> {
        child_nodes(&self.0)
    }

    fn has_child_nodes(&self) -> bool {
        self.0.has_child_nodes()
    }

    fn clear_children(&self) -> Result<(), Error> {
        clear_children(&self.0)
    }
}

impl BackendElement for DomElement {
    type Fragment = DomFragment;

    fn to_node(&self) -> DomNode {
        DomNode(self.0.clone().into())
    }

    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Error> {
        self.0
            .set_attribute(name, value)
            .map_err(|err| js_error(format!("Cannot set attribute {:?}", name), err))
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn attribute_names(&self) -> Vec<String> {
        self.0
            .get_attribute_names()
            .iter()
            .filter_map(|x| x.as_string())
            .collect()
    }

    fn set_property(&self, name: &str, value: bool) -> Result<(), Error> {
        js_sys::Reflect::set(&self.0, &JsValue::from_str(name), &JsValue::from_bool(value))
            .map(|_| ())
            .map_err(|err| js_error(format!("Cannot set property {:?}", name), err))
    }

    fn property(&self, name: &str) -> Option<bool> {
        js_sys::Reflect::get(&self.0, &JsValue::from_str(name))
            .ok()
            .and_then(|x| x.as_bool())
    }

    fn attach_shadow(&self) -> Result<DomFragment, Error> {
        let init = web_sys::ShadowRootInit::new(web_sys::ShadowRootMode::Open);
        self.0
            .attach_shadow(&init)
            .map(|x| DomFragment(x.into()))
            .map_err(|err| js_error("Cannot attach shadow root", err))
    }

    fn shadow_root(&self) -> Option<DomFragment> {
        self.0.shadow_root().map(|x| DomFragment(x.into()))
    }

    fn is_connected(&self) -> bool {
        self.0.is_connected()
    }
}

/// A document fragment or a shadow root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomFragment(pub web_sys::DocumentFragment);

impl BackendParent for DomFragment {
    type Node = DomNode;

    fn append_child(&self, child: &DomNode) -> Result<(), Error> {
        append_child(&self.0, child)
    }

    fn child_nodes(&self) -> Vec<DomNode> {
        child_nodes(&self.0)
    }

    fn has_child_nodes(&self) -> bool {
        self.0.has_child_nodes()
    }

    fn clear_children(&self) -> Result<(), Error> {
        clear_children(&self.0)
    }
}

/// A `<template>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomTemplate(pub web_sys::HtmlTemplateElement);

impl BackendTemplate for DomTemplate {
    type Node = DomNode;
    type Fragment = DomFragment;

    fn content(&self) -> DomFragment {
        DomFragment(self.0.content())
    }

    fn clone_content(&self) -> Result<DomFragment, Error> {
        self.0
            .content()
            .clone_node_with_deep(true)
            .map_err(|err| js_error("Cannot clone template content", err))?
            .dyn_into::<web_sys::DocumentFragment>()
            .map(DomFragment)
            .map_err(|_| Error::backend("The cloned content is not a fragment"))
    }
}
