//! An in-memory backend.
//!
//! The nodes form a small DOM-like tree with a document and a `<body>`.
//! It can be used to generate static markup without a DOM environment.

use futures::{channel::oneshot, future::LocalBoxFuture, FutureExt};
use std::{
    cell::RefCell,
    collections::HashMap,
    fmt,
    rc::{Rc, Weak},
};

use super::*;
use crate::{
    custom_element::CustomElement,
    register::{DefineOptions, ElementRegistry},
};

type NodeRc = Rc<RefCell<MemNodeData>>;
type NodeWeak = Weak<RefCell<MemNodeData>>;

struct MemNodeData {
    parent: Option<NodeWeak>,
    children: Vec<MemNode>,
    content: MemContent,
}

enum MemContent {
    Document,
    Element(MemElementData),
    Text(String),
    Fragment { host: Option<NodeWeak> },
}

struct MemElementData {
    tag_name: String,
    attributes: Vec<(String, String)>,
    properties: HashMap<String, bool>,
    shadow_root: Option<MemFragment>,
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| !c.is_whitespace() && !matches!(c, '<' | '>' | '/' | '"' | '\'' | '=' | '\0'))
}

/// A node of `MemBackend`.
#[derive(Clone)]
pub struct MemNode {
    inner: NodeRc,
}

impl MemNode {
    fn new(content: MemContent) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemNodeData {
                parent: None,
                children: vec![],
                content,
            })),
        }
    }

    /// Check if two handles refer to the same node.
    pub fn ptr_eq(&self, rhs: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &rhs.inner)
    }

    /// Get the parent node.
    ///
    /// Shadow roots and detached nodes have no parent.
    pub fn parent_node(&self) -> Option<MemNode> {
        let parent = self.inner.borrow().parent.as_ref()?.upgrade()?;
        Some(MemNode { inner: parent })
    }

    /// Detach the node from its parent.
    pub fn remove(&self) {
        if let Some(parent) = self.parent_node() {
            parent
                .inner
                .borrow_mut()
                .children
                .retain(|x| !x.ptr_eq(self));
        }
        self.inner.borrow_mut().parent = None;
    }

    fn is_inclusive_ancestor_of(&self, node: &MemNode) -> bool {
        let mut cur = Some(node.clone());
        while let Some(n) = cur {
            if n.ptr_eq(self) {
                return true;
            }
            cur = n.parent_node();
        }
        false
    }

    fn append(&self, child: &MemNode) -> Result<(), Error> {
        let (is_fragment, is_document) = match &child.inner.borrow().content {
            MemContent::Fragment { .. } => (true, false),
            MemContent::Document => (false, true),
            _ => (false, false),
        };
        if is_document {
            return Err(Error::backend("A document cannot be a child"));
        }
        if is_fragment {
            // appending a fragment moves all of its children, or none of them
            if child.children().iter().any(|c| c.is_inclusive_ancestor_of(self)) {
                return Err(Error::backend("The new child is an ancestor of the parent"));
            }
            let children = std::mem::take(&mut child.inner.borrow_mut().children);
            for c in children {
                c.inner.borrow_mut().parent = None;
                self.append(&c)?;
            }
            return Ok(());
        }
        if child.is_inclusive_ancestor_of(self) {
            return Err(Error::backend("The new child is an ancestor of the parent"));
        }
        child.remove();
        child.inner.borrow_mut().parent = Some(Rc::downgrade(&self.inner));
        self.inner.borrow_mut().children.push(child.clone());
        Ok(())
    }

    fn children(&self) -> Vec<MemNode> {
        self.inner.borrow().children.clone()
    }

    fn clear(&self) {
        let children = std::mem::take(&mut self.inner.borrow_mut().children);
        for c in children {
            c.inner.borrow_mut().parent = None;
        }
    }

    fn is_connected(&self) -> bool {
        let mut cur = self.inner.clone();
        loop {
            let next = {
                let data = cur.borrow();
                match &data.content {
                    MemContent::Document => return true,
                    MemContent::Fragment { host: Some(host) } => host.upgrade(),
                    _ => data.parent.as_ref().and_then(|x| x.upgrade()),
                }
            };
            match next {
                Some(x) => cur = x,
                None => return false,
            }
        }
    }

    // shadow roots and object properties are not cloned
    fn deep_clone(&self) -> MemNode {
        let content = match &self.inner.borrow().content {
            MemContent::Document | MemContent::Fragment { .. } => {
                MemContent::Fragment { host: None }
            }
            MemContent::Text(x) => MemContent::Text(x.clone()),
            MemContent::Element(x) => MemContent::Element(MemElementData {
                tag_name: x.tag_name.clone(),
                attributes: x.attributes.clone(),
                properties: HashMap::new(),
                shadow_root: None,
            }),
        };
        let ret = MemNode::new(content);
        for child in self.children() {
            let c = child.deep_clone();
            c.inner.borrow_mut().parent = Some(Rc::downgrade(&ret.inner));
            ret.inner.borrow_mut().children.push(c);
        }
        ret
    }
}

impl fmt::Debug for MemNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner.borrow().content {
            MemContent::Document => write!(f, "[Document]"),
            MemContent::Element(x) => write!(f, "<{}>", x.tag_name),
            MemContent::Text(x) => write!(f, "{:?}", x),
            MemContent::Fragment { .. } => write!(f, "[Fragment]"),
        }
    }
}

impl BackendNode for MemNode {
    type Element = MemElement;

    fn kind(&self) -> NodeKind {
        match &self.inner.borrow().content {
            MemContent::Element(_) => NodeKind::Element,
            MemContent::Text(_) => NodeKind::Text,
            _ => NodeKind::Other,
        }
    }

    fn text_content(&self) -> Option<String> {
        match &self.inner.borrow().content {
            MemContent::Text(x) => Some(x.clone()),
            _ => None,
        }
    }

    fn as_element(&self) -> Option<MemElement> {
        match self.kind() {
            NodeKind::Element => Some(MemElement(self.clone())),
            _ => None,
        }
    }
}

/// An element of `MemBackend`.
#[derive(Debug, Clone)]
pub struct MemElement(MemNode);

impl MemElement {
    fn with_data<R>(&self, f: impl FnOnce(&MemElementData) -> R) -> R {
        match &self.0.inner.borrow().content {
            MemContent::Element(x) => f(x),
            _ => unreachable!(),
        }
    }

    fn with_data_mut<R>(&self, f: impl FnOnce(&mut MemElementData) -> R) -> R {
        match &mut self.0.inner.borrow_mut().content {
            MemContent::Element(x) => f(x),
            _ => unreachable!(),
        }
    }

    /// Detach the element from its parent.
    pub fn remove(&self) {
        self.0.remove()
    }

    pub fn parent_node(&self) -> Option<MemNode> {
        self.0.parent_node()
    }
}

impl BackendParent for MemElement {
    type Node = MemNode;

    fn append_child(&self, child: &MemNode) -> Result<(), Error> {
        self.0.append(child)
    }

    fn child_nodes(&self) -> Vec<MemNode> {
        self.0.children()
    }

    fn clear_children(&self) -> Result<(), Error> {
        self.0.clear();
        Ok(())
    }
}

impl BackendElement for MemElement {
    type Fragment = MemFragment;

    fn to_node(&self) -> MemNode {
        self.0.clone()
    }

    fn tag_name(&self) -> String {
        self.with_data(|x| x.tag_name.to_ascii_uppercase())
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), Error> {
        if !is_valid_name(name) {
            return Err(Error::backend(format!("Invalid attribute name {:?}", name)));
        }
        self.with_data_mut(|x| {
            match x.attributes.iter_mut().find(|(k, _)| k == name) {
                Some((_, v)) => *v = value.to_string(),
                None => x.attributes.push((name.to_string(), value.to_string())),
            }
        });
        Ok(())
    }

    fn get_attribute(&self, name: &str) -> Option<String> {
        self.with_data(|x| {
            x.attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        })
    }

    fn attribute_names(&self) -> Vec<String> {
        self.with_data(|x| x.attributes.iter().map(|(k, _)| k.clone()).collect())
    }

    fn set_property(&self, name: &str, value: bool) -> Result<(), Error> {
        self.with_data_mut(|x| x.properties.insert(name.to_string(), value));
        Ok(())
    }

    fn property(&self, name: &str) -> Option<bool> {
        self.with_data(|x| x.properties.get(name).copied())
    }

    fn attach_shadow(&self) -> Result<MemFragment, Error> {
        if self.shadow_root().is_some() {
            return Err(Error::backend("The shadow root has already been attached"));
        }
        let shadow_root = MemFragment(MemNode::new(MemContent::Fragment {
            host: Some(Rc::downgrade(&self.0.inner)),
        }));
        self.with_data_mut(|x| x.shadow_root = Some(shadow_root.clone()));
        Ok(shadow_root)
    }

    fn shadow_root(&self) -> Option<MemFragment> {
        self.with_data(|x| x.shadow_root.clone())
    }

    fn is_connected(&self) -> bool {
        self.0.is_connected()
    }
}

/// A document fragment (template content or shadow root) of `MemBackend`.
#[derive(Debug, Clone)]
pub struct MemFragment(MemNode);

impl BackendParent for MemFragment {
    type Node = MemNode;

    fn append_child(&self, child: &MemNode) -> Result<(), Error> {
        self.0.append(child)
    }

    fn child_nodes(&self) -> Vec<MemNode> {
        self.0.children()
    }

    fn clear_children(&self) -> Result<(), Error> {
        self.0.clear();
        Ok(())
    }
}

/// A template of `MemBackend`.
#[derive(Debug)]
pub struct MemTemplate {
    content: MemFragment,
}

impl BackendTemplate for MemTemplate {
    type Node = MemNode;
    type Fragment = MemFragment;

    fn content(&self) -> MemFragment {
        self.content.clone()
    }

    fn clone_content(&self) -> Result<MemFragment, Error> {
        Ok(MemFragment(self.content.0.deep_clone()))
    }
}

/// The in-memory backend.
pub struct MemBackend {
    document: MemNode,
    body: MemElement,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemBackend {
    /// Create a backend with an empty document body.
    pub fn new() -> Self {
        let document = MemNode::new(MemContent::Document);
        let body = MemElement(MemNode::new(MemContent::Element(MemElementData {
            tag_name: "body".to_string(),
            attributes: vec![],
            properties: HashMap::new(),
            shadow_root: None,
        })));
        document.inner.borrow_mut().children.push(body.0.clone());
        body.0.inner.borrow_mut().parent = Some(Rc::downgrade(&document.inner));
        Self { document, body }
    }

    /// The `<body>` element, which is connected.
    pub fn body(&self) -> &MemElement {
        &self.body
    }

    /// The document node.
    pub fn document(&self) -> &MemNode {
        &self.document
    }
}

impl Backend for MemBackend {
    type Node = MemNode;
    type Element = MemElement;
    type Template = MemTemplate;

    fn create_element(&self, tag_name: &str) -> Result<MemElement, Error> {
        if !is_valid_name(tag_name) {
            return Err(Error::backend(format!("Invalid tag name {:?}", tag_name)));
        }
        Ok(MemElement(MemNode::new(MemContent::Element(MemElementData {
            tag_name: tag_name.to_string(),
            attributes: vec![],
            properties: HashMap::new(),
            shadow_root: None,
        }))))
    }

    fn create_text_node(&self, content: &str) -> Result<MemNode, Error> {
        Ok(MemNode::new(MemContent::Text(content.to_string())))
    }

    fn create_template(&self) -> Result<MemTemplate, Error> {
        Ok(MemTemplate {
            content: MemFragment(MemNode::new(MemContent::Fragment { host: None })),
        })
    }
}

/// The constructor type stored in `MemRegistry`.
pub type MemConstructor = Rc<dyn Fn() -> Box<dyn CustomElement>>;

/// An in-memory custom element registry.
#[derive(Default)]
pub struct MemRegistry {
    definitions: RefCell<HashMap<String, (MemConstructor, DefineOptions)>>,
    pending: RefCell<HashMap<String, Vec<oneshot::Sender<()>>>>,
}

impl MemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The options used when the name was defined.
    pub fn options(&self, name: &str) -> Option<DefineOptions> {
        self.definitions.borrow().get(name).map(|(_, x)| x.clone())
    }
}

fn is_valid_custom_element_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_lowercase())
        && name.contains('-')
        && !name.chars().any(|c| c.is_ascii_uppercase())
        && is_valid_name(name)
}

impl ElementRegistry for MemRegistry {
    type Constructor = MemConstructor;

    fn get(&self, name: &str) -> Option<MemConstructor> {
        self.definitions.borrow().get(name).map(|(x, _)| x.clone())
    }

    fn define(
        &self,
        name: &str,
        constructor: &MemConstructor,
        options: &DefineOptions,
    ) -> Result<(), Error> {
        if !is_valid_custom_element_name(name) {
            return Err(Error::backend(format!(
                "{:?} is not a valid custom element name",
                name
            )));
        }
        if self.definitions.borrow().contains_key(name) {
            return Err(Error::backend(format!("{:?} has already been defined", name)));
        }
        self.definitions
            .borrow_mut()
            .insert(name.to_string(), (constructor.clone(), options.clone()));
        let pending = self.pending.borrow_mut().remove(name);
        for sender in pending.into_iter().flatten() {
            let _ = sender.send(());
        }
        Ok(())
    }

    fn when_defined(&self, name: &str) -> LocalBoxFuture<'static, Result<(), Error>> {
        if self.definitions.borrow().contains_key(name) {
            return futures::future::ready(Ok(())).boxed_local();
        }
        let (sender, receiver) = oneshot::channel();
        self.pending
            .borrow_mut()
            .entry(name.to_string())
            .or_default()
            .push(sender);
        async move {
            receiver
                .await
                .map_err(|_| Error::backend("The registry has been dropped"))
        }
        .boxed_local()
    }
}
