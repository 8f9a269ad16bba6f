//! jsx-elements: turn JSX-style virtual nodes into DOM trees and custom elements
//!
//! This is the *DOM binding* module of the library.
//!
//! ### Quick Start
//!
//! ```rust,no_run
//! use jsx_elements::prelude::*;
//! use jsx_elements_dom::DomBackend;
//!
//! let backend = DomBackend::new().unwrap();
//! let node = h("div", None, nodes!["Hello world!"]);
//! if let Some(m) = create_element(&backend, &node.into()).unwrap() {
//!     for n in m.into_nodes() {
//!         backend.body().unwrap().append_child(&n).unwrap();
//!     }
//! }
//! ```

#![warn(missing_docs)]

use jsx_elements::{backend::*, error::Error};
use wasm_bindgen::{JsCast, JsValue};

mod element;
pub use element::{DomElement, DomFragment, DomNode, DomTemplate};
mod registry;
pub use registry::{register_element, DomRegistry};

/// The types that should usually be imported.
pub mod prelude {
    pub use crate::{register_element, DomBackend, DomRegistry};
    pub use jsx_elements::prelude::*;
}

fn log_js_error(err: &JsValue) {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        log::error!("{}", err.message());
    } else {
        log::error!("(JavaScript Error)");
    }
}

pub(crate) fn js_error(msg: impl Into<String>, err: JsValue) -> Error {
    log_js_error(&err);
    let msg = msg.into();
    let msg = match err.dyn_ref::<js_sys::Error>() {
        Some(err) => format!("{}: {}", msg, String::from(err.message())),
        None => msg,
    };
    Error::backend(msg)
}

/// A backend that builds nodes in the web page document.
pub struct DomBackend {
    document: web_sys::Document,
}

impl DomBackend {
    /// Create a backend with the document of the current window.
    pub fn new() -> Result<Self, Error> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::backend("Cannot init DOM backend outside web page environment"))?;
        Ok(Self { document })
    }

    /// Create a backend with a specified document.
    pub fn with_document(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The `<body>` element.
    pub fn body(&self) -> Result<DomElement, Error> {
        self.document
            .body()
            .map(|x| DomElement(x.into()))
            .ok_or_else(|| Error::backend("Cannot find the <body> element"))
    }

    /// Find an element by its id.
    pub fn element_by_id(&self, id: &str) -> Result<DomElement, Error> {
        self.document
            .get_element_by_id(id)
            .map(DomElement)
            .ok_or_else(|| Error::backend(format!("Cannot find the element {:?}", id)))
    }

    /// The underlying document.
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Backend for DomBackend {
    type Node = DomNode;
    type Element = DomElement;
    type Template = DomTemplate;

    fn create_element(&self, tag_name: &str) -> Result<DomElement, Error> {
        self.document
            .create_element(tag_name)
            .map(DomElement)
            .map_err(|err| js_error(format!("Cannot create element <{}>", tag_name), err))
    }

    fn create_text_node(&self, content: &str) -> Result<DomNode, Error> {
        Ok(DomNode(self.document.create_text_node(content).into()))
    }

    fn create_template(&self) -> Result<DomTemplate, Error> {
        let elem = self
            .document
            .create_element("template")
            .map_err(|err| js_error("Cannot create template", err))?;
        elem.dyn_into::<web_sys::HtmlTemplateElement>()
            .map(DomTemplate)
            .map_err(|_| Error::backend("<template> is not supported"))
    }
}
