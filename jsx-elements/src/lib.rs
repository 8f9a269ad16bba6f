//! jsx-elements: turn JSX-style virtual nodes into DOM trees and custom elements
//!
//! This is the *core* module of the library.
//! The DOM itself is provided by a backend:
//! `MemBackend` in this crate works without any DOM environment,
//! and the `jsx-elements-dom` crate works in web pages.
//!
//! ### Quick Start
//!
//! ```rust
//! use jsx_elements::{prelude::*, backend::MemBackend};
//!
//! let backend = MemBackend::new();
//! let node = h(
//!     "div",
//!     Some(props! { "id" => "test" }),
//!     nodes![h("span", None, nodes!["hello"])],
//! );
//! let elem = create_element(&backend, &node.into())
//!     .unwrap()
//!     .and_then(|x| x.into_node())
//!     .and_then(|x| x.as_element());
//! assert_eq!(
//!     render_to_static_markup(elem.as_ref()),
//!     r#"<div id="test"><span>hello</span></div>"#,
//! );
//! ```

pub mod backend;
pub mod component;
pub mod custom_element;
pub mod dom;
pub mod error;
pub mod node;
pub mod property;
pub mod register;
pub mod render;

pub use component::{Component, StatelessComponent};
pub use custom_element::{CustomElement, CustomElementHost};
pub use dom::{create_element, create_template, Materialized};
pub use error::Error;
pub use node::{h, NodeLike, NodeType, PropValue, Props, VNode};
pub use register::{register, DefineOptions, ElementRegistry};
pub use render::{render_to_static_markup, render_to_static_markup_with, RenderOptions};

/// The types that should usually be imported.
pub mod prelude {
    pub use crate::backend::{Backend, BackendElement, BackendNode, BackendParent, BackendTemplate};
    pub use crate::{
        create_element, create_template, h, nodes, props, render_to_static_markup, Component,
        CustomElement, CustomElementHost, NodeLike, NodeType, Props,
    };
}
