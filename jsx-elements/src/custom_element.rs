//! The base of custom elements which render their content into a shadow root.

use crate::{
    backend::{Backend, BackendElement, BackendParent, BackendTemplate},
    dom::create_template,
    error::Error,
    node::NodeLike,
};

/// A custom element definition.
///
/// ```rust
/// use jsx_elements::{h, CustomElement, NodeLike};
///
/// struct HelloWorld;
///
/// impl CustomElement for HelloWorld {
///     fn element_name() -> Option<&'static str> {
///         Some("hello-world")
///     }
///
///     fn render(&self) -> NodeLike {
///         h("div", None, vec!["Hello world!".into()]).into()
///     }
/// }
/// ```
pub trait CustomElement {
    /// The name used for registration.
    fn element_name() -> Option<&'static str>
    where
        Self: Sized,
    {
        None
    }

    /// The content of the shadow root.
    fn render(&self) -> NodeLike {
        NodeLike::from("")
    }
}

/// A host element bound with a custom element definition.
///
/// The content is rendered into a template once.
/// Each connection copies the template content into the shadow root.
pub struct CustomElementHost<B: Backend, C> {
    host: B::Element,
    template: B::Template,
    component: C,
}

impl<B: Backend, C: CustomElement> CustomElementHost<B, C> {
    /// Render the component and attach a shadow root to `host` .
    pub fn new(backend: &B, host: B::Element, component: C) -> Result<Self, Error> {
        let template = create_template(backend, &component.render())?;
        host.attach_shadow()?;
        Ok(Self {
            host,
            template,
            component,
        })
    }

    /// Should be called when the host is inserted into the document.
    ///
    /// The shadow root content is replaced by a fresh copy of the template content.
    /// Nothing happens if the host is not connected.
    pub fn connected_callback(&self) -> Result<(), Error> {
        let shadow_root = match self.host.shadow_root() {
            Some(x) => x,
            None => return Ok(()),
        };
        if !self.host.is_connected() {
            log::debug!("<{}> is not connected, content not attached", self.host.tag_name());
            return Ok(());
        }
        shadow_root.clear_children()?;
        let content = self.template.clone_content()?;
        for child in content.child_nodes() {
            shadow_root.append_child(&child)?;
        }
        Ok(())
    }

    /// Should be called when the host is removed from the document.
    ///
    /// The shadow content is kept.
    pub fn disconnected_callback(&self) {}

    pub fn host(&self) -> &B::Element {
        &self.host
    }

    pub fn template(&self) -> &B::Template {
        &self.template
    }

    pub fn component(&self) -> &C {
        &self.component
    }
}
