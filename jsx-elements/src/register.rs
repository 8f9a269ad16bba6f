//! Custom element registration.

use futures::{future::LocalBoxFuture, FutureExt};

use crate::{custom_element::CustomElement, error::Error};

/// Options for defining a custom element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefineOptions {
    /// The built-in element tag that the custom element extends.
    pub extends: Option<String>,
}

/// A custom element registry, e.g. `window.customElements` .
pub trait ElementRegistry {
    /// The constructor type accepted by the registry.
    type Constructor: Clone;

    /// Get the constructor defined with the name.
    fn get(&self, name: &str) -> Option<Self::Constructor>;

    /// Define a name.
    fn define(
        &self,
        name: &str,
        constructor: &Self::Constructor,
        options: &DefineOptions,
    ) -> Result<(), Error>;

    /// A future that resolves when the name is defined.
    fn when_defined(&self, name: &str) -> LocalBoxFuture<'static, Result<(), Error>>;
}

/// Registers `C` with its element name.
///
/// A `None` registry means the environment has no registry available.
/// The name is defined only if it is not defined yet.
/// The returned future resolves when the name becomes defined.
pub fn register<C: CustomElement, R: ElementRegistry>(
    registry: Option<&R>,
    constructor: &R::Constructor,
    options: &DefineOptions,
) -> LocalBoxFuture<'static, Result<(), Error>> {
    let element_name = match C::element_name() {
        Some(x) => x,
        None => return futures::future::ready(Err(Error::NoDefinedName)).boxed_local(),
    };
    let registry = match registry {
        Some(x) => x,
        None => return futures::future::ready(Err(Error::RegistryUnavailable)).boxed_local(),
    };
    let when_defined = registry.when_defined(element_name);
    if registry.get(element_name).is_none() {
        log::debug!("define custom element <{}>", element_name);
        if let Err(err) = registry.define(element_name, constructor, options) {
            return futures::future::ready(Err(err)).boxed_local();
        }
    }
    when_defined
}
