use futures::{future::LocalBoxFuture, FutureExt};
use jsx_elements::{error::Error, register, CustomElement, DefineOptions, ElementRegistry};
use wasm_bindgen::{JsCast, JsValue};

use crate::js_error;

/// The `window.customElements` registry.
#[derive(Debug, Clone)]
pub struct DomRegistry(pub web_sys::CustomElementRegistry);

impl DomRegistry {
    /// Get the registry of the current window.
    ///
    /// Returns `None` if the environment has no custom element support.
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let registry = js_sys::Reflect::get(&window, &JsValue::from_str("customElements")).ok()?;
        if registry.is_undefined() || registry.is_null() {
            return None;
        }
        registry
            .dyn_into::<web_sys::CustomElementRegistry>()
            .ok()
            .map(Self)
    }
}

impl ElementRegistry for DomRegistry {
    type Constructor = js_sys::Function;

    fn get(&self, name: &str) -> Option<js_sys::Function> {
        self.0.get(name).dyn_into::<js_sys::Function>().ok()
    }

    fn define(
        &self,
        name: &str,
        constructor: &js_sys::Function,
        options: &DefineOptions,
    ) -> Result<(), Error> {
        let ret = match &options.extends {
            None => self.0.define(name, constructor),
            Some(extends) => {
                let opts = web_sys::ElementDefinitionOptions::new();
                opts.set_extends(extends);
                self.0.define_with_options(name, constructor, &opts)
            }
        };
        ret.map_err(|err| js_error(format!("Cannot define {:?}", name), err))
    }

    fn when_defined(&self, name: &str) -> LocalBoxFuture<'static, Result<(), Error>> {
        let promise = match self.0.when_defined(name) {
            Ok(x) => x,
            Err(err) => {
                let err = js_error(format!("Cannot wait for {:?}", name), err);
                return futures::future::ready(Err(err)).boxed_local();
            }
        };
        let name = name.to_string();
        async move {
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| js_error(format!("Cannot wait for {:?}", name), err))
        }
        .boxed_local()
    }
}

/// Register `C` into `window.customElements` .
///
/// The returned future resolves when the element name is defined.
pub fn register_element<C: CustomElement>(
    constructor: &js_sys::Function,
    options: &DefineOptions,
) -> LocalBoxFuture<'static, Result<(), Error>> {
    let registry = DomRegistry::from_window();
    register::<C, _>(registry.as_ref(), constructor, options)
}
