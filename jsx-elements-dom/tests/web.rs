#![cfg(target_arch = "wasm32")]

use jsx_elements::{backend::*, DefineOptions, ElementRegistry, Error};
use jsx_elements_dom::{prelude::*, DomElement};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

mod env;
use env::*;

wasm_bindgen_test_configure!(run_in_browser);

fn create_elem(backend: &DomBackend, node: impl Into<NodeLike>) -> DomElement {
    create_element(backend, &node.into())
        .unwrap()
        .and_then(|x| x.into_node())
        .and_then(|x| x.as_element())
        .unwrap()
}

#[wasm_bindgen_test]
fn create_dom_tree() {
    init();
    let backend = DomBackend::new().unwrap();
    let el = create_elem(
        &backend,
        h(
            "div",
            Some(props! { "id" => "test", "className" => "a b", "disabled" => true }),
            nodes![h("span", None, nodes!["hello", " world"])],
        ),
    );
    assert_eq!(el.dom().get_attribute("class").as_deref(), Some("a b"));
    assert_eq!(el.property("disabled"), Some(true));
    assert!(el.has_attribute("disabled"));
    assert_eq!(el.dom().child_element_count(), 1);
    assert_eq!(el.dom().text_content().as_deref(), Some("hello world"));
    assert_eq!(
        render_to_static_markup(Some(&el)),
        r#"<div id="test" class="a b" disabled="disabled"><span>hello world</span></div>"#
    );
}

#[wasm_bindgen_test]
fn find_element_by_id() {
    init();
    let document = web_sys::window().unwrap().document().unwrap();
    let backend = DomBackend::with_document(document.clone());
    assert_eq!(backend.document(), &document);
    assert!(backend.element_by_id("lookup-target").is_err());
    let el = create_elem(&backend, h("p", Some(props! { "id" => "lookup-target" }), vec![]));
    backend.body().unwrap().append_child(&el.to_node()).unwrap();
    assert_eq!(backend.element_by_id("lookup-target").unwrap(), el);
    el.remove();
}

#[wasm_bindgen_test]
fn template_from_list() {
    init();
    let backend = DomBackend::new().unwrap();
    let tpl = create_template(
        &backend,
        &nodes![h("a", None, vec![]), "b", h("c-d", None, vec![])].into(),
    )
    .unwrap();
    assert_eq!(tpl.content().child_nodes().len(), 3);
    assert!(matches!(
        create_template(&backend, &NodeLike::Empty),
        Err(Error::NoNodeCreated)
    ));
}

struct TestComponent;

impl CustomElement for TestComponent {
    fn element_name() -> Option<&'static str> {
        Some("custom-component")
    }

    fn render(&self) -> NodeLike {
        h(
            "div",
            Some(props! { "id" => "test" }),
            nodes![h("span", None, nodes!["text"])],
        )
        .into()
    }
}

#[wasm_bindgen_test]
fn custom_element_host() {
    init();
    let backend = DomBackend::new().unwrap();
    let host = backend.create_element("custom-component").unwrap();
    let el = CustomElementHost::new(&backend, host, TestComponent).unwrap();
    el.connected_callback().unwrap();
    assert!(!el.host().shadow_root().unwrap().has_child_nodes());
    backend.body().unwrap().append_child(&el.host().to_node()).unwrap();
    el.connected_callback().unwrap();
    el.connected_callback().unwrap();
    assert_eq!(el.host().shadow_root().unwrap().child_nodes().len(), 1);
    assert_eq!(
        render_to_static_markup(Some(el.host())),
        r#"<custom-component><div id="test"><span>text</span></div></custom-component>"#
    );
    el.host().remove();
}

struct Registered;

impl CustomElement for Registered {
    fn element_name() -> Option<&'static str> {
        Some("registered-element")
    }
}

struct Unnamed;

impl CustomElement for Unnamed {}

fn element_class() -> js_sys::Function {
    js_sys::Function::new_no_args("return class extends HTMLElement {}")
        .call0(&wasm_bindgen::JsValue::NULL)
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
async fn register_in_window() {
    init();
    let registry = DomRegistry::from_window().unwrap();
    assert!(registry.get("registered-element").is_none());
    register_element::<Registered>(&element_class(), &DefineOptions::default())
        .await
        .unwrap();
    assert!(registry.get("registered-element").is_some());
    register_element::<Registered>(&element_class(), &DefineOptions::default())
        .await
        .unwrap();
    let ret = register_element::<Unnamed>(&element_class(), &DefineOptions::default()).await;
    assert!(matches!(ret, Err(Error::NoDefinedName)));
}
