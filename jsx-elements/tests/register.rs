use std::rc::Rc;

use futures::executor::block_on;
use jsx_elements::{backend::*, prelude::*, register, DefineOptions, ElementRegistry, Error};

mod env;
use env::*;

#[derive(Default)]
struct Unnamed;

impl CustomElement for Unnamed {}

#[derive(Default)]
struct Named;

impl CustomElement for Named {
    fn element_name() -> Option<&'static str> {
        Some("named-element")
    }
}

#[derive(Default)]
struct BadName;

impl CustomElement for BadName {
    fn element_name() -> Option<&'static str> {
        Some("BadName")
    }
}

fn constructor<C: CustomElement + Default + 'static>() -> MemConstructor {
    Rc::new(|| -> Box<dyn CustomElement> { Box::new(C::default()) })
}

#[test]
fn unnamed_element() {
    init();
    let registry = MemRegistry::new();
    let ret = block_on(register::<Unnamed, _>(
        Some(&registry),
        &constructor::<Unnamed>(),
        &DefineOptions::default(),
    ));
    match ret {
        Err(err @ Error::NoDefinedName) => assert_eq!(err.to_string(), "No defined name"),
        _ => panic!("should fail without an element name"),
    }
}

#[test]
fn no_registry() {
    init();
    let ret = block_on(register::<Named, MemRegistry>(
        None,
        &constructor::<Named>(),
        &DefineOptions::default(),
    ));
    assert!(matches!(ret, Err(Error::RegistryUnavailable)));
}

#[test]
fn define_and_resolve() {
    init();
    let registry = MemRegistry::new();
    assert!(registry.get("named-element").is_none());
    block_on(register::<Named, _>(
        Some(&registry),
        &constructor::<Named>(),
        &DefineOptions::default(),
    ))
    .unwrap();
    assert!(registry.get("named-element").is_some());
}

#[test]
fn register_twice() {
    init();
    let registry = MemRegistry::new();
    let first = constructor::<Named>();
    block_on(register::<Named, _>(
        Some(&registry),
        &first,
        &DefineOptions::default(),
    ))
    .unwrap();
    let second = constructor::<Named>();
    block_on(register::<Named, _>(
        Some(&registry),
        &second,
        &DefineOptions {
            extends: Some("div".into()),
        },
    ))
    .unwrap();
    let defined = registry.get("named-element").unwrap();
    assert!(Rc::ptr_eq(&defined, &first));
    assert_eq!(registry.options("named-element"), Some(DefineOptions::default()));
}

#[test]
fn define_with_extends() {
    init();
    let registry = MemRegistry::new();
    let options = DefineOptions {
        extends: Some("button".into()),
    };
    block_on(register::<Named, _>(
        Some(&registry),
        &constructor::<Named>(),
        &options,
    ))
    .unwrap();
    assert_eq!(registry.options("named-element"), Some(options));
}

#[test]
fn invalid_name() {
    init();
    let registry = MemRegistry::new();
    let ret = block_on(register::<BadName, _>(
        Some(&registry),
        &constructor::<BadName>(),
        &DefineOptions::default(),
    ));
    assert!(matches!(ret, Err(Error::BackendError { .. })));
    assert!(registry.get("BadName").is_none());
}

#[test]
fn defined_constructor_builds_element() {
    init();
    #[derive(Default)]
    struct Greeting;
    impl CustomElement for Greeting {
        fn element_name() -> Option<&'static str> {
            Some("x-greeting")
        }
        fn render(&self) -> NodeLike {
            h("p", None, nodes!["hi"]).into()
        }
    }
    let registry = MemRegistry::new();
    block_on(register::<Greeting, _>(
        Some(&registry),
        &constructor::<Greeting>(),
        &DefineOptions::default(),
    ))
    .unwrap();
    let backend = MemBackend::new();
    let component = (registry.get("x-greeting").unwrap())();
    let tpl = create_template(&backend, &component.render()).unwrap();
    let p = tpl.content().child_nodes()[0].as_element().unwrap();
    assert_eq!(render_to_static_markup(Some(&p)), "<p>hi</p>");
}
