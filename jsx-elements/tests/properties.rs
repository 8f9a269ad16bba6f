use jsx_elements::{
    backend::*,
    property::{is_custom_prop, set_prop, set_props, PropApplied},
    props, PropValue,
};

mod env;
use env::*;

fn prepare_env(f: impl FnOnce(&MemElement)) {
    init();
    let backend = MemBackend::new();
    let el = backend.create_element("div").unwrap();
    f(&el);
}

#[test]
fn custom_prop_is_never_matched() {
    assert!(!is_custom_prop("a"));
}

#[test]
fn set_class_name_prop() {
    prepare_env(|el| {
        let ret = set_prop(el, "className", &"class list".into()).unwrap();
        assert_eq!(ret, PropApplied::Attribute);
        assert!(el.has_attribute("class"));
        assert!(!el.has_attribute("className"));
        assert_eq!(el.get_attribute("class").as_deref(), Some("class list"));
    });
}

#[test]
fn set_data_prop() {
    prepare_env(|el| {
        set_prop(el, "data-property", &"value".into()).unwrap();
        assert!(el.has_attribute("data-property"));
        assert_eq!(el.get_attribute("data-property").as_deref(), Some("value"));
    });
}

#[test]
fn set_boolean_prop() {
    prepare_env(|el| {
        set_prop(el, "property", &false.into()).unwrap();
        assert!(!el.has_attribute("property"));
        assert_eq!(el.property("property"), Some(false));

        let ret = set_prop(el, "property", &true.into()).unwrap();
        assert_eq!(ret, PropApplied::Boolean);
        assert!(el.has_attribute("property"));
        assert_eq!(el.get_attribute("property").as_deref(), Some("property"));
        assert_eq!(el.property("property"), Some(true));

        // the attribute is kept
        set_prop(el, "property", &false.into()).unwrap();
        assert!(el.has_attribute("property"));
        assert_eq!(el.property("property"), Some(false));
    });
}

#[test]
fn ignore_non_attribute_values() {
    prepare_env(|el| {
        let ret = set_prop(el, "onclick", &PropValue::callback(|| {})).unwrap();
        assert_eq!(ret, PropApplied::Ignored);
        let ret = set_prop(el, "items", &PropValue::Nodes(vec!["a".into()])).unwrap();
        assert_eq!(ret, PropApplied::Ignored);
        assert!(el.attribute_names().is_empty());
        assert_eq!(el.property("onclick"), None);
    });
}

#[test]
fn set_list_of_props() {
    prepare_env(|el| {
        let new_props = props! {
            "className" => "class list",
            "data-property" => "value",
            "property" => true,
        };
        let ret = set_props(el, Some(&new_props)).unwrap();
        assert_eq!(
            ret,
            [PropApplied::Attribute, PropApplied::Attribute, PropApplied::Boolean]
        );
        assert_eq!(el.get_attribute("class").as_deref(), Some("class list"));
        assert_eq!(el.get_attribute("data-property").as_deref(), Some("value"));
        assert!(el.has_attribute("property"));
        assert_eq!(el.property("property"), Some(true));
        assert_eq!(el.attribute_names(), ["class", "data-property", "property"]);
    });
}

#[test]
fn empty_list_for_no_props() {
    prepare_env(|el| {
        assert!(set_props(el, None).unwrap().is_empty());
        assert!(el.attribute_names().is_empty());
    });
}

#[test]
fn invalid_attribute_name_fails() {
    prepare_env(|el| {
        assert!(set_prop(el, "a b", &"x".into()).is_err());
        assert!(set_props(el, Some(&props! { "id" => "a", "=" => true })).is_err());
        assert_eq!(el.get_attribute("id").as_deref(), Some("a"));
    });
}
