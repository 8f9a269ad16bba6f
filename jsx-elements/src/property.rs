//! Apply virtual node props to backend elements.

use crate::{
    backend::BackendElement,
    error::Error,
    node::{PropValue, Props},
};

/// How a single prop was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropApplied {
    /// Set as a boolean attribute and object property.
    Boolean,
    /// Set as a string attribute.
    Attribute,
    /// Not applied at all.
    Ignored,
}

/// Tests if a property name refers to a custom property.
///
/// There are no custom properties yet, so this is always `false`.
pub fn is_custom_prop(_name: &str) -> bool {
    false
}

/// Sets a boolean property.
///
/// A `true` value sets the attribute to its own name and the object property to `true`.
/// A `false` value only sets the object property, so a previously set attribute stays.
pub fn set_boolean_prop<E: BackendElement>(el: &E, name: &str, value: bool) -> Result<(), Error> {
    if value {
        el.set_attribute(name, name)?;
        el.set_property(name, true)
    } else {
        el.set_property(name, false)
    }
}

/// Sets a single property.
pub fn set_prop<E: BackendElement>(
    el: &E,
    name: &str,
    value: &PropValue,
) -> Result<PropApplied, Error> {
    if is_custom_prop(name) {
        return Ok(PropApplied::Ignored);
    }
    match value {
        PropValue::Bool(x) => {
            set_boolean_prop(el, name, *x)?;
            Ok(PropApplied::Boolean)
        }
        PropValue::Str(x) => {
            let name = if name == "className" { "class" } else { name };
            el.set_attribute(name, x)?;
            Ok(PropApplied::Attribute)
        }
        PropValue::Nodes(_) | PropValue::Callback(_) => {
            log::debug!("Property {:?} is not an attribute value, ignored", name);
            Ok(PropApplied::Ignored)
        }
    }
}

/// Sets all properties in iteration order.
pub fn set_props<E: BackendElement>(
    el: &E,
    props: Option<&Props>,
) -> Result<Vec<PropApplied>, Error> {
    let props = match props {
        None => return Ok(vec![]),
        Some(x) => x,
    };
    props
        .iter()
        .map(|(name, value)| set_prop(el, name, value))
        .collect()
}
