//! Serialize live backend elements into static markup.

use std::borrow::Cow;

use crate::backend::{BackendElement, BackendNode, BackendParent, NodeKind};

/// The order in which child nodes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChildOrder {
    /// The document order.
    #[default]
    Document,
    /// Last child first.
    Reversed,
}

/// Options for the static renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderOptions {
    pub child_order: ChildOrder,
    /// Escape text content and attribute values.
    ///
    /// Both are written verbatim when disabled.
    pub escape: bool,
}

/// Renders an element (including its shadow content) into HTML.
///
/// Renders `None` as an empty string.
pub fn render_to_static_markup<E: BackendElement>(root: Option<&E>) -> String {
    render_to_static_markup_with(root, &RenderOptions::default())
}

/// Renders an element into HTML with the specified options.
pub fn render_to_static_markup_with<E: BackendElement>(
    root: Option<&E>,
    options: &RenderOptions,
) -> String {
    let mut ret = String::new();
    if let Some(root) = root {
        log::trace!("render static markup of <{}>", root.tag_name());
        write_element(root, &mut ret, options);
    }
    ret
}

/// Write the rendered HTML of an element to a `Write` .
pub fn write_static_markup<E: BackendElement>(
    root: Option<&E>,
    w: &mut impl std::io::Write,
    options: &RenderOptions,
) -> std::io::Result<()> {
    w.write_all(render_to_static_markup_with(root, options).as_bytes())
}

fn write_element<E: BackendElement>(root: &E, ret: &mut String, options: &RenderOptions) {
    let tag_name = root.tag_name().to_lowercase();
    ret.push('<');
    ret.push_str(&tag_name);
    for name in root.attribute_names() {
        let value = root.get_attribute(&name).unwrap_or_default();
        ret.push(' ');
        ret.push_str(&name);
        ret.push_str("=\"");
        ret.push_str(&escape_attribute(&value, options));
        ret.push('"');
    }
    ret.push('>');
    if let Some(shadow_root) = root.shadow_root() {
        if shadow_root.has_child_nodes() {
            write_children(shadow_root.child_nodes(), ret, options);
        }
    }
    if root.has_child_nodes() {
        write_children(root.child_nodes(), ret, options);
    }
    ret.push_str("</");
    ret.push_str(&tag_name);
    ret.push('>');
}

fn write_children<N: BackendNode>(mut children: Vec<N>, ret: &mut String, options: &RenderOptions) {
    if options.child_order == ChildOrder::Reversed {
        children.reverse();
    }
    for child in children {
        match child.kind() {
            NodeKind::Text => {
                let text = child.text_content().unwrap_or_default();
                ret.push_str(&escape_text(&text, options));
            }
            NodeKind::Element => {
                if let Some(el) = child.as_element() {
                    write_element(&el, ret, options);
                }
            }
            NodeKind::Other => {}
        }
    }
}

fn escape_text<'a>(s: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape {
        html_escape::encode_text(s)
    } else {
        Cow::Borrowed(s)
    }
}

fn escape_attribute<'a>(s: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape {
        html_escape::encode_double_quoted_attribute(s)
    } else {
        Cow::Borrowed(s)
    }
}
