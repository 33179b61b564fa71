//! Building real DOM nodes from widget markup.

use counter_widget::{Node, TestHook};
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Create a DOM subtree mirroring `node`.
///
/// # Errors
///
/// Propagates DOM exceptions (for example an invalid tag or attribute name).
pub fn build(document: &Document, node: &Node) -> Result<web_sys::Node, JsValue> {
    match node {
        Node::Text(text) => Ok(document.create_text_node(text).into()),
        Node::Element(el) => {
            let dom = document.create_element(el.tag())?;
            for (name, value) in el.attrs() {
                dom.set_attribute(name, value)?;
            }
            for child in el.children() {
                dom.append_child(&build(document, child)?)?;
            }
            Ok(dom.into())
        }
    }
}

/// Find the element carrying `hook` below (or at) `root`.
///
/// # Errors
///
/// Returns an error string when no such element exists.
pub fn find(root: &web_sys::Element, hook: TestHook) -> Result<web_sys::Element, JsValue> {
    if root.get_attribute(counter_widget::hook::TEST_ATTR).as_deref() == Some(hook.as_str()) {
        return Ok(root.clone());
    }
    root.query_selector(&hook.selector())?
        .ok_or_else(|| crate::js_error(format!("no element with data-test=\"{hook}\"")))
}
