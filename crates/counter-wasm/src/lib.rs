//! # counter-wasm
//!
//! The counter widget for the web, compiled to WebAssembly.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { mountCounter } from 'counter-wasm';
//!
//! async function main() {
//!     await init();
//!
//!     const counter = mountCounter("app");
//!     counter.increment();
//!     console.log(counter.displayText()); // "The counter is now 1"
//! }
//!
//! main();
//! ```
//!
//! ## Available APIs
//!
//! - `mountCounter(containerId)` - Mount a widget into a container element
//! - `mountCounterWithConfig(containerId, json)` - Mount with a JSON config
//! - `renderCounterHtml(counter, error)` - Render markup without a DOM
//! - `CounterHandle` - Drive and inspect a mounted widget
//! - `version()`, `isReady()` - Module information
//!
//! Counter values are 64-bit and cross the boundary as JavaScript `BigInt`:
//! compare with `counter.counter() === 1n`, and pass `renderCounterHtml(3n, false)`.

#![forbid(unsafe_code)]

pub mod dom;

use std::cell::RefCell;
use std::fmt::Display;
use std::rc::{Rc, Weak};

use counter_widget::{CounterMsg, CounterWidget, Model, TestHook, WidgetConfig, WidgetState};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Initialize the module.
///
/// Sets up the panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Module version information.
#[must_use]
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check if the module is properly initialized.
#[must_use]
#[wasm_bindgen(js_name = "isReady")]
#[allow(clippy::missing_const_for_fn)] // wasm_bindgen doesn't support const fn
pub fn is_ready() -> bool {
    true
}

/// Render the widget markup for a preset state.
///
/// # Errors
///
/// Fails when `error` is set with a non-zero `counter`.
pub fn render_html(counter: u64, error: bool) -> counter_widget::Result<String> {
    let state = WidgetState::new(counter, error)?;
    Ok(CounterWidget::with_state(state).view().to_html())
}

/// Render the widget markup for a preset state.
///
/// `counter` is a `BigInt` on the JavaScript side.
///
/// # Errors
///
/// Throws when `error` is set with a non-zero `counter`.
#[wasm_bindgen(js_name = "renderCounterHtml")]
pub fn render_counter_html(counter: u64, error: bool) -> Result<String, JsValue> {
    render_html(counter, error).map_err(js_error)
}

/// Mount a counter widget into the element with id `container_id`.
///
/// # Errors
///
/// Throws when the container does not exist or the DOM rejects an operation.
#[wasm_bindgen(js_name = "mountCounter")]
pub fn mount_counter(container_id: &str) -> Result<CounterHandle, JsValue> {
    mount(container_id, CounterWidget::new())
}

/// Mount a counter widget configured by a JSON document.
///
/// # Errors
///
/// Throws on malformed configuration, an invalid initial state, a missing
/// container or a DOM failure.
#[wasm_bindgen(js_name = "mountCounterWithConfig")]
pub fn mount_counter_with_config(
    container_id: &str,
    config_json: &str,
) -> Result<CounterHandle, JsValue> {
    let config = WidgetConfig::from_json_str(config_json).map_err(js_error)?;
    let widget = CounterWidget::from_config(&config).map_err(js_error)?;
    mount(container_id, widget)
}

fn mount(container_id: &str, widget: CounterWidget) -> Result<CounterHandle, JsValue> {
    let result = Mounted::attach(container_id, widget);
    if let Err(err) = &result {
        web_sys::console::error_2(&"counter-wasm: mount failed:".into(), err);
    }
    result.map(|inner| CounterHandle { inner })
}

/// Convert any displayable error into a JavaScript `Error`.
pub(crate) fn js_error(err: impl Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

struct Mounted {
    widget: RefCell<CounterWidget>,
    root: web_sys::Element,
    display: web_sys::Element,
    listeners: RefCell<Vec<(web_sys::Element, Listener)>>,
}

impl Mounted {
    fn attach(container_id: &str, widget: CounterWidget) -> Result<Rc<Self>, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| js_error("no document available"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| js_error(format!("no element with id {container_id:?}")))?;

        let root: web_sys::Element = dom::build(&document, &widget.view())?.dyn_into()?;
        let display = dom::find(&root, TestHook::CounterDisplay)?;
        container.append_child(&root)?;

        let mounted = Rc::new(Self {
            widget: RefCell::new(widget),
            root,
            display,
            listeners: RefCell::new(Vec::new()),
        });

        for hook in TestHook::ALL.into_iter().filter(|hook| hook.is_button()) {
            let Some(msg) = CounterMsg::from_hook(hook) else {
                continue;
            };
            let button = dom::find(&mounted.root, hook)?;
            let weak: Weak<Self> = Rc::downgrade(&mounted);
            let listener: Listener = Closure::new(move |_event: web_sys::Event| {
                if let Some(mounted) = weak.upgrade() {
                    mounted.dispatch(msg);
                }
            });
            button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            mounted.listeners.borrow_mut().push((button, listener));
        }

        Ok(mounted)
    }

    fn dispatch(&self, msg: CounterMsg) {
        self.widget.borrow_mut().update(msg);
        self.sync();
    }

    fn sync(&self) {
        let text = self.widget.borrow().display_text();
        self.display.set_text_content(Some(&text));
    }

    fn remove_listeners(&self) {
        for (button, listener) in self.listeners.borrow_mut().drain(..) {
            let _ = button
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
        }
    }

    fn detach(&self) {
        self.remove_listeners();
        self.root.remove();
    }
}

// Freed without `unmount()`: the markup stays, the listeners must go.
impl Drop for Mounted {
    fn drop(&mut self) {
        self.remove_listeners();
    }
}

/// Handle to a mounted counter widget.
///
/// The widget stays interactive until [`unmount`](CounterHandle::unmount) is
/// called. Freeing the handle without unmounting leaves the markup in place
/// with its buttons detached.
#[wasm_bindgen]
pub struct CounterHandle {
    inner: Rc<Mounted>,
}

#[wasm_bindgen]
impl CounterHandle {
    /// Current counter value, as a JavaScript `BigInt`.
    #[must_use]
    pub fn counter(&self) -> u64 {
        self.inner.widget.borrow().counter()
    }

    /// Whether the error message is showing.
    #[must_use]
    #[wasm_bindgen(js_name = "hasError")]
    pub fn has_error(&self) -> bool {
        self.inner.widget.borrow().error_flag()
    }

    /// Current display text.
    #[must_use]
    #[wasm_bindgen(js_name = "displayText")]
    pub fn display_text(&self) -> String {
        self.inner.widget.borrow().display_text()
    }

    /// Behave as if the increment button was clicked.
    pub fn increment(&self) {
        self.inner.dispatch(CounterMsg::Increment);
    }

    /// Behave as if the decrement button was clicked.
    pub fn decrement(&self) {
        self.inner.dispatch(CounterMsg::Decrement);
    }

    /// Render the current view as HTML.
    #[must_use]
    pub fn html(&self) -> String {
        self.inner.widget.borrow().view().to_html()
    }

    /// Remove the widget from the page and detach its listeners.
    pub fn unmount(&self) {
        self.inner.detach();
    }
}
