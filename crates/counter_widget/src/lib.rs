#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::module_name_repetitions)]

//! # Counter Widget
//!
//! A numeric counter with increment/decrement buttons and an inline error
//! message, built on The Elm Architecture.
//!
//! The widget is a plain state struct with two update operations and a pure
//! view function. Hosts (a browser binding, a command-line front end, or the
//! headless [`WidgetSimulator`]) deliver [`CounterMsg`] values to
//! [`Model::update`] and render whatever [`Model::view`] returns.
//!
//! ## Example
//!
//! ```rust
//! use counter_widget::{CounterWidget, TestHook, WidgetSimulator};
//!
//! let mut sim = WidgetSimulator::new(CounterWidget::new());
//! sim.click(TestHook::IncrementButton).unwrap();
//! sim.click(TestHook::IncrementButton).unwrap();
//! sim.click(TestHook::DecrementButton).unwrap();
//!
//! let display = sim.find(TestHook::CounterDisplay).unwrap();
//! assert_eq!(display.text_content(), "The counter is now 1");
//! ```
//!
//! ## Rendered markup
//!
//! Every addressable element carries a `data-test` attribute (see
//! [`TestHook`]). These values are the contract an external harness binds to.

pub mod command;
pub mod config;
pub mod error;
pub mod hook;
pub mod markup;
pub mod message;
pub mod simulator;
pub mod state;
pub mod widget;

pub use command::Cmd;
pub use config::WidgetConfig;
pub use error::{Error, Result};
pub use hook::{ParseHookError, TestHook};
pub use markup::{Element, Node};
pub use message::CounterMsg;
pub use simulator::{Clickable, SimulationStats, WidgetSimulator};
pub use state::{Phase, WidgetState};
pub use widget::{CounterWidget, Labels};

/// The Model trait for widget state.
///
/// Implement this trait to drive a component from a host event loop or from
/// the [`WidgetSimulator`].
///
/// # Example
///
/// ```rust
/// use counter_widget::{Cmd, Element, Model, Node};
///
/// struct Toggle {
///     on: bool,
/// }
///
/// impl Model for Toggle {
///     type Msg = ();
///
///     fn init(&self) -> Option<Cmd<()>> {
///         None
///     }
///
///     fn update(&mut self, _msg: ()) -> Option<Cmd<()>> {
///         self.on = !self.on;
///         None
///     }
///
///     fn view(&self) -> Node {
///         Element::new("span").text(if self.on { "on" } else { "off" }).into()
///     }
/// }
/// ```
pub trait Model {
    /// Message type accepted by [`update`](Model::update).
    type Msg: 'static;

    /// Initialize the model and return an optional startup command.
    ///
    /// This is called once when the component is mounted.
    fn init(&self) -> Option<Cmd<Self::Msg>>;

    /// Process a message and return a new command.
    ///
    /// This is the pure update function at the heart of the Elm Architecture.
    fn update(&mut self, msg: Self::Msg) -> Option<Cmd<Self::Msg>>;

    /// Render the model as a markup tree.
    fn view(&self) -> Node;
}
