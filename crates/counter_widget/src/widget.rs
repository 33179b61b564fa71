//! The counter widget.
//!
//! [`CounterWidget`] owns a [`WidgetState`] and renders a display label plus
//! two buttons. Both update operations are synchronous and never fail; the
//! only user-visible error (decrementing at zero) is carried in the state and
//! shown in the display.

use tracing::{debug, trace, warn};

use crate::command::Cmd;
use crate::config::WidgetConfig;
use crate::error::Result;
use crate::hook::TestHook;
use crate::markup::{Element, Node};
use crate::message::CounterMsg;
use crate::simulator::Clickable;
use crate::state::{Phase, WidgetState};
use crate::Model;

/// Text shown in the display while the error flag is set.
pub const ERROR_TEXT: &str = "error!";

/// Default label of the increment button.
pub const DEFAULT_INCREMENT_LABEL: &str = "Increment counter";

/// Default label of the decrement button.
pub const DEFAULT_DECREMENT_LABEL: &str = "Decrement counter";

/// Button labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Label of the increment button.
    pub increment: String,
    /// Label of the decrement button.
    pub decrement: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            increment: DEFAULT_INCREMENT_LABEL.to_string(),
            decrement: DEFAULT_DECREMENT_LABEL.to_string(),
        }
    }
}

/// A numeric counter with increment/decrement buttons.
///
/// # Example
///
/// ```rust
/// use counter_widget::CounterWidget;
///
/// let mut widget = CounterWidget::new();
/// widget.decrement();
/// assert_eq!(widget.display_text(), "error!");
///
/// widget.increment();
/// assert_eq!(widget.display_text(), "The counter is now 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterWidget {
    state: WidgetState,
    labels: Labels,
}

impl CounterWidget {
    /// Mount a widget in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a widget with a preset state.
    #[must_use]
    pub fn with_state(state: WidgetState) -> Self {
        Self {
            state,
            labels: Labels::default(),
        }
    }

    /// Mount a widget from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`](crate::Error::InvalidState) when the
    /// configured initial state violates the error/counter invariant.
    pub fn from_config(config: &WidgetConfig) -> Result<Self> {
        Ok(Self {
            state: config.initial_state()?,
            labels: config.labels(),
        })
    }

    /// Replace the button labels.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> WidgetState {
        self.state
    }

    /// Current counter value.
    #[must_use]
    pub const fn counter(&self) -> u64 {
        self.state.counter()
    }

    /// Whether the error message is showing.
    #[must_use]
    pub const fn error_flag(&self) -> bool {
        self.state.error_flag()
    }

    /// Current logical phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Button labels.
    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Clear the error if it is showing, otherwise add one to the counter.
    pub fn increment(&mut self) {
        let from = self.state.phase();
        if !self.state.increment() {
            warn!(counter = self.state.counter(), "counter at maximum, increment absorbed");
            return;
        }
        self.log_transition(CounterMsg::Increment, from);
    }

    /// Subtract one from the counter, or show the error at zero.
    pub fn decrement(&mut self) {
        let from = self.state.phase();
        self.state.decrement();
        self.log_transition(CounterMsg::Decrement, from);
    }

    /// Apply a message.
    pub fn handle(&mut self, msg: CounterMsg) {
        match msg {
            CounterMsg::Increment => self.increment(),
            CounterMsg::Decrement => self.decrement(),
        }
    }

    /// Text of the display label.
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.state.error_flag() {
            ERROR_TEXT.to_string()
        } else {
            format!("The counter is now {}", self.state.counter())
        }
    }

    fn log_transition(&self, msg: CounterMsg, from: Phase) {
        debug!(
            %msg,
            %from,
            to = %self.state.phase(),
            counter = self.state.counter(),
            "counter transition"
        );
    }
}

impl Model for CounterWidget {
    type Msg = CounterMsg;

    fn init(&self) -> Option<Cmd<CounterMsg>> {
        None
    }

    fn update(&mut self, msg: CounterMsg) -> Option<Cmd<CounterMsg>> {
        self.handle(msg);
        None
    }

    fn view(&self) -> Node {
        let text = self.display_text();
        trace!(display = %text, "render");
        Element::new("div")
            .test_hook(TestHook::ComponentApp)
            .child(
                Element::new("h1")
                    .test_hook(TestHook::CounterDisplay)
                    .text(text),
            )
            .child(
                Element::new("button")
                    .test_hook(TestHook::IncrementButton)
                    .text(self.labels.increment.as_str()),
            )
            .child(
                Element::new("button")
                    .test_hook(TestHook::DecrementButton)
                    .text(self.labels.decrement.as_str()),
            )
            .into()
    }
}

impl Clickable for CounterWidget {
    fn on_click(&self, hook: TestHook) -> Option<CounterMsg> {
        CounterMsg::from_hook(hook)
    }
}
