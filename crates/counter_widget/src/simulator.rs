//! Headless simulator for exercising widgets without a browser.
//!
//! The simulator plays the role of a shallow renderer: it mounts a
//! [`Model`], records every rendered view, locates elements by their
//! `data-test` hook and dispatches clicks to them.

use std::collections::VecDeque;

use tracing::trace;

use crate::command::Cmd;
use crate::error::{Error, Result};
use crate::hook::TestHook;
use crate::markup::{Element, Node};
use crate::Model;

/// Models whose rendered buttons can be clicked through a [`TestHook`].
pub trait Clickable: Model {
    /// Message produced by a click on `hook`, or `None` if the element does
    /// not react to clicks.
    fn on_click(&self, hook: TestHook) -> Option<Self::Msg>;
}

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of times init() was called.
    pub init_calls: usize,
    /// Number of times update() was called.
    pub update_calls: usize,
    /// Number of times view() was called.
    pub view_calls: usize,
    /// Commands that were returned from init/update.
    pub commands_returned: usize,
    /// Clicks dispatched through [`WidgetSimulator::click`].
    pub clicks: usize,
}

/// A simulator for testing Model implementations without a host.
///
/// # Example
///
/// ```rust
/// use counter_widget::{CounterMsg, CounterWidget, WidgetSimulator};
///
/// let mut sim = WidgetSimulator::new(CounterWidget::new());
/// sim.send(CounterMsg::Increment);
/// sim.send(CounterMsg::Increment);
/// sim.run_until_empty();
///
/// assert_eq!(sim.model().counter(), 2);
/// ```
pub struct WidgetSimulator<M: Model> {
    model: M,
    input_queue: VecDeque<M::Msg>,
    output_views: Vec<Node>,
    stats: SimulationStats,
    initialized: bool,
}

impl<M: Model> WidgetSimulator<M> {
    /// Create a new simulator with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
            initialized: false,
        }
    }

    /// Initialize the model, calling init() and capturing any returned command.
    ///
    /// A second call is a no-op.
    pub fn init(&mut self) -> Option<Cmd<M::Msg>> {
        if self.initialized {
            return None;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        let cmd = self.model.init();
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }

        self.render();
        cmd
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: M::Msg) {
        self.input_queue.push_back(msg);
    }

    /// Process one message from the queue, calling update and view.
    ///
    /// Returns the command returned by update, if any.
    pub fn step(&mut self) -> Option<Cmd<M::Msg>> {
        if !self.initialized {
            self.init();
        }

        let msg = self.input_queue.pop_front()?;
        self.stats.update_calls += 1;
        let cmd = self.model.update(msg);
        if cmd.is_some() {
            self.stats.commands_returned += 1;
        }
        self.render();
        cmd
    }

    /// Process all pending messages, executing returned commands and queueing
    /// the messages they produce.
    ///
    /// Returns the number of messages processed.
    pub fn run_until_empty(&mut self) -> usize {
        if !self.initialized {
            if let Some(msg) = self.init().and_then(Cmd::execute) {
                self.input_queue.push_back(msg);
            }
        }

        let mut processed = 0;
        while !self.input_queue.is_empty() {
            if let Some(msg) = self.step().and_then(Cmd::execute) {
                self.input_queue.push_back(msg);
            }
            processed += 1;
        }
        processed
    }

    /// Re-render the current model and record the view.
    ///
    /// Call this after changing the model through [`model_mut`](Self::model_mut)
    /// so that [`find`](Self::find) sees the new state.
    pub fn refresh(&mut self) {
        if !self.initialized {
            self.init();
            return;
        }
        self.render();
    }

    fn render(&mut self) {
        self.stats.view_calls += 1;
        let view = self.model.view();
        trace!(view = %view, "simulator render");
        self.output_views.push(view);
    }

    /// The most recently recorded view, rendering one first if the model has
    /// not been initialized.
    pub fn current_view(&mut self) -> &Node {
        if !self.initialized {
            self.init();
        }
        // init() always records a view
        &self.output_views[self.output_views.len() - 1]
    }

    /// Find the single element carrying `hook` in the current view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HookNotFound`] when no element carries the hook.
    pub fn find(&mut self, hook: TestHook) -> Result<Element> {
        self.current_view()
            .find_by_test_attr(hook)
            .first()
            .map(|el| (*el).clone())
            .ok_or(Error::HookNotFound { hook })
    }

    /// Number of elements carrying `hook` in the current view.
    pub fn count(&mut self, hook: TestHook) -> usize {
        self.current_view().find_by_test_attr(hook).len()
    }

    /// Text of the element carrying `hook` in the current view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HookNotFound`] when no element carries the hook.
    pub fn text(&mut self, hook: TestHook) -> Result<String> {
        self.find(hook).map(|el| el.text_content())
    }

    /// Get a reference to the current model state.
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Get a mutable reference to the current model state.
    pub const fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the simulator and return the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Get the simulation statistics.
    pub const fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Get all recorded views.
    pub fn views(&self) -> &[Node] {
        &self.output_views
    }

    /// Get the most recent recorded view.
    pub fn last_view(&self) -> Option<&Node> {
        self.output_views.last()
    }

    /// Check if the model has been initialized.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get the number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.input_queue.len()
    }
}

impl<M: Clickable> WidgetSimulator<M> {
    /// Click the element carrying `hook` and process the resulting message.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HookNotFound`] when the current view has no such
    /// element, and [`Error::NotClickable`] when the element does not react
    /// to clicks.
    pub fn click(&mut self, hook: TestHook) -> Result<()> {
        if self.count(hook) == 0 {
            return Err(Error::HookNotFound { hook });
        }
        let msg = self
            .model
            .on_click(hook)
            .ok_or(Error::NotClickable { hook })?;

        self.stats.clicks += 1;
        self.send(msg);
        self.run_until_empty();
        Ok(())
    }
}
