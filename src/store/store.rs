//! The state container.

use tracing::trace;

use super::module::StoreModule;
use super::observer::{Observer, Projection};

/// Unidirectional state container for one screen.
///
/// One store is created per screen with an initial state and dropped when
/// the screen goes away. All entry points are synchronous and run on the
/// thread that owns the store.
pub struct Store<M: StoreModule> {
    state: M::State,
    observers: Vec<Box<dyn Observer<M::State>>>,
    output_subscribers: Vec<Box<dyn FnMut(M::Output)>>,
}

impl<M: StoreModule> Store<M> {
    /// Store starting from the module's initial state.
    pub fn create() -> Self {
        Self::with_state(M::initial_state())
    }

    /// Store starting from an explicit state.
    pub fn with_state(state: M::State) -> Self {
        Self {
            state,
            observers: Vec::new(),
            output_subscribers: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &M::State {
        &self.state
    }

    /// Synchronous action entry point.
    pub fn dispatch(&mut self, action: M::Action) {
        trace!(module = std::any::type_name::<M>(), "dispatch");
        M::handle_action(self, action);
    }

    /// Apply `mutate` to the current state, then notify every observer
    /// whose derived value changed. A mutation that leaves the whole state
    /// equal notifies no one.
    pub fn update(&mut self, mutate: impl FnOnce(&mut M::State)) {
        let previous = self.state.clone();
        mutate(&mut self.state);
        if self.state == previous {
            return;
        }
        for observer in &mut self.observers {
            observer.notify(&self.state);
        }
    }

    /// Observe a derived value.
    ///
    /// `callback` fires once immediately with the current value, then again
    /// after every mutation that changes the projected value by equality.
    /// All observers fire after the mutation completes.
    pub fn observe<V, P, F>(&mut self, project: P, mut callback: F)
    where
        V: PartialEq + Clone + 'static,
        P: Fn(&M::State) -> V + 'static,
        F: FnMut(&V) + 'static,
    {
        let current = project(&self.state);
        callback(&current);
        self.observers.push(Box::new(Projection {
            project,
            last: current,
            callback,
        }));
    }

    /// Whole-state convenience observer.
    pub fn observe_state<F>(&mut self, callback: F)
    where
        F: FnMut(&M::State) + 'static,
    {
        self.observe(|state| state.clone(), callback);
    }

    /// Subscribe to outputs emitted after this call.
    pub fn observe_output<F>(&mut self, callback: F)
    where
        F: FnMut(M::Output) + 'static,
    {
        self.output_subscribers.push(Box::new(callback));
    }

    /// Emit an output to all current subscribers.
    ///
    /// Fire-and-forget: no queueing, no replay. With no subscriber the
    /// event is dropped.
    pub fn dispatch_output(&mut self, output: M::Output) {
        if self.output_subscribers.is_empty() {
            trace!(
                module = std::any::type_name::<M>(),
                "output dropped: no subscribers"
            );
            return;
        }
        for subscriber in &mut self.output_subscribers {
            subscriber(output.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Action, Output, State, StoreModule};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct CounterState {
        count: i32,
        label: String,
    }

    impl State for CounterState {}

    #[derive(Debug, Clone)]
    enum CounterAction {
        Add(i32),
        SetLabel(String),
    }

    impl Action for CounterAction {}

    #[derive(Debug, Clone, PartialEq)]
    enum CounterOutput {
        ReachedTen,
    }

    impl Output for CounterOutput {}

    enum Counter {}

    impl StoreModule for Counter {
        type State = CounterState;
        type Action = CounterAction;
        type Output = CounterOutput;

        fn initial_state() -> Self::State {
            CounterState::default()
        }

        fn handle_action(store: &mut Store<Self>, action: Self::Action) {
            match action {
                CounterAction::Add(amount) => {
                    store.update(|state| state.count += amount);
                    if store.state().count >= 10 {
                        store.dispatch_output(CounterOutput::ReachedTen);
                    }
                }
                CounterAction::SetLabel(label) => {
                    store.update(|state| state.label = label);
                }
            }
        }
    }

    #[test]
    fn observer_fires_immediately_with_current_value() {
        let mut store = Store::<Counter>::with_state(CounterState {
            count: 7,
            label: String::new(),
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.observe(|state| state.count, move |count| sink.borrow_mut().push(*count));
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn observer_fires_on_projected_change_only() {
        let mut store = Store::<Counter>::create();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.observe(|state| state.count, move |count| sink.borrow_mut().push(*count));

        store.dispatch(CounterAction::SetLabel("renamed".into()));
        assert_eq!(*seen.borrow(), vec![0], "unrelated field must not fire");

        store.dispatch(CounterAction::Add(3));
        assert_eq!(*seen.borrow(), vec![0, 3]);
    }

    #[test]
    fn noop_mutation_notifies_no_one() {
        let mut store = Store::<Counter>::create();
        store.dispatch(CounterAction::SetLabel("same".into()));

        let fired = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&fired);
        store.observe_state(move |_| *sink.borrow_mut() += 1);
        assert_eq!(*fired.borrow(), 1, "immediate fire on subscribe");

        store.dispatch(CounterAction::SetLabel("same".into()));
        assert_eq!(*fired.borrow(), 1, "equal state must not fire");
    }

    #[test]
    fn output_without_subscriber_is_dropped() {
        let mut store = Store::<Counter>::create();
        store.dispatch(CounterAction::Add(10));
        assert_eq!(store.state().count, 10);
    }

    #[test]
    fn output_reaches_every_subscriber_once() {
        let mut store = Store::<Counter>::create();
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&first);
        store.observe_output(move |output| sink.borrow_mut().push(output));
        let sink = Rc::clone(&second);
        store.observe_output(move |output| sink.borrow_mut().push(output));

        store.dispatch(CounterAction::Add(10));
        assert_eq!(*first.borrow(), vec![CounterOutput::ReachedTen]);
        assert_eq!(*second.borrow(), vec![CounterOutput::ReachedTen]);
    }
}
