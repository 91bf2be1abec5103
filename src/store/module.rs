//! StoreModule trait: a screen's types plus its action handler.

use super::action::Action;
use super::output::Output;
use super::state::State;
use super::store::Store;

/// Groups one screen's state, action, and output types with the handler
/// that ties them together.
///
/// The handler is the only place actions are interpreted: it mutates state
/// through [`Store::update`] and/or emits events through
/// [`Store::dispatch_output`]. It runs synchronously on the thread that
/// owns the store and must not block or perform I/O.
pub trait StoreModule: Sized + 'static {
    /// The state type this module operates on.
    type State: State;

    /// The input events this module consumes.
    type Action: Action;

    /// The events this module emits to its owner.
    type Output: Output;

    /// State a freshly created store starts from.
    fn initial_state() -> Self::State;

    /// Process one action.
    fn handle_action(store: &mut Store<Self>, action: Self::Action);
}
