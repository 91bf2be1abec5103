//! Read-only detail screen showing an item's name and description.
//!
//! The screen consumes no actions and emits no outputs; dismissal is the
//! owning layer's concern.

mod state;

pub use state::TextDetailState;

use crate::store::{NoAction, NoOutput, Store, StoreModule};

pub enum TextDetail {}

impl StoreModule for TextDetail {
    type State = TextDetailState;
    type Action = NoAction;
    type Output = NoOutput;

    fn initial_state() -> Self::State {
        TextDetailState::default()
    }

    fn handle_action(_store: &mut Store<Self>, action: Self::Action) {
        match action {}
    }
}
