//! Searchable list of randomly generated items.
//!
//! Typing updates a case-insensitive substring filter over item names.
//! Activating a row emits [`RandomItemsOutput::ItemSelected`] so the owning
//! flow can push a detail screen.

pub mod items;

mod action;
mod output;
mod state;

pub use action::RandomItemsAction;
pub use output::RandomItemsOutput;
pub use state::RandomItemsState;

use tracing::warn;

use crate::store::{Store, StoreModule};

use items::generate_items;

/// Items generated when no explicit count is configured.
pub const DEFAULT_ITEM_COUNT: usize = 30;

/// Module tying the item-list state, actions, and outputs together.
pub enum RandomItems {}

impl StoreModule for RandomItems {
    type State = RandomItemsState;
    type Action = RandomItemsAction;
    type Output = RandomItemsOutput;

    fn initial_state() -> Self::State {
        RandomItemsState::with_items(generate_items(DEFAULT_ITEM_COUNT, None))
    }

    fn handle_action(store: &mut Store<Self>, action: Self::Action) {
        match action {
            RandomItemsAction::SelectRow(row) => {
                let Some(item) = store.state().visible_items().get(row).cloned() else {
                    warn!(
                        row,
                        visible = store.state().visible_items().len(),
                        "select row out of bounds"
                    );
                    return;
                };
                store.dispatch_output(RandomItemsOutput::ItemSelected(item));
            }
            RandomItemsAction::UpdateQuery(query) => match query.filter(|q| !q.is_empty()) {
                Some(query) => store.update(|state| {
                    let needle = query.to_lowercase();
                    state.found_items = Some(
                        state
                            .items
                            .iter()
                            .filter(|item| item.name.to_lowercase().contains(&needle))
                            .cloned()
                            .collect(),
                    );
                    state.query = Some(query);
                }),
                None => store.update(|state| {
                    state.query = None;
                    state.found_items = None;
                }),
            },
        }
    }
}
