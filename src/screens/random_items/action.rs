//! Inputs for the searchable item list.

use crate::store::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomItemsAction {
    /// Row activated in the currently visible list.
    SelectRow(usize),
    /// Search field changed. `None` or an empty string clears the filter.
    UpdateQuery(Option<String>),
}

impl Action for RandomItemsAction {}
