//! Events the item list emits to its owning flow.

use crate::store::Output;

use super::items::Item;

#[derive(Debug, Clone, PartialEq)]
pub enum RandomItemsOutput {
    /// The user activated an item; the flow decides what to show for it.
    ItemSelected(Item),
}

impl Output for RandomItemsOutput {}
