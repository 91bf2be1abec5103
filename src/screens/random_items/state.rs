//! State for the searchable item list.

use crate::store::State;

use super::items::Item;

/// State for the searchable item list.
///
/// `items` is the full set, fixed for the lifetime of the screen; `query`
/// and `found_items` track the active filter together and are both `None`
/// when no filter applies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RandomItemsState {
    pub items: Vec<Item>,
    pub query: Option<String>,
    pub found_items: Option<Vec<Item>>,
}

impl State for RandomItemsState {}

impl RandomItemsState {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            query: None,
            found_items: None,
        }
    }

    /// Items the list currently shows: the filtered subset while a search
    /// is active, the full set otherwise.
    pub fn visible_items(&self) -> &[Item] {
        self.found_items.as_deref().unwrap_or(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Item {
        Item {
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn visible_items_defaults_to_full_set() {
        let state = RandomItemsState::with_items(vec![item("Alder"), item("Birch")]);
        assert_eq!(state.visible_items().len(), 2);
    }

    #[test]
    fn visible_items_prefers_filtered_subset() {
        let mut state = RandomItemsState::with_items(vec![item("Alder"), item("Birch")]);
        state.found_items = Some(vec![item("Birch")]);
        assert_eq!(state.visible_items(), &[item("Birch")]);
    }
}
