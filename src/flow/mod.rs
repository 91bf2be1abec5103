//! Coordinating layer: turns screen outputs into navigation.

use crate::screens::random_items::RandomItemsOutput;
use crate::screens::text_detail::TextDetailState;

/// Navigation steps the demo knows about.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Push the detail screen with the given content.
    PushDetail(TextDetailState),
}

/// A flow owns one or more screens and reacts to their outputs.
pub trait Flow {
    /// The output type of the screen this flow coordinates.
    type Output;

    /// Translate one screen output into a navigation step, if any.
    fn handle_output(&mut self, output: Self::Output) -> Option<Route>;
}

/// Flow for the searchable item list: selecting an item shows its details.
#[derive(Debug, Default)]
pub struct ItemsFlow;

impl Flow for ItemsFlow {
    type Output = RandomItemsOutput;

    fn handle_output(&mut self, output: Self::Output) -> Option<Route> {
        match output {
            RandomItemsOutput::ItemSelected(item) => Some(Route::PushDetail(TextDetailState {
                title: item.name,
                body: item.description,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::random_items::items::Item;

    #[test]
    fn selection_pushes_detail_with_item_text() {
        let mut flow = ItemsFlow;
        let route = flow.handle_output(RandomItemsOutput::ItemSelected(Item {
            name: "Saffron".into(),
            description: "Lorem ipsum.".into(),
        }));
        assert_eq!(
            route,
            Some(Route::PushDetail(TextDetailState {
                title: "Saffron".into(),
                body: "Lorem ipsum.".into(),
            }))
        );
    }
}
