//! Demo application: wires the item-list store, its flow, and the views.

use std::sync::mpsc::{self, Receiver};

use tracing::debug;

use crate::config::DemoConfig;
use crate::flow::{Flow, ItemsFlow, Route};
use crate::screens::random_items::items::{generate_items, Item};
use crate::screens::random_items::{
    RandomItems, RandomItemsAction, RandomItemsOutput, RandomItemsState,
};
use crate::screens::text_detail::TextDetailState;
use crate::store::Store;
use crate::ui::list_binding::ListBinding;

pub struct App {
    store: Store<RandomItems>,
    /// Fed by the visible-items observer; drained after each dispatch.
    items_rx: Receiver<Vec<Item>>,
    /// Fed by the output subscriber; drained after each dispatch.
    outputs_rx: Receiver<RandomItemsOutput>,
    flow: ItemsFlow,
    list: ListBinding<Item>,
    detail: Option<TextDetailState>,
    query: String,
    should_quit: bool,
}

impl App {
    pub fn new(config: &DemoConfig) -> Self {
        let items = generate_items(config.items, config.seed);
        let mut store = Store::<RandomItems>::with_state(RandomItemsState::with_items(items));

        // Store callbacks cannot borrow the app, so both channels ferry the
        // notifications back to the loop that owns it.
        let (items_tx, items_rx) = mpsc::channel();
        store.observe(
            |state| state.visible_items().to_vec(),
            move |items| {
                let _ = items_tx.send(items.clone());
            },
        );

        let (outputs_tx, outputs_rx) = mpsc::channel();
        store.observe_output(move |output| {
            let _ = outputs_tx.send(output);
        });

        let mut app = Self {
            store,
            items_rx,
            outputs_rx,
            flow: ItemsFlow,
            list: ListBinding::new(),
            detail: None,
            query: String::new(),
            should_quit: false,
        };
        // The observer fired immediately on subscribe; pick up the initial
        // snapshot before the first draw.
        app.sync();
        app
    }

    fn dispatch(&mut self, action: RandomItemsAction) {
        self.store.dispatch(action);
        self.sync();
    }

    fn sync(&mut self) {
        while let Ok(items) = self.items_rx.try_recv() {
            self.list.set_items(items);
        }
        while let Ok(output) = self.outputs_rx.try_recv() {
            if let Some(route) = self.flow.handle_output(output) {
                self.navigate(route);
            }
        }
    }

    fn navigate(&mut self, route: Route) {
        match route {
            Route::PushDetail(state) => {
                debug!(title = %state.title, "pushing detail screen");
                self.detail = Some(state);
            }
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.query.push(ch);
        let query = self.query.clone();
        self.dispatch(RandomItemsAction::UpdateQuery(Some(query)));
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        let query = (!self.query.is_empty()).then(|| self.query.clone());
        self.dispatch(RandomItemsAction::UpdateQuery(query));
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.dispatch(RandomItemsAction::UpdateQuery(None));
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.list.move_cursor(delta);
    }

    /// Dispatch selection of the highlighted row, if any.
    pub fn activate(&mut self) {
        if let Some(row) = self.list.activate() {
            self.dispatch(RandomItemsAction::SelectRow(row));
        }
    }

    pub fn list(&self) -> &ListBinding<Item> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListBinding<Item> {
        &mut self.list
    }

    pub fn detail(&self) -> Option<&TextDetailState> {
        self.detail.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Esc semantics on the list screen: clear an active search first,
    /// quit when there is nothing to clear.
    pub fn back(&mut self) {
        if !self.query.is_empty() {
            self.clear_query();
        } else {
            self.should_quit = true;
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}
