//! Search and selection semantics of the random-items screen.

use std::cell::RefCell;
use std::rc::Rc;

use lariat::screens::random_items::items::Item;
use lariat::screens::random_items::{
    RandomItems, RandomItemsAction, RandomItemsOutput, RandomItemsState,
};
use lariat::store::Store;

fn item(name: &str) -> Item {
    Item {
        name: name.to_string(),
        description: format!("About {name}."),
    }
}

fn store_with(names: &[&str]) -> Store<RandomItems> {
    let items = names.iter().map(|name| item(name)).collect();
    Store::<RandomItems>::with_state(RandomItemsState::with_items(items))
}

fn observed_outputs(store: &mut Store<RandomItems>) -> Rc<RefCell<Vec<RandomItemsOutput>>> {
    let outputs = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&outputs);
    store.observe_output(move |output| sink.borrow_mut().push(output));
    outputs
}

#[test]
fn query_filters_by_case_insensitive_substring() {
    let mut store = store_with(&["Apple", "Banana", "Pineapple", "Cherry"]);
    store.dispatch(RandomItemsAction::UpdateQuery(Some("aPpLe".into())));

    let visible = store.state().visible_items();
    assert_eq!(visible, &[item("Apple"), item("Pineapple")]);
    assert_eq!(store.state().query.as_deref(), Some("aPpLe"));
}

#[test]
fn query_matching_nothing_yields_empty_visible_set() {
    let mut store = store_with(&["Apple", "Banana"]);
    store.dispatch(RandomItemsAction::UpdateQuery(Some("zebra".into())));
    assert!(store.state().visible_items().is_empty());
}

#[test]
fn absent_query_resets_to_full_set() {
    let mut store = store_with(&["Apple", "Banana", "Cherry"]);
    store.dispatch(RandomItemsAction::UpdateQuery(Some("an".into())));
    assert_eq!(store.state().visible_items().len(), 1);

    store.dispatch(RandomItemsAction::UpdateQuery(None));
    assert_eq!(store.state().visible_items().len(), 3);
    assert!(store.state().query.is_none());
}

#[test]
fn empty_query_string_behaves_like_absent() {
    let mut store = store_with(&["Apple", "Banana"]);
    store.dispatch(RandomItemsAction::UpdateQuery(Some("an".into())));
    store.dispatch(RandomItemsAction::UpdateQuery(Some(String::new())));
    assert_eq!(store.state().visible_items().len(), 2);
}

#[test]
fn selecting_a_visible_row_emits_exactly_one_output() {
    let mut store = store_with(&["Apple", "Banana", "Cherry"]);
    let outputs = observed_outputs(&mut store);

    store.dispatch(RandomItemsAction::SelectRow(1));
    assert_eq!(
        *outputs.borrow(),
        vec![RandomItemsOutput::ItemSelected(item("Banana"))]
    );
}

#[test]
fn selection_indexes_the_filtered_set() {
    let mut store = store_with(&["Apple", "Banana", "Pineapple"]);
    let outputs = observed_outputs(&mut store);

    store.dispatch(RandomItemsAction::UpdateQuery(Some("apple".into())));
    store.dispatch(RandomItemsAction::SelectRow(1));
    assert_eq!(
        *outputs.borrow(),
        vec![RandomItemsOutput::ItemSelected(item("Pineapple"))]
    );
}

#[test]
fn out_of_bounds_selection_emits_nothing() {
    let mut store = store_with(&["Apple"]);
    let outputs = observed_outputs(&mut store);

    store.dispatch(RandomItemsAction::SelectRow(5));
    assert!(outputs.borrow().is_empty());
}

#[test]
fn selection_does_not_mutate_state() {
    let mut store = store_with(&["Apple", "Banana"]);
    let before = store.state().clone();
    store.dispatch(RandomItemsAction::SelectRow(0));
    assert_eq!(store.state(), &before);
}
