//! Base trait for store outputs.

/// Marker trait for events a store emits to its owning flow.
///
/// Outputs are delivered at most once per emission, with no replay; an
/// emission with no subscriber registered is dropped. `Clone` lets one
/// emission reach multiple subscribers.
pub trait Output: Clone + 'static {}
