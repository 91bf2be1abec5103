//! Base trait for store actions.

/// Marker trait for input events dispatched to a store.
///
/// An action type is a closed set (an enum) consumed by exactly one
/// [`StoreModule`](super::StoreModule).
pub trait Action: 'static {}
