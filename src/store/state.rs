//! Base trait for store state.

/// Marker trait for state values held by a [`Store`](super::Store).
///
/// States should be:
/// - Immutable by convention (mutated only through `Store::update`)
/// - Self-contained (all data needed to render the screen)
/// - Comparable (`PartialEq` drives change notification)
pub trait State: Clone + PartialEq + 'static {}
