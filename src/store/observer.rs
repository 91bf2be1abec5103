//! Internal observer plumbing for [`Store`](super::Store).

/// Type-erased state observer held by a store.
pub(super) trait Observer<S> {
    /// Called after every mutation that changed the state.
    fn notify(&mut self, state: &S);
}

/// Observer that watches a derived value and fires only when it changes.
pub(super) struct Projection<V, P, F> {
    pub(super) project: P,
    pub(super) last: V,
    pub(super) callback: F,
}

impl<S, V, P, F> Observer<S> for Projection<V, P, F>
where
    V: PartialEq,
    P: Fn(&S) -> V,
    F: FnMut(&V),
{
    fn notify(&mut self, state: &S) {
        let next = (self.project)(state);
        if next != self.last {
            (self.callback)(&next);
            self.last = next;
        }
    }
}
