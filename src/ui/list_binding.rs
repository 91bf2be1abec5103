//! Generic binding between an item snapshot and a list cursor.
//!
//! Plays the data-source role for the list widget: it owns the current
//! item snapshot and the highlighted row, and reports activations as row
//! indices so the caller can dispatch a typed action. Rendering stays in
//! the view code.

use ratatui::widgets::ListState;

pub struct ListBinding<Item> {
    items: Vec<Item>,
    cursor: ListState,
}

impl<Item> Default for ListBinding<Item> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Item> ListBinding<Item> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: ListState::default(),
        }
    }

    /// Replace the snapshot, clamping the highlight to the new length.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        let selected = match self.items.len() {
            0 => None,
            len => Some(self.cursor.selected().unwrap_or(0).min(len - 1)),
        };
        self.cursor.select(selected);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn selected(&self) -> Option<usize> {
        self.cursor.selected()
    }

    /// Cursor handle for stateful list rendering.
    pub fn cursor_mut(&mut self) -> &mut ListState {
        &mut self.cursor
    }

    /// Move the highlight by `delta`, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len() as isize;
        let current = self.cursor.selected().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len);
        self.cursor.select(Some(next as usize));
    }

    /// Row to activate, if anything is highlighted.
    pub fn activate(&self) -> Option<usize> {
        self.selected().filter(|&row| row < self.items.len())
    }
}
