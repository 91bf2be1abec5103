//! Sample screens built on the store toolkit.

pub mod random_items;
pub mod text_detail;
