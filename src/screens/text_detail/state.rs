//! State for the read-only detail screen.

use crate::store::State;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextDetailState {
    pub title: String,
    pub body: String,
}

impl State for TextDetailState {}
