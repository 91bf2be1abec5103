//! Unidirectional data-flow primitives.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Store ──→ State ──→ observers (views)
//!              │
//!              └──────→ Output ──→ flow (navigation)
//! ```
//!
//! - **State**: immutable-by-convention value describing one screen
//! - **Action**: typed input event consumed by exactly one store
//! - **Output**: typed event the store emits upward, fire-and-forget
//! - **StoreModule**: a screen's types plus its action handler
//!
//! Everything runs synchronously on the thread that owns the store.

mod action;
mod module;
mod observer;
mod output;
mod state;
#[allow(clippy::module_inception)]
mod store;
mod void;

pub use action::Action;
pub use module::StoreModule;
pub use output::Output;
pub use state::State;
pub use store::Store;
pub use void::{NoAction, NoOutput};
