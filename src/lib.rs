//! lariat — a small unidirectional data-flow toolkit for terminal UIs,
//! bundled with a searchable-list demo built on it.
//!
//! ```text
//! input ──→ Action ──→ Store ──→ State ──→ observers (views)
//!                        │
//!                        └─────→ Output ──→ Flow (navigation)
//! ```
//!
//! The [`store`] module is the reusable core; [`screens`], [`flow`], and
//! [`ui`] are the sample application that exercises it.

pub mod args;
pub mod config;
pub mod flow;
pub mod logging;
pub mod screens;
pub mod store;
pub mod ui;
