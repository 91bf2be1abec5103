//! Placeholder types for screens without inputs or outputs.

use super::action::Action;
use super::output::Output;

/// Action type for stores that accept no input. Uninhabited, so a
/// `dispatch` call site cannot even be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAction {}

impl Action for NoAction {}

/// Output type for stores that emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOutput {}

impl Output for NoOutput {}
