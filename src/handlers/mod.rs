//! Event Handlers
//!
//! - bindings: Declarative (event, region) → handler table, built once at startup
//! - keyboard: Translates terminal input (keys, bracketed paste) into region events

pub mod bindings;
pub mod keyboard;

pub use bindings::{BindingTable, EventKind, Propagation, UiEvent};
pub use keyboard::handle_terminal_event;
