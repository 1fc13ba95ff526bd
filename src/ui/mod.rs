// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Stacks the visible panels, keeping the scroll anchor in view
// - render: Main orchestration function that coordinates all rendering
// - panels: Upload, question and Zotero panels
// - alert: Error/success alert lines
// - legend: Hotkey legend for the focused region

pub mod alert;
pub mod layout;
pub mod legend;
pub mod panels;
pub mod render;

// Re-export main render function for convenience
pub use render::render;
