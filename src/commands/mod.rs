pub mod completions;
pub mod show;
pub mod tui;
