//! treeview - an editable, collapsible tree view for the terminal
//!
//! This crate provides:
//! - A linked-list tree stored in an arena, with cycle-safe reparenting
//! - Plain-text renderings and automatic node naming
//! - An interactive TUI with selection, collapsing and drag-and-drop moves

pub mod cli;
pub mod commands;
pub mod config;
pub mod demo;
pub mod error;
pub mod i18n;
pub mod tree;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError, TreeViewError};
pub use tree::{Forest, NodeId};
