//! Linked-list tree stored in an arena.
//!
//! Every node keeps a back reference to its parent, links to its previous and
//! next siblings, and links to its first and last child. A node also caches
//! the topmost ancestor of the tree it currently belongs to.

mod forest;
mod node;
pub mod naming;
pub mod render;
mod traverse;

pub use forest::Forest;
pub use node::{Node, NodeId};
pub use traverse::{Children, Preorder};

pub use crate::error::TreeError;
