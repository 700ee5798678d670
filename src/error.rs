use std::path::PathBuf;
use thiserror::Error;

use crate::tree::NodeId;

/// Core library errors
#[derive(Error, Debug)]
pub enum TreeViewError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Structural errors raised by tree mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("{0:?} does not belong to this forest")]
    UnknownNode(NodeId),

    #[error("{0:?} cannot be added to itself")]
    SelfAttachment(NodeId),

    #[error("cannot attach {node:?} under its own descendant {parent:?}")]
    AncestorAttachment { parent: NodeId, node: NodeId },

    #[error("inconsistent tree: {0}")]
    Inconsistent(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConfigError::Invalid("indent_width must be 1-8".into());
        assert!(err.to_string().contains("indent_width"));

        let err = TreeError::SelfAttachment(NodeId::new(2));
        assert_eq!(err.to_string(), "NodeId(2) cannot be added to itself");
    }

    #[test]
    fn error_conversion() {
        let config_err = ConfigError::Invalid("test".into());
        let err: TreeViewError = config_err.into();
        assert!(matches!(err, TreeViewError::Config(_)));

        let err: TreeViewError = TreeError::UnknownNode(NodeId::new(0)).into();
        assert!(matches!(err, TreeViewError::Tree(_)));
    }
}
