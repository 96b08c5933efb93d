//! Hierarchical configuration lookup over the command tree.
//!
//! A node without its own value for a key defers to its parent, and so on up
//! to the root. Blank values count as unset.

use super::tree::{CommandTree, NodeId};
use super::CommandError;

impl CommandTree {
    /// First non-empty value for `key` from `node` up to the root.
    pub fn resolve_optional(&self, node: NodeId, key: &str) -> Option<&str> {
        self.ancestors(node)
            .filter_map(|id| self.node(id).local_value(key))
            .find(|value| !value.trim().is_empty())
    }

    /// Like [`CommandTree::resolve_optional`], but absence is a configuration error.
    pub fn resolve(&self, node: NodeId, key: &str) -> Result<&str, CommandError> {
        self.resolve_optional(node, key)
            .ok_or_else(|| CommandError::MissingConfig(key.to_string()))
    }
}
