//! The command tree: an arena of nodes linked parent → children by ownership
//! and child → parent by index.

use super::{CommandError, CommandResult, Context};
use crate::core::config::Config;
use std::collections::BTreeMap;
use tracing::warn;

pub type Handler = fn(&mut Context<'_>, NodeId, &[String]) -> CommandResult;

/// Index of a node inside the [`CommandTree`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Static description of a command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// Literal first arguments the handler understands (shown in help only).
    pub params: &'static [&'static str],
    pub usage: &'static str,
    pub summary: &'static str,
    pub min_args: usize,
    pub handler: Option<Handler>,
}

impl CommandSpec {
    /// A spec with every optional field empty, for use with struct update syntax.
    pub const EMPTY: CommandSpec = CommandSpec {
        name: "",
        aliases: &[],
        params: &[],
        usage: "",
        summary: "",
        min_args: 0,
        handler: None,
    };

    pub fn answers_to(&self, token: &str) -> bool {
        self.name == token || self.aliases.contains(&token)
    }

    fn names(&self) -> impl Iterator<Item = &'static str> {
        let aliases: &'static [&'static str] = self.aliases;
        std::iter::once(self.name).chain(aliases.iter().copied())
    }
}

pub struct CommandNode {
    pub spec: CommandSpec,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    config: BTreeMap<String, String>,
}

impl CommandNode {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The value stored directly on this node, ignoring ancestors.
    pub fn local_value(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }
}

pub struct CommandTree {
    nodes: Vec<CommandNode>,
    shortcuts: BTreeMap<String, Vec<String>>,
}

impl CommandTree {
    pub fn new(root: CommandSpec) -> Self {
        Self {
            nodes: vec![CommandNode {
                spec: root,
                parent: None,
                children: Vec::new(),
                config: BTreeMap::new(),
            }],
            shortcuts: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &CommandNode {
        &self.nodes[id.0]
    }

    /// Attach `spec` as the last child of `parent`.
    ///
    /// Fails when the new name or any alias collides with a sibling's name or alias.
    pub fn add_child(&mut self, parent: NodeId, spec: CommandSpec) -> Result<NodeId, CommandError> {
        for &sibling in self.node(parent).children() {
            let existing = &self.node(sibling).spec;
            if let Some(clash) = spec.names().find(|name| existing.answers_to(name)) {
                return Err(CommandError::Conflict {
                    parent: self.path(parent),
                    name: clash.to_string(),
                });
            }
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(CommandNode {
            spec,
            parent: Some(parent),
            children: Vec::new(),
            config: BTreeMap::new(),
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    pub fn set_value(&mut self, id: NodeId, key: impl Into<String>, value: impl Into<String>) {
        self.nodes[id.0].config.insert(key.into(), value.into());
    }

    pub fn add_shortcut(&mut self, name: impl Into<String>, expansion: Vec<String>) {
        self.shortcuts.insert(name.into(), expansion);
    }

    pub fn shortcut(&self, name: &str) -> Option<&[String]> {
        self.shortcuts.get(name).map(Vec::as_slice)
    }

    pub fn shortcuts(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.shortcuts
            .iter()
            .map(|(name, expansion)| (name.as_str(), expansion.as_slice()))
    }

    /// Walk from `id` up to the root, starting with `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }

    /// Space-separated names from the root down to `id`, e.g. `twitch bot commands`.
    pub fn path(&self, id: NodeId) -> String {
        let mut names: Vec<&str> = self.ancestors(id).map(|n| self.node(n).name()).collect();
        names.reverse();
        names.join(" ")
    }

    /// The child of `id` whose name or alias equals `token`.
    pub fn find_child(&self, id: NodeId, token: &str) -> Result<Option<NodeId>, CommandError> {
        let mut matches = self
            .node(id)
            .children()
            .iter()
            .copied()
            .filter(|&child| self.node(child).spec.answers_to(token));

        let first = matches.next();
        if first.is_some() && matches.next().is_some() {
            return Err(CommandError::Ambiguous {
                command: self.path(id),
                token: token.to_string(),
            });
        }
        Ok(first)
    }

    /// Look a node up by its full path as produced by [`CommandTree::path`].
    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        let mut tokens = path.split_whitespace();
        let root = self.root();
        if tokens.next() != Some(self.node(root).name()) {
            return None;
        }
        tokens.try_fold(root, |current, token| {
            self.node(current)
                .children()
                .iter()
                .copied()
                .find(|&child| self.node(child).name() == token)
        })
    }

    /// Copy scoped values and shortcuts from the configuration file onto the tree.
    pub fn apply_config(&mut self, config: &Config) {
        for (path, entries) in &config.scope {
            let Some(id) = self.find_by_path(path) else {
                warn!(scope = %path, "ignoring configuration for unknown command");
                continue;
            };
            for (key, value) in entries {
                self.set_value(id, key.clone(), value.clone());
            }
        }
        for (name, expansion) in &config.shortcuts {
            self.add_shortcut(name.clone(), expansion.clone());
        }
    }
}

pub struct Ancestors<'a> {
    tree: &'a CommandTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.node(current).parent();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &'static str, aliases: &'static [&'static str]) -> CommandSpec {
        CommandSpec {
            name,
            aliases,
            ..CommandSpec::EMPTY
        }
    }

    fn sample_tree() -> (CommandTree, NodeId, NodeId) {
        let mut tree = CommandTree::new(spec("twitch", &[]));
        let bot = tree.add_child(tree.root(), spec("bot", &[])).unwrap();
        let commands = tree.add_child(bot, spec("commands", &["c", "cmd"])).unwrap();
        (tree, bot, commands)
    }

    #[test]
    fn paths_and_ancestors_walk_toward_the_root() {
        let (tree, bot, commands) = sample_tree();
        assert_eq!(tree.path(commands), "twitch bot commands");
        let ancestors: Vec<_> = tree.ancestors(commands).collect();
        assert_eq!(ancestors, vec![commands, bot, tree.root()]);
        assert_eq!(tree.node(tree.root()).parent(), None);
    }

    #[test]
    fn children_keep_insertion_order() {
        let (mut tree, _, commands) = sample_tree();
        let add = tree.add_child(commands, spec("add", &["a"])).unwrap();
        let edit = tree.add_child(commands, spec("edit", &[])).unwrap();
        let list = tree.add_child(commands, spec("list", &["l"])).unwrap();
        assert_eq!(tree.node(commands).children(), &[add, edit, list]);
    }

    #[test]
    fn duplicate_names_and_aliases_are_rejected() {
        let (mut tree, bot, commands) = sample_tree();
        tree.add_child(commands, spec("remove", &["rm"])).unwrap();

        let err = tree.add_child(commands, spec("remove", &[])).unwrap_err();
        assert!(matches!(err, CommandError::Conflict { ref name, .. } if name == "remove"));

        let err = tree.add_child(commands, spec("edit", &["rm"])).unwrap_err();
        assert!(matches!(err, CommandError::Conflict { ref name, .. } if name == "rm"));

        let err = tree.add_child(bot, spec("c", &[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duplicate command name or alias 'c' under 'twitch bot'"
        );

        // the same name under a different parent is fine
        assert!(tree.add_child(bot, spec("remove", &[])).is_ok());
    }

    #[test]
    fn find_child_matches_names_and_aliases_exactly() {
        let (tree, bot, commands) = sample_tree();
        assert_eq!(tree.find_child(bot, "commands").unwrap(), Some(commands));
        assert_eq!(tree.find_child(bot, "cmd").unwrap(), Some(commands));
        assert_eq!(tree.find_child(bot, "Commands").unwrap(), None);
        assert_eq!(tree.find_child(bot, "command").unwrap(), None);
    }

    #[test]
    fn find_by_path_requires_the_root_name() {
        let (tree, bot, commands) = sample_tree();
        assert_eq!(tree.find_by_path("twitch"), Some(tree.root()));
        assert_eq!(tree.find_by_path("twitch bot"), Some(bot));
        assert_eq!(tree.find_by_path("twitch  bot commands"), Some(commands));
        assert_eq!(tree.find_by_path("bot commands"), None);
        assert_eq!(tree.find_by_path("twitch bot c"), None);
    }

    #[test]
    fn apply_config_sets_scoped_values_and_shortcuts() {
        let (mut tree, bot, commands) = sample_tree();
        let mut config = Config::default();
        config.set("twitch bot", "file".to_string(), "/x/commands.yaml".to_string());
        config.set("twitch nope", "file".to_string(), "/ignored".to_string());
        config
            .shortcuts
            .insert("so".to_string(), vec!["bot".to_string(), "commands".to_string()]);

        tree.apply_config(&config);

        assert_eq!(tree.node(bot).local_value("file"), Some("/x/commands.yaml"));
        assert_eq!(tree.node(commands).local_value("file"), None);
        assert_eq!(
            tree.shortcut("so"),
            Some(&["bot".to_string(), "commands".to_string()][..])
        );
    }
}
