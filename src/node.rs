use std::borrow::Cow;

/// Index of a node inside its [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// What a node renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    /// Heading level, always in `1..=6`
    Heading(u8),
    Paragraph,
    Pre,
    List,
    ListItem,
    /// No tag: the text is emitted verbatim
    Text,
}

impl NodeKind {
    /// Heading kind for a `#` count. Counts outside `1..=6` have no heading
    /// tag and fall back to plain text.
    pub fn heading(level: usize) -> Self {
        match level {
            1..=6 => NodeKind::Heading(level as u8),
            _ => NodeKind::Text,
        }
    }

    /// The HTML tag name, or `None` for passthrough text.
    pub fn tag(&self) -> Option<Cow<'static, str>> {
        match self {
            NodeKind::Root => Some(Cow::Borrowed("root")),
            NodeKind::Heading(level) => Some(Cow::Owned(format!("h{level}"))),
            NodeKind::Paragraph => Some(Cow::Borrowed("p")),
            NodeKind::Pre => Some(Cow::Borrowed("pre")),
            NodeKind::List => Some(Cow::Borrowed("ul")),
            NodeKind::ListItem => Some(Cow::Borrowed("li")),
            NodeKind::Text => None,
        }
    }
}

/// A single node. `text` is already HTML-escaped; containers leave it empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<NodeId>,
    pub text: String,
}

/// Document tree stored as an arena. The root is created with the tree and
/// every other node is appended beneath an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Root,
                children: Vec::new(),
                text: String::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a new node as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind, text: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
            text: text.into(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> {
        self.nodes[id.0].children.iter().map(|child| self.get(*child))
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_has_only_root() {
        let tree = Tree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.get(tree.root()).kind, NodeKind::Root);
        assert_eq!(tree.children(tree.root()).count(), 0);
    }

    #[test]
    fn append_keeps_child_order() {
        let mut tree = Tree::new();
        let root = tree.root();
        tree.append(root, NodeKind::Paragraph, "a");
        let list = tree.append(root, NodeKind::List, "");
        tree.append(list, NodeKind::ListItem, "b");

        let kinds: Vec<_> = tree.children(root).map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NodeKind::Paragraph, NodeKind::List]);
        assert_eq!(tree.children(list).next().unwrap().text, "b");
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn heading_levels_outside_range_are_text() {
        assert_eq!(NodeKind::heading(0), NodeKind::Text);
        assert_eq!(NodeKind::heading(3), NodeKind::Heading(3));
        assert_eq!(NodeKind::heading(6), NodeKind::Heading(6));
        assert_eq!(NodeKind::heading(7), NodeKind::Text);
        assert_eq!(NodeKind::Heading(2).tag().as_deref(), Some("h2"));
        assert_eq!(NodeKind::Text.tag(), None);
    }
}
