use crate::{Condition, Question};

/// A pure grouping node: it holds no question and collects no answer, it
/// only lets several children share one activation condition.
#[derive(Debug, Clone, Default)]
pub struct Group {
    /// Optional diagnostic name; groups never key the answer map.
    pub name: Option<String>,
}

/// The payload of one tree node: a concrete question or a pure group.
#[derive(Debug, Clone)]
pub enum NodePayload {
    Question(Question),
    Group(Group),
}

impl NodePayload {
    /// Whether this payload is a pure group.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group(_))
    }

    /// The question, if this payload holds one.
    pub fn as_question(&self) -> Option<&Question> {
        match self {
            Self::Question(q) => Some(q),
            Self::Group(_) => None,
        }
    }
}

/// One node of a question tree.
///
/// A node owns its payload, an optional activation condition evaluated
/// against the direct parent's resolved answer, and an ordered list of
/// child nodes. Ownership is strictly hierarchical; there is no sharing
/// and there are no cycles.
#[derive(Debug, Clone)]
pub struct QTreeNode {
    data: NodePayload,
    condition: Option<Condition>,
    children: Vec<QTreeNode>,
}

impl QTreeNode {
    /// Create a leaf node holding a question.
    pub fn new(question: Question) -> Self {
        Self {
            data: NodePayload::Question(question),
            condition: None,
            children: Vec::new(),
        }
    }

    /// Create an anonymous group node.
    pub fn group() -> Self {
        Self {
            data: NodePayload::Group(Group::default()),
            condition: None,
            children: Vec::new(),
        }
    }

    /// Create a named group node.
    pub fn named_group(name: impl Into<String>) -> Self {
        Self {
            data: NodePayload::Group(Group {
                name: Some(name.into()),
            }),
            condition: None,
            children: Vec::new(),
        }
    }

    /// Set the activation condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Append a child node, returning the owner for chaining.
    pub fn add_child(&mut self, child: QTreeNode) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Get the payload.
    pub fn data(&self) -> &NodePayload {
        &self.data
    }

    /// Get the activation condition.
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// Get the child nodes in declaration order.
    pub fn children(&self) -> &[QTreeNode] {
        &self.children
    }

    /// Structurally simplify this subtree.
    ///
    /// Children are trimmed first. A group left with no children disappears
    /// (returns `None`). A group left with exactly one child is replaced by
    /// that child, which takes over the group's condition. Groups with two
    /// or more children stay as pass-through containers, and question nodes
    /// are always kept.
    pub fn trim(mut self) -> Option<QTreeNode> {
        self.children = self
            .children
            .into_iter()
            .filter_map(QTreeNode::trim)
            .collect();
        if self.data.is_group() {
            if self.children.is_empty() {
                return None;
            }
            if self.children.len() == 1
                && let Some(mut child) = self.children.pop()
            {
                child.condition = self.condition;
                return Some(child);
            }
        }
        Some(self)
    }
}
