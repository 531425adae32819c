use crate::value::NodeKind;
use std::collections::HashSet;

/// Identities of composites already expanded on the current path.
///
/// Each descent works on its own copy, so what one branch records is never
/// seen by its siblings.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    identities: HashSet<usize>,
}

impl VisitedSet {
    pub fn contains(&self, identity: usize) -> bool {
        self.identities.contains(&identity)
    }

    pub fn insert(&mut self, identity: usize) {
        self.identities.insert(identity);
    }
}

/// State carried down the tree walk
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub indent_unit: &'a str,
    pub depth: usize,
    /// Kind of the enclosing node; `None` at the root.
    pub parent: Option<NodeKind>,
    pub visited: VisitedSet,
}

impl<'a> RenderContext<'a> {
    pub fn new(indent_unit: &'a str) -> Self {
        Self {
            indent_unit,
            depth: 0,
            parent: None,
            visited: VisitedSet::default(),
        }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            indent_unit: self.indent_unit,
            depth,
            parent: self.parent,
            visited: self.visited.clone(),
        }
    }

    /// Context for the children of a branch whose own kind is `parent`.
    pub fn descend(&self, parent: NodeKind) -> Self {
        Self {
            indent_unit: self.indent_unit,
            depth: self.depth + 1,
            parent: Some(parent),
            visited: self.visited.clone(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn indent(&self) -> String {
        self.indent_unit.repeat(self.depth)
    }
}
