use crate::error::{RenderFault, FAULT_PREFIX};
use crate::renderer::components::*;
use crate::renderer::context::*;
use crate::value::{NodeKind, Object, Value};
use tracing::{debug, trace, warn};

/// Deepest level a frame may reach before the walk gives up on that subtree.
pub const MAX_DEPTH: usize = 256;

/// Walks a value depth-first and renders it as an indented tree.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    classifier: ChildClassifier,
}

impl TreeRenderer {
    pub fn new(classifier: ChildClassifier) -> Self {
        Self { classifier }
    }

    /// Renders `value` with `indent_unit` repeated once per nesting level.
    ///
    /// Never fails: a fault inside a subtree becomes a
    /// `dump_walk() error: <message>` line in place of the rest of it.
    pub fn render(&self, value: &Value, indent_unit: &str) -> String {
        let context = RenderContext::new(indent_unit);
        self.walk(value, &context)
    }

    /// Renders one frame: the root header when `context` is the root, then
    /// the children of `node`.
    pub fn walk(&self, node: &Value, context: &RenderContext) -> String {
        let mut output = String::new();
        let frame = if context.is_root() {
            output.push_str(&self.root_header(node));
            context.with_depth(context.depth + 1)
        } else {
            context.clone()
        };

        trace!(depth = frame.depth, kind = ?node.kind(), "walking node");

        if let Err(fault) = self.walk_children(node, &frame, &mut output) {
            warn!(depth = frame.depth, %fault, "subtree rendering failed");
            output.push_str(&format!("{}{}{}\n", frame.indent(), FAULT_PREFIX, fault));
        }

        output
    }

    fn root_header(&self, node: &Value) -> String {
        match node {
            Value::Array(entries) => format!("Root array({})\n", entries.len()),
            Value::Object(object) => format!("Root object {}\n", object.type_name()),
            leaf => match scalar_display(leaf) {
                DisplayValue::Text(text) => format!("Root ({}) '{}'", leaf.type_name(), text),
                DisplayValue::Bool(b) => format!("Root ({}) {}", leaf.type_name(), b),
                DisplayValue::Null => format!("Root ({}) NULL", leaf.type_name()),
                DisplayValue::Raw(raw) => format!("Root ({}) {}", leaf.type_name(), raw),
                DisplayValue::Nested | DisplayValue::Instance => {
                    format!("Root ({})", leaf.type_name())
                }
            },
        }
    }

    fn walk_children(
        &self,
        node: &Value,
        frame: &RenderContext,
        output: &mut String,
    ) -> Result<(), RenderFault> {
        if frame.depth > MAX_DEPTH && node.kind() != NodeKind::Leaf {
            return Err(RenderFault::DepthExceeded { limit: MAX_DEPTH });
        }

        match node {
            Value::Array(entries) => {
                for (key, child) in entries {
                    output.push_str(&frame.indent());
                    let marker = format!("{} => ", key);
                    self.render_child(&marker, child, NodeKind::Sequence, frame, output);
                }
                Ok(())
            }
            Value::Object(object) => self.walk_members(object, frame, output),
            _ => Ok(()),
        }
    }

    fn walk_members(
        &self,
        object: &Object,
        frame: &RenderContext,
        output: &mut String,
    ) -> Result<(), RenderFault> {
        let identity = object.identity();
        if frame.visited.contains(identity) {
            debug!(
                type_name = object.type_name(),
                depth = frame.depth,
                "object already expanded on this path"
            );
            output.push_str(&format!("{}(...)\n", frame.indent()));
            return Ok(());
        }

        let members = object.members()?;

        let mut frame = frame.clone();
        frame.visited.insert(identity);

        for member in &members {
            output.push_str(&frame.indent());
            let marker = format!("-> <{}> {} = ", member.qualifier(), member.name);
            self.render_child(&marker, &member.value, NodeKind::Composite, &frame, output);
        }
        Ok(())
    }

    /// Writes `marker`, the child's label and either its inline value or its
    /// nested subtree.
    fn render_child(
        &self,
        marker: &str,
        child: &Value,
        parent: NodeKind,
        frame: &RenderContext,
        output: &mut String,
    ) {
        let class = self.classifier.classify(child);
        output.push_str(marker);
        output.push_str(&class.label);

        match class.display {
            DisplayValue::Nested => {
                output.push('\n');
                output.push_str(&self.walk(child, &frame.descend(parent)));
                return;
            }
            DisplayValue::Text(text) => output.push_str(&format!(" '{}'", text)),
            DisplayValue::Bool(b) => output.push_str(&format!(" {}", b)),
            DisplayValue::Null => output.push_str(" NULL"),
            DisplayValue::Instance => {}
            DisplayValue::Raw(raw) => output.push_str(&format!(" {}", raw)),
        }
        output.push('\n');
    }
}
