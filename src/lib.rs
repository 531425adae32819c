//! # dumpwalk
//!
//! Renders scalars, keyed sequences and object graphs as an indented text
//! tree, a more readable alternative to a raw structure dump.
//!
//! ```
//! use dumpwalk::{dump_walk, Value};
//!
//! let value = Value::map([("a", Value::from(1)), ("b", Value::list([2, 3]))]);
//! assert_eq!(
//!     dump_walk(&value, "  "),
//!     "Root array(2)\n  ['a'] => (integer) 1\n  ['b'] => array (2)\n    [0] => (integer) 2\n    [1] => (integer) 3\n"
//! );
//! ```

pub mod error;
pub mod html;
pub mod renderer;
pub mod value;

#[cfg(test)]
mod tests;

pub use error::{RenderFault, ValueError, FAULT_PREFIX};
pub use html::{escape_html, pre_dump, pre_dump_indented};
pub use renderer::{
    ChildClassifier, Classification, DisplayValue, ObjectRule, RenderContext, TreeRenderer,
    VisitedSet, MAX_DEPTH, REFERENCE_ZONE,
};
pub use value::{
    Category, Composite, Key, Member, NodeKind, Object, Param, Record, Signature, Value,
    Visibility,
};

/// Indent unit used when none is given.
pub const DEFAULT_INDENT: &str = "    ";

/// Renders `value` as a tree, repeating `indent_unit` once per level.
pub fn dump_walk(value: &Value, indent_unit: &str) -> String {
    TreeRenderer::default().render(value, indent_unit)
}

/// [`dump_walk`] with the default four-space indent.
pub fn dump_walk_default(value: &Value) -> String {
    dump_walk(value, DEFAULT_INDENT)
}
