use crate::value::{Category, Object, Value};
use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use std::collections::HashMap;

/// Zone every date/time value is converted to before display.
pub const REFERENCE_ZONE: Tz = chrono_tz::America::Los_Angeles;

/// `2024-01-15 4:00:00 am PST`
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %-I:%M:%S %P %Z";

pub const DATETIME_LABEL: &str = "object DateTime";

/// How a child should be rendered after its label.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    /// Expanded as a nested subtree on the following lines.
    Nested,
    /// Single-quoted text.
    Text(String),
    Bool(bool),
    Null,
    /// An object shown by its label only.
    Instance,
    /// Printed verbatim.
    Raw(String),
}

/// Outcome of classifying one child value.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub display: DisplayValue,
}

impl Classification {
    fn new(label: impl Into<String>, display: DisplayValue) -> Self {
        Self {
            label: label.into(),
            display,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self.display, DisplayValue::Nested)
    }
}

/// Rendering strategy for an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectRule {
    /// `object <TypeName>`, members expanded below.
    Expand,
    /// `object <TypeName>` on a single line.
    Opaque,
    /// Fixed label on a single line.
    Label(String),
}

/// Decides the label, display value and branching of each child.
///
/// Objects are matched first by type name, then by their [`Category`].
/// Both tables can be extended by the host.
#[derive(Debug, Clone)]
pub struct ChildClassifier {
    type_rules: HashMap<String, ObjectRule>,
    category_rules: HashMap<Category, ObjectRule>,
}

impl Default for ChildClassifier {
    fn default() -> Self {
        let category_rules = HashMap::from([
            (Category::Generic, ObjectRule::Expand),
            (Category::Connection, ObjectRule::Opaque),
            (
                Category::ResultSet,
                ObjectRule::Label("object ResultSet".to_string()),
            ),
            (
                Category::PreparedStatement,
                ObjectRule::Label("PreparedStatement (prepared statement)".to_string()),
            ),
            (
                Category::DatabaseHandle,
                ObjectRule::Label("Database (database handle)".to_string()),
            ),
        ]);

        Self {
            type_rules: HashMap::new(),
            category_rules,
        }
    }
}

impl ChildClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule for objects with this exact type name.
    pub fn with_type_rule(mut self, type_name: impl Into<String>, rule: ObjectRule) -> Self {
        self.type_rules.insert(type_name.into(), rule);
        self
    }

    /// Replaces the rule for a whole category.
    pub fn with_category_rule(mut self, category: Category, rule: ObjectRule) -> Self {
        self.category_rules.insert(category, rule);
        self
    }

    pub fn rule_for(&self, object: &Object) -> ObjectRule {
        self.type_rules
            .get(object.type_name())
            .or_else(|| self.category_rules.get(&object.category()))
            .cloned()
            .unwrap_or(ObjectRule::Expand)
    }

    pub fn classify(&self, value: &Value) -> Classification {
        match value {
            Value::Array(entries) => {
                Classification::new(format!("array ({})", entries.len()), DisplayValue::Nested)
            }
            Value::DateTime(datetime) => Classification::new(
                DATETIME_LABEL,
                DisplayValue::Text(format_datetime(datetime)),
            ),
            Value::Closure(signature) => {
                Classification::new(format!("closure ({})", signature), DisplayValue::Instance)
            }
            Value::Object(object) => {
                let type_label = format!("object {}", object.type_name());
                match self.rule_for(object) {
                    ObjectRule::Expand => Classification::new(type_label, DisplayValue::Nested),
                    ObjectRule::Opaque => Classification::new(type_label, DisplayValue::Instance),
                    ObjectRule::Label(label) => Classification::new(label, DisplayValue::Instance),
                }
            }
            leaf => Classification::new(format!("({})", leaf.type_name()), scalar_display(leaf)),
        }
    }
}

/// Display form of a leaf, shared by child lines and the root header.
pub fn scalar_display(value: &Value) -> DisplayValue {
    match value {
        Value::Null => DisplayValue::Null,
        Value::Bool(b) => DisplayValue::Bool(*b),
        Value::Int(i) => DisplayValue::Raw(i.to_string()),
        Value::Float(f) => DisplayValue::Raw(format_float(*f)),
        Value::Str(s) => DisplayValue::Text(s.clone()),
        Value::DateTime(datetime) => DisplayValue::Text(format_datetime(datetime)),
        Value::Closure(signature) => DisplayValue::Raw(format!("({})", signature)),
        Value::Array(_) | Value::Object(_) => DisplayValue::Nested,
    }
}

/// Formats a copy of `datetime` in [`REFERENCE_ZONE`]; the input is untouched.
pub fn format_datetime(datetime: &DateTime<FixedOffset>) -> String {
    datetime
        .with_timezone(&REFERENCE_ZONE)
        .format(DATETIME_FORMAT)
        .to_string()
}

pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NAN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        value.to_string()
    }
}
