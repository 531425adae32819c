use crate::error::RenderFault;
use chrono::{DateTime, FixedOffset, TimeZone};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shape of a node as seen by the tree walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Sequence,
    Composite,
    Leaf,
}

/// Key of a sequence entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "[{}]", index),
            Key::Name(name) => write!(f, "['{}']", name),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index as i64)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

/// A value that can be dumped.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Ordered, keyed collection.
    Array(Vec<(Key, Value)>),
    Object(Object),
    DateTime(DateTime<FixedOffset>),
    Closure(Signature),
}

impl Value {
    /// Builds an integer-keyed sequence numbered from zero.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (Key::from(index), item.into()))
                .collect(),
        )
    }

    /// Builds a keyed sequence, preserving the iteration order of `entries`.
    pub fn map<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<Key>,
        T: Into<Value>,
    {
        Value::Array(
            entries
                .into_iter()
                .map(|(key, item)| (key.into(), item.into()))
                .collect(),
        )
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Value::Array(_) => NodeKind::Sequence,
            Value::Object(_) => NodeKind::Composite,
            _ => NodeKind::Leaf,
        }
    }

    /// Runtime type name shown in parentheses for leaves.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "double",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::DateTime(_) => "datetime",
            Value::Closure(_) => "closure",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Value::DateTime(value.fixed_offset())
    }
}

impl From<Signature> for Value {
    fn from(signature: Signature) -> Self {
        Value::Closure(signature)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<T: Composite + 'static> From<Rc<T>> for Value {
    fn from(composite: Rc<T>) -> Self {
        Value::Object(Object::new(composite))
    }
}

/// Declared accessibility of a composite member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Private,
    Public,
    Protected,
}

impl Visibility {
    pub fn tag(self) -> &'static str {
        match self {
            Visibility::Private => "priv",
            Visibility::Public => "publ",
            Visibility::Protected => "prot",
        }
    }
}

/// One named member of a composite, as reported by [`Composite::members`].
#[derive(Debug, Clone)]
pub struct Member {
    pub name: String,
    pub visibility: Visibility,
    /// Class-level rather than instance-level.
    pub is_static: bool,
    pub value: Value,
}

impl Member {
    pub fn new(name: impl Into<String>, visibility: Visibility, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            visibility,
            is_static: false,
            value: value.into(),
        }
    }

    pub fn public(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, Visibility::Public, value)
    }

    pub fn private(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, Visibility::Private, value)
    }

    pub fn protected(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, Visibility::Protected, value)
    }

    pub fn class_level(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Qualifier shown between angle brackets, e.g. `publ` or `priv:stat`.
    pub fn qualifier(&self) -> String {
        if self.is_static {
            format!("{}:stat", self.visibility.tag())
        } else {
            self.visibility.tag().to_string()
        }
    }
}

/// Family an object belongs to, used to pick how it is classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Generic,
    Connection,
    ResultSet,
    PreparedStatement,
    DatabaseHandle,
}

/// Capability interface for object-like values.
///
/// Implementors enumerate their members with visibility and storage
/// qualifiers. Reading members may fail; the renderer reports the fault in
/// place of the object's subtree.
pub trait Composite {
    fn type_name(&self) -> &str;

    fn category(&self) -> Category {
        Category::Generic
    }

    fn members(&self) -> Result<Vec<Member>, RenderFault>;
}

/// Shared handle to a composite. Identity is the allocation address.
#[derive(Clone)]
pub struct Object(Rc<dyn Composite>);

impl Object {
    pub fn new<T: Composite + 'static>(composite: Rc<T>) -> Self {
        Self(composite)
    }

    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>() as usize
    }

    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }

    pub fn category(&self) -> Category {
        self.0.category()
    }

    pub fn members(&self) -> Result<Vec<Member>, RenderFault> {
        self.0.members()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Members are not printed: the graph may be cyclic.
        write!(f, "Object({} @ {:#x})", self.type_name(), self.identity())
    }
}

/// General purpose composite with an interior-mutable member list, so that
/// cyclic graphs can be wired up after construction.
#[derive(Debug)]
pub struct Record {
    type_name: String,
    category: Category,
    members: RefCell<Vec<Member>>,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            category: Category::Generic,
            members: RefCell::new(Vec::new()),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_member(self, member: Member) -> Self {
        self.members.borrow_mut().push(member);
        self
    }

    pub fn push(&self, member: Member) {
        self.members.borrow_mut().push(member);
    }
}

impl Composite for Record {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn category(&self) -> Category {
        self.category
    }

    fn members(&self) -> Result<Vec<Member>, RenderFault> {
        self.members
            .try_borrow()
            .map(|members| members.clone())
            .map_err(|e| RenderFault::member_access(&self.type_name, e))
    }
}

/// Parameter list of a closure value.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    pub params: Vec<Param>,
}

impl Signature {
    pub fn new(params: Vec<Param>) -> Self {
        Self { params }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.params.iter().map(ToString::to_string).collect();
        f.write_str(&params.join(", "))
    }
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub declared_type: Option<String>,
    pub by_reference: bool,
    pub optional: bool,
    pub default: Option<Value>,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: None,
            by_reference: false,
            optional: false,
            default: None,
        }
    }

    pub fn typed(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = Some(declared_type.into());
        self
    }

    pub fn by_reference(mut self) -> Self {
        self.by_reference = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// A parameter with a default is optional.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.optional = true;
        self.default = Some(default.into());
        self
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reference = if self.by_reference { "&" } else { "" };
        let mut out = format!(
            "{} {}${}",
            self.declared_type.as_deref().unwrap_or(""),
            reference,
            self.name
        );
        if self.optional {
            out.push('?');
        }
        match &self.default {
            Some(Value::Int(default)) => out.push_str(&format!(" = {}", default)),
            Some(Value::Str(default)) => out.push_str(&format!(" = \"{}\"", default)),
            Some(other) => out.push_str(&format!(" = {}", other.type_name())),
            None => {}
        }
        f.write_str(out.trim())
    }
}
