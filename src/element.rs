//! JSON document model consumed by the encoder.
//!
//! An [`Element`] is a node of a JSON-like tree: it carries its
//! [`ElementType`], its member name when it sits inside an object, a scalar
//! value for the value types, and an ordered list of children for objects and
//! arrays. The tree is read-only input to the encoder.

use crate::error::UnknownElementType;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use time::OffsetDateTime;

/// The six JSON element types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl ElementType {
    /// Type name written into the `type` attribute
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }

    /// Object and array elements hold children, everything else a value
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = UnknownElementType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "null" => Ok(Self::Null),
            other => Err(UnknownElementType(other.to_string())),
        }
    }
}

impl TryFrom<&str> for ElementType {
    type Error = UnknownElementType;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<u8> for ElementType {
    type Error = UnknownElementType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Object),
            1 => Ok(Self::Array),
            2 => Ok(Self::String),
            3 => Ok(Self::Number),
            4 => Ok(Self::Boolean),
            5 => Ok(Self::Null),
            other => Err(UnknownElementType(other.to_string())),
        }
    }
}

/// Scalar payload of a value element
#[derive(Clone)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
    DateTime(OffsetDateTime),
    /// Any other value, written through its `Display` form
    Opaque(Arc<dyn fmt::Display + Send + Sync>),
}

impl Scalar {
    pub fn opaque(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Opaque(Arc::new(value))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::UInt(n) => f.debug_tuple("UInt").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::DateTime(dt) => f.debug_tuple("DateTime").field(dt).finish(),
            Self::Opaque(v) => f.debug_tuple("Opaque").field(&v.to_string()).finish(),
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Int(l), Self::Int(r)) => l == r,
            (Self::UInt(l), Self::UInt(r)) => l == r,
            (Self::Float(l), Self::Float(r)) => l == r,
            (Self::Char(l), Self::Char(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::DateTime(l), Self::DateTime(r)) => l == r,
            (Self::Opaque(l), Self::Opaque(r)) => l.to_string() == r.to_string(),
            _ => false,
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<char> for Scalar {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<OffsetDateTime> for Scalar {
    fn from(value: OffsetDateTime) -> Self {
        Self::DateTime(value)
    }
}

/// A node of the JSON document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementType,
    name: Option<String>,
    value: Option<Scalar>,
    children: Vec<Element>,
}

impl Element {
    /// Assembles an element from raw parts without checking that they agree
    /// with `kind`; the encoder rejects inconsistent trees.
    pub fn from_parts(
        kind: ElementType,
        name: Option<String>,
        value: Option<Scalar>,
        children: Vec<Self>,
    ) -> Self {
        Self {
            kind,
            name,
            value,
            children,
        }
    }

    /// Creates an object whose members are named by their keys
    pub fn object<K, I>(members: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        let children = members
            .into_iter()
            .map(|(key, member)| member.with_name(key))
            .collect();
        Self::from_parts(ElementType::Object, None, None, children)
    }

    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::from_parts(ElementType::Array, None, None, items.into_iter().collect())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::from_parts(
            ElementType::String,
            None,
            Some(Scalar::Str(value.into())),
            Vec::new(),
        )
    }

    pub fn number(value: impl Into<Scalar>) -> Self {
        Self::from_parts(ElementType::Number, None, Some(value.into()), Vec::new())
    }

    pub fn boolean(value: bool) -> Self {
        Self::from_parts(
            ElementType::Boolean,
            None,
            Some(Scalar::Bool(value)),
            Vec::new(),
        )
    }

    pub fn null() -> Self {
        Self::from_parts(ElementType::Null, None, None, Vec::new())
    }

    /// Sets the member name this element carries inside an object
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn kind(&self) -> ElementType {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> Option<&Scalar> {
        self.value.as_ref()
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// True for string, number, boolean and null elements
    pub fn is_value(&self) -> bool {
        !self.kind.is_container()
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Self> {
        self.children.iter()
    }
}

impl<'a> IntoIterator for &'a Element {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Self::number(value)
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<Vec<Element>> for Element {
    fn from(items: Vec<Self>) -> Self {
        Self::array(items)
    }
}
