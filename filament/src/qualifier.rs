use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{TypeName, names};

/// A single annotation member value.
///
/// Member values key the annotation-literal cache, so they carry value
/// equality and hashing and keep arrays ordered.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberValue {
    Bool(bool),
    Int(i64),
    String(String),
    Enum {
        type_name: TypeName,
        constant: String,
    },
    Class(TypeName),
    Array(Vec<MemberValue>),
}

impl fmt::Display for MemberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberValue::Bool(value) => write!(f, "{value}"),
            MemberValue::Int(value) => write!(f, "{value}"),
            MemberValue::String(value) => write!(f, "{value:?}"),
            MemberValue::Enum {
                type_name,
                constant,
            } => write!(f, "{type_name}.{constant}"),
            MemberValue::Class(name) => write!(f, "{name}.class"),
            MemberValue::Array(values) => {
                write!(f, "{{")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// One qualifier annotation as declared at an injection point: the
/// annotation name plus its member values, ordered by member name.
///
/// Instances are immutable once built.
///
/// # Examples
///
/// ```rust
/// use filament::{MemberValue, QualifierInstance, TypeName};
///
/// let named = QualifierInstance::of(TypeName::new("filament.Named"))
///     .with_member("value", MemberValue::String("primary".into()));
/// assert_eq!(named.name().as_str(), "filament.Named");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifierInstance {
    name: TypeName,
    members: BTreeMap<String, MemberValue>,
}

impl QualifierInstance {
    /// Creates a marker qualifier with no members.
    pub fn of(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            members: BTreeMap::new(),
        }
    }

    pub fn with_member(mut self, name: impl Into<String>, value: MemberValue) -> Self {
        self.members.insert(name.into(), value);
        self
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn members(&self) -> &BTreeMap<String, MemberValue> {
        &self.members
    }
}

impl fmt::Display for QualifierInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.members.is_empty() {
            write!(f, "(")?;
            for (index, (name, value)) in self.members.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{name} = {value}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// The marker qualifiers the container itself defines. Each one has a
/// precomputed singleton literal, so the generator never routes them
/// through the annotation-literal cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuiltinQualifier {
    Default,
    Any,
    Intercepted,
}

impl BuiltinQualifier {
    /// Maps a declared qualifier to its builtin marker, if it is one.
    pub fn of(qualifier: &QualifierInstance) -> Option<Self> {
        if qualifier.name() == &*names::DEFAULT {
            Some(BuiltinQualifier::Default)
        } else if qualifier.name() == &*names::ANY {
            Some(BuiltinQualifier::Any)
        } else if qualifier.name() == &*names::INTERCEPTED {
            Some(BuiltinQualifier::Intercepted)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static TypeName {
        match self {
            BuiltinQualifier::Default => &names::DEFAULT,
            BuiltinQualifier::Any => &names::ANY,
            BuiltinQualifier::Intercepted => &names::INTERCEPTED,
        }
    }
}
