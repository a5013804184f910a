use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Raw type identity: a dot-separated name such as `orders.OrderService`.
///
/// Names are immutable, cheap to clone and compared by value. They identify
/// raw types only; generic arguments live on [`TypeRef`].
///
/// # Examples
///
/// ```rust
/// use filament::TypeName;
///
/// let name = TypeName::new("orders.OrderService");
/// assert_eq!(name.package(), "orders");
/// assert_eq!(name.simple_name(), "OrderService");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeName(Arc<str>);

impl TypeName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the package part of the name, or an empty string for
    /// unqualified names.
    pub fn package(&self) -> &str {
        match self.0.rfind('.') {
            Some(index) => &self.0[..index],
            None => "",
        }
    }

    /// Returns the name without its package part.
    pub fn simple_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(index) => &self.0[index + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for TypeName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A possibly parameterized type: raw name plus ordered generic arguments.
///
/// Immutable once constructed. Equality covers the raw name and all
/// arguments, so `Event<OrderPlaced>` and `Event<OrderShipped>` are
/// distinct while sharing a raw name.
///
/// # Examples
///
/// ```rust
/// use filament::{TypeName, TypeRef};
///
/// let event = TypeRef::parameterized(
///     TypeName::new("filament.Event"),
///     vec![TypeRef::raw(TypeName::new("orders.OrderPlaced"))],
/// );
/// assert_eq!(event.to_string(), "filament.Event<orders.OrderPlaced>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    name: TypeName,
    args: Vec<TypeRef>,
}

impl TypeRef {
    /// Creates a raw (non-parameterized) type reference.
    pub fn raw(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Creates a parameterized type reference.
    pub fn parameterized(name: impl Into<TypeName>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// The raw type identity, ignoring generic arguments.
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn args(&self) -> &[TypeRef] {
        &self.args
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.args.is_empty() {
            write!(f, "<")?;
            for (index, arg) in self.args.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ">")?;
        }
        Ok(())
    }
}

/// Well-known container API type names.
pub mod names {
    use std::sync::LazyLock;

    use super::TypeName;

    /// The lazy handle type for programmatic lookup of beans.
    pub static INSTANCE: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("filament.Instance"));
    /// The legacy provider spelling of [`INSTANCE`].
    pub static PROVIDER: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("filament.Provider"));
    /// Injection point metadata.
    pub static INJECTION_POINT: LazyLock<TypeName> =
        LazyLock::new(|| TypeName::new("filament.InjectionPoint"));
    /// Bean metadata.
    pub static BEAN: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("filament.Bean"));
    /// The container manager.
    pub static BEAN_MANAGER: LazyLock<TypeName> =
        LazyLock::new(|| TypeName::new("filament.BeanManager"));
    /// The event-firing channel.
    pub static EVENT: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("filament.Event"));
    /// Event metadata available inside observer methods.
    pub static EVENT_METADATA: LazyLock<TypeName> =
        LazyLock::new(|| TypeName::new("filament.EventMetadata"));
    /// The object root type.
    pub static OBJECT: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("filament.Object"));

    /// The implicit default qualifier marker.
    pub static DEFAULT: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("filament.Default"));
    /// The any qualifier marker.
    pub static ANY: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("filament.Any"));
    /// The marker qualifier carried by intercepted bean metadata.
    pub static INTERCEPTED: LazyLock<TypeName> =
        LazyLock::new(|| TypeName::new("filament.Intercepted"));
}
