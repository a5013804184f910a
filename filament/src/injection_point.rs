use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{QualifierInstance, TypeName, TypeRef, names};

/// How an injection point was declared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InjectionPointKind {
    /// An ordinary DI-eligible site.
    Normal,
    /// A resource field; all annotations at the site become carried
    /// qualifiers.
    Resource,
    /// A synthetic site introduced for an observer method parameter.
    ObserverSynthetic,
}

/// One site in user code that requests a dependency: its kind, required
/// type, declared qualifiers, originating member, ordinal position among
/// its siblings and the identifier of the owning target.
///
/// Descriptors never mutate after construction; resolution is a pure
/// function of this state.
///
/// # Examples
///
/// ```rust
/// use filament::{InjectionPointInfo, InjectionPointKind, TypeRef, names};
///
/// let ip = InjectionPointInfo::new(
///     InjectionPointKind::Normal,
///     TypeRef::raw(names::BEAN_MANAGER.clone()),
/// )
/// .with_member("manager")
/// .at_position(2)
/// .owned_by("orders.OrderService");
///
/// assert!(ip.matches_raw_type(&names::BEAN_MANAGER));
/// assert!(ip.has_defaulted_qualifier());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InjectionPointInfo {
    kind: InjectionPointKind,
    required_type: TypeRef,
    qualifiers: Vec<QualifierInstance>,
    member: String,
    position: u32,
    owner: String,
}

impl InjectionPointInfo {
    pub fn new(kind: InjectionPointKind, required_type: TypeRef) -> Self {
        Self {
            kind,
            required_type,
            qualifiers: Vec::new(),
            member: String::new(),
            position: 0,
            owner: String::new(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: QualifierInstance) -> Self {
        self.qualifiers.push(qualifier);
        self
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = member.into();
        self
    }

    pub fn at_position(mut self, position: u32) -> Self {
        self.position = position;
        self
    }

    pub fn owned_by(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn kind(&self) -> InjectionPointKind {
        self.kind
    }

    pub fn required_type(&self) -> &TypeRef {
        &self.required_type
    }

    /// Declared qualifiers, in declaration order. Empty means only the
    /// implicit default qualifier applies.
    pub fn required_qualifiers(&self) -> &[QualifierInstance] {
        &self.qualifiers
    }

    /// The originating member name, used for diagnostics and carried by
    /// generated instance providers.
    pub fn member(&self) -> &str {
        &self.member
    }

    /// Ordinal index among the sibling injection points of the owning
    /// target. Stable; generated provider field names derive from it.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Identifier of the owning target. Back-reference only; the
    /// descriptor does not own the target.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// True iff the kind is [`InjectionPointKind::Normal`] and the required
    /// type's raw name equals the given identity.
    pub fn matches_raw_type(&self, raw_type: &TypeName) -> bool {
        if self.kind != InjectionPointKind::Normal {
            return false;
        }
        self.required_type.name() == raw_type
    }

    /// True iff no explicit qualifier is declared, so only the implicit
    /// default qualifier applies. An explicit default marker counts as
    /// defaulted too.
    pub fn has_defaulted_qualifier(&self) -> bool {
        self.qualifiers.iter().all(|q| q.name() == &*names::DEFAULT)
    }

    /// True iff the declared qualifier set equals the given set: same
    /// identities, order and duplicates ignored. A duplicated entry on
    /// either side never makes up for a missing identity.
    pub fn has_exact_qualifier_set(&self, qualifiers: &[QualifierInstance]) -> bool {
        let declared: HashSet<&QualifierInstance> = self.qualifiers.iter().collect();
        let requested: HashSet<&QualifierInstance> = qualifiers.iter().collect();
        declared == requested
    }
}

impl fmt::Display for InjectionPointInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{}[{}]: {}",
            self.owner, self.member, self.position, self.required_type
        )
    }
}
