use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{InjectionPointInfo, InjectionPointKind, TypeName, names};

/// The closed set of ambient providers the container supplies without a
/// user-declared bean. Not user-extensible.
///
/// Declaration order is priority order: [`BuiltinProvider::resolve`]
/// returns the first variant whose matcher accepts the injection point,
/// so overlapping matchers are silently decided by this order. Use
/// [`BuiltinProvider::resolve_unambiguous`] to surface overlaps instead.
///
/// # Examples
///
/// ```rust
/// use filament::{BuiltinProvider, InjectionPointInfo, InjectionPointKind, TypeName, TypeRef, names};
///
/// let ip = InjectionPointInfo::new(
///     InjectionPointKind::Normal,
///     TypeRef::parameterized(
///         names::EVENT.clone(),
///         vec![TypeRef::raw(TypeName::new("orders.OrderPlaced"))],
///     ),
/// );
/// assert_eq!(
///     BuiltinProvider::resolve(&ip),
///     Some(BuiltinProvider::EventChannel),
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuiltinProvider {
    /// A lazy lookup handle for the required type, matching both the
    /// `Instance` type and its legacy `Provider` spelling, regardless of
    /// qualifiers.
    InstanceHandle,
    /// Metadata describing the injection point itself.
    InjectionPointMetadata,
    /// Metadata of the bean that owns the injection point. Only matches
    /// a defaulted qualifier set.
    BeanMetadata,
    /// Metadata of the bean currently intercepted by the owning
    /// interceptor. Requires exactly one `Intercepted` marker qualifier.
    InterceptedBeanMetadata,
    /// A handle to the container manager.
    BeanManager,
    /// An event-firing channel carrying the qualifiers declared on the
    /// required type.
    EventChannel,
    /// A resource value; matched by the injection point kind, not by the
    /// required type.
    Resource,
    /// Event metadata inside observer methods. Supplied by the caller
    /// context, never by a generated provider.
    EventMetadata,
}

impl BuiltinProvider {
    /// All variants, in priority order. The first matching variant wins.
    pub const VARIANTS: [BuiltinProvider; 8] = [
        BuiltinProvider::InstanceHandle,
        BuiltinProvider::InjectionPointMetadata,
        BuiltinProvider::BeanMetadata,
        BuiltinProvider::InterceptedBeanMetadata,
        BuiltinProvider::BeanManager,
        BuiltinProvider::EventChannel,
        BuiltinProvider::Resource,
        BuiltinProvider::EventMetadata,
    ];

    /// The raw type identity this variant's default matcher keys on.
    /// [`BuiltinProvider::Resource`] matches by kind, so it reports the
    /// object root.
    pub fn raw_type(&self) -> &'static TypeName {
        match self {
            BuiltinProvider::InstanceHandle => &names::INSTANCE,
            BuiltinProvider::InjectionPointMetadata => &names::INJECTION_POINT,
            BuiltinProvider::BeanMetadata => &names::BEAN,
            BuiltinProvider::InterceptedBeanMetadata => &names::BEAN,
            BuiltinProvider::BeanManager => &names::BEAN_MANAGER,
            BuiltinProvider::EventChannel => &names::EVENT,
            BuiltinProvider::Resource => &names::OBJECT,
            BuiltinProvider::EventMetadata => &names::EVENT_METADATA,
        }
    }

    /// The eligibility predicate of this variant. Pure and total; never
    /// panics.
    pub fn matches(&self, injection_point: &InjectionPointInfo) -> bool {
        match self {
            BuiltinProvider::InstanceHandle => {
                injection_point.matches_raw_type(&names::INSTANCE)
                    || injection_point.matches_raw_type(&names::PROVIDER)
            }
            BuiltinProvider::BeanMetadata => {
                injection_point.matches_raw_type(&names::BEAN)
                    && injection_point.has_defaulted_qualifier()
            }
            BuiltinProvider::InterceptedBeanMetadata => {
                injection_point.matches_raw_type(&names::BEAN)
                    && !injection_point.has_defaulted_qualifier()
                    && injection_point.required_qualifiers().len() == 1
                    && injection_point.required_qualifiers()[0].name() == &*names::INTERCEPTED
            }
            BuiltinProvider::Resource => injection_point.kind() == InjectionPointKind::Resource,
            _ => injection_point.matches_raw_type(self.raw_type()),
        }
    }

    /// Returns the first variant, in declaration order, whose matcher
    /// accepts the injection point. A builtin match always takes priority
    /// over ordinary bean resolution, so callers short-circuit on `Some`.
    pub fn resolve(injection_point: &InjectionPointInfo) -> Option<BuiltinProvider> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|provider| provider.matches(injection_point))
    }

    /// Like [`BuiltinProvider::resolve`], but scans every variant and
    /// reports an error when more than one matcher accepts the injection
    /// point instead of silently preferring the earlier variant.
    pub fn resolve_unambiguous(
        injection_point: &InjectionPointInfo,
    ) -> Result<Option<BuiltinProvider>, AmbiguousMatch> {
        let mut found = None;
        for provider in Self::VARIANTS {
            if !provider.matches(injection_point) {
                continue;
            }
            match found {
                None => found = Some(provider),
                Some(first) => {
                    return Err(AmbiguousMatch {
                        first,
                        second: provider,
                        position: injection_point.position(),
                    });
                }
            }
        }
        Ok(found)
    }

    /// True iff some builtin variant satisfies the injection point.
    pub fn resolves_to(injection_point: &InjectionPointInfo) -> bool {
        Self::resolve(injection_point).is_some()
    }
}

/// Two builtin variants accepted the same injection point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmbiguousMatch {
    pub first: BuiltinProvider,
    pub second: BuiltinProvider,
    pub position: u32,
}

impl fmt::Display for AmbiguousMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ambiguous builtin providers {:?} and {:?} for injection point at position {}",
            self.first, self.second, self.position
        )
    }
}

impl std::error::Error for AmbiguousMatch {}
