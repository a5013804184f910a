//! Well-known runtime types referenced by generated components, plus the
//! constructor signatures the generators emit against.

use std::sync::LazyLock;

use filament::{BuiltinQualifier, TypeName};

use crate::{ConstructorSig, FieldRef};

pub static INSTANCE_PROVIDER: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::new("filament.runtime.InstanceProvider"));
pub static INJECTION_POINT_PROVIDER: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::new("filament.runtime.InjectionPointProvider"));
pub static BEAN_METADATA_PROVIDER: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::new("filament.runtime.BeanMetadataProvider"));
pub static INTERCEPTED_BEAN_METADATA_PROVIDER: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::new("filament.runtime.InterceptedBeanMetadataProvider"));
pub static BEAN_MANAGER_PROVIDER: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::new("filament.runtime.BeanManagerProvider"));
pub static EVENT_PROVIDER: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::new("filament.runtime.EventProvider"));
pub static RESOURCE_PROVIDER: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::new("filament.runtime.ResourceProvider"));
/// The deferred holder every generated provider field is wrapped in.
pub static FIXED_VALUE_SUPPLIER: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::new("filament.runtime.FixedValueSupplier"));
pub static SUPPLIER: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::new("filament.runtime.Supplier"));
pub static INJECTABLE_BEAN: LazyLock<TypeName> =
    LazyLock::new(|| TypeName::new("filament.InjectableBean"));

static TYPE: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("Type"));
static SET: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("Set"));
static STRING: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("String"));
static MEMBER: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("Member"));
static INT: LazyLock<TypeName> = LazyLock::new(|| TypeName::new("int"));

/// `InstanceProvider(Type, Set, InjectableBean, Set, Member, int)`: the
/// required type, the qualifier set, the owning bean, the site annotation
/// set, the originating member and the injection point position.
pub fn instance_provider_ctor() -> ConstructorSig {
    ConstructorSig::of(
        INSTANCE_PROVIDER.clone(),
        vec![
            TYPE.clone(),
            SET.clone(),
            INJECTABLE_BEAN.clone(),
            SET.clone(),
            MEMBER.clone(),
            INT.clone(),
        ],
    )
}

pub fn injection_point_provider_ctor() -> ConstructorSig {
    ConstructorSig::of(INJECTION_POINT_PROVIDER.clone(), Vec::new())
}

/// `BeanMetadataProvider(String)`: the owning bean identifier.
pub fn bean_metadata_provider_ctor() -> ConstructorSig {
    ConstructorSig::of(BEAN_METADATA_PROVIDER.clone(), vec![STRING.clone()])
}

pub fn intercepted_bean_metadata_provider_ctor() -> ConstructorSig {
    ConstructorSig::of(INTERCEPTED_BEAN_METADATA_PROVIDER.clone(), Vec::new())
}

pub fn bean_manager_provider_ctor() -> ConstructorSig {
    ConstructorSig::of(BEAN_MANAGER_PROVIDER.clone(), Vec::new())
}

/// `EventProvider(Type, Set)`: the event type and the carried qualifiers.
pub fn event_provider_ctor() -> ConstructorSig {
    ConstructorSig::of(EVENT_PROVIDER.clone(), vec![TYPE.clone(), SET.clone()])
}

/// `ResourceProvider(Type, Set)`: the resource type and all annotations
/// captured at the site.
pub fn resource_provider_ctor() -> ConstructorSig {
    ConstructorSig::of(RESOURCE_PROVIDER.clone(), vec![TYPE.clone(), SET.clone()])
}

/// `FixedValueSupplier(Object)`: wraps an eagerly constructed provider in
/// a deferred holder.
pub fn fixed_value_supplier_ctor() -> ConstructorSig {
    ConstructorSig::of(
        FIXED_VALUE_SUPPLIER.clone(),
        vec![TypeName::new("Object")],
    )
}

/// The static singleton literal of a builtin marker qualifier, e.g.
/// `filament.Default$Literal.INSTANCE`.
pub fn builtin_literal_field(qualifier: BuiltinQualifier) -> FieldRef {
    let literal_class = TypeName::new(format!("{}$Literal", qualifier.name()));
    FieldRef::of(literal_class.clone(), "INSTANCE", literal_class)
}
