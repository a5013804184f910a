use filament::{
    BuiltinProvider, InjectionPointInfo, InjectionPointKind, QualifierInstance, TypeName, TypeRef,
    names,
};

fn normal(required_type: TypeRef) -> InjectionPointInfo {
    InjectionPointInfo::new(InjectionPointKind::Normal, required_type)
}

fn priority_qualifier() -> QualifierInstance {
    QualifierInstance::of("orders.Priority")
}

#[test]
fn test_instance_handle_matches_both_spellings() {
    let instance = normal(TypeRef::parameterized(
        names::INSTANCE.clone(),
        vec![TypeRef::raw("orders.OrderRepository")],
    ));
    assert_eq!(
        BuiltinProvider::resolve(&instance),
        Some(BuiltinProvider::InstanceHandle)
    );

    let provider = normal(TypeRef::parameterized(
        names::PROVIDER.clone(),
        vec![TypeRef::raw("orders.OrderRepository")],
    ));
    assert_eq!(
        BuiltinProvider::resolve(&provider),
        Some(BuiltinProvider::InstanceHandle)
    );
}

#[test]
fn test_instance_handle_ignores_qualifiers() {
    let ip = normal(TypeRef::raw(names::INSTANCE.clone()))
        .with_qualifier(priority_qualifier())
        .with_qualifier(QualifierInstance::of("orders.Audited"));
    assert_eq!(
        BuiltinProvider::resolve(&ip),
        Some(BuiltinProvider::InstanceHandle)
    );
}

#[test]
fn test_injection_point_metadata() {
    let ip = normal(TypeRef::raw(names::INJECTION_POINT.clone()));
    assert_eq!(
        BuiltinProvider::resolve(&ip),
        Some(BuiltinProvider::InjectionPointMetadata)
    );
}

#[test]
fn test_bean_metadata_requires_defaulted_qualifier() {
    let defaulted = normal(TypeRef::raw(names::BEAN.clone()));
    assert_eq!(
        BuiltinProvider::resolve(&defaulted),
        Some(BuiltinProvider::BeanMetadata)
    );

    let explicit_default = normal(TypeRef::raw(names::BEAN.clone()))
        .with_qualifier(QualifierInstance::of(names::DEFAULT.clone()));
    assert_eq!(
        BuiltinProvider::resolve(&explicit_default),
        Some(BuiltinProvider::BeanMetadata)
    );
}

#[test]
fn test_bean_metadata_with_custom_qualifier_falls_through() {
    let ip = normal(TypeRef::raw(names::BEAN.clone())).with_qualifier(priority_qualifier());
    assert_eq!(BuiltinProvider::resolve(&ip), None);
    assert!(!BuiltinProvider::resolves_to(&ip));
}

#[test]
fn test_intercepted_bean_metadata() {
    let ip = normal(TypeRef::raw(names::BEAN.clone()))
        .with_qualifier(QualifierInstance::of(names::INTERCEPTED.clone()));
    assert_eq!(
        BuiltinProvider::resolve(&ip),
        Some(BuiltinProvider::InterceptedBeanMetadata)
    );

    // A second qualifier next to the marker falls through.
    let ip = normal(TypeRef::raw(names::BEAN.clone()))
        .with_qualifier(QualifierInstance::of(names::INTERCEPTED.clone()))
        .with_qualifier(priority_qualifier());
    assert_eq!(BuiltinProvider::resolve(&ip), None);
}

#[test]
fn test_bean_manager() {
    let ip = normal(TypeRef::raw(names::BEAN_MANAGER.clone()));
    assert_eq!(
        BuiltinProvider::resolve(&ip),
        Some(BuiltinProvider::BeanManager)
    );
}

#[test]
fn test_event_channel_matches_regardless_of_qualifiers() {
    let ip = normal(TypeRef::parameterized(
        names::EVENT.clone(),
        vec![TypeRef::raw("orders.OrderPlaced")],
    ))
    .with_qualifier(priority_qualifier());
    assert_eq!(
        BuiltinProvider::resolve(&ip),
        Some(BuiltinProvider::EventChannel)
    );
}

#[test]
fn test_resource_matches_by_kind_only() {
    let ip = InjectionPointInfo::new(InjectionPointKind::Resource, TypeRef::raw("byte[]"));
    assert_eq!(
        BuiltinProvider::resolve(&ip),
        Some(BuiltinProvider::Resource)
    );

    // A resource-kind site never matches the raw-type variants, even when
    // the required type would.
    let ip = InjectionPointInfo::new(
        InjectionPointKind::Resource,
        TypeRef::raw(names::INSTANCE.clone()),
    );
    assert_eq!(
        BuiltinProvider::resolve(&ip),
        Some(BuiltinProvider::Resource)
    );
}

#[test]
fn test_event_metadata() {
    let ip = normal(TypeRef::raw(names::EVENT_METADATA.clone()));
    assert_eq!(
        BuiltinProvider::resolve(&ip),
        Some(BuiltinProvider::EventMetadata)
    );
}

#[test]
fn test_ordinary_type_falls_through() {
    let ip = normal(TypeRef::raw("orders.OrderRepository"));
    assert_eq!(BuiltinProvider::resolve(&ip), None);
    assert!(!BuiltinProvider::resolves_to(&ip));
}

#[test]
fn test_observer_synthetic_kind_never_matches_raw_types() {
    let ip = InjectionPointInfo::new(
        InjectionPointKind::ObserverSynthetic,
        TypeRef::raw(names::BEAN_MANAGER.clone()),
    );
    assert_eq!(BuiltinProvider::resolve(&ip), None);
}

#[test]
fn test_resolution_is_deterministic() {
    let ips = [
        normal(TypeRef::raw(names::INSTANCE.clone())),
        normal(TypeRef::raw(names::BEAN.clone())),
        InjectionPointInfo::new(InjectionPointKind::Resource, TypeRef::raw("byte[]")),
        normal(TypeRef::raw("orders.OrderRepository")),
    ];
    for ip in &ips {
        assert_eq!(BuiltinProvider::resolve(ip), BuiltinProvider::resolve(ip));
    }
}

#[test]
fn test_resolve_follows_declaration_order() {
    for ip in [
        normal(TypeRef::raw(names::INSTANCE.clone())),
        normal(TypeRef::raw(names::EVENT.clone())),
        InjectionPointInfo::new(InjectionPointKind::Resource, TypeRef::raw("byte[]")),
    ] {
        let first = BuiltinProvider::VARIANTS
            .iter()
            .copied()
            .find(|provider| provider.matches(&ip));
        assert_eq!(BuiltinProvider::resolve(&ip), first);
    }
}

#[test]
fn test_resolve_unambiguous_agrees_with_resolve() {
    let ips = [
        normal(TypeRef::raw(names::INSTANCE.clone())),
        normal(TypeRef::raw(names::BEAN.clone())),
        normal(TypeRef::raw(names::BEAN.clone()))
            .with_qualifier(QualifierInstance::of(names::INTERCEPTED.clone())),
        normal(TypeRef::raw(names::EVENT_METADATA.clone())),
        InjectionPointInfo::new(InjectionPointKind::Resource, TypeRef::raw("byte[]")),
        normal(TypeRef::raw("orders.OrderRepository")),
    ];
    // The shipped matchers are pairwise disjoint, so the strict scan and
    // the first-match scan agree on every descriptor.
    for ip in &ips {
        assert_eq!(
            BuiltinProvider::resolve_unambiguous(ip).unwrap(),
            BuiltinProvider::resolve(ip)
        );
    }
}

#[test]
fn test_raw_type_identities() {
    assert_eq!(
        BuiltinProvider::InstanceHandle.raw_type(),
        &*names::INSTANCE
    );
    assert_eq!(BuiltinProvider::BeanMetadata.raw_type(), &*names::BEAN);
    assert_eq!(
        BuiltinProvider::InterceptedBeanMetadata.raw_type(),
        &*names::BEAN
    );
    assert_eq!(BuiltinProvider::Resource.raw_type(), &*names::OBJECT);
}

#[test]
fn test_matcher_predicates() {
    let ip = normal(TypeRef::parameterized(
        names::EVENT.clone(),
        vec![TypeRef::raw("orders.OrderPlaced")],
    ));
    assert!(ip.matches_raw_type(&names::EVENT));
    assert!(!ip.matches_raw_type(&names::BEAN));
    assert!(ip.has_defaulted_qualifier());

    let ip = ip.with_qualifier(priority_qualifier());
    assert!(!ip.has_defaulted_qualifier());
    assert!(ip.has_exact_qualifier_set(&[priority_qualifier()]));
    assert!(!ip.has_exact_qualifier_set(&[]));
    assert!(!ip.has_exact_qualifier_set(&[QualifierInstance::of(names::DEFAULT.clone())]));
}

#[test]
fn test_exact_qualifier_set_ignores_order_and_duplicates() {
    let ip = normal(TypeRef::raw(names::INSTANCE.clone()))
        .with_qualifier(priority_qualifier())
        .with_qualifier(QualifierInstance::of("orders.Audited"));

    assert!(ip.has_exact_qualifier_set(&[
        QualifierInstance::of("orders.Audited"),
        priority_qualifier(),
    ]));
    // Same cardinality with a duplicated identity is a different set.
    assert!(!ip.has_exact_qualifier_set(&[priority_qualifier(), priority_qualifier()]));
    assert!(!ip.has_exact_qualifier_set(&[priority_qualifier()]));
    // A duplicated entry for an already covered identity changes nothing.
    assert!(ip.has_exact_qualifier_set(&[
        priority_qualifier(),
        QualifierInstance::of("orders.Audited"),
        priority_qualifier(),
    ]));
}

#[test]
fn test_type_name_parts() {
    let name = TypeName::new("orders.api.OrderService");
    assert_eq!(name.package(), "orders.api");
    assert_eq!(name.simple_name(), "OrderService");

    let unqualified = TypeName::new("OrderService");
    assert_eq!(unqualified.package(), "");
    assert_eq!(unqualified.simple_name(), "OrderService");
}
