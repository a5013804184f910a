use std::fmt;

use filament::{
    AmbiguousMatch, BuiltinProvider, BuiltinQualifier, InjectionPointInfo, QualifierInstance,
    TargetInfo, TargetKind, TypeName,
};

use crate::{
    AnnotationClass, AnnotationIndex, AnnotationLiteralCache, ComponentWriter, FieldRef,
    GenerationContext, GeneratorConfig, ValueHandle, runtime,
};

/// Errors raised during provider generation. All of them are fatal: the
/// caller aborts the build for the current component, never recovers
/// locally and never keeps partial output.
#[derive(Debug)]
pub enum GenError {
    /// The owning target's kind fails a target-dependent variant's
    /// precondition. Signals a resolver bug or an inconsistent
    /// descriptor, not bad user input.
    TargetKindViolation {
        provider: BuiltinProvider,
        expected: TargetKind,
        target: TargetInfo,
    },
    /// A qualifier annotation with no known marker literal is missing
    /// from the upstream annotation index.
    UnknownQualifier { annotation: TypeName, position: u32 },
    /// An annotation instance carries a member the indexed annotation
    /// class does not declare.
    UndeclaredMember {
        annotation: TypeName,
        member: String,
        position: u32,
    },
    /// Two builtin variants matched the same injection point and the
    /// generator was configured to detect that.
    Ambiguous(AmbiguousMatch),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::TargetKindViolation {
                provider,
                expected,
                target,
            } => write!(
                f,
                "Invalid injection target {target} for builtin provider {provider:?}: expected {expected:?}"
            ),
            GenError::UnknownQualifier {
                annotation,
                position,
            } => write!(
                f,
                "Unknown qualifier annotation {annotation} at injection point position {position}"
            ),
            GenError::UndeclaredMember {
                annotation,
                member,
                position,
            } => write!(
                f,
                "Undeclared member {member} on annotation {annotation} at injection point position {position}"
            ),
            GenError::Ambiguous(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Ambiguous(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AmbiguousMatch> for GenError {
    fn from(value: AmbiguousMatch) -> Self {
        Self::Ambiguous(value)
    }
}

/// Resolves the injection point against the builtin registry and, on a
/// match, generates the provider installation. Returns `Ok(false)` when no
/// builtin variant matches, so the caller falls through to user-bean
/// resolution.
pub fn install_builtin(
    injection_point: &InjectionPointInfo,
    target: &TargetInfo,
    provider_field: &str,
    writer: &mut dyn ComponentWriter,
    literals: &AnnotationLiteralCache,
    annotations: &AnnotationIndex,
    config: &GeneratorConfig,
) -> Result<bool, GenError> {
    let resolved = if config.detect_ambiguity {
        BuiltinProvider::resolve_unambiguous(injection_point)?
    } else {
        BuiltinProvider::resolve(injection_point)
    };
    let provider = match resolved {
        Some(provider) => provider,
        None => {
            tracing::trace!(
                injection_point = %injection_point,
                "No builtin provider, deferring to bean resolution"
            );
            return Ok(false);
        }
    };
    let mut ctx = GenerationContext {
        writer,
        literals,
        annotations,
        injection_point,
        target,
        provider_field,
        config,
    };
    generate(provider, &mut ctx)?;
    Ok(true)
}

/// Generates the provider installation for an already resolved variant.
/// Invoked only after a successful resolve; a single deterministic pass
/// with no retry.
pub fn generate(
    provider: BuiltinProvider,
    ctx: &mut GenerationContext<'_>,
) -> Result<(), GenError> {
    tracing::debug!(
        provider = ?provider,
        field = ctx.provider_field,
        injection_point = %ctx.injection_point,
        "Generating builtin provider"
    );
    match provider {
        BuiltinProvider::InstanceHandle => generate_instance_handle(ctx),
        BuiltinProvider::InjectionPointMetadata => generate_injection_point_metadata(ctx),
        BuiltinProvider::BeanMetadata => generate_bean_metadata(ctx),
        BuiltinProvider::InterceptedBeanMetadata => generate_intercepted_bean_metadata(ctx),
        BuiltinProvider::BeanManager => generate_bean_manager(ctx),
        BuiltinProvider::EventChannel => generate_event_channel(ctx),
        BuiltinProvider::Resource => generate_resource(ctx),
        // Event metadata is supplied by the surrounding call context, not
        // by a generated field.
        BuiltinProvider::EventMetadata => Ok(()),
    }
}

fn generate_instance_handle(ctx: &mut GenerationContext<'_>) -> Result<(), GenError> {
    let qualifiers = collect_qualifiers(ctx)?;
    let required_type = ctx.writer.load_type(ctx.injection_point.required_type());
    let annotations = collect_site_annotations(ctx)?;
    let owner = ctx.writer.load_self();
    let member = ctx.writer.load_string(ctx.injection_point.member());
    let position = ctx.writer.load_int(ctx.injection_point.position() as i64);
    let provider = ctx.writer.new_instance(
        &runtime::instance_provider_ctor(),
        &[required_type, qualifiers, owner, annotations, member, position],
    );
    install_provider_field(ctx, provider);
    Ok(())
}

fn generate_injection_point_metadata(ctx: &mut GenerationContext<'_>) -> Result<(), GenError> {
    let provider = ctx
        .writer
        .new_instance(&runtime::injection_point_provider_ctor(), &[]);
    install_provider_field(ctx, provider);
    Ok(())
}

fn generate_bean_metadata(ctx: &mut GenerationContext<'_>) -> Result<(), GenError> {
    if ctx.target.kind() != TargetKind::Bean {
        return Err(GenError::TargetKindViolation {
            provider: BuiltinProvider::BeanMetadata,
            expected: TargetKind::Bean,
            target: ctx.target.clone(),
        });
    }
    let identifier = ctx.writer.load_string(ctx.target.identifier());
    let provider = ctx
        .writer
        .new_instance(&runtime::bean_metadata_provider_ctor(), &[identifier]);
    install_provider_field(ctx, provider);
    Ok(())
}

fn generate_intercepted_bean_metadata(ctx: &mut GenerationContext<'_>) -> Result<(), GenError> {
    if ctx.target.kind() != TargetKind::Interceptor {
        return Err(GenError::TargetKindViolation {
            provider: BuiltinProvider::InterceptedBeanMetadata,
            expected: TargetKind::Interceptor,
            target: ctx.target.clone(),
        });
    }
    let provider = ctx
        .writer
        .new_instance(&runtime::intercepted_bean_metadata_provider_ctor(), &[]);
    install_provider_field(ctx, provider);
    Ok(())
}

fn generate_bean_manager(ctx: &mut GenerationContext<'_>) -> Result<(), GenError> {
    let provider = ctx
        .writer
        .new_instance(&runtime::bean_manager_provider_ctor(), &[]);
    install_provider_field(ctx, provider);
    Ok(())
}

fn generate_event_channel(ctx: &mut GenerationContext<'_>) -> Result<(), GenError> {
    let qualifiers = collect_qualifiers(ctx)?;
    let event_type = ctx.writer.load_type(ctx.injection_point.required_type());
    let provider = ctx
        .writer
        .new_instance(&runtime::event_provider_ctor(), &[event_type, qualifiers]);
    install_provider_field(ctx, provider);
    Ok(())
}

fn generate_resource(ctx: &mut GenerationContext<'_>) -> Result<(), GenError> {
    // For a resource site the required qualifiers carry all annotations
    // declared at the site, and every one goes through the literal cache.
    let annotations = collect_site_annotations(ctx)?;
    let resource_type = ctx.writer.load_type(ctx.injection_point.required_type());
    let provider = ctx.writer.new_instance(
        &runtime::resource_provider_ctor(),
        &[resource_type, annotations],
    );
    install_provider_field(ctx, provider);
    Ok(())
}

/// Emits the qualifier set of the injection point: builtin markers load
/// their precomputed singleton literal, everything else goes through the
/// shared annotation-literal cache.
fn collect_qualifiers(ctx: &mut GenerationContext<'_>) -> Result<ValueHandle, GenError> {
    let set = ctx.writer.new_set();
    let package = ctx.target_package();
    for qualifier in ctx.injection_point.required_qualifiers() {
        let value = match BuiltinQualifier::of(qualifier) {
            Some(builtin) => ctx
                .writer
                .read_static(&runtime::builtin_literal_field(builtin)),
            None => {
                let class = ctx.annotations.qualifier(qualifier.name()).ok_or_else(|| {
                    GenError::UnknownQualifier {
                        annotation: qualifier.name().clone(),
                        position: ctx.injection_point.position(),
                    }
                })?;
                check_declared_members(class, qualifier, ctx.injection_point.position())?;
                ctx.literals.process(ctx.writer, class, qualifier, &package)
            }
        };
        ctx.writer.set_add(set, value);
    }
    Ok(set)
}

/// Emits the full annotation set captured at the site, every entry
/// materialized through the literal cache. The annotation classes must be
/// present in the upstream index.
fn collect_site_annotations(ctx: &mut GenerationContext<'_>) -> Result<ValueHandle, GenError> {
    let set = ctx.writer.new_set();
    let package = ctx.target_package();
    for annotation in ctx.injection_point.required_qualifiers() {
        let class = ctx.annotations.class(annotation.name()).ok_or_else(|| {
            GenError::UnknownQualifier {
                annotation: annotation.name().clone(),
                position: ctx.injection_point.position(),
            }
        })?;
        check_declared_members(class, annotation, ctx.injection_point.position())?;
        let value = ctx.literals.process(ctx.writer, class, annotation, &package);
        ctx.writer.set_add(set, value);
    }
    Ok(set)
}

/// Checks every member value of the instance against the members the
/// indexed annotation class declares. A literal with an undeclared member
/// could never be materialized, so the mismatch is fatal.
fn check_declared_members(
    class: &AnnotationClass,
    instance: &QualifierInstance,
    position: u32,
) -> Result<(), GenError> {
    for member in instance.members().keys() {
        if !class.members().contains(member) {
            return Err(GenError::UndeclaredMember {
                annotation: class.name().clone(),
                member: member.clone(),
                position,
            });
        }
    }
    Ok(())
}

/// Wraps the constructed provider in a fixed-value supplier and installs
/// it under the context's field name on the owning component.
fn install_provider_field(ctx: &mut GenerationContext<'_>, provider: ValueHandle) {
    let supplier = ctx
        .writer
        .new_instance(&runtime::fixed_value_supplier_ctor(), &[provider]);
    let this = ctx.writer.load_self();
    let field = FieldRef::of(
        ctx.writer.class_name().clone(),
        ctx.provider_field,
        runtime::SUPPLIER.clone(),
    );
    ctx.writer.write_instance_field(&field, this, supplier);
    tracing::trace!(field = %field, "Installed provider field");
}
