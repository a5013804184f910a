//! # filament
//!
//! Build-time dependency injection core: the metadata model for injection
//! points and their owning targets, plus resolution of the closed set of
//! builtin providers the container supplies without a user-declared bean.
//!
//! Everything here is statically decidable from collected metadata.
//! Resolution never scans a classpath, never reflects and never falls back
//! to a runtime lookup: descriptors are immutable snapshots produced by
//! upstream source analysis, and resolving one is a pure function.
//!
//! ## Core Concepts
//!
//! - **InjectionPointInfo**: one site in user code requesting a dependency
//! - **TargetInfo**: the bean, interceptor or observer method declaring it
//! - **BuiltinProvider**: the closed, ordered registry of ambient provider
//!   kinds, each pairing a raw type identity with a matcher predicate
//! - **Supplier / LazyValue**: the deferred holders generated components
//!   keep their providers behind
//!
//! ## Resolution
//!
//! ```rust
//! use filament::{
//!     BuiltinProvider, InjectionPointInfo, InjectionPointKind, QualifierInstance, TypeRef, names,
//! };
//!
//! // An `Instance<T>` site resolves to the builtin lazy handle no matter
//! // which qualifiers are declared.
//! let ip = InjectionPointInfo::new(
//!     InjectionPointKind::Normal,
//!     TypeRef::raw(names::INSTANCE.clone()),
//! )
//! .with_qualifier(QualifierInstance::of("orders.Priority"));
//!
//! assert_eq!(
//!     BuiltinProvider::resolve(&ip),
//!     Some(BuiltinProvider::InstanceHandle),
//! );
//!
//! // An ordinary site falls through to user-bean resolution.
//! let ip = InjectionPointInfo::new(
//!     InjectionPointKind::Normal,
//!     TypeRef::raw("orders.OrderRepository"),
//! );
//! assert!(!BuiltinProvider::resolves_to(&ip));
//! ```
//!
//! Matching walks [`BuiltinProvider::VARIANTS`] in declaration order and
//! the first match wins; [`BuiltinProvider::resolve_unambiguous`] reports
//! overlapping matchers instead of masking them.
//!
//! Code generation for resolved providers lives in the `filament-codegen`
//! crate.

mod builtin;
mod injection_point;
mod qualifier;
mod supplier;
mod target;
mod types;

pub use builtin::*;
pub use injection_point::*;
pub use qualifier::*;
pub use supplier::*;
pub use target::*;
pub use types::*;

/// Type alias for boxed errors that can be sent across threads.
pub type StdError = Box<dyn std::error::Error + Send + Sync>;
