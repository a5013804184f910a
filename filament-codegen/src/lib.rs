//! # filament-codegen
//!
//! Provider code generation for the filament build-time dependency
//! injection core: turns a resolved builtin provider into the emitted
//! code that constructs the provider, wraps it in a deferred supplier and
//! installs it as a field on the owning generated component.
//!
//! The generator never assembles low-level instructions itself. It drives
//! the [`ComponentWriter`] contract, and annotation values are
//! materialized through the build-wide [`AnnotationLiteralCache`] so equal
//! annotation values share one literal across all components.
//!
//! ## Example
//!
//! ```rust
//! use filament::{InjectionPointInfo, InjectionPointKind, TargetInfo, TypeName, TypeRef, names};
//! use filament_codegen::{
//!     AnnotationIndex, AnnotationLiteralCache, GeneratorConfig, Op, RecordingWriter,
//!     install_builtin,
//! };
//!
//! let ip = InjectionPointInfo::new(
//!     InjectionPointKind::Normal,
//!     TypeRef::raw(names::BEAN_MANAGER.clone()),
//! )
//! .with_member("manager")
//! .owned_by("orders.OrderService");
//! let target = TargetInfo::bean("orders.OrderService");
//!
//! let mut writer = RecordingWriter::new(TypeName::new("orders.OrderService_Bean"));
//! let literals = AnnotationLiteralCache::new();
//! let annotations = AnnotationIndex::new();
//!
//! let installed = install_builtin(
//!     &ip,
//!     &target,
//!     "beanManagerProvider1",
//!     &mut writer,
//!     &literals,
//!     &annotations,
//!     &GeneratorConfig::default(),
//! )
//! .unwrap();
//!
//! assert!(installed);
//! assert!(writer.ops().iter().any(|op| matches!(op, Op::WriteField { .. })));
//! ```

mod builder;
mod config;
mod context;
mod generate;
mod literals;
pub mod runtime;

pub use builder::*;
pub use config::*;
pub use context::*;
pub use generate::*;
pub use literals::*;
