use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::DashMap;
use filament::{MemberValue, QualifierInstance, TypeName};

use crate::{ComponentWriter, ValueHandle};

/// Annotation class metadata as indexed by upstream analysis: the class
/// name plus the names of its members. Generation rejects any annotation
/// instance carrying a member outside this list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotationClass {
    name: TypeName,
    members: Vec<String>,
}

impl AnnotationClass {
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }
}

/// Read-only lookup of annotation classes collected by upstream analysis.
/// Qualifier annotations are registered explicitly; every registered
/// annotation is also visible through the plain class lookup.
#[derive(Default)]
pub struct AnnotationIndex {
    classes: HashMap<TypeName, AnnotationClass>,
    qualifiers: HashSet<TypeName>,
}

impl AnnotationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(mut self, class: AnnotationClass) -> Self {
        self.classes.insert(class.name().clone(), class);
        self
    }

    pub fn add_qualifier(mut self, class: AnnotationClass) -> Self {
        self.qualifiers.insert(class.name().clone());
        self.classes.insert(class.name().clone(), class);
        self
    }

    /// Looks up any indexed annotation class.
    pub fn class(&self, name: &TypeName) -> Option<&AnnotationClass> {
        self.classes.get(name)
    }

    /// Looks up an annotation class registered as a qualifier.
    pub fn qualifier(&self, name: &TypeName) -> Option<&AnnotationClass> {
        if !self.qualifiers.contains(name) {
            return None;
        }
        self.classes.get(name)
    }
}

/// Stable identity of one materialized annotation literal. Equal cache
/// keys observe the same id across all components of a build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LiteralId(u32);

impl LiteralId {
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LiteralId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "literal#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct LiteralKey {
    annotation: TypeName,
    members: BTreeMap<String, MemberValue>,
    package: String,
}

/// Cache of materialized annotation literals, shared across every
/// component of a build.
///
/// Components may be generated in parallel, so lookup-or-create is atomic:
/// two concurrent requests for the same (annotation, member values,
/// package) key always observe the identical [`LiteralId`], and no
/// duplicate literal is ever created for equal keys.
#[derive(Default)]
pub struct AnnotationLiteralCache {
    literals: DashMap<LiteralKey, LiteralId>,
    next: AtomicU32,
}

impl AnnotationLiteralCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a load of the literal for the given annotation instance,
    /// creating the literal on first use. The returned handle belongs to
    /// `writer`; the underlying literal is shared.
    pub fn process(
        &self,
        writer: &mut dyn ComponentWriter,
        class: &AnnotationClass,
        instance: &QualifierInstance,
        package: &str,
    ) -> ValueHandle {
        let id = self.literal_id(class, instance, package);
        writer.load_literal(id)
    }

    /// Looks up or atomically creates the shared literal id for the given
    /// annotation instance.
    pub fn literal_id(
        &self,
        class: &AnnotationClass,
        instance: &QualifierInstance,
        package: &str,
    ) -> LiteralId {
        let key = LiteralKey {
            annotation: class.name().clone(),
            members: instance.members().clone(),
            package: package.into(),
        };
        *self
            .literals
            .entry(key)
            .or_insert_with(|| LiteralId(self.next.fetch_add(1, Ordering::Relaxed)))
    }

    /// Number of distinct literals created so far.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}
