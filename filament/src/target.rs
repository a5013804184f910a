use std::fmt;

use serde::{Deserialize, Serialize};

/// The category of component that owns an injection point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    Bean,
    Interceptor,
    ObserverMethod,
}

/// The component that declares an injection point: a bean, an interceptor
/// or an observer method. Carried next to the injection point during
/// generation so target-dependent providers can validate their
/// preconditions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetInfo {
    identifier: String,
    kind: TargetKind,
}

impl TargetInfo {
    pub fn bean(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            kind: TargetKind::Bean,
        }
    }

    pub fn interceptor(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            kind: TargetKind::Interceptor,
        }
    }

    pub fn observer(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            kind: TargetKind::ObserverMethod,
        }
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for TargetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.identifier, self.kind)
    }
}
