use filament::{InjectionPointInfo, TargetInfo};

use crate::{AnnotationIndex, AnnotationLiteralCache, ComponentWriter, GeneratorConfig};

/// Everything one provider installation needs: the owning component's
/// writer, the shared literal cache and annotation index, the injection
/// point, the owning target and the field name chosen for the provider.
///
/// Created once per resolved injection point and discarded after use. The
/// writer borrow is exclusive; the cache and index are the only state
/// shared with other components.
pub struct GenerationContext<'a> {
    pub writer: &'a mut dyn ComponentWriter,
    pub literals: &'a AnnotationLiteralCache,
    pub annotations: &'a AnnotationIndex,
    pub injection_point: &'a InjectionPointInfo,
    pub target: &'a TargetInfo,
    pub provider_field: &'a str,
    pub config: &'a GeneratorConfig,
}

impl GenerationContext<'_> {
    /// Package literals for this component land in: the component's own
    /// package, or the configured fallback for unpackaged components.
    pub fn target_package(&self) -> String {
        let package = self.writer.class_name().package();
        if package.is_empty() {
            self.config.default_package.clone().unwrap_or_default()
        } else {
            package.into()
        }
    }
}
