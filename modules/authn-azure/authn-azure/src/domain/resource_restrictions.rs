//! Host restriction derivation from policy annotations.
//!
//! For each configured restriction type, two annotation names are tried in
//! precedence order:
//!
//! 1. `authn-azure/<service_id>/<type>` - scoped to this authenticator
//!    instance, wins when present
//! 2. `authn-azure/<type>` - global fallback
//!
//! Within one name, the first annotation in policy order supplies the value;
//! the role store does not guarantee unique names. A type with no matching
//! annotation contributes no restriction.

use authn_azure_sdk::{Annotation, ResourceConstraint, ResourceType};

/// Restrictions a host declares for one authenticator instance.
///
/// Holds only the types that resolved to a value, in configured type order.
/// An empty set is valid and accepts any identity; declaring at least one
/// restriction is the operator's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRestrictions {
    constraints: Vec<ResourceConstraint>,
}

impl ResourceRestrictions {
    /// Derives the host's restrictions from its annotations.
    #[must_use]
    pub fn from_annotations(
        annotations: &[Annotation],
        service_id: &str,
        resource_types: &[ResourceType],
    ) -> Self {
        let mut constraints = Vec::with_capacity(resource_types.len());
        for &resource_type in resource_types {
            let service_scoped = resource_type.service_annotation_name(service_id);
            let global = resource_type.global_annotation_name();
            let value = annotation_value(annotations, &service_scoped)
                .or_else(|| annotation_value(annotations, &global));
            if let Some(value) = value {
                constraints.push(ResourceConstraint::new(resource_type, value));
            }
        }
        Self { constraints }
    }

    /// Derived restrictions, in configured type order.
    #[must_use]
    pub fn constraints(&self) -> &[ResourceConstraint] {
        &self.constraints
    }
}

/// First annotation in sequence order whose name matches.
///
/// Presence counts even when the value is empty; an empty service-scoped
/// value still shadows a global one.
fn annotation_value<'a>(annotations: &'a [Annotation], name: &str) -> Option<&'a str> {
    let value = annotations
        .iter()
        .find(|annotation| annotation.name == name)
        .map(|annotation| annotation.value.as_str())?;
    tracing::debug!(annotation = %name, "retrieved annotation value");
    Some(value)
}
