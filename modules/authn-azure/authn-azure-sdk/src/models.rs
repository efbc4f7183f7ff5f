//! Domain models for the `AuthN` Azure module.

use serde::{Deserialize, Serialize};

use crate::constraints::ResourceType;

/// A name/value policy tag attached to a Conjur host identity.
///
/// The role store does not guarantee name uniqueness; lookups take the
/// first annotation in sequence order whose name matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation key, e.g. `authn-azure/prod/subscription-id`.
    pub name: String,
    /// Annotation value, compared verbatim against identity attributes.
    pub value: String,
}

impl Annotation {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One authentication attempt against a configured Azure authenticator.
///
/// The caller resolves the host and fetches its annotations before building
/// the request; the claim values come from an already signature-verified
/// Azure AD token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationRequest {
    /// Which configured authenticator instance is processing the request.
    pub service_id: String,
    /// Host annotations in policy order.
    pub annotations: Vec<Annotation>,
    /// The token's `xms_mirid` claim, verbatim.
    pub xms_mirid: String,
    /// The token's object-id (`oid`) claim.
    pub oid: String,
}

/// Result of a successful authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResult {
    /// The identity that satisfied every declared restriction. Available to
    /// the caller for audit records.
    pub identity: ApplicationIdentity,
}

/// Identity class of an Azure managed identity.
///
/// Exactly one class applies per token; modeling the split as an enum keeps
/// an identity from ever carrying both attributes, or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignedIdentity {
    /// Reusable identity granted to resources; named by the identity path
    /// embedded in the claim.
    UserAssigned {
        /// Name of the user-assigned managed identity.
        resource_name: String,
    },
    /// Identity bound to a single resource instance; named by the token's
    /// own object-id.
    SystemAssigned {
        /// The `oid` claim of the authenticating token.
        resource_name: String,
    },
}

impl AssignedIdentity {
    /// Resource name carried by either identity class.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        match self {
            Self::UserAssigned { resource_name } | Self::SystemAssigned { resource_name } => {
                resource_name
            }
        }
    }
}

/// Normalized Azure resource identity extracted from a verified token.
///
/// This is the object host restrictions are compared against. It is built
/// per request and never outlives the authentication call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationIdentity {
    subscription_id: String,
    resource_group: String,
    assigned: AssignedIdentity,
}

impl ApplicationIdentity {
    /// Identity of a user-assigned managed identity.
    #[must_use]
    pub fn user_assigned(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        resource_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            assigned: AssignedIdentity::UserAssigned {
                resource_name: resource_name.into(),
            },
        }
    }

    /// Identity of a system-assigned managed identity, anchored to the
    /// token's `oid` claim.
    #[must_use]
    pub fn system_assigned(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        oid: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            assigned: AssignedIdentity::SystemAssigned {
                resource_name: oid.into(),
            },
        }
    }

    /// Azure subscription the identity belongs to.
    #[must_use]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Resource group the identity belongs to.
    #[must_use]
    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    /// Identity class and its resource name.
    #[must_use]
    pub const fn assigned(&self) -> &AssignedIdentity {
        &self.assigned
    }

    /// Resource name of the identity, whichever class it is.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        self.assigned.resource_name()
    }

    /// Value this identity exposes for a restriction type.
    ///
    /// Returns `None` when the identity class does not carry the attribute,
    /// e.g. a `user-assigned-identity` restriction checked against a
    /// system-assigned identity. A `None` never satisfies a restriction.
    #[must_use]
    pub fn restricted_value(&self, resource_type: ResourceType) -> Option<&str> {
        match resource_type {
            ResourceType::SubscriptionId => Some(&self.subscription_id),
            ResourceType::ResourceGroup => Some(&self.resource_group),
            ResourceType::UserAssignedIdentity => match &self.assigned {
                AssignedIdentity::UserAssigned { resource_name } => Some(resource_name),
                AssignedIdentity::SystemAssigned { .. } => None,
            },
            ResourceType::SystemAssignedIdentity => match &self.assigned {
                AssignedIdentity::SystemAssigned { resource_name } => Some(resource_name),
                AssignedIdentity::UserAssigned { .. } => None,
            },
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn user_identity() -> ApplicationIdentity {
        ApplicationIdentity::user_assigned("sub-1", "rg-1", "workload-identity")
    }

    fn system_identity() -> ApplicationIdentity {
        ApplicationIdentity::system_assigned("sub-1", "rg-1", "oid-1")
    }

    #[test]
    fn shared_attributes_are_exposed_for_both_classes() {
        for identity in [user_identity(), system_identity()] {
            assert_eq!(
                identity.restricted_value(ResourceType::SubscriptionId),
                Some("sub-1")
            );
            assert_eq!(
                identity.restricted_value(ResourceType::ResourceGroup),
                Some("rg-1")
            );
        }
    }

    #[test]
    fn class_attribute_is_absent_on_the_other_class() {
        assert_eq!(
            user_identity().restricted_value(ResourceType::UserAssignedIdentity),
            Some("workload-identity")
        );
        assert_eq!(
            user_identity().restricted_value(ResourceType::SystemAssignedIdentity),
            None
        );
        assert_eq!(
            system_identity().restricted_value(ResourceType::SystemAssignedIdentity),
            Some("oid-1")
        );
        assert_eq!(
            system_identity().restricted_value(ResourceType::UserAssignedIdentity),
            None
        );
    }

    #[test]
    fn resource_name_follows_the_identity_class() {
        assert_eq!(user_identity().resource_name(), "workload-identity");
        assert_eq!(system_identity().resource_name(), "oid-1");
    }
}
