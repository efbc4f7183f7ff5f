//! Host restriction model for Azure-authenticated workloads.
//!
//! Operators constrain which Azure identities may authenticate as a given
//! Conjur host by attaching annotations to the host, one per restricted
//! resource attribute. Annotation names come in two forms:
//!
//! - `authn-azure/<service_id>/<resource_type>` - scoped to one authenticator
//!   instance, takes precedence
//! - `authn-azure/<resource_type>` - global fallback
//!
//! The annotation value is the exact string the authenticating token's
//! resolved identity must carry for that attribute.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Annotation namespace for this authenticator.
pub const AUTHENTICATOR_NAME: &str = "authn-azure";

/// Azure identity attribute an operator can restrict.
///
/// Serialized with the kebab-case names used in annotation keys, e.g.
/// `subscription-id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    /// Azure subscription the resource lives in.
    SubscriptionId,
    /// Resource group the resource lives in.
    ResourceGroup,
    /// Name of a user-assigned managed identity.
    UserAssignedIdentity,
    /// Object id of a system-assigned managed identity.
    SystemAssignedIdentity,
}

impl ResourceType {
    /// All supported restriction types, in canonical validation order.
    pub const ALL: [Self; 4] = [
        Self::SubscriptionId,
        Self::ResourceGroup,
        Self::UserAssignedIdentity,
        Self::SystemAssignedIdentity,
    ];

    /// Kebab-case name used in annotation keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SubscriptionId => "subscription-id",
            Self::ResourceGroup => "resource-group",
            Self::UserAssignedIdentity => "user-assigned-identity",
            Self::SystemAssignedIdentity => "system-assigned-identity",
        }
    }

    /// Annotation name scoped to one authenticator instance.
    #[must_use]
    pub fn service_annotation_name(self, service_id: &str) -> String {
        format!("{AUTHENTICATOR_NAME}/{service_id}/{}", self.as_str())
    }

    /// Annotation name that applies to every authenticator instance.
    #[must_use]
    pub fn global_annotation_name(self) -> String {
        format!("{AUTHENTICATOR_NAME}/{}", self.as_str())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a restriction type name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource restriction type '{0}'")]
pub struct UnknownResourceType(String);

impl FromStr for ResourceType {
    type Err = UnknownResourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subscription-id" => Ok(Self::SubscriptionId),
            "resource-group" => Ok(Self::ResourceGroup),
            "user-assigned-identity" => Ok(Self::UserAssignedIdentity),
            "system-assigned-identity" => Ok(Self::SystemAssignedIdentity),
            other => Err(UnknownResourceType(other.to_owned())),
        }
    }
}

/// One required identity attribute value, derived from host annotations.
///
/// Restrictions are compared in sequence; every one must hold for the
/// identity to be accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConstraint {
    resource_type: ResourceType,
    value: String,
}

impl ResourceConstraint {
    #[must_use]
    pub fn new(resource_type: ResourceType, value: impl Into<String>) -> Self {
        Self {
            resource_type,
            value: value.into(),
        }
    }

    /// Identity attribute this restriction applies to.
    #[must_use]
    pub const fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// Exact value the identity attribute must carry.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
