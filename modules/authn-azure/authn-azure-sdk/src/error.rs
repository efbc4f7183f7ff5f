//! Error types for the `AuthN` Azure module.

use thiserror::Error;

use crate::constraints::ResourceType;

/// Errors that can occur on the Azure authentication path.
///
/// Every variant is a terminal authentication failure; nothing is retried.
/// Display strings are internal diagnostics for operator logs - the embedding
/// handler must map each variant to its generic authentication-denied
/// response rather than echo it to the token holder.
#[derive(Debug, Error)]
pub enum AuthnAzureError {
    /// The host identity referenced by the request does not exist.
    ///
    /// Raised by the caller's role lookup, never by the authenticator
    /// itself; it lives in this enum so the whole call path shares one
    /// error surface.
    #[error("role '{role}' not found")]
    RoleNotFound {
        /// Identifier the role store was queried with.
        role: String,
    },

    /// The `xms_mirid` claim does not decompose into exactly four
    /// well-formed segment pairs with the required keys present.
    #[error("xms_mirid claim is not in a valid format: {reason}")]
    ClaimFormatInvalid {
        /// What made the claim malformed.
        reason: String,
    },

    /// The resolved identity does not satisfy a declared host restriction.
    #[error("token identity does not match the '{resource_type}' restriction")]
    InvalidApplicationIdentity {
        /// The restriction that failed. For operator logs only.
        resource_type: ResourceType,
    },
}

impl AuthnAzureError {
    #[must_use]
    pub fn role_not_found(role: impl Into<String>) -> Self {
        Self::RoleNotFound { role: role.into() }
    }

    #[must_use]
    pub fn claim_format_invalid(reason: impl Into<String>) -> Self {
        Self::ClaimFormatInvalid {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn invalid_application_identity(resource_type: ResourceType) -> Self {
        Self::InvalidApplicationIdentity { resource_type }
    }
}
