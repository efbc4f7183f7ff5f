//! Identity-class resolution for parsed token claims.
//!
//! Azure issues managed identities in two classes, and the claim's provider
//! segment decides which applies. `Microsoft.ManagedIdentity` marks a
//! user-assigned identity, named by the identity path embedded in the claim.
//! Every other provider (`Microsoft.Compute` included) resolves to a
//! system-assigned identity anchored to the token's own `oid` claim, a value
//! the identity provider controls and the claim string cannot forge.

use authn_azure_sdk::ApplicationIdentity;

use super::xms_mirid::XmsMiridClaim;

/// Provider segment marking a user-assigned managed identity.
const MANAGED_IDENTITY_PROVIDER: &str = "Microsoft.ManagedIdentity";

/// Resolves the identity class and canonical attributes of a parsed claim.
#[must_use]
pub fn resolve_identity(claim: &XmsMiridClaim, oid: &str) -> ApplicationIdentity {
    let (resource_type, resource_name) = claim.trailing_field();
    tracing::debug!(
        provider = %claim.provider(),
        resource_type = %resource_type,
        "extracting identity from token claims"
    );

    if claim.provider() == MANAGED_IDENTITY_PROVIDER {
        ApplicationIdentity::user_assigned(
            claim.subscription_id(),
            claim.resource_group(),
            resource_name,
        )
    } else {
        ApplicationIdentity::system_assigned(claim.subscription_id(), claim.resource_group(), oid)
    }
}
