//! Domain service for the Azure authenticator.

use authn_azure_sdk::{
    ApplicationIdentity, AuthenticationRequest, AuthenticationResult, AuthnAzureClient,
    AuthnAzureError, ResourceConstraint,
};

use super::application_identity::resolve_identity;
use super::resource_restrictions::ResourceRestrictions;
use super::xms_mirid::XmsMiridClaim;
use crate::config::AuthnAzureConfig;

/// Azure authenticator service.
///
/// Holds only configuration; each call computes over its own request data,
/// so one instance serves concurrent requests without synchronization.
#[derive(Debug, Clone)]
pub struct Service {
    config: AuthnAzureConfig,
}

impl Service {
    #[must_use]
    pub fn new(config: AuthnAzureConfig) -> Self {
        Self { config }
    }

    /// Validates the token identity in `request` against the restrictions
    /// the host declares for the requested service.
    ///
    /// The flow aborts at the first failure: restriction derivation (which
    /// cannot fail), claim decomposition, then ordered restriction
    /// comparison.
    ///
    /// # Errors
    ///
    /// - [`AuthnAzureError::ClaimFormatInvalid`] if the `xms_mirid` claim is
    ///   malformed
    /// - [`AuthnAzureError::InvalidApplicationIdentity`] if the resolved
    ///   identity fails a declared restriction
    pub fn validate_application_identity(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResult, AuthnAzureError> {
        let restrictions = ResourceRestrictions::from_annotations(
            &request.annotations,
            &request.service_id,
            &self.config.resource_types,
        );
        let claim = XmsMiridClaim::parse(&request.xms_mirid)?;
        let identity = resolve_identity(&claim, &request.oid);

        tracing::debug!(
            resource_name = %identity.resource_name(),
            "validating application identity"
        );
        validate_restrictions(restrictions.constraints(), &identity)?;
        tracing::debug!(
            resource_name = %identity.resource_name(),
            "validated application identity"
        );

        Ok(AuthenticationResult { identity })
    }
}

impl AuthnAzureClient for Service {
    fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResult, AuthnAzureError> {
        self.validate_application_identity(request)
    }
}

/// Ordered comparison of declared restrictions against the resolved identity.
///
/// The first unsatisfied restriction decides the failure; later ones are not
/// evaluated. An attribute the identity class does not carry never matches.
fn validate_restrictions(
    constraints: &[ResourceConstraint],
    identity: &ApplicationIdentity,
) -> Result<(), AuthnAzureError> {
    for constraint in constraints {
        if identity.restricted_value(constraint.resource_type()) != Some(constraint.value()) {
            return Err(AuthnAzureError::invalid_application_identity(
                constraint.resource_type(),
            ));
        }
    }
    Ok(())
}
