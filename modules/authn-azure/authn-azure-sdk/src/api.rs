//! Public API trait for the `AuthN` Azure module.
//!
//! This trait defines the interface an authentication request handler uses
//! to validate an Azure token identity against a host's declared
//! restrictions. The module's service implements it.

use crate::error::AuthnAzureError;
use crate::models::{AuthenticationRequest, AuthenticationResult};

/// Public API trait for the Azure authenticator.
///
/// The whole flow is in-memory computation over the request contents, so
/// the trait is synchronous; implementations are shared behind `Arc` and
/// safe to call from concurrent requests:
///
/// ```ignore
/// let authn: Arc<dyn AuthnAzureClient> = app.azure_authenticator();
///
/// let result = authn.authenticate(&request)?;
/// let identity = result.identity;
/// ```
pub trait AuthnAzureClient: Send + Sync {
    /// Validate the token identity in `request` against the host's
    /// declared restrictions.
    ///
    /// # Errors
    ///
    /// - `ClaimFormatInvalid` if the `xms_mirid` claim is malformed
    /// - `InvalidApplicationIdentity` if the resolved identity fails a
    ///   declared restriction
    fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResult, AuthnAzureError>;
}
