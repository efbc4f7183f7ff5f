//! Azure Managed-Identity Authenticator
//!
//! Validates the resource identity embedded in a decoded Azure AD token
//! against restrictions that operators declare as annotations on a Conjur
//! host. The flow per request: derive the host's restrictions, decompose
//! the token's `xms_mirid` claim, resolve the identity class
//! (user-assigned vs. system-assigned), then require every declared
//! restriction to match exactly.
//!
//! Token signature verification is the caller's concern; this crate only
//! sees claim values from an already-verified token.
//!
//! Provides [`Service`], the [`AuthnAzureClient`](authn_azure_sdk::AuthnAzureClient)
//! implementation an authentication request handler calls per request.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use authn_azure::{AuthnAzureConfig, Service};
//! use authn_azure_sdk::{Annotation, AuthenticationRequest, AuthnAzureClient};
//!
//! let authenticator: Arc<dyn AuthnAzureClient> =
//!     Arc::new(Service::new(AuthnAzureConfig::default()));
//!
//! let request = AuthenticationRequest {
//!     service_id: "prod".to_owned(),
//!     annotations: vec![Annotation::new(
//!         "authn-azure/prod/subscription-id",
//!         "c8b2cf86-f618-4c1e-a0a2-3e1e53805de4",
//!     )],
//!     xms_mirid: "/subscriptions/c8b2cf86-f618-4c1e-a0a2-3e1e53805de4/resourcegroups/prod-rg/providers/Microsoft.Compute/virtualMachines/payments-vm".to_owned(),
//!     oid: "b54b2048-2b32-4051-9d2e-5631bdd2a11f".to_owned(),
//! };
//!
//! let result = authenticator.authenticate(&request)?;
//! assert_eq!(
//!     result.identity.resource_name(),
//!     "b54b2048-2b32-4051-9d2e-5631bdd2a11f"
//! );
//! # Ok::<(), authn_azure_sdk::AuthnAzureError>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::AuthnAzureConfig;
pub use domain::Service;
