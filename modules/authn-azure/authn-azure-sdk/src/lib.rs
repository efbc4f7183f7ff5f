//! `AuthN` Azure SDK
//!
//! This crate provides the public API for the `authn_azure` module:
//!
//! - [`AuthnAzureClient`] - Public API trait for consumers
//! - [`AuthenticationRequest`] / [`AuthenticationResult`] - Request and verdict models
//! - [`ApplicationIdentity`] - Canonical identity resolved from token claims
//! - [`ResourceType`] / [`ResourceConstraint`] - Host restriction model
//! - [`AuthnAzureError`] - Error types
//!
//! ## Usage
//!
//! An authentication request handler fetches the host's annotations, then
//! hands them to the authenticator together with the claims of an
//! already signature-verified Azure AD token:
//!
//! ```ignore
//! use authn_azure_sdk::{AuthenticationRequest, AuthnAzureClient};
//!
//! let annotations = role_store.annotations(account, username)?;
//!
//! let result = authenticator.authenticate(&AuthenticationRequest {
//!     service_id: "prod".to_owned(),
//!     annotations,
//!     xms_mirid: token.claim("xms_mirid")?,
//!     oid: token.claim("oid")?,
//! })?;
//! audit.record(result.identity.resource_name());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod constraints;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::AuthnAzureClient;
pub use constraints::{AUTHENTICATOR_NAME, ResourceConstraint, ResourceType};
pub use error::AuthnAzureError;
pub use models::{
    Annotation, ApplicationIdentity, AssignedIdentity, AuthenticationRequest,
    AuthenticationResult,
};
