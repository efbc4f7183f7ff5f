//! Domain layer for the Azure authenticator.
//!
//! Pure, per-request computation: every type here is built from the request,
//! compared, and dropped. Nothing is shared across requests.

pub mod application_identity;
pub mod resource_restrictions;
pub mod service;
pub mod xms_mirid;

pub use resource_restrictions::ResourceRestrictions;
pub use service::Service;
pub use xms_mirid::XmsMiridClaim;
