//! Blackbox authentication flow tests.
//!
//! Drives the module through `Arc<dyn AuthnAzureClient>` exactly as an
//! authentication request handler would: resolve the host's annotations
//! from a role store, then hand them to the authenticator together with
//! the token claims.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::sync::Arc;

use authn_azure::{AuthnAzureConfig, Service};
use authn_azure_sdk::{
    Annotation, AuthenticationRequest, AuthenticationResult, AuthnAzureClient, AuthnAzureError,
    ResourceType,
};

const SERVICE_ID: &str = "prod";
const SUBSCRIPTION_ID: &str = "c8b2cf86-f618-4c1e-a0a2-3e1e53805de4";
const OID: &str = "b54b2048-2b32-4051-9d2e-5631bdd2a11f";

const VM_HOST: &str = "azure-apps/payments-vm";
const WORKLOAD_HOST: &str = "azure-apps/reporting-workload";

fn vm_claim() -> String {
    format!(
        "/subscriptions/{SUBSCRIPTION_ID}/resourcegroups/conjur-prod/providers/Microsoft.Compute/virtualMachines/payments-vm"
    )
}

fn workload_claim() -> String {
    format!(
        "/subscriptions/{SUBSCRIPTION_ID}/resourcegroups/conjur-prod/providers/Microsoft.ManagedIdentity/userAssignedIdentities/reporting-identity"
    )
}

/// Stub of the role store a request handler fetches annotations from.
struct HostStore {
    hosts: HashMap<String, Vec<Annotation>>,
}

impl HostStore {
    fn new() -> Self {
        let mut hosts = HashMap::new();
        hosts.insert(
            VM_HOST.to_owned(),
            vec![
                Annotation::new("authn-azure/prod/subscription-id", SUBSCRIPTION_ID),
                Annotation::new("authn-azure/prod/resource-group", "conjur-prod"),
                Annotation::new("authn-azure/prod/system-assigned-identity", OID),
            ],
        );
        hosts.insert(
            WORKLOAD_HOST.to_owned(),
            vec![
                Annotation::new("authn-azure/subscription-id", "00000000-global-override"),
                Annotation::new("authn-azure/prod/subscription-id", SUBSCRIPTION_ID),
                Annotation::new(
                    "authn-azure/prod/user-assigned-identity",
                    "reporting-identity",
                ),
            ],
        );
        Self { hosts }
    }

    fn annotations(&self, host: &str) -> Result<Vec<Annotation>, AuthnAzureError> {
        self.hosts
            .get(host)
            .cloned()
            .ok_or_else(|| AuthnAzureError::role_not_found(host))
    }
}

fn authenticator() -> Arc<dyn AuthnAzureClient> {
    Arc::new(Service::new(AuthnAzureConfig::default()))
}

/// What the embedding handler does per request, sharing one error surface
/// between the role lookup and the authenticator.
fn authenticate_host(
    store: &HostStore,
    client: &Arc<dyn AuthnAzureClient>,
    host: &str,
    xms_mirid: &str,
    oid: &str,
) -> Result<AuthenticationResult, AuthnAzureError> {
    let annotations = store.annotations(host)?;
    client.authenticate(&AuthenticationRequest {
        service_id: SERVICE_ID.to_owned(),
        annotations,
        xms_mirid: xms_mirid.to_owned(),
        oid: oid.to_owned(),
    })
}

#[test]
fn vm_host_authenticates_with_its_system_identity() {
    let result = authenticate_host(&HostStore::new(), &authenticator(), VM_HOST, &vm_claim(), OID)
        .unwrap();
    assert_eq!(result.identity.resource_name(), OID);
    assert_eq!(result.identity.subscription_id(), SUBSCRIPTION_ID);
}

#[test]
fn workload_host_authenticates_with_its_user_assigned_identity() {
    // The service-scoped subscription annotation shadows the bogus global
    // one, so the claim's subscription still matches.
    let result = authenticate_host(
        &HostStore::new(),
        &authenticator(),
        WORKLOAD_HOST,
        &workload_claim(),
        OID,
    )
    .unwrap();
    assert_eq!(result.identity.resource_name(), "reporting-identity");
}

#[test]
fn unknown_host_surfaces_role_not_found() {
    let err = authenticate_host(
        &HostStore::new(),
        &authenticator(),
        "azure-apps/decommissioned",
        &vm_claim(),
        OID,
    )
    .unwrap_err();
    assert!(
        matches!(err, AuthnAzureError::RoleNotFound { role } if role == "azure-apps/decommissioned")
    );
}

#[test]
fn token_from_another_resource_group_is_rejected() {
    let claim = format!(
        "/subscriptions/{SUBSCRIPTION_ID}/resourcegroups/sandbox/providers/Microsoft.Compute/virtualMachines/payments-vm"
    );
    let err = authenticate_host(&HostStore::new(), &authenticator(), VM_HOST, &claim, OID)
        .unwrap_err();
    assert!(matches!(
        err,
        AuthnAzureError::InvalidApplicationIdentity {
            resource_type: ResourceType::ResourceGroup
        }
    ));
}

#[test]
fn system_token_cannot_match_a_user_assigned_restriction() {
    // The workload host pins a user-assigned identity name; a token from a
    // plain VM resolves to a system-assigned identity and carries no such
    // attribute.
    let err = authenticate_host(
        &HostStore::new(),
        &authenticator(),
        WORKLOAD_HOST,
        &vm_claim(),
        OID,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        AuthnAzureError::InvalidApplicationIdentity {
            resource_type: ResourceType::UserAssignedIdentity
        }
    ));
}

#[test]
fn truncated_claim_is_a_format_error() {
    let err = authenticate_host(
        &HostStore::new(),
        &authenticator(),
        VM_HOST,
        &format!("/subscriptions/{SUBSCRIPTION_ID}/resourcegroups/conjur-prod"),
        OID,
    )
    .unwrap_err();
    assert!(matches!(err, AuthnAzureError::ClaimFormatInvalid { .. }));
}
