//! Configuration for the `AuthN` Azure module.

use authn_azure_sdk::ResourceType;
use serde::Deserialize;

/// Azure authenticator configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthnAzureConfig {
    /// Restriction types honored when deriving host restrictions, in
    /// validation order. Defaults to every supported type.
    pub resource_types: Vec<ResourceType>,
}

impl Default for AuthnAzureConfig {
    fn default() -> Self {
        Self {
            resource_types: ResourceType::ALL.to_vec(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn default_config_supports_every_type_in_order() {
        let config = AuthnAzureConfig::default();
        assert_eq!(config.resource_types, ResourceType::ALL.to_vec());
    }

    #[test]
    fn empty_section_falls_back_to_defaults() {
        let config: AuthnAzureConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config.resource_types, ResourceType::ALL.to_vec());
    }

    #[test]
    fn resource_types_accept_kebab_case_names() {
        let config: AuthnAzureConfig = serde_json::from_value(serde_json::json!({
            "resource_types": ["subscription-id", "resource-group"]
        }))
        .unwrap();
        assert_eq!(
            config.resource_types,
            vec![ResourceType::SubscriptionId, ResourceType::ResourceGroup]
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_value::<AuthnAzureConfig>(serde_json::json!({
            "provider_uri": "https://sts.windows.net/tenant/"
        }));
        assert!(result.is_err());
    }
}
