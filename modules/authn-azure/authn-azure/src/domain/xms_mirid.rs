//! `xms_mirid` claim decomposition.
//!
//! The claim encodes the Azure resource path the identity was granted to:
//!
//! ```text
//! /subscriptions/<id>/resourcegroups/<group>/providers/<provider>/<resourceType>/<resourceName>
//! ```
//!
//! Splitting on `/` and pairing the segments yields the claim fields. The
//! first segment is always discarded (a leading slash makes it empty), a
//! duplicate key keeps its first position and takes its last value, and the
//! trailing pair names the Azure resource type and resource name.
//!
//! Pairing outcomes:
//!
//! | Claim shape                                  | Outcome            |
//! |----------------------------------------------|--------------------|
//! | 4 fields, required keys present              | parsed             |
//! | odd segment count (dangling key)             | `UnpairedSegment`  |
//! | fewer or more than 4 fields after collapse   | `FieldCount`       |
//! | `subscriptions`/`resourcegroups`/`providers` key absent | `MissingField` |

use authn_azure_sdk::AuthnAzureError;
use thiserror::Error;

const SUBSCRIPTIONS_KEY: &str = "subscriptions";
const RESOURCE_GROUPS_KEY: &str = "resourcegroups";
const PROVIDERS_KEY: &str = "providers";

/// Field count of a well-formed claim, after duplicate collapse.
const EXPECTED_FIELD_COUNT: usize = 4;

/// Structural defects of an `xms_mirid` claim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimFormatError {
    /// The segment list ends with a key that has no value.
    #[error("segment '{0}' has no paired value")]
    UnpairedSegment(String),

    /// The claim does not decompose into exactly four fields.
    #[error("expected 4 field pairs, found {0}")]
    FieldCount(usize),

    /// One of the fixed keys is absent.
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),
}

impl From<ClaimFormatError> for AuthnAzureError {
    fn from(err: ClaimFormatError) -> Self {
        Self::claim_format_invalid(err.to_string())
    }
}

/// A structurally valid `xms_mirid` claim.
///
/// Construction through [`XmsMiridClaim::parse`] guarantees exactly four
/// fields with the `subscriptions`, `resourcegroups`, and `providers` keys
/// present, so the named accessors are infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmsMiridClaim {
    subscription_id: String,
    resource_group: String,
    provider: String,
    trailing: (String, String),
}

impl XmsMiridClaim {
    /// Decomposes a raw `xms_mirid` claim into its fields.
    ///
    /// # Errors
    ///
    /// Returns a [`ClaimFormatError`] when the claim does not decompose
    /// into exactly four key/value pairs with all required keys present.
    pub fn parse(xms_mirid: &str) -> Result<Self, ClaimFormatError> {
        let segments: Vec<&str> = xms_mirid.split('/').skip(1).collect();
        if !segments.len().is_multiple_of(2) {
            let dangling = segments.last().copied().unwrap_or("");
            return Err(ClaimFormatError::UnpairedSegment(dangling.to_owned()));
        }

        let mut fields: Vec<(String, String)> = Vec::with_capacity(EXPECTED_FIELD_COUNT);
        for pair in segments.chunks_exact(2) {
            let (key, value) = (pair[0], pair[1]);
            match fields.iter_mut().find(|(name, _)| name.as_str() == key) {
                Some((_, existing)) => value.clone_into(existing),
                None => fields.push((key.to_owned(), value.to_owned())),
            }
        }

        if fields.len() != EXPECTED_FIELD_COUNT {
            return Err(ClaimFormatError::FieldCount(fields.len()));
        }

        let subscription_id = field_value(&fields, SUBSCRIPTIONS_KEY)?;
        let resource_group = field_value(&fields, RESOURCE_GROUPS_KEY)?;
        let provider = field_value(&fields, PROVIDERS_KEY)?;
        let trailing = fields
            .last()
            .cloned()
            .ok_or(ClaimFormatError::FieldCount(0))?;

        Ok(Self {
            subscription_id,
            resource_group,
            provider,
            trailing,
        })
    }

    /// Value of the `subscriptions` field.
    #[must_use]
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    /// Value of the `resourcegroups` field.
    #[must_use]
    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    /// Value of the `providers` field.
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// The trailing field: Azure resource-type segment and resource name.
    #[must_use]
    pub fn trailing_field(&self) -> (&str, &str) {
        (&self.trailing.0, &self.trailing.1)
    }
}

fn field_value(fields: &[(String, String)], key: &'static str) -> Result<String, ClaimFormatError> {
    fields
        .iter()
        .find(|(name, _)| name.as_str() == key)
        .map(|(_, value)| value.clone())
        .ok_or(ClaimFormatError::MissingField(key))
}
