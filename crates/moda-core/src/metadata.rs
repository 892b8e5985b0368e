//! Token metadata documents for profiles, tracks and releases.
//!
//! These are the JSON documents pinned to IPFS and referenced by token URIs.
//! Only [`ProfileMetadata`] is user-authored, so it is the only one with
//! field-level validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::address::is_valid_address;

/// Errors from parsing or validating metadata documents.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid metadata: {}", summarize(.0))]
    Invalid(Vec<FieldError>),
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path of the field, e.g. `profile.banner`.
    pub field: &'static str,
    pub message: &'static str,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Social links and banner shown on an artist profile page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLinks {
    pub banner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    /// Payout address; `"0x"` means "not set".
    #[serde(
        default,
        rename = "evmAddress",
        alias = "address",
        skip_serializing_if = "Option::is_none"
    )]
    pub evm_address: Option<String>,
}

/// Profile token metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub name: String,
    pub image: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_url: Option<String>,
    pub profile: ProfileLinks,
}

impl ProfileMetadata {
    /// Parse and validate a metadata document.
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        let metadata: Self = serde_json::from_str(json)?;
        metadata.validate()?;
        Ok(metadata)
    }

    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<(), MetadataError> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(FieldError { field: "name", message: "Name is required" });
        }
        required_url(&mut errors, "image", &self.image, "Image is required", "Invalid image url");
        if self.description.is_empty() {
            errors.push(FieldError {
                field: "description",
                message: "Description is required",
            });
        }
        if let Some(animation_url) = &self.animation_url {
            if !is_url(animation_url) {
                errors.push(FieldError { field: "animation_url", message: "Invalid url" });
            }
        }

        let links = &self.profile;
        required_url(
            &mut errors,
            "profile.banner",
            &links.banner,
            "Banner is required",
            "Invalid banner url",
        );
        optional_url(&mut errors, "profile.spotify", links.spotify.as_deref());
        optional_url(&mut errors, "profile.instagram", links.instagram.as_deref());
        optional_url(&mut errors, "profile.twitter", links.twitter.as_deref());
        if let Some(addr) = links.evm_address.as_deref() {
            if addr != "0x" && !is_valid_address(addr) {
                errors.push(FieldError {
                    field: "profile.evmAddress",
                    message: "Invalid EVM address",
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(MetadataError::Invalid(errors))
        }
    }
}

fn is_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

fn required_url(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    missing: &'static str,
    invalid: &'static str,
) {
    if value.is_empty() {
        errors.push(FieldError { field, message: missing });
    } else if !is_url(value) {
        errors.push(FieldError { field, message: invalid });
    }
}

// Empty string is how the form clears a link.
fn optional_url(errors: &mut Vec<FieldError>, field: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() && !is_url(value) {
            errors.push(FieldError { field, message: "Invalid url" });
        }
    }
}

/// A `trait_type` / `value` pair in token attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute<V> {
    pub trait_type: String,
    pub value: V,
}

/// Track token metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub animation_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute<String>>,
}

/// A release attribute: either a list (track URIs) or a single value (genre).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Many(Vec<String>),
    One(String),
}

/// Release (drop) token metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMetadata {
    pub name: String,
    pub image: String,
    pub description: String,
    pub animation_url: String,
    pub attributes: Vec<Attribute<AttributeValue>>,
}

/// Track as entered in the release form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackData {
    pub track_name: String,
    pub track_image: String,
    pub track_uri: String,
}

/// Release form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReleaseData {
    pub release_name: String,
    pub release_image: String,
    pub release_description: String,
    pub release_genre: String,
    pub royalty_amount: f64,
    pub total_supply: String,
}

/// A track registered on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredTrack {
    pub track_id: String,
    pub track_uri: String,
}

/// A release held by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseData {
    pub amount_owned: u64,
    pub release_id: u64,
    pub release_uri: String,
}
