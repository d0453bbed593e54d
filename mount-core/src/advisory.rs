//! Interface to the optional advisory service that suggests border values from
//! a free-text description of the photo.
//!
//! The core never talks to the service. It defines the request and response
//! shapes, parses responses, and overlays a suggestion onto a config. What the
//! suggested numbers mean is not checked.

use serde::{Deserialize, Serialize};

use crate::config::MountConfig;
use crate::error::AdvisoryError;
use crate::types::{BorderConfig, MountMode};
use crate::units::DisplayUnit;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryRequest {
    pub description: String,
    pub config: MountConfig,
    pub unit: DisplayUnit,
}

impl AdvisoryRequest {
    pub fn new(description: impl Into<String>, config: MountConfig, unit: DisplayUnit) -> Self {
        AdvisoryRequest {
            description: description.into(),
            config,
            unit,
        }
    }
}

/// Partial config proposed by the service. Applying it always switches the
/// mount to [`MountMode::CustomBorders`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedConfig {
    pub photo_border: f64,
    pub mount_offset: f64,
    pub manual_borders: BorderConfig,
    #[serde(default = "custom_borders")]
    pub mode: MountMode,
}

fn custom_borders() -> MountMode {
    MountMode::CustomBorders
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryResponse {
    pub suggestion: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub suggested_config: Option<SuggestedConfig>,
}

impl AdvisoryResponse {
    /// Config to use after this reply: the suggestion overlaid onto `config`,
    /// or `config` unchanged when the reply carries no values.
    pub fn overlay(&self, config: &MountConfig) -> MountConfig {
        match &self.suggested_config {
            Some(s) => {
                log::info!(
                    "applying advisory suggestion: border {:.2}, offset {:.2}",
                    s.photo_border,
                    s.mount_offset
                );
                config.apply_suggestion(s)
            }
            None => {
                log::info!("reply carries no suggested values; config unchanged");
                config.clone()
            }
        }
    }
}

pub trait Advisor {
    fn advise(&self, request: &AdvisoryRequest) -> Result<AdvisoryResponse, AdvisoryError>;
}

impl MountConfig {
    /// Overlay a suggestion: photo border, offset and all four manual borders
    /// are replaced and the mode is forced to custom borders. Everything else
    /// is kept.
    pub fn apply_suggestion(&self, s: &SuggestedConfig) -> MountConfig {
        MountConfig {
            photo_border: s.photo_border,
            mount_offset: s.mount_offset,
            manual_borders: s.manual_borders,
            mode: MountMode::CustomBorders,
            ..self.clone()
        }
    }
}

/// Ask `advisor` and overlay whatever it suggests onto the request's config.
///
/// On failure the caller keeps its current config; a response without a
/// suggestion returns the config unchanged.
pub fn request_suggestion(
    advisor: &dyn Advisor,
    request: &AdvisoryRequest,
) -> Result<(AdvisoryResponse, MountConfig), AdvisoryError> {
    let response = advisor.advise(request)?;
    let config = response.overlay(&request.config);
    Ok((response, config))
}

/// Parse a service reply. Replies are often JSON wrapped in prose or a fenced
/// code block, so the outermost `{ ... }` span is taken.
pub fn parse_advisory_response(text: &str) -> Result<AdvisoryResponse, AdvisoryError> {
    let start = text.find('{');
    let end = text.rfind('}');
    let body = match (start, end) {
        (Some(s), Some(e)) if s < e => &text[s..=e],
        _ => {
            return Err(AdvisoryError::MalformedResponse(
                "no JSON object found".to_string(),
            ));
        }
    };
    let resp: AdvisoryResponse = serde_json::from_str(body)
        .map_err(|e| AdvisoryError::MalformedResponse(e.to_string()))?;
    if let Some(s) = &resp.suggested_config
        && s.mode != MountMode::CustomBorders
    {
        return Err(AdvisoryError::MalformedResponse(
            "suggested mode must be CustomBorders".to_string(),
        ));
    }
    Ok(resp)
}
