//! Request and response messages for running a decode in another context.

use serde::{Deserialize, Serialize};

use crate::{
    error::DecodeError,
    format::{FormatId, GameSelection},
    mapping::{BoxMapping, DecodeResult, StoredBox},
    pokemon::Slot,
    save::Trainer,
    DecodeOptions,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeRequest {
    pub save: Vec<u8>,
    #[serde(default)]
    pub selected_game: GameSelection,
    #[serde(default)]
    pub box_mappings: Vec<BoxMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl DecodeRequest {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn options(&self) -> DecodeOptions {
        DecodeOptions {
            selection: self.selected_game,
            box_mappings: self.box_mappings.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetectedGame {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResponseError {
    pub kind: String,
    pub message: String,
}

impl From<&DecodeError> for ResponseError {
    fn from(err: &DecodeError) -> Self {
        let message = match err {
            DecodeError::FormatNotDetected { rejected } => {
                let reasons = rejected
                    .iter()
                    .map(|(format, reason)| format!("{}: {reason}", format.tag()))
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("{err} ({reasons})")
            }
            _ => err.to_string(),
        };
        Self {
            kind: err.kind().to_owned(),
            message,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeResponse {
    pub detected_game: Option<DetectedGame>,
    pub detected_save_format: Option<FormatId>,
    pub trainer: Option<Trainer>,
    pub party: Vec<Slot>,
    pub boxes: Vec<StoredBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

impl DecodeResponse {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<DecodeResult> for DecodeResponse {
    fn from(result: DecodeResult) -> Self {
        Self {
            detected_game: Some(DetectedGame {
                name: result.detected_format.game_name().to_owned(),
            }),
            detected_save_format: Some(result.detected_format),
            trainer: Some(result.trainer),
            party: result.party,
            boxes: result.boxes,
            error: None,
        }
    }
}

impl From<DecodeError> for DecodeResponse {
    fn from(err: DecodeError) -> Self {
        Self {
            error: Some(ResponseError::from(&err)),
            ..Default::default()
        }
    }
}

/// Runs one decode and packs the outcome into a response.
pub fn handle_request(request: &DecodeRequest) -> DecodeResponse {
    let file_name = request.file_name.as_deref().unwrap_or("<unnamed>");
    log::debug!("Decoding {file_name}, {} bytes", request.save.len());
    match crate::decode(&request.save, &request.options()) {
        Ok(result) => result.into(),
        Err(err) => {
            log::warn!("Failed to decode {file_name}: {err}");
            err.into()
        }
    }
}
