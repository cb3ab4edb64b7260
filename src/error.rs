use serde::Serialize;

use crate::format::FormatId;

/// Failure of a whole decode call.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("invalid size: {actual} bytes, need at least {minimum}")]
    InvalidSize { actual: usize, minimum: usize },

    #[error("unrecognized save file")]
    FormatNotDetected { rejected: Vec<(FormatId, ChecksumError)> },

    #[error("unsupported region: file looks like {family} ({detail})")]
    UnsupportedRegion {
        family: &'static str,
        detail: &'static str,
    },

    #[error("save does not validate as {format}: {source}")]
    Checksum {
        format: FormatId,
        #[source]
        source: ChecksumError,
    },
}

impl DecodeError {
    /// Stable name of the failure kind, used in response messages.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::InvalidSize { .. } => "InvalidSize",
            DecodeError::FormatNotDetected { .. } => "FormatNotDetected",
            DecodeError::UnsupportedRegion { .. } => "UnsupportedRegion",
            DecodeError::Checksum { .. } => "ChecksumError",
        }
    }
}

/// Reason a single format candidate was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("file too short: {actual} bytes, layout needs {expected}")]
    TooShort { expected: usize, actual: usize },

    #[error("checksum mismatch: stored {stored:04x}, computed {computed:04x}")]
    Mismatch { stored: u16, computed: u16 },

    #[error("inconsistent structure: {0}")]
    Structure(&'static str),

    #[error("no complete save slot")]
    NoValidSlot,

    #[error("slot belongs to {found}")]
    VariantMismatch { found: FormatId },

    #[error("truncated read inside validated region")]
    Truncated,
}

impl From<std::io::Error> for ChecksumError {
    fn from(_: std::io::Error) -> Self {
        ChecksumError::Truncated
    }
}

/// Failure of one stored record. Never aborts the surrounding decode.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RecordError {
    #[error("record checksum mismatch: stored {stored:04x}, computed {computed:04x}")]
    ChecksumMismatch { stored: u16, computed: u16 },

    #[error("record is flagged as a bad egg")]
    BadEgg,

    #[error("record data is truncated")]
    Truncated,
}

impl From<std::io::Error> for RecordError {
    fn from(_: std::io::Error) -> Self {
        RecordError::Truncated
    }
}
