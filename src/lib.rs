//! Decoder for generation 1 to 3 Pokémon save files.
//!
//! [`decode`] takes the raw bytes of a save, works out which game wrote it,
//! picks the authoritative copy of the data, and returns the trainer, party and
//! boxes in one record model regardless of generation.

pub mod checksum;
pub mod detect;
pub mod error;
pub mod format;
pub mod mapping;
pub mod message;
pub mod pk3;
pub mod pokemon;
pub mod save;
pub mod tables;
pub mod text;
pub mod worker;

use serde::Serialize;

pub use detect::{detect, detect_format};
pub use error::{ChecksumError, DecodeError, RecordError};
pub use format::{FormatId, GameSelection, Generation};
pub use mapping::{BoxMapping, DecodeResult, StoredBox, DEFAULT_STATUS, PARTY_STATUS};
pub use pokemon::{DecodedRecord, Location, Slot};
pub use save::{SaveContents, Trainer, ValidatedSection};
pub use tables::LookupTables;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerId {
    pub public_id: u16,
    /// Only generation 3 stores a secret id.
    pub secret_id: Option<u16>,
}

impl TrainerId {
    /// Splits the 32-bit id generation 3 stores: public id in the low half.
    pub fn from_gen3(trainer_id: u32) -> Self {
        Self {
            public_id: (trainer_id & 0xffff) as u16,
            secret_id: Some((trainer_id >> 16) as u16),
        }
    }
}

/// Caller configuration for one decode call.
#[derive(Clone, Debug, Default)]
pub struct DecodeOptions {
    pub selection: GameSelection,
    pub box_mappings: Vec<BoxMapping>,
}

/// Decodes a save with the built-in lookup tables.
pub fn decode(raw: &[u8], options: &DecodeOptions) -> Result<DecodeResult, DecodeError> {
    decode_with_tables(raw, options, LookupTables::builtin())
}

/// Decodes a save: detect the format, decode the chosen section, then sort
/// boxes into the caller's buckets.
pub fn decode_with_tables(
    raw: &[u8],
    options: &DecodeOptions,
    tables: &LookupTables,
) -> Result<DecodeResult, DecodeError> {
    let section = detect(raw, options.selection)?;
    let format = section.format();
    log::info!("Decoding save as {format}");

    let contents = save::decode_section(&section, tables).map_err(|source| {
        log::error!("Validated {format} save could not be decoded: {source}");
        DecodeError::Checksum { format, source }
    })?;

    Ok(mapping::project(format, contents, &options.box_mappings))
}
