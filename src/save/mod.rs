//! Save validation and the per-generation decoders.

mod gb;
pub mod gen1;
pub mod gen2;
pub mod gen3;

use serde::Serialize;

use crate::{
    error::ChecksumError,
    format::{FormatId, Generation},
    pokemon::{Move, Slot, Species},
    tables::{LookupTables, UNKNOWN},
    TrainerId,
};

pub use gen3::Gen3Slot;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlayerGender {
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TimePlayed {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    pub name: String,
    pub id: TrainerId,
    /// Only Crystal and generation 3 store a player gender.
    pub gender: Option<PlayerGender>,
    pub money: u32,
    pub time_played: TimePlayed,
    /// Generations 1 and 2 only.
    pub badges: Option<u8>,
    /// Generations 1 and 2 only.
    pub rival_name: Option<String>,
}

/// One storage box as the game has it, before box mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct GameBox {
    /// Counts from 1.
    pub number: u8,
    pub name: String,
    pub slots: Vec<Slot>,
}

/// Everything one decoder extracts from a validated save.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveContents {
    pub trainer: Trainer,
    pub party: Vec<Slot>,
    pub boxes: Vec<GameBox>,
}

/// Which bytes of the save were validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Region {
    /// Game Boy saves: one checksummed range, `end` inclusive.
    GameBoy {
        start: usize,
        end: usize,
        checksum_offset: usize,
        stored: u16,
    },
    /// GBA saves: the newest slot whose 14 sections all validate.
    Gba(Gen3Slot),
}

/// The authoritative copy of a save's data. Only produced once its checksums
/// match the stored values.
#[derive(Clone, Debug)]
pub struct ValidatedSection<'a> {
    format: FormatId,
    raw: &'a [u8],
    region: Region,
    owner: TrainerId,
}

impl<'a> ValidatedSection<'a> {
    pub(crate) fn new(format: FormatId, raw: &'a [u8], region: Region, owner: TrainerId) -> Self {
        Self {
            format,
            raw,
            region,
            owner,
        }
    }

    pub fn format(&self) -> FormatId {
        self.format
    }

    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    /// The save owner's id, as stored with the trainer data.
    pub fn owner(&self) -> TrainerId {
        self.owner
    }

    /// Recomputes every checksum covering this section and compares it with the
    /// stored value.
    pub fn verify(&self) -> Result<(), ChecksumError> {
        match &self.region {
            Region::GameBoy {
                start,
                end,
                checksum_offset,
                stored,
            } => {
                let data = self
                    .raw
                    .get(*start..=*end)
                    .ok_or(ChecksumError::Truncated)?;
                let computed = match self.format.generation() {
                    Generation::One => u16::from(crate::checksum::gen1_checksum(data)),
                    _ => crate::checksum::gen2_checksum(data),
                };
                let on_disk = gb::read_stored_checksum(self.raw, self.format, *checksum_offset)?;
                if computed != *stored || on_disk != *stored {
                    return Err(ChecksumError::Mismatch {
                        stored: on_disk,
                        computed,
                    });
                }
                Ok(())
            }
            Region::Gba(slot) => slot.verify(self.raw, self.format),
        }
    }
}

fn check_size(raw: &[u8], format: FormatId) -> Result<(), ChecksumError> {
    if raw.len() < format.min_size() {
        return Err(ChecksumError::TooShort {
            expected: format.min_size(),
            actual: raw.len(),
        });
    }
    Ok(())
}

/// Validates a generation 1 or 2 save: main checksum plus the party list.
pub fn validate_game_boy(
    raw: &[u8],
    format: FormatId,
) -> Result<ValidatedSection<'_>, ChecksumError> {
    check_size(raw, format)?;
    gb::validate(raw, format)
}

/// Validates a generation 3 save and picks its newest complete slot.
pub fn validate_gba(raw: &[u8], format: FormatId) -> Result<ValidatedSection<'_>, ChecksumError> {
    check_size(raw, format)?;
    gen3::validate(raw, format)
}

/// Finds and validates the authoritative data of `raw` laid out as `format`.
pub fn locate_valid_section(
    raw: &[u8],
    format: FormatId,
) -> Result<ValidatedSection<'_>, ChecksumError> {
    match format.generation() {
        Generation::One | Generation::Two => validate_game_boy(raw, format),
        Generation::Three => validate_gba(raw, format),
    }
}

/// Runs the decoder that matches the section's format.
pub fn decode_section(
    section: &ValidatedSection<'_>,
    tables: &LookupTables,
) -> Result<SaveContents, ChecksumError> {
    match section.format().generation() {
        Generation::One => gen1::decode(section, tables),
        Generation::Two => gen2::decode(section, tables),
        Generation::Three => gen3::decode(section, tables),
    }
}

fn species(tables: &LookupTables, generation: Generation, index: u16) -> Species {
    let national_dex = tables.national_dex(generation, index);
    Species {
        national_dex,
        index,
        name: national_dex
            .map(|national| tables.species_name(national))
            .unwrap_or(UNKNOWN)
            .to_owned(),
    }
}

/// Known moves only; empty move slots hold index 0.
fn moves(
    tables: &LookupTables,
    indices: &[u16],
    pp: &[u8],
    pp_ups: impl Fn(usize) -> u8,
) -> Vec<Move> {
    indices
        .iter()
        .zip(pp)
        .enumerate()
        .filter(|(_, (index, _))| **index != 0)
        .map(|(slot, (index, pp))| Move {
            index: *index,
            name: tables.move_name(*index).to_owned(),
            pp: *pp,
            pp_ups: pp_ups(slot),
        })
        .collect()
}
