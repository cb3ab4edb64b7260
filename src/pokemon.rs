//! The generation-agnostic record model every decoder produces.

use num_derive::FromPrimitive;
use serde::Serialize;

use crate::{error::RecordError, tables::Nature, TrainerId};

/// Where a record was stored in the save.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Location {
    /// `slot` counts from 1.
    Party { slot: u8 },
    /// `number` and `slot` count from 1, as the games display them.
    Box { number: u8, slot: u8 },
}

impl Location {
    pub fn box_number(&self) -> Option<u8> {
        match self {
            Location::Party { .. } => None,
            Location::Box { number, .. } => Some(*number),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Party { slot } => write!(f, "party slot {slot}"),
            Location::Box { number, slot } => write!(f, "box {number} slot {slot}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub national_dex: Option<u16>,
    /// The index as stored in the save, which is not the national number in
    /// generations 1 and 3.
    pub index: u16,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Move {
    pub index: u16,
    pub name: String,
    pub pp: u8,
    pub pp_ups: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Item {
    pub index: u16,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Ability {
    pub index: u8,
    pub name: String,
}

/// Generations 1 and 2 have a single special stat; generation 3 splits it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Special {
    Unified(u16),
    Split { attack: u16, defense: u16 },
}

/// One value per stat, used for both individual values and effort values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub speed: u16,
    pub special: Special,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

impl Gender {
    /// Gender from a generation 3 personality value and a species threshold.
    pub fn from_personality(personality_value: u32, threshold: u8) -> Self {
        match threshold {
            255 => Gender::Genderless,
            254 => Gender::Female,
            0 => Gender::Male,
            threshold if ((personality_value & 0xFF) as u8) < threshold => Gender::Female,
            _ => Gender::Male,
        }
    }

    /// Gender from a generation 2 attack DV. The species threshold scales down to
    /// the 4-bit DV range.
    pub fn from_attack_dv(attack_dv: u8, threshold: u8) -> Self {
        match threshold {
            255 => Gender::Genderless,
            254 => Gender::Female,
            0 => Gender::Male,
            threshold if attack_dv <= threshold >> 4 => Gender::Female,
            _ => Gender::Male,
        }
    }
}

/// Language byte of a generation 3 record. 6 is unused by the games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive, Serialize)]
pub enum Language {
    Japanese = 1,
    English = 2,
    French = 3,
    Italian = 4,
    German = 5,
    Spanish = 7,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OriginalTrainer {
    pub name: String,
    pub id: TrainerId,
}

/// One decoded Pokémon, whatever generation it came from. Fields a generation
/// does not store are `None`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedRecord {
    pub location: Location,
    pub species: Species,
    pub nickname: String,
    pub original_trainer: OriginalTrainer,
    pub held_item: Option<Item>,
    pub moves: Vec<Move>,
    pub experience: u32,
    pub level: u8,
    pub ivs: StatBlock,
    pub evs: StatBlock,
    pub is_egg: bool,
    pub is_shiny: Option<bool>,
    pub gender: Option<Gender>,
    pub nature: Option<Nature>,
    pub ability: Option<Ability>,
    pub personality_value: Option<u32>,
    pub friendship: Option<u8>,
    pub language: Option<Language>,
    /// Location id where a generation 3 record was met or hatched.
    pub met_location: Option<u8>,
    /// Destination bucket assigned by the box mapping.
    pub status: String,
}

impl DecodedRecord {
    /// True when the save's owner caught this one, rather than receiving it in
    /// a trade. Generations without a secret id compare the public id only.
    pub fn is_owned_by(&self, trainer: &TrainerId) -> bool {
        let ot = &self.original_trainer.id;
        ot.public_id == trainer.public_id
            && match (ot.secret_id, trainer.secret_id) {
                (Some(ours), Some(theirs)) => ours == theirs,
                _ => true,
            }
    }
}

/// A record that could not be read. It keeps its place so a caller can show
/// the gap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnreadableRecord {
    pub location: Location,
    pub error: RecordError,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Slot {
    Occupied(DecodedRecord),
    Unreadable(UnreadableRecord),
}

impl Slot {
    /// Turns a per-record decode result into a slot, degrading failures.
    pub fn from_result(location: Location, result: Result<DecodedRecord, RecordError>) -> Self {
        match result {
            Ok(record) => Slot::Occupied(record),
            Err(error) => {
                log::warn!("Record at {location} is unreadable: {error}");
                Slot::Unreadable(UnreadableRecord { location, error })
            }
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Slot::Occupied(record) => record.location,
            Slot::Unreadable(unreadable) => unreadable.location,
        }
    }

    pub fn record(&self) -> Option<&DecodedRecord> {
        match self {
            Slot::Occupied(record) => Some(record),
            Slot::Unreadable(_) => None,
        }
    }

    pub fn is_unreadable(&self) -> bool {
        matches!(self, Slot::Unreadable(_))
    }
}

/// Individual values stored as 4-bit DVs, as generations 1 and 2 do. The HP DV
/// is built from the low bit of the other four.
pub fn dv_block(dvs: u16) -> StatBlock {
    let attack = (dvs >> 12) & 0xF;
    let defense = (dvs >> 8) & 0xF;
    let speed = (dvs >> 4) & 0xF;
    let special = dvs & 0xF;
    StatBlock {
        hp: ((attack & 1) << 3) | ((defense & 1) << 2) | ((speed & 1) << 1) | (special & 1),
        attack,
        defense,
        speed,
        special: Special::Unified(special),
    }
}
