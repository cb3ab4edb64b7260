//! Red, Blue and Yellow.

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt};

use super::{
    gb::{self, ListEntry, ListLayout, PARTY_CAPACITY},
    GameBox, SaveContents, Trainer, ValidatedSection,
};
use crate::{
    error::{ChecksumError, RecordError},
    format::Generation,
    pokemon::{dv_block, DecodedRecord, Location, OriginalTrainer, Slot, Special, StatBlock},
    tables::LookupTables,
    text::decode_text,
    TrainerId,
};

pub const PARTY_RECORD_SIZE: usize = 44;
pub const BOX_RECORD_SIZE: usize = 33;

const BOXES_INITIALIZED: u8 = 0x80;
const CURRENT_BOX_MASK: u8 = 0x7F;

pub fn decode(
    section: &ValidatedSection<'_>,
    tables: &LookupTables,
) -> Result<SaveContents, ChecksumError> {
    let raw = section.raw();
    let layout = gb::layout_for(section.format())?;

    let money = raw
        .get(layout.money..layout.money + 3)
        .ok_or(ChecksumError::Truncated)?;
    let badges = raw.get(layout.badges).ok_or(ChecksumError::Truncated)?;
    let trainer = Trainer {
        name: gb::read_name(raw, layout.player_name, Generation::One)?,
        id: section.owner(),
        gender: None,
        money: gb::decode_bcd(money),
        time_played: gb::read_time_played(raw, layout.play_time, Generation::One)?,
        badges: Some(gb::count_badges(std::slice::from_ref(badges))),
        rival_name: Some(gb::read_name(raw, layout.rival_name, Generation::One)?),
    };
    log::debug!("Trainer {} ({})", trainer.name, trainer.id.public_id);

    let party_list = ListLayout {
        offset: layout.party,
        capacity: PARTY_CAPACITY,
        record_size: PARTY_RECORD_SIZE,
    };
    let party = gb::read_list(raw, party_list, |idx| Location::Party { slot: idx + 1 })?
        .iter()
        .map(|entry| Slot::from_result(entry.location, decode_record(entry, tables, true)))
        .collect();

    let box_state = *raw
        .get(layout.current_box_number)
        .ok_or(ChecksumError::Truncated)?;
    let current_box = usize::from(box_state & CURRENT_BOX_MASK);
    let boxes_initialized = box_state & BOXES_INITIALIZED != 0;
    log::trace!("Current box {current_box}, boxes initialized: {boxes_initialized}");

    let boxes = (0..layout.box_count())
        .map(|box_index| {
            let number = box_index as u8 + 1;
            // The bank copy of the open box is stale until the player switches boxes
            let offset = if box_index == current_box {
                layout.current_box
            } else {
                layout.box_offset(box_index)
            };
            let entries = if box_index == current_box || boxes_initialized {
                let list = ListLayout {
                    offset,
                    capacity: layout.box_capacity,
                    record_size: BOX_RECORD_SIZE,
                };
                gb::read_box(raw, list, number)
            } else {
                Vec::new()
            };
            GameBox {
                number,
                name: format!("BOX{number}"),
                slots: entries
                    .iter()
                    .map(|entry| {
                        Slot::from_result(entry.location, decode_record(entry, tables, false))
                    })
                    .collect(),
            }
        })
        .collect();

    Ok(SaveContents {
        trainer,
        party,
        boxes,
    })
}

fn decode_record(
    entry: &ListEntry<'_>,
    tables: &LookupTables,
    in_party: bool,
) -> Result<DecodedRecord, RecordError> {
    let mut cursor = Cursor::new(entry.record);
    let species_index = cursor.read_u8()?;
    let _current_hp = cursor.read_u16::<BigEndian>()?;
    let box_level = cursor.read_u8()?;
    let _status = cursor.read_u8()?;
    let _types = cursor.read_u16::<BigEndian>()?;
    let _catch_rate = cursor.read_u8()?;
    let mut move_indices = [0u8; 4];
    cursor.read_exact(&mut move_indices)?;
    let original_trainer_id = cursor.read_u16::<BigEndian>()?;
    let experience = cursor.read_u24::<BigEndian>()?;
    let mut evs = [0u16; 5];
    for ev in evs.iter_mut() {
        *ev = cursor.read_u16::<BigEndian>()?;
    }
    let dvs = cursor.read_u16::<BigEndian>()?;
    let mut pp = [0u8; 4];
    cursor.read_exact(&mut pp)?;
    let level = if in_party { cursor.read_u8()? } else { box_level };

    Ok(DecodedRecord {
        location: entry.location,
        species: super::species(tables, Generation::One, u16::from(species_index)),
        nickname: decode_text(entry.nickname, Generation::One),
        original_trainer: OriginalTrainer {
            name: decode_text(entry.original_trainer_name, Generation::One),
            id: TrainerId {
                public_id: original_trainer_id,
                secret_id: None,
            },
        },
        held_item: None,
        moves: super::moves(
            tables,
            &move_indices.map(u16::from),
            &pp.map(|pp| pp & 0x3F),
            |slot| pp[slot] >> 6,
        ),
        experience,
        level,
        ivs: dv_block(dvs),
        evs: StatBlock {
            hp: evs[0],
            attack: evs[1],
            defense: evs[2],
            speed: evs[3],
            special: Special::Unified(evs[4]),
        },
        is_egg: false,
        is_shiny: None,
        gender: None,
        nature: None,
        ability: None,
        personality_value: None,
        friendship: None,
        language: None,
        met_location: None,
        status: String::new(),
    })
}
