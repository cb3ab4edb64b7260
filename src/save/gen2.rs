//! Gold, Silver and Crystal.

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt};

use super::{
    gb::{self, ListEntry, ListLayout, PARTY_CAPACITY},
    GameBox, PlayerGender, SaveContents, Trainer, ValidatedSection,
};
use crate::{
    error::{ChecksumError, RecordError},
    format::Generation,
    pokemon::{
        dv_block, DecodedRecord, Gender, Item, Location, OriginalTrainer, Slot, Special, StatBlock,
    },
    tables::LookupTables,
    text::decode_text,
    TrainerId,
};

pub const PARTY_RECORD_SIZE: usize = 48;
pub const BOX_RECORD_SIZE: usize = 32;
const BOX_NAME_LENGTH: usize = 9;
const CURRENT_BOX_MASK: u8 = 0x0F;

/// Species list marker for an egg. The record itself holds the hatching species.
pub const EGG_MARKER: u8 = 0xFD;

/// Attack DVs that make a shiny when the other three DVs are all 10.
const SHINY_ATTACK_DVS: [u16; 8] = [2, 3, 6, 7, 10, 11, 14, 15];

pub fn decode(
    section: &ValidatedSection<'_>,
    tables: &LookupTables,
) -> Result<SaveContents, ChecksumError> {
    let raw = section.raw();
    let layout = gb::layout_for(section.format())?;

    let mut cursor = Cursor::new(raw);
    cursor.set_position(layout.money as u64);
    let money = cursor.read_u24::<BigEndian>()?;
    // Johto badges then Kanto badges
    let badges = raw
        .get(layout.badges..layout.badges + 2)
        .ok_or(ChecksumError::Truncated)?;
    let gender = match layout.player_gender {
        Some(offset) => {
            determine_player_gender(*raw.get(offset).ok_or(ChecksumError::Truncated)?)
        }
        None => None,
    };
    let trainer = Trainer {
        name: gb::read_name(raw, layout.player_name, Generation::Two)?,
        id: section.owner(),
        gender,
        money,
        time_played: gb::read_time_played(raw, layout.play_time, Generation::Two)?,
        badges: Some(gb::count_badges(badges)),
        rival_name: Some(gb::read_name(raw, layout.rival_name, Generation::Two)?),
    };
    log::debug!("Trainer {} ({})", trainer.name, trainer.id.public_id);

    let party_list = ListLayout {
        offset: layout.party,
        capacity: PARTY_CAPACITY,
        record_size: PARTY_RECORD_SIZE,
    };
    let party = gb::read_list(raw, party_list, |idx| Location::Party { slot: idx + 1 })?
        .iter()
        .map(|entry| Slot::from_result(entry.location, decode_record(entry, tables)))
        .collect();

    let current_box = usize::from(
        raw.get(layout.current_box_number)
            .ok_or(ChecksumError::Truncated)?
            & CURRENT_BOX_MASK,
    );
    log::trace!("Current box {current_box}");

    let mut boxes = Vec::with_capacity(layout.box_count());
    for box_index in 0..layout.box_count() {
        let number = box_index as u8 + 1;
        let list = ListLayout {
            offset: if box_index == current_box {
                layout.current_box
            } else {
                layout.box_offset(box_index)
            },
            capacity: layout.box_capacity,
            record_size: BOX_RECORD_SIZE,
        };
        let slots = gb::read_box(raw, list, number)
            .iter()
            .map(|entry| Slot::from_result(entry.location, decode_record(entry, tables)))
            .collect();
        boxes.push(GameBox {
            number,
            name: box_name(raw, layout.box_names, box_index)?,
            slots,
        });
    }

    Ok(SaveContents {
        trainer,
        party,
        boxes,
    })
}

fn box_name(
    raw: &[u8],
    box_names: Option<usize>,
    box_index: usize,
) -> Result<String, ChecksumError> {
    let name = match box_names {
        Some(offset) => {
            let start = offset + box_index * BOX_NAME_LENGTH;
            let bytes = raw
                .get(start..start + BOX_NAME_LENGTH)
                .ok_or(ChecksumError::Truncated)?;
            decode_text(bytes, Generation::Two)
        }
        None => String::new(),
    };
    if name.is_empty() {
        Ok(format!("BOX{}", box_index + 1))
    } else {
        Ok(name)
    }
}

fn determine_player_gender(data: u8) -> Option<PlayerGender> {
    match data {
        0x00 => Some(PlayerGender::Male),
        0x01 => Some(PlayerGender::Female),
        _ => {
            log::warn!("Invalid player gender: 0x{data:x}");
            None
        }
    }
}

fn is_shiny(ivs: &StatBlock) -> bool {
    ivs.defense == 10
        && ivs.speed == 10
        && ivs.special == Special::Unified(10)
        && SHINY_ATTACK_DVS.contains(&ivs.attack)
}

fn decode_record(
    entry: &ListEntry<'_>,
    tables: &LookupTables,
) -> Result<DecodedRecord, RecordError> {
    let mut cursor = Cursor::new(entry.record);
    let species_index = cursor.read_u8()?;
    let held_item = cursor.read_u8()?;
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
    let friendship = cursor.read_u8()?;
    let _pokerus = cursor.read_u8()?;
    let _caught_data = cursor.read_u16::<BigEndian>()?;
    let level = cursor.read_u8()?;

    let species = super::species(tables, Generation::Two, u16::from(species_index));
    let ivs = dv_block(dvs);
    let gender = species
        .national_dex
        .and_then(|national| tables.species_info(national))
        .map(|info| Gender::from_attack_dv(ivs.attack as u8, info.gender_threshold));

    Ok(DecodedRecord {
        location: entry.location,
        species,
        nickname: decode_text(entry.nickname, Generation::Two),
        original_trainer: OriginalTrainer {
            name: decode_text(entry.original_trainer_name, Generation::Two),
            id: TrainerId {
                public_id: original_trainer_id,
                secret_id: None,
            },
        },
        held_item: (held_item != 0).then(|| Item {
            index: u16::from(held_item),
            name: tables
                .item_name(Generation::Two, u16::from(held_item))
                .to_owned(),
        }),
        moves: super::moves(
            tables,
            &move_indices.map(u16::from),
            &pp.map(|pp| pp & 0x3F),
            |slot| pp[slot] >> 6,
        ),
        experience,
        level,
        is_shiny: Some(is_shiny(&ivs)),
        ivs,
        evs: StatBlock {
            hp: evs[0],
            attack: evs[1],
            defense: evs[2],
            speed: evs[3],
            special: Special::Unified(evs[4]),
        },
        is_egg: entry.species_marker == EGG_MARKER,
        gender,
        nature: None,
        ability: None,
        personality_value: None,
        friendship: Some(friendship),
        language: None,
        met_location: None,
        status: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(species: u8, dvs: [u8; 2]) -> [u8; PARTY_RECORD_SIZE] {
        let mut record = [0u8; PARTY_RECORD_SIZE];
        record[0x00] = species;
        record[0x01] = 0x12;
        record[0x02] = 33;
        record[0x06..0x08].copy_from_slice(&54321u16.to_be_bytes());
        record[0x15..0x17].copy_from_slice(&dvs);
        record[0x17] = 35;
        record[0x1B] = 70;
        record[0x1F] = 5;
        record
    }

    fn entry<'a>(record: &'a [u8], species_marker: u8) -> ListEntry<'a> {
        ListEntry {
            location: Location::Party { slot: 1 },
            species_marker,
            record,
            original_trainer_name: &[0x50],
            nickname: &[0x50],
        }
    }

    #[test]
    fn test_shiny_and_gender() {
        let tables = LookupTables::builtin();
        // Ampharos, 1 in 2 female: attack DV 10 is above the 7 cutoff
        let raw = record(181, [0xAA, 0xAA]);
        let decoded = decode_record(&entry(&raw, 181), tables).unwrap();
        assert_eq!(decoded.species.name, "Ampharos");
        assert_eq!(decoded.is_shiny, Some(true));
        assert_eq!(decoded.gender, Some(Gender::Male));
        assert_eq!(decoded.friendship, Some(70));
        assert_eq!(decoded.level, 5);
        assert_eq!(decoded.original_trainer.id.public_id, 54321);
        assert_eq!(decoded.moves[0].name, "Tackle");

        let raw = record(181, [0x2A, 0xAA]);
        let decoded = decode_record(&entry(&raw, 181), tables).unwrap();
        assert_eq!(decoded.is_shiny, Some(true));
        assert_eq!(decoded.gender, Some(Gender::Female));

        let raw = record(181, [0xAA, 0xAB]);
        assert_eq!(
            decode_record(&entry(&raw, 181), tables).unwrap().is_shiny,
            Some(false)
        );

        let raw = record(181, [0x1A, 0xAA]);
        assert_eq!(
            decode_record(&entry(&raw, 181), tables).unwrap().is_shiny,
            Some(false)
        );
    }

    #[test]
    fn test_genderless_and_held_item() {
        let tables = LookupTables::builtin();
        // Magnemite
        let raw = record(81, [0x00, 0x00]);
        let decoded = decode_record(&entry(&raw, 81), tables).unwrap();
        assert_eq!(decoded.gender, Some(Gender::Genderless));
        let item = decoded.held_item.unwrap();
        assert_eq!(item.index, 0x12);
        assert_eq!(item.name, tables.item_name(Generation::Two, 0x12));
    }

    #[test]
    fn test_egg_marker() {
        let tables = LookupTables::builtin();
        let raw = record(152, [0x00, 0x00]);
        let decoded = decode_record(&entry(&raw, EGG_MARKER), tables).unwrap();
        assert!(decoded.is_egg);
        assert_eq!(decoded.species.name, "Chikorita");
        assert!(!decode_record(&entry(&raw, 152), tables).unwrap().is_egg);
    }

    #[test]
    fn test_box_names() {
        let mut raw = vec![0x50u8; 2 * BOX_NAME_LENGTH];
        raw[BOX_NAME_LENGTH..BOX_NAME_LENGTH + 3].copy_from_slice(&[0x81, 0x8E, 0x97]);
        assert_eq!(box_name(&raw, Some(0), 0).unwrap(), "BOX1");
        assert_eq!(box_name(&raw, Some(0), 1).unwrap(), "BOX");
        assert_eq!(box_name(&raw, None, 4).unwrap(), "BOX5");
    }
}
