//! Ruby, Sapphire, Emerald, FireRed and LeafGreen.
//!
//! A save holds two slots of 14 sections each. Every write goes to the older
//! slot, rotating which physical section holds which section id, so sections are
//! located by the id stored in their footer.

use std::io::{Cursor, Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};
use num_traits::FromPrimitive;

use super::{GameBox, PlayerGender, Region, SaveContents, TimePlayed, Trainer, ValidatedSection};
use crate::{
    checksum::gen3_section_checksum,
    error::{ChecksumError, RecordError},
    format::{format_for_game_code, FormatId, GbaLayout, Generation},
    pk3::{self, Pk3, PK3_SIZE_BOX, PK3_SIZE_PARTY},
    pokemon::{
        Ability, DecodedRecord, Gender, Item, Language, Location, OriginalTrainer, Slot, Special,
        StatBlock,
    },
    tables::{LookupTables, Nature},
    text::decode_text,
    TrainerId,
};

const SAVE_A_OFFSET: usize = 0x0000;
const SAVE_B_OFFSET: usize = 0xE000;
const SECTION_SIZE: usize = 0x1000;
const SECTION_COUNT: usize = 14;
const SECTION_DATA_SIZE: usize = 3968;
const SECTION_ID_OFFSET: u64 = 0x0FF4;
const SECTION_SIGNATURE: u32 = 0x0801_2025;

const GAME_CODE_OFFSET: u64 = 0x00AC;
const PARTY_CAPACITY: u32 = 6;

const PC_BUFFER_SECTIONS: std::ops::RangeInclusive<usize> = 5..=13;
const BOX_COUNT: usize = 14;
const BOX_CAPACITY: usize = 30;
const BOX_RECORDS_OFFSET: usize = 4;
const BOX_NAMES_OFFSET: usize = 0x8344;
const BOX_NAME_LENGTH: usize = 9;

/// A slot whose sections all validated. `section_offsets` is indexed by
/// section id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gen3Slot {
    pub address: usize,
    pub save_counter: u32,
    pub section_offsets: [usize; SECTION_COUNT],
}

struct SectionFooter {
    id: u16,
    checksum: u16,
    signature: u32,
    save_counter: u32,
}

fn read_footer(raw: &[u8], section_offset: usize) -> Result<SectionFooter, ChecksumError> {
    let mut cursor = Cursor::new(raw);
    cursor.seek(SeekFrom::Start(section_offset as u64 + SECTION_ID_OFFSET))?;
    Ok(SectionFooter {
        id: cursor.read_u16::<LittleEndian>()?,
        checksum: cursor.read_u16::<LittleEndian>()?,
        signature: cursor.read_u32::<LittleEndian>()?,
        save_counter: cursor.read_u32::<LittleEndian>()?,
    })
}

fn compute_section_checksum(
    raw: &[u8],
    section_offset: usize,
    used_size: usize,
) -> Result<u16, ChecksumError> {
    let data = raw
        .get(section_offset..section_offset + used_size)
        .ok_or(ChecksumError::Truncated)?;
    Ok(gen3_section_checksum(data)?)
}

impl Gen3Slot {
    /// Reads the 14 section footers at `address` and checks each section.
    fn read(raw: &[u8], address: usize, layout: &GbaLayout) -> Result<Self, ChecksumError> {
        let mut section_offsets = [None; SECTION_COUNT];
        let mut save_counter = None;

        for physical in 0..SECTION_COUNT {
            let section_offset = address + physical * SECTION_SIZE;
            let footer = read_footer(raw, section_offset)?;
            if footer.signature != SECTION_SIGNATURE {
                return Err(ChecksumError::Structure("bad section signature"));
            }
            let id = usize::from(footer.id);
            let entry = section_offsets
                .get_mut(id)
                .ok_or(ChecksumError::Structure("section id out of range"))?;
            if entry.replace(section_offset).is_some() {
                return Err(ChecksumError::Structure("duplicate section id"));
            }
            if *save_counter.get_or_insert(footer.save_counter) != footer.save_counter {
                return Err(ChecksumError::Structure("sections from different saves"));
            }

            let computed =
                compute_section_checksum(raw, section_offset, layout.section_sizes[id])?;
            if computed != footer.checksum {
                log::trace!(
                    "Section {id} at 0x{section_offset:x}: stored {:04x}, computed {computed:04x}",
                    footer.checksum
                );
                return Err(ChecksumError::Mismatch {
                    stored: footer.checksum,
                    computed,
                });
            }
        }

        // 14 distinct ids below 14 cover every id
        let section_offsets = section_offsets.map(|offset| offset.unwrap_or_default());
        Ok(Gen3Slot {
            address,
            save_counter: save_counter.unwrap_or_default(),
            section_offsets,
        })
    }

    /// Data area of the section with `section_id`.
    pub fn section<'a>(
        &self,
        raw: &'a [u8],
        section_id: usize,
    ) -> Result<&'a [u8], ChecksumError> {
        let offset = *self
            .section_offsets
            .get(section_id)
            .ok_or(ChecksumError::Structure("section id out of range"))?;
        raw.get(offset..offset + SECTION_DATA_SIZE)
            .ok_or(ChecksumError::Truncated)
    }

    pub fn verify(&self, raw: &[u8], format: FormatId) -> Result<(), ChecksumError> {
        let layout = layout_for(format)?;
        for (section_id, section_offset) in self.section_offsets.iter().enumerate() {
            let footer = read_footer(raw, *section_offset)?;
            let computed =
                compute_section_checksum(raw, *section_offset, layout.section_sizes[section_id])?;
            if computed != footer.checksum || usize::from(footer.id) != section_id {
                return Err(ChecksumError::Mismatch {
                    stored: footer.checksum,
                    computed,
                });
            }
        }
        Ok(())
    }
}

fn layout_for(format: FormatId) -> Result<&'static GbaLayout, ChecksumError> {
    format
        .gba_layout()
        .ok_or(ChecksumError::Structure("not a GBA format"))
}

/// Newest slot by save counter. The first slot wins a tie.
fn determine_latest_slot(
    slots: impl IntoIterator<Item = Result<Gen3Slot, ChecksumError>>,
) -> Option<Gen3Slot> {
    slots
        .into_iter()
        .filter_map(Result::ok)
        .fold(None, |newest: Option<Gen3Slot>, slot| match newest {
            Some(newest) if newest.save_counter >= slot.save_counter => Some(newest),
            _ => Some(slot),
        })
}

fn read_u32_at(data: &[u8], offset: u64) -> Result<u32, ChecksumError> {
    let mut cursor = Cursor::new(data);
    cursor.seek(SeekFrom::Start(offset))?;
    Ok(cursor.read_u32::<LittleEndian>()?)
}

pub fn validate(raw: &[u8], format: FormatId) -> Result<ValidatedSection<'_>, ChecksumError> {
    let layout = layout_for(format)?;
    let slots = [SAVE_A_OFFSET, SAVE_B_OFFSET].map(|address| {
        let slot = Gen3Slot::read(raw, address, layout);
        if let Err(err) = &slot {
            log::debug!("{format}: slot at 0x{address:x} rejected: {err}");
        }
        slot
    });
    let slot = determine_latest_slot(slots).ok_or(ChecksumError::NoValidSlot)?;
    log::debug!(
        "{format}: using slot at 0x{:x}, save counter {}",
        slot.address,
        slot.save_counter
    );

    let trainer_info = slot.section(raw, 0)?;
    let found = format_for_game_code(read_u32_at(trainer_info, GAME_CODE_OFFSET)?);
    if found != format {
        return Err(ChecksumError::VariantMismatch { found });
    }
    let owner = TrainerId::from_gen3(read_u32_at(trainer_info, 0x0A)?);

    Ok(ValidatedSection::new(format, raw, Region::Gba(slot), owner))
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

fn parse_trainer_info(
    trainer_info: &[u8],
    team_and_items: &[u8],
    layout: &GbaLayout,
) -> Result<Trainer, ChecksumError> {
    let mut cursor = Cursor::new(trainer_info);
    let mut player_name = [0u8; 7];
    cursor.read_exact(&mut player_name)?;
    let _ = cursor.read_u8()?;
    let gender = determine_player_gender(cursor.read_u8()?);
    let _ = cursor.read_u8()?;
    let id = TrainerId::from_gen3(cursor.read_u32::<LittleEndian>()?);
    let time_played = TimePlayed {
        hours: cursor.read_u16::<LittleEndian>()?,
        minutes: cursor.read_u8()?,
        seconds: cursor.read_u8()?,
        frames: cursor.read_u8()?,
    };

    let security_key = match layout.security_key_offset {
        Some(offset) => read_u32_at(trainer_info, offset as u64)?,
        None => 0,
    };
    let money = read_u32_at(team_and_items, layout.money_offset as u64)? ^ security_key;

    Ok(Trainer {
        name: decode_text(&player_name, Generation::Three),
        id,
        gender,
        money,
        time_played,
        badges: None,
        rival_name: None,
    })
}

/// Sections 5 to 13 hold one continuous buffer, split wherever the section
/// boundaries fall.
fn assemble_pc_buffer(raw: &[u8], slot: &Gen3Slot) -> Result<Vec<u8>, ChecksumError> {
    let mut buffer = Vec::with_capacity(PC_BUFFER_SECTIONS.count() * SECTION_DATA_SIZE);
    for section_id in PC_BUFFER_SECTIONS {
        buffer.extend_from_slice(slot.section(raw, section_id)?);
    }
    Ok(buffer)
}

pub fn decode(
    section: &ValidatedSection<'_>,
    tables: &LookupTables,
) -> Result<SaveContents, ChecksumError> {
    let Region::Gba(slot) = section.region() else {
        return Err(ChecksumError::Structure("not a GBA region"));
    };
    let layout = layout_for(section.format())?;
    let raw = section.raw();

    let trainer_info = slot.section(raw, 0)?;
    let team_and_items = slot.section(raw, 1)?;
    let trainer = parse_trainer_info(trainer_info, team_and_items, layout)?;
    log::debug!("Trainer {} ({})", trainer.name, trainer.id.public_id);

    let team_size = read_u32_at(team_and_items, layout.team_size_offset as u64)?;
    if team_size > PARTY_CAPACITY {
        log::warn!("Team size {team_size} is above {PARTY_CAPACITY}, ignoring the rest");
    }
    let party_start = layout.team_size_offset + 4;
    let party = (0..team_size.min(PARTY_CAPACITY) as usize)
        .filter_map(|idx| {
            let location = Location::Party {
                slot: idx as u8 + 1,
            };
            let start = party_start + idx * PK3_SIZE_PARTY;
            let pk3_data = team_and_items.get(start..start + PK3_SIZE_PARTY);
            read_record(pk3_data, location, tables)
        })
        .collect();

    let pc_buffer = assemble_pc_buffer(raw, slot)?;
    log::trace!("Current box {}", read_u32_at(&pc_buffer, 0)?);
    let boxes = (0..BOX_COUNT)
        .map(|box_index| {
            let number = box_index as u8 + 1;
            let slots = (0..BOX_CAPACITY)
                .filter_map(|slot_index| {
                    let location = Location::Box {
                        number,
                        slot: slot_index as u8 + 1,
                    };
                    let start = BOX_RECORDS_OFFSET
                        + (box_index * BOX_CAPACITY + slot_index) * PK3_SIZE_BOX;
                    read_record(pc_buffer.get(start..start + PK3_SIZE_BOX), location, tables)
                })
                .collect();
            let name_start = BOX_NAMES_OFFSET + box_index * BOX_NAME_LENGTH;
            let name = pc_buffer
                .get(name_start..name_start + BOX_NAME_LENGTH)
                .map(|name| decode_text(name, Generation::Three))
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| format!("BOX {number}"));
            GameBox {
                number,
                name,
                slots,
            }
        })
        .collect();

    Ok(SaveContents {
        trainer,
        party,
        boxes,
    })
}

/// `None` for an empty slot.
fn read_record(
    pk3_data: Option<&[u8]>,
    location: Location,
    tables: &LookupTables,
) -> Option<Slot> {
    let result = match pk3_data {
        Some(pk3_data) => pk3::decrypt(pk3_data),
        None => Err(RecordError::Truncated),
    };
    match result {
        Ok(None) => None,
        Ok(Some(pk3)) => Some(Slot::Occupied(to_decoded_record(&pk3, location, tables))),
        Err(err) => Some(Slot::from_result(location, Err(err))),
    }
}

fn to_decoded_record(pk3: &Pk3, location: Location, tables: &LookupTables) -> DecodedRecord {
    let species = super::species(tables, Generation::Three, pk3.species);
    let info = species
        .national_dex
        .and_then(|national| tables.species_info(national));

    let level = pk3
        .party_level
        .or_else(|| info.map(|info| info.growth_rate.level_for_experience(pk3.experience)))
        .unwrap_or(1);
    let ability = info.map(|info| {
        let index = info.ability(pk3.ability_bit);
        Ability {
            index,
            name: tables.ability_name(index).to_owned(),
        }
    });
    let [hp, attack, defense, speed, special_attack, special_defense] = pk3.ivs.map(u16::from);
    let ivs = StatBlock {
        hp,
        attack,
        defense,
        speed,
        special: Special::Split {
            attack: special_attack,
            defense: special_defense,
        },
    };
    let [hp, attack, defense, speed, special_attack, special_defense] = pk3.evs.map(u16::from);
    let evs = StatBlock {
        hp,
        attack,
        defense,
        speed,
        special: Special::Split {
            attack: special_attack,
            defense: special_defense,
        },
    };

    DecodedRecord {
        location,
        species,
        nickname: pk3.nickname.clone(),
        original_trainer: OriginalTrainer {
            name: pk3.original_trainer_name.clone(),
            id: pk3.original_trainer_id,
        },
        held_item: (pk3.held_item != 0).then(|| Item {
            index: pk3.held_item,
            name: tables
                .item_name(Generation::Three, pk3.held_item)
                .to_owned(),
        }),
        moves: super::moves(tables, &pk3.moves, &pk3.pp, |slot| pk3.pp_ups(slot)),
        experience: pk3.experience,
        level,
        ivs,
        evs,
        is_egg: pk3.is_egg,
        is_shiny: Some(pk3.is_shiny()),
        gender: info
            .map(|info| Gender::from_personality(pk3.personality_value, info.gender_threshold)),
        nature: Some(Nature::from_personality(pk3.personality_value)),
        ability,
        personality_value: Some(pk3.personality_value),
        friendship: Some(pk3.friendship),
        language: Language::from_u8(pk3.language),
        met_location: Some(pk3.met_location),
        status: String::new(),
    }
}
