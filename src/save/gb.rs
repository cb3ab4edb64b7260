//! Pieces shared by the two Game Boy generations: checksum validation and the
//! list structure parties and boxes are stored in.
//!
//! A list is a count byte, a species list of `capacity + 1` bytes terminated by
//! `0xFF`, the records, then the original trainer names and the nicknames.

use std::io::{Cursor, Seek, SeekFrom};

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use super::{Region, TimePlayed, ValidatedSection};
use crate::{
    checksum,
    error::ChecksumError,
    format::{FormatId, GbLayout, Generation},
    pokemon::Location,
    text::decode_text,
    TrainerId,
};

pub const NAME_LENGTH: usize = 11;
pub const PARTY_CAPACITY: usize = 6;
const LIST_TERMINATOR: u8 = 0xFF;

/// Where in the save one list lives, and the size of its records.
#[derive(Clone, Copy, Debug)]
pub struct ListLayout {
    pub offset: usize,
    pub capacity: usize,
    pub record_size: usize,
}

/// One occupied list entry, borrowed from the save.
#[derive(Clone, Copy, Debug)]
pub struct ListEntry<'a> {
    pub location: Location,
    /// The species list byte, which differs from the record's own species for
    /// generation 2 eggs.
    pub species_marker: u8,
    pub record: &'a [u8],
    pub original_trainer_name: &'a [u8],
    pub nickname: &'a [u8],
}

pub(super) fn read_stored_checksum(
    raw: &[u8],
    format: FormatId,
    checksum_offset: usize,
) -> Result<u16, ChecksumError> {
    let mut cursor = Cursor::new(raw);
    cursor.seek(SeekFrom::Start(checksum_offset as u64))?;
    match format.generation() {
        Generation::One => Ok(u16::from(cursor.read_u8()?)),
        _ => Ok(cursor.read_u16::<LittleEndian>()?),
    }
}

pub(super) fn layout_for(format: FormatId) -> Result<&'static GbLayout, ChecksumError> {
    format
        .gb_layout()
        .ok_or(ChecksumError::Structure("not a Game Boy format"))
}

/// Checks the main checksum and the party list of a generation 1 or 2 save.
pub(super) fn validate(
    raw: &[u8],
    format: FormatId,
) -> Result<ValidatedSection<'_>, ChecksumError> {
    let layout = layout_for(format)?;
    let data = raw
        .get(layout.checksum_start..=layout.checksum_end)
        .ok_or(ChecksumError::Truncated)?;
    let computed = match format.generation() {
        Generation::One => u16::from(checksum::gen1_checksum(data)),
        _ => checksum::gen2_checksum(data),
    };
    let stored = read_stored_checksum(raw, format, layout.checksum_offset)?;
    if computed != stored {
        log::trace!("{format}: stored checksum {stored:04x}, computed {computed:04x}");
        return Err(ChecksumError::Mismatch { stored, computed });
    }

    check_list_structure(raw, layout.party, PARTY_CAPACITY)?;

    let mut cursor = Cursor::new(raw);
    cursor.seek(SeekFrom::Start(layout.player_id as u64))?;
    let owner = TrainerId {
        public_id: cursor.read_u16::<BigEndian>()?,
        secret_id: None,
    };

    log::debug!("Validated {format} checksum {stored:04x}");
    Ok(ValidatedSection::new(
        format,
        raw,
        Region::GameBoy {
            start: layout.checksum_start,
            end: layout.checksum_end,
            checksum_offset: layout.checksum_offset,
            stored,
        },
        owner,
    ))
}

/// The count must fit the capacity and the species list must end right after
/// the last entry.
pub(super) fn check_list_structure(
    raw: &[u8],
    offset: usize,
    capacity: usize,
) -> Result<usize, ChecksumError> {
    let count = usize::from(*raw.get(offset).ok_or(ChecksumError::Truncated)?);
    if count > capacity {
        return Err(ChecksumError::Structure("list count above capacity"));
    }
    let terminator = *raw.get(offset + 1 + count).ok_or(ChecksumError::Truncated)?;
    if terminator != LIST_TERMINATOR {
        return Err(ChecksumError::Structure("species list is not terminated"));
    }
    Ok(count)
}

/// Reads every occupied entry of a list. `location` builds the location of the
/// entry at a zero-based index.
pub(super) fn read_list<'a>(
    raw: &'a [u8],
    list: ListLayout,
    location: impl Fn(u8) -> Location,
) -> Result<Vec<ListEntry<'a>>, ChecksumError> {
    let count = check_list_structure(raw, list.offset, list.capacity)?;
    let species_list = list.offset + 1;
    let records = species_list + list.capacity + 1;
    let original_trainer_names = records + list.capacity * list.record_size;
    let nicknames = original_trainer_names + list.capacity * NAME_LENGTH;

    (0..count)
        .map(|idx| {
            let record_start = records + idx * list.record_size;
            let ot_start = original_trainer_names + idx * NAME_LENGTH;
            let nickname_start = nicknames + idx * NAME_LENGTH;
            Ok(ListEntry {
                location: location(idx as u8),
                species_marker: raw[species_list + idx],
                record: raw
                    .get(record_start..record_start + list.record_size)
                    .ok_or(ChecksumError::Truncated)?,
                original_trainer_name: raw
                    .get(ot_start..ot_start + NAME_LENGTH)
                    .ok_or(ChecksumError::Truncated)?,
                nickname: raw
                    .get(nickname_start..nickname_start + NAME_LENGTH)
                    .ok_or(ChecksumError::Truncated)?,
            })
        })
        .collect()
}

/// Reads a box list, logging and returning an empty box if it is malformed.
/// Banks that the game never initialized hold garbage.
pub(super) fn read_box(raw: &[u8], list: ListLayout, number: u8) -> Vec<ListEntry<'_>> {
    read_list(raw, list, |idx| Location::Box {
        number,
        slot: idx + 1,
    })
    .unwrap_or_else(|err| {
        log::warn!("Box {number} at 0x{:x} is unreadable: {err}", list.offset);
        Vec::new()
    })
}

pub(super) fn read_name(
    raw: &[u8],
    offset: usize,
    generation: Generation,
) -> Result<String, ChecksumError> {
    let bytes = raw
        .get(offset..offset + NAME_LENGTH)
        .ok_or(ChecksumError::Truncated)?;
    Ok(decode_text(bytes, generation))
}

/// Generation 1 keeps money as six packed decimal digits.
pub(super) fn decode_bcd(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |value, byte| {
        value * 100 + u32::from(byte >> 4) * 10 + u32::from(byte & 0x0F)
    })
}

pub(super) fn count_badges(bytes: &[u8]) -> u8 {
    bytes.iter().map(|byte| byte.count_ones() as u8).sum()
}

/// Play time: hours (one byte in generation 1, two in generation 2), then
/// minutes, seconds and frames. Generation 1 has a "maxed" byte after the hours.
pub(super) fn read_time_played(
    raw: &[u8],
    offset: usize,
    generation: Generation,
) -> Result<TimePlayed, ChecksumError> {
    let mut cursor = Cursor::new(raw);
    cursor.seek(SeekFrom::Start(offset as u64))?;
    let hours = match generation {
        Generation::One => {
            let hours = u16::from(cursor.read_u8()?);
            let _maxed = cursor.read_u8()?;
            hours
        }
        _ => cursor.read_u16::<BigEndian>()?,
    };
    Ok(TimePlayed {
        hours,
        minutes: cursor.read_u8()?,
        seconds: cursor.read_u8()?,
        frames: cursor.read_u8()?,
    })
}
