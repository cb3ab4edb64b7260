//! Generation 3 record decryption.
//!
//! A stored record is a 32-byte plain header followed by a 48-byte payload made
//! of four 12-byte substructures. The payload is XOR'd with the personality
//! value combined with the original trainer id, and the substructures are
//! shuffled in one of 24 orders picked by the personality value.

use byteorder::{LittleEndian, ReadBytesExt};
use num_traits::FromPrimitive;
use std::io::{Cursor, Read, Seek, SeekFrom};

use crate::{
    checksum::pk3_checksum,
    error::RecordError,
    format::Generation,
    pokemon::Language,
    text::{decode_japanese_gba_text, decode_text},
    TrainerId,
};

pub const PK3_SIZE_PARTY: usize = 100;
pub const PK3_SIZE_BOX: usize = 80;
const SUBSTRUCTURE_OFFSET: u64 = 32;
const SUBSTRUCTURE_SIZE: u64 = 12;
const PARTY_LEVEL_OFFSET: u64 = 0x54;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Substructure {
    Growth,
    Attacks,
    EvsConditions,
    Miscellaneous,
}

use Substructure::{Attacks as A, EvsConditions as E, Growth as G, Miscellaneous as M};

/// Storage order of the substructures, indexed by personality value mod 24.
pub const SUBSTRUCTURE_ORDERS: [[Substructure; 4]; 24] = [
    [G, A, E, M],
    [G, A, M, E],
    [G, E, A, M],
    [G, E, M, A],
    [G, M, A, E],
    [G, M, E, A],
    [A, G, E, M],
    [A, G, M, E],
    [A, E, G, M],
    [A, E, M, G],
    [A, M, G, E],
    [A, M, E, G],
    [E, G, A, M],
    [E, G, M, A],
    [E, A, G, M],
    [E, A, M, G],
    [E, M, G, A],
    [E, M, A, G],
    [M, G, A, E],
    [M, G, E, A],
    [M, A, G, E],
    [M, A, E, G],
    [M, E, G, A],
    [M, E, A, G],
];

fn get_offset_for_substructure(personality_value: u32, component: Substructure) -> u64 {
    let order = &SUBSTRUCTURE_ORDERS[(personality_value % 24) as usize];
    let position = order
        .iter()
        .position(|candidate| *candidate == component)
        .unwrap_or_default() as u64;
    SUBSTRUCTURE_OFFSET + position * SUBSTRUCTURE_SIZE
}

/// The plain fields of one decrypted record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pk3 {
    pub personality_value: u32,
    pub original_trainer_id: TrainerId,
    pub nickname: String,
    pub language: u8,
    pub original_trainer_name: String,
    pub species: u16,
    pub held_item: u16,
    pub experience: u32,
    pub pp_bonuses: u8,
    pub friendship: u8,
    pub moves: [u16; 4],
    pub pp: [u8; 4],
    /// HP, Attack, Defense, Speed, Sp. Attack, Sp. Defense.
    pub evs: [u8; 6],
    pub met_location: u8,
    /// HP, Attack, Defense, Speed, Sp. Attack, Sp. Defense.
    pub ivs: [u8; 6],
    pub is_egg: bool,
    pub ability_bit: bool,
    /// Only present in party records.
    pub party_level: Option<u8>,
}

impl Pk3 {
    /// PP ups applied to the move in `slot`, two bits each.
    pub fn pp_ups(&self, slot: usize) -> u8 {
        (self.pp_bonuses >> (2 * slot)) & 0b11
    }

    pub fn is_shiny(&self) -> bool {
        let trainer_id = self.original_trainer_id;
        let secret_id = trainer_id.secret_id.unwrap_or_default();
        let pid_high = (self.personality_value >> 16) as u16;
        let pid_low = (self.personality_value & 0xffff) as u16;
        (trainer_id.public_id ^ secret_id ^ pid_high ^ pid_low) < 8
    }
}

/// True when the slot holds no record at all.
pub fn is_empty(raw: &[u8]) -> bool {
    raw.iter().take(PK3_SIZE_BOX).all(|byte| *byte == 0)
}

/// XORs the payload of a record in place. Applying it twice restores the input.
fn encrypt_decrypt_pk3(pk3_data: &mut [u8]) -> std::io::Result<()> {
    let mut cursor = Cursor::new(&pk3_data[..]);
    let personality_value = cursor.read_u32::<LittleEndian>()?;
    let original_trainer_id = cursor.read_u32::<LittleEndian>()?;
    let key = (personality_value ^ original_trainer_id).to_le_bytes();

    pk3_data[SUBSTRUCTURE_OFFSET as usize..PK3_SIZE_BOX]
        .iter_mut()
        .enumerate()
        .for_each(|(idx, byte)| *byte ^= key[idx % 4]);
    Ok(())
}

/// Names follow the character set of the cartridge the record came from.
fn decode_name(name: &[u8], language: u8) -> String {
    match Language::from_u8(language) {
        Some(Language::Japanese) => decode_japanese_gba_text(name),
        _ => decode_text(name, Generation::Three),
    }
}

/// Decrypts and parses a box or party record. Returns `Ok(None)` for an empty
/// slot.
pub fn decrypt(raw: &[u8]) -> Result<Option<Pk3>, RecordError> {
    if raw.len() < PK3_SIZE_BOX {
        return Err(RecordError::Truncated);
    }
    if is_empty(raw) {
        return Ok(None);
    }

    let mut source_data = raw.to_owned();
    encrypt_decrypt_pk3(&mut source_data)?;

    let mut cursor = Cursor::new(&source_data[..]);
    let personality_value = cursor.read_u32::<LittleEndian>()?;
    let original_trainer_id = TrainerId::from_gen3(cursor.read_u32::<LittleEndian>()?);
    let mut nickname = [0u8; 10];
    cursor.read_exact(&mut nickname)?;
    let language = cursor.read_u8()?;
    let egg_flags = cursor.read_u8()?;
    let mut original_trainer_name = [0u8; 7];
    cursor.read_exact(&mut original_trainer_name)?;
    let _markings = cursor.read_u8()?;
    let stored_checksum = cursor.read_u16::<LittleEndian>()?;

    let payload = &source_data[SUBSTRUCTURE_OFFSET as usize..PK3_SIZE_BOX];
    let computed_checksum = pk3_checksum(payload)?;
    if computed_checksum != stored_checksum {
        return Err(RecordError::ChecksumMismatch {
            stored: stored_checksum,
            computed: computed_checksum,
        });
    }
    if egg_flags & 0b1 != 0 {
        return Err(RecordError::BadEgg);
    }

    cursor.seek(SeekFrom::Start(get_offset_for_substructure(
        personality_value,
        Substructure::Growth,
    )))?;
    let species = cursor.read_u16::<LittleEndian>()?;
    if species == 0 {
        log::trace!("Record with a valid checksum but no species, treating as empty");
        return Ok(None);
    }
    let held_item = cursor.read_u16::<LittleEndian>()?;
    let experience = cursor.read_u32::<LittleEndian>()?;
    let pp_bonuses = cursor.read_u8()?;
    let friendship = cursor.read_u8()?;

    cursor.seek(SeekFrom::Start(get_offset_for_substructure(
        personality_value,
        Substructure::Attacks,
    )))?;
    let mut moves = [0u16; 4];
    for move_index in moves.iter_mut() {
        *move_index = cursor.read_u16::<LittleEndian>()?;
    }
    let mut pp = [0u8; 4];
    cursor.read_exact(&mut pp)?;

    cursor.seek(SeekFrom::Start(get_offset_for_substructure(
        personality_value,
        Substructure::EvsConditions,
    )))?;
    let mut evs = [0u8; 6];
    cursor.read_exact(&mut evs)?;

    cursor.seek(SeekFrom::Start(get_offset_for_substructure(
        personality_value,
        Substructure::Miscellaneous,
    )))?;
    let _pokerus_status = cursor.read_u8()?;
    let met_location = cursor.read_u8()?;
    let _origin_info = cursor.read_u16::<LittleEndian>()?;
    let ivs_egg_ability_blob = cursor.read_u32::<LittleEndian>()?;
    let mut ivs = [0u8; 6];
    ivs.iter_mut()
        .enumerate()
        .for_each(|(idx, iv)| *iv = ((ivs_egg_ability_blob >> (5 * idx)) & 0b11111) as u8);
    let is_egg = (ivs_egg_ability_blob >> 30) & 0b1 != 0;
    let ability_bit = (ivs_egg_ability_blob >> 31) & 0b1 != 0;

    let party_level = if raw.len() >= PK3_SIZE_PARTY {
        cursor.seek(SeekFrom::Start(PARTY_LEVEL_OFFSET))?;
        Some(cursor.read_u8()?)
    } else {
        None
    };

    Ok(Some(Pk3 {
        personality_value,
        original_trainer_id,
        nickname: decode_name(&nickname, language),
        language,
        original_trainer_name: decode_name(&original_trainer_name, language),
        species,
        held_item,
        experience,
        pp_bonuses,
        friendship,
        moves,
        pp,
        evs,
        met_location,
        ivs,
        is_egg,
        ability_bit,
        party_level,
    }))
}
