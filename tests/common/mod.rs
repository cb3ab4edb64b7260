//! Builders for synthetic save images.
#![allow(dead_code)]

use nuzsave::{
    checksum::{gen1_checksum, gen2_checksum, gen3_section_checksum},
    format::{FormatId, GbLayout},
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Upper case, digits and spaces in the Game Boy character set.
pub fn gb_text(text: &str, width: usize) -> Vec<u8> {
    let mut bytes = text
        .chars()
        .map(|ch| match ch {
            'A'..='Z' => 0x80 + (ch as u8 - b'A'),
            '0'..='9' => 0xF6 + (ch as u8 - b'0'),
            _ => 0x7F,
        })
        .collect::<Vec<_>>();
    bytes.resize(width, 0x50);
    bytes
}

/// Letters, digits and spaces in the GBA character set.
pub fn gba_text(text: &str, width: usize) -> Vec<u8> {
    let mut bytes = text
        .chars()
        .map(|ch| match ch {
            'A'..='Z' => 0xBB + (ch as u8 - b'A'),
            'a'..='z' => 0xD5 + (ch as u8 - b'a'),
            '0'..='9' => 0xA1 + (ch as u8 - b'0'),
            _ => 0x00,
        })
        .collect::<Vec<_>>();
    bytes.resize(width, 0xFF);
    bytes
}

pub struct GbEntry {
    pub species_marker: u8,
    pub record: Vec<u8>,
    pub original_trainer: String,
    pub nickname: String,
}

pub fn write_gb_list(raw: &mut [u8], offset: usize, capacity: usize, entries: &[GbEntry]) {
    let record_size = entries.first().map(|entry| entry.record.len()).unwrap_or(0);
    raw[offset] = entries.len() as u8;
    for (idx, entry) in entries.iter().enumerate() {
        raw[offset + 1 + idx] = entry.species_marker;
    }
    raw[offset + 1 + entries.len()] = 0xFF;

    let records = offset + 1 + capacity + 1;
    let ot_names = records + capacity * record_size;
    let nicknames = ot_names + capacity * 11;
    for (idx, entry) in entries.iter().enumerate() {
        let start = records + idx * record_size;
        raw[start..start + record_size].copy_from_slice(&entry.record);
        let start = ot_names + idx * 11;
        raw[start..start + 11].copy_from_slice(&gb_text(&entry.original_trainer, 11));
        let start = nicknames + idx * 11;
        raw[start..start + 11].copy_from_slice(&gb_text(&entry.nickname, 11));
    }
}

/// A generation 1 record. `party` adds the party-only tail with the level.
pub fn gen1_record(
    species_index: u8,
    level: u8,
    moves: [u8; 4],
    trainer_id: u16,
    experience: u32,
    party: bool,
) -> Vec<u8> {
    let mut record = vec![0u8; if party { 44 } else { 33 }];
    record[0x00] = species_index;
    record[0x03] = level;
    record[0x08..0x0C].copy_from_slice(&moves);
    record[0x0C..0x0E].copy_from_slice(&trainer_id.to_be_bytes());
    record[0x0E..0x11].copy_from_slice(&experience.to_be_bytes()[1..]);
    record[0x1B..0x1D].copy_from_slice(&[0xFA, 0xAA]);
    for (slot, pp) in record[0x1D..0x21].iter_mut().enumerate() {
        *pp = if moves[slot] != 0 { 30 } else { 0 };
    }
    if party {
        record[0x21] = level;
    }
    record
}

/// A generation 2 record with the party-only tail when `party` is set.
pub fn gen2_record(species: u8, item: u8, dvs: [u8; 2], level: u8, party: bool) -> Vec<u8> {
    let mut record = vec![0u8; if party { 48 } else { 32 }];
    record[0x00] = species;
    record[0x01] = item;
    record[0x02] = 33;
    record[0x06..0x08].copy_from_slice(&4321u16.to_be_bytes());
    record[0x15..0x17].copy_from_slice(&dvs);
    record[0x17] = 35;
    record[0x1B] = 120;
    record[0x1F] = level;
    record
}

/// Writes the lists of a Game Boy layout and fixes up the checksum.
pub struct GbSave {
    pub format: FormatId,
    pub layout: &'static GbLayout,
    pub raw: Vec<u8>,
}

impl GbSave {
    pub fn new(format: FormatId, trainer: &str, trainer_id: u16) -> Self {
        let layout = format.gb_layout().unwrap();
        let mut raw = vec![0u8; 0x8000];
        let name = layout.player_name;
        raw[name..name + 11].copy_from_slice(&gb_text(trainer, 11));
        let rival = layout.rival_name;
        raw[rival..rival + 11].copy_from_slice(&gb_text("BLUE", 11));
        let id = layout.player_id;
        raw[id..id + 2].copy_from_slice(&trainer_id.to_be_bytes());
        let mut save = GbSave {
            format,
            layout,
            raw,
        };
        save.set_party(&[]);
        for box_index in 0..layout.box_count() {
            save.set_box(box_index, &[]);
        }
        save.set_current_box(&[]);
        if let Some(names) = layout.box_names {
            for box_index in 0..layout.box_count() {
                let start = names + box_index * 9;
                let name = gb_text(&format!("BOX{}", box_index + 1), 9);
                save.raw[start..start + 9].copy_from_slice(&name);
            }
        }
        save
    }

    pub fn set_party(&mut self, entries: &[GbEntry]) {
        write_gb_list(&mut self.raw, self.layout.party, 6, entries);
    }

    pub fn set_current_box(&mut self, entries: &[GbEntry]) {
        write_gb_list(&mut self.raw, self.layout.current_box, 20, entries);
    }

    /// Writes the bank copy of a box, `box_index` counting from zero.
    pub fn set_box(&mut self, box_index: usize, entries: &[GbEntry]) {
        let offset = self.layout.box_offset(box_index);
        write_gb_list(&mut self.raw, offset, 20, entries);
    }

    pub fn finish(mut self) -> Vec<u8> {
        let layout = self.layout;
        let data = &self.raw[layout.checksum_start..=layout.checksum_end];
        let checksum = match self.format {
            FormatId::RedBlueYellow => vec![gen1_checksum(data)],
            _ => gen2_checksum(data).to_le_bytes().to_vec(),
        };
        let offset = layout.checksum_offset;
        self.raw[offset..offset + checksum.len()].copy_from_slice(&checksum);
        self.raw
    }
}

// Substructure orders by personality value mod 24.
const ORDERS: [&str; 24] = [
    "GAEM", "GAME", "GEAM", "GEMA", "GMAE", "GMEA", "AGEM", "AGME", "AEGM", "AEMG", "AMGE", "AMEG",
    "EGAM", "EGMA", "EAGM", "EAMG", "EMGA", "EMAG", "MGAE", "MGEA", "MAGE", "MAEG", "MEGA", "MEAG",
];

pub struct Pk3Spec {
    pub personality_value: u32,
    pub trainer_id: u32,
    /// Generation 3 internal species index.
    pub species: u16,
    pub held_item: u16,
    pub experience: u32,
    pub moves: [u16; 4],
    pub nickname: &'static str,
    pub is_egg: bool,
    pub met_location: u8,
    pub party_level: Option<u8>,
}

impl Default for Pk3Spec {
    fn default() -> Self {
        Self {
            personality_value: 0x1234_5679,
            trainer_id: (2222 << 16) | 1111,
            species: 25,
            held_item: 0,
            experience: 1_000,
            moves: [84, 45, 0, 0],
            nickname: "PIKACHU",
            is_egg: false,
            met_location: 0,
            party_level: None,
        }
    }
}

pub fn pk3_record(spec: &Pk3Spec) -> Vec<u8> {
    let mut growth = [0u8; 12];
    growth[0..2].copy_from_slice(&spec.species.to_le_bytes());
    growth[2..4].copy_from_slice(&spec.held_item.to_le_bytes());
    growth[4..8].copy_from_slice(&spec.experience.to_le_bytes());
    growth[9] = 70;
    let mut attacks = [0u8; 12];
    for (slot, move_index) in spec.moves.iter().enumerate() {
        attacks[slot * 2..slot * 2 + 2].copy_from_slice(&move_index.to_le_bytes());
        attacks[8 + slot] = if *move_index != 0 { 30 } else { 0 };
    }
    let evs = [0u8; 12];
    let mut misc = [0u8; 12];
    misc[1] = spec.met_location;
    // Every IV at 31
    let blob: u32 = 0x3FFF_FFFF | (u32::from(spec.is_egg) << 30);
    misc[4..8].copy_from_slice(&blob.to_le_bytes());

    let order = ORDERS[(spec.personality_value % 24) as usize];
    let mut payload = [0u8; 48];
    for (letter, data) in [('G', growth), ('A', attacks), ('E', evs), ('M', misc)] {
        let position = order.find(letter).unwrap();
        payload[position * 12..position * 12 + 12].copy_from_slice(&data);
    }
    let checksum = payload
        .chunks(2)
        .fold(0u16, |sum, half| sum.wrapping_add(u16::from_le_bytes([half[0], half[1]])));

    let mut raw = vec![0u8; if spec.party_level.is_some() { 100 } else { 80 }];
    raw[0..4].copy_from_slice(&spec.personality_value.to_le_bytes());
    raw[4..8].copy_from_slice(&spec.trainer_id.to_le_bytes());
    raw[8..18].copy_from_slice(&gba_text(spec.nickname, 10));
    raw[18] = 2;
    raw[20..27].copy_from_slice(&gba_text("May", 7));
    raw[28..30].copy_from_slice(&checksum.to_le_bytes());
    let key = (spec.personality_value ^ spec.trainer_id).to_le_bytes();
    for (idx, byte) in payload.iter().enumerate() {
        raw[32 + idx] = byte ^ key[idx % 4];
    }
    if let Some(level) = spec.party_level {
        raw[0x54] = level;
    }
    raw
}

const SECTION_DATA_SIZE: usize = 3968;

/// Contents of one generation 3 slot.
pub struct GbaSlot {
    pub format: FormatId,
    pub trainer: &'static str,
    pub trainer_id: u32,
    pub money: u32,
    /// Emerald's security key doubles as its game code.
    pub security_key: u32,
    pub party: Vec<Vec<u8>>,
    /// Box index, slot index (both from zero) and the record.
    pub boxed: Vec<(usize, usize, Vec<u8>)>,
}

impl GbaSlot {
    pub fn new(format: FormatId, trainer: &'static str) -> Self {
        Self {
            format,
            trainer,
            trainer_id: (2222 << 16) | 1111,
            money: 3000,
            security_key: 0xA5A5_5A5A,
            party: Vec::new(),
            boxed: Vec::new(),
        }
    }

    fn section_data(&self, section_id: usize) -> Vec<u8> {
        let layout = self.format.gba_layout().unwrap();
        let mut data = vec![0u8; SECTION_DATA_SIZE];
        match section_id {
            0 => {
                data[0..7].copy_from_slice(&gba_text(self.trainer, 7));
                data[0x08] = 1;
                data[0x0A..0x0E].copy_from_slice(&self.trainer_id.to_le_bytes());
                data[0x0E..0x10].copy_from_slice(&12u16.to_le_bytes());
                data[0x10] = 34;
                data[0x11] = 56;
                let game_code = match self.format {
                    FormatId::RubySapphire => 0,
                    FormatId::FireRedLeafGreen => 1,
                    _ => self.security_key,
                };
                data[0xAC..0xB0].copy_from_slice(&game_code.to_le_bytes());
                if let Some(offset) = layout.security_key_offset {
                    data[offset..offset + 4].copy_from_slice(&self.security_key.to_le_bytes());
                }
            }
            1 => {
                let start = layout.team_size_offset;
                data[start..start + 4].copy_from_slice(&(self.party.len() as u32).to_le_bytes());
                for (idx, record) in self.party.iter().enumerate() {
                    let start = start + 4 + idx * 100;
                    data[start..start + 100].copy_from_slice(record);
                }
                let key = layout.security_key_offset.map_or(0, |_| self.security_key);
                let start = layout.money_offset;
                data[start..start + 4].copy_from_slice(&(self.money ^ key).to_le_bytes());
            }
            5..=13 => {
                let pc = self.pc_buffer();
                let start = (section_id - 5) * SECTION_DATA_SIZE;
                data.copy_from_slice(&pc[start..start + SECTION_DATA_SIZE]);
            }
            _ => (),
        }
        data
    }

    fn pc_buffer(&self) -> Vec<u8> {
        let mut pc = vec![0u8; 9 * SECTION_DATA_SIZE];
        for (box_index, slot_index, record) in &self.boxed {
            let start = 4 + (box_index * 30 + slot_index) * 80;
            pc[start..start + 80].copy_from_slice(record);
        }
        for box_index in 0..14 {
            let start = 0x8344 + box_index * 9;
            pc[start..start + 9].copy_from_slice(&gba_text(&format!("BOX {}", box_index + 1), 9));
        }
        pc
    }

    /// Writes this slot at `address`. Physical section `n` holds section id
    /// `(n + rotation) % 14`.
    pub fn write(&self, raw: &mut [u8], address: usize, save_counter: u32, rotation: usize) {
        let layout = self.format.gba_layout().unwrap();
        for physical in 0..14 {
            let section_id = (physical + rotation) % 14;
            let offset = address + physical * 0x1000;
            let data = self.section_data(section_id);
            raw[offset..offset + SECTION_DATA_SIZE].copy_from_slice(&data);
            let checksum =
                gen3_section_checksum(&data[..layout.section_sizes[section_id]]).unwrap();
            let footer = &mut raw[offset + 0xFF4..offset + 0x1000];
            footer[0..2].copy_from_slice(&(section_id as u16).to_le_bytes());
            footer[2..4].copy_from_slice(&checksum.to_le_bytes());
            footer[4..8].copy_from_slice(&0x0801_2025u32.to_le_bytes());
            footer[8..12].copy_from_slice(&save_counter.to_le_bytes());
        }
    }
}

pub fn gba_save(slot: &GbaSlot) -> Vec<u8> {
    let mut raw = vec![0u8; 0x20000];
    slot.write(&mut raw, 0x0000, 1, 0);
    raw
}
