//! Supported save formats and the byte layouts that go with them.

use serde::{Deserialize, Serialize};

pub const GB_SAVE_SIZE: usize = 0x8000;
pub const GBA_SAVE_SIZE: usize = 0x20000;

/// Smallest file any supported format can live in.
pub const MIN_SAVE_SIZE: usize = GB_SAVE_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Generation {
    One = 1,
    Two = 2,
    Three = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatId {
    #[serde(rename = "RBY")]
    RedBlueYellow = 0,
    #[serde(rename = "GS")]
    GoldSilver = 1,
    #[serde(rename = "Crystal")]
    Crystal = 2,
    #[serde(rename = "RS")]
    RubySapphire = 3,
    #[serde(rename = "Emerald")]
    Emerald = 4,
    #[serde(rename = "FRLG")]
    FireRedLeafGreen = 5,
}

impl FormatId {
    pub const ALL: [FormatId; 6] = [
        FormatId::RedBlueYellow,
        FormatId::GoldSilver,
        FormatId::Crystal,
        FormatId::RubySapphire,
        FormatId::Emerald,
        FormatId::FireRedLeafGreen,
    ];

    pub fn generation(self) -> Generation {
        match self {
            FormatId::RedBlueYellow => Generation::One,
            FormatId::GoldSilver | FormatId::Crystal => Generation::Two,
            FormatId::RubySapphire | FormatId::Emerald | FormatId::FireRedLeafGreen => {
                Generation::Three
            }
        }
    }

    /// Name of the game(s) that write this format.
    pub fn game_name(self) -> &'static str {
        match self {
            FormatId::RedBlueYellow => "Red/Blue/Yellow",
            FormatId::GoldSilver => "Gold/Silver",
            FormatId::Crystal => "Crystal",
            FormatId::RubySapphire => "Ruby/Sapphire",
            FormatId::Emerald => "Emerald",
            FormatId::FireRedLeafGreen => "FireRed/LeafGreen",
        }
    }

    /// The tag used for this format in request and response messages.
    pub fn tag(self) -> &'static str {
        match self {
            FormatId::RedBlueYellow => "RBY",
            FormatId::GoldSilver => "GS",
            FormatId::Crystal => "Crystal",
            FormatId::RubySapphire => "RS",
            FormatId::Emerald => "Emerald",
            FormatId::FireRedLeafGreen => "FRLG",
        }
    }

    pub fn min_size(self) -> usize {
        match self.generation() {
            Generation::One | Generation::Two => GB_SAVE_SIZE,
            Generation::Three => GBA_SAVE_SIZE,
        }
    }

    pub fn gb_layout(self) -> Option<&'static GbLayout> {
        match self {
            FormatId::RedBlueYellow => Some(&RBY_LAYOUT),
            FormatId::GoldSilver => Some(&GS_LAYOUT),
            FormatId::Crystal => Some(&CRYSTAL_LAYOUT),
            _ => None,
        }
    }

    pub fn gba_layout(self) -> Option<&'static GbaLayout> {
        match self {
            FormatId::RubySapphire => Some(&RS_LAYOUT),
            FormatId::Emerald => Some(&EMERALD_LAYOUT),
            FormatId::FireRedLeafGreen => Some(&FRLG_LAYOUT),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.game_name())
    }
}

impl std::str::FromStr for FormatId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatId::ALL
            .into_iter()
            .find(|format| format.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown save format: {s}"))
    }
}

/// Caller's choice of format: detect automatically or force one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameSelection {
    #[default]
    Auto,
    Format(FormatId),
}

impl Serialize for GameSelection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GameSelection::Auto => serializer.serialize_str("Auto"),
            GameSelection::Format(format) => format.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for GameSelection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

impl std::str::FromStr for GameSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(GameSelection::Auto)
        } else {
            s.parse().map(GameSelection::Format)
        }
    }
}

/// Offsets into a Game Boy (generation 1 and 2) save.
#[derive(Debug)]
pub struct GbLayout {
    pub player_name: usize,
    pub player_id: usize,
    pub rival_name: usize,
    pub player_gender: Option<usize>,
    pub money: usize,
    pub badges: usize,
    pub play_time: usize,
    pub current_box_number: usize,
    pub box_names: Option<usize>,
    pub party: usize,
    pub current_box: usize,
    pub checksum_start: usize,
    /// Inclusive.
    pub checksum_end: usize,
    pub checksum_offset: usize,
    pub box_banks: [usize; 2],
    pub box_stride: usize,
    pub boxes_per_bank: usize,
    pub box_capacity: usize,
}

impl GbLayout {
    pub fn box_count(&self) -> usize {
        self.boxes_per_bank * self.box_banks.len()
    }

    /// Offset of a box's bank copy, `box_index` counting from zero.
    pub fn box_offset(&self, box_index: usize) -> usize {
        let bank = self.box_banks[box_index / self.boxes_per_bank];
        bank + (box_index % self.boxes_per_bank) * self.box_stride
    }
}

pub const RBY_LAYOUT: GbLayout = GbLayout {
    player_name: 0x2598,
    player_id: 0x2605,
    rival_name: 0x25F6,
    player_gender: None,
    money: 0x25F3,
    badges: 0x2602,
    play_time: 0x2CED,
    current_box_number: 0x284C,
    box_names: None,
    party: 0x2F2C,
    current_box: 0x30C0,
    checksum_start: 0x2598,
    checksum_end: 0x3522,
    checksum_offset: 0x3523,
    box_banks: [0x4000, 0x6000],
    box_stride: 0x462,
    boxes_per_bank: 6,
    box_capacity: 20,
};

pub const GS_LAYOUT: GbLayout = GbLayout {
    player_name: 0x200B,
    player_id: 0x2009,
    rival_name: 0x2021,
    player_gender: None,
    money: 0x23DB,
    badges: 0x23E4,
    play_time: 0x2053,
    current_box_number: 0x2724,
    box_names: Some(0x2727),
    party: 0x288A,
    current_box: 0x2D6C,
    checksum_start: 0x2009,
    checksum_end: 0x2D68,
    checksum_offset: 0x2D69,
    box_banks: [0x4000, 0x6000],
    box_stride: 0x450,
    boxes_per_bank: 7,
    box_capacity: 20,
};

pub const CRYSTAL_LAYOUT: GbLayout = GbLayout {
    player_name: 0x200B,
    player_id: 0x2009,
    rival_name: 0x2021,
    player_gender: Some(0x3E3D),
    money: 0x23DC,
    badges: 0x23E5,
    play_time: 0x2052,
    current_box_number: 0x2700,
    box_names: Some(0x2703),
    party: 0x2865,
    current_box: 0x2D10,
    checksum_start: 0x2009,
    checksum_end: 0x2B82,
    checksum_offset: 0x2D0D,
    box_banks: [0x4000, 0x6000],
    box_stride: 0x450,
    boxes_per_bank: 7,
    box_capacity: 20,
};

/// Japanese Red/Green/Blue/Yellow. Recognized only to report it as unsupported.
pub const RBY_JP_CHECKSUM_START: usize = 0x2598;
pub const RBY_JP_CHECKSUM_END: usize = 0x3593;
pub const RBY_JP_CHECKSUM_OFFSET: usize = 0x3594;

/// Offsets into section 0 and 1 of a generation 3 slot that differ per game.
#[derive(Debug)]
pub struct GbaLayout {
    pub game_code: Option<u32>,
    pub team_size_offset: usize,
    pub money_offset: usize,
    pub security_key_offset: Option<usize>,
    /// Bytes of each section, by section id, covered by its checksum.
    pub section_sizes: [usize; 14],
}

const fn section_sizes(trainer_info: usize, world_tail: usize) -> [usize; 14] {
    let mut sizes = [0xF80; 14];
    sizes[0] = trainer_info;
    sizes[4] = world_tail;
    sizes[13] = 0x7D0;
    sizes
}

pub const RS_LAYOUT: GbaLayout = GbaLayout {
    game_code: Some(0),
    team_size_offset: 0x0234,
    money_offset: 0x0490,
    security_key_offset: None,
    section_sizes: section_sizes(0x890, 0xC40),
};

pub const EMERALD_LAYOUT: GbaLayout = GbaLayout {
    // Emerald keeps its security key where the other games keep a code
    game_code: None,
    team_size_offset: 0x0234,
    money_offset: 0x0490,
    security_key_offset: Some(0x00AC),
    section_sizes: section_sizes(0xF2C, 0xF08),
};

pub const FRLG_LAYOUT: GbaLayout = GbaLayout {
    game_code: Some(1),
    team_size_offset: 0x0034,
    money_offset: 0x0290,
    security_key_offset: Some(0x0AF8),
    section_sizes: section_sizes(0xF24, 0xD98),
};

/// Which generation 3 format a slot's game code field points at.
pub fn format_for_game_code(code: u32) -> FormatId {
    match code {
        0 => FormatId::RubySapphire,
        1 => FormatId::FireRedLeafGreen,
        _ => FormatId::Emerald,
    }
}
