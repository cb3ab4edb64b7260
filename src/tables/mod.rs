//! Index to name tables and per-species data for generations 1 to 3.
//!
//! Everything in here is plain data. Lookups never fail: an index the tables
//! don't know about (romhacks, corrupted records) resolves to [`UNKNOWN`].

mod abilities;
mod items;
mod moves;
mod species;

use std::sync::OnceLock;

use num_derive::FromPrimitive;
use serde::Serialize;

use crate::format::Generation;

/// Name returned for any index without a table entry.
pub const UNKNOWN: &str = "Unknown";

pub const NATIONAL_DEX_SIZE: u16 = 386;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GrowthRate {
    Erratic,
    Fast,
    MediumFast,
    MediumSlow,
    Slow,
    Fluctuating,
}

impl GrowthRate {
    /// Total experience needed to reach `level`.
    pub fn experience_for_level(self, level: u8) -> u32 {
        let n = i64::from(level.clamp(1, 100));
        if n == 1 {
            return 0;
        }
        let cube = n * n * n;
        let experience = match self {
            GrowthRate::Erratic => match n {
                0..=49 => cube * (100 - n) / 50,
                50..=67 => cube * (150 - n) / 100,
                68..=97 => cube * ((1911 - 10 * n) / 3) / 500,
                _ => cube * (160 - n) / 100,
            },
            GrowthRate::Fast => 4 * cube / 5,
            GrowthRate::MediumFast => cube,
            GrowthRate::MediumSlow => 6 * cube / 5 - 15 * n * n + 100 * n - 140,
            GrowthRate::Slow => 5 * cube / 4,
            GrowthRate::Fluctuating => match n {
                0..=14 => cube * ((n + 1) / 3 + 24) / 50,
                15..=35 => cube * (n + 14) / 50,
                _ => cube * (n / 2 + 32) / 50,
            },
        };
        experience.max(0) as u32
    }

    /// Highest level whose experience requirement is covered by `experience`.
    pub fn level_for_experience(self, experience: u32) -> u8 {
        (2..=100u8)
            .take_while(|level| self.experience_for_level(*level) <= experience)
            .last()
            .unwrap_or(1)
    }
}

/// Static facts about one species.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeciesInfo {
    pub growth_rate: GrowthRate,
    /// Personality (gen 3) low byte below this value means female. `0` is
    /// male-only, `254` female-only, `255` genderless.
    pub gender_threshold: u8,
    /// Generation 3 ability indices for ability bit 0 and 1. A `0` second slot
    /// means the species has only one ability.
    pub abilities: [u8; 2],
}

impl SpeciesInfo {
    pub const GENDERLESS: u8 = 255;
    pub const FEMALE_ONLY: u8 = 254;
    pub const MALE_ONLY: u8 = 0;

    pub const fn new(growth_rate: GrowthRate, gender_threshold: u8, abilities: [u8; 2]) -> Self {
        Self {
            growth_rate,
            gender_threshold,
            abilities,
        }
    }

    pub fn ability(&self, ability_bit: bool) -> u8 {
        match self.abilities {
            [_, second] if ability_bit && second != 0 => second,
            [first, _] => first,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive, Serialize)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub fn from_personality(personality_value: u32) -> Self {
        use num_traits::FromPrimitive;
        // Every remainder of 25 has a variant
        Nature::from_u32(personality_value % 25).unwrap_or(Nature::Hardy)
    }
}

/// Index to name mapping. Empty entries and indices past the end both read as
/// [`UNKNOWN`].
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    names: Vec<String>,
}

impl NameTable {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    fn from_static(names: &[&str]) -> Self {
        Self::new(names.iter().map(|name| name.to_string()).collect())
    }

    pub fn get(&self, index: usize) -> &str {
        match self.names.get(index) {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN,
        }
    }
}

/// All lookup data a decoder needs. Built once and shared by reference.
#[derive(Clone, Debug)]
pub struct LookupTables {
    /// Indexed by national Pokédex number.
    pub species: NameTable,
    pub moves: NameTable,
    pub abilities: NameTable,
    pub gen2_items: NameTable,
    pub gen3_items: NameTable,
    /// Indexed by national Pokédex number minus one.
    pub species_info: Vec<SpeciesInfo>,
    /// Generation 1 internal index to national number, `0` for unused.
    pub gen1_species: Vec<u16>,
    /// Generation 3 internal index to national number, `0` for unused.
    pub gen3_species: Vec<u16>,
}

impl LookupTables {
    /// The tables for the retail games, built on first use.
    pub fn builtin() -> &'static LookupTables {
        static TABLES: OnceLock<LookupTables> = OnceLock::new();
        TABLES.get_or_init(LookupTables::build)
    }

    fn build() -> Self {
        let mut species = vec![String::new()];
        species.extend(species::SPECIES_NAMES.iter().map(|name| name.to_string()));

        let first_hoenn = usize::from(species::GEN3_FIRST_HOENN_INDEX);
        let mut gen3_species =
            vec![0u16; first_hoenn + species::GEN3_HOENN_INDEX_TO_NATIONAL.len()];
        (1..=251u16).for_each(|index| gen3_species[usize::from(index)] = index);
        gen3_species[first_hoenn..].copy_from_slice(&species::GEN3_HOENN_INDEX_TO_NATIONAL);

        log::debug!("Built lookup tables for {} species", species.len() - 1);
        Self {
            species: NameTable::new(species),
            moves: NameTable::from_static(&moves::MOVE_NAMES),
            abilities: NameTable::from_static(&abilities::ABILITY_NAMES),
            gen2_items: NameTable::from_static(&items::GEN2_ITEM_NAMES),
            gen3_items: NameTable::from_static(&items::GEN3_ITEM_NAMES),
            species_info: species::SPECIES_INFO.to_vec(),
            gen1_species: species::GEN1_INDEX_TO_NATIONAL
                .iter()
                .map(|national| u16::from(*national))
                .collect(),
            gen3_species,
        }
    }

    pub fn species_name(&self, national_dex: u16) -> &str {
        self.species.get(usize::from(national_dex))
    }

    pub fn move_name(&self, index: u16) -> &str {
        self.moves.get(usize::from(index))
    }

    pub fn ability_name(&self, index: u8) -> &str {
        self.abilities.get(usize::from(index))
    }

    /// Generation 1 has no held items, so it always reads as unknown.
    pub fn item_name(&self, generation: Generation, index: u16) -> &str {
        match generation {
            Generation::One => UNKNOWN,
            Generation::Two => self.gen2_items.get(usize::from(index)),
            Generation::Three => self.gen3_items.get(usize::from(index)),
        }
    }

    pub fn species_info(&self, national_dex: u16) -> Option<&SpeciesInfo> {
        usize::from(national_dex)
            .checked_sub(1)
            .and_then(|idx| self.species_info.get(idx))
    }

    /// Converts an in-game species index to a national Pokédex number. Generation
    /// 2 already stores national numbers.
    pub fn national_dex(&self, generation: Generation, index: u16) -> Option<u16> {
        let national = match generation {
            Generation::One => self.gen1_species.get(usize::from(index)).copied(),
            Generation::Two => (1..=251).contains(&index).then_some(index),
            Generation::Three => self.gen3_species.get(usize::from(index)).copied(),
        };
        national.filter(|national| *national != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_indices_are_unknown() {
        let tables = LookupTables::builtin();
        assert_eq!(tables.species_name(0), UNKNOWN);
        assert_eq!(tables.species_name(387), UNKNOWN);
        assert_eq!(tables.move_name(355), UNKNOWN);
        assert_eq!(tables.ability_name(200), UNKNOWN);
        assert_eq!(tables.item_name(Generation::Two, 6), UNKNOWN);
        assert_eq!(tables.item_name(Generation::Three, 0xFFFF), UNKNOWN);
        assert_eq!(tables.item_name(Generation::One, 1), UNKNOWN);
        assert!(tables.species_info(0).is_none());
        assert!(tables.species_info(387).is_none());
    }

    #[test]
    fn names_line_up_with_indices() {
        let tables = LookupTables::builtin();
        assert_eq!(tables.species_name(1), "Bulbasaur");
        assert_eq!(tables.species_name(151), "Mew");
        assert_eq!(tables.species_name(252), "Treecko");
        assert_eq!(tables.species_name(386), "Deoxys");
        assert_eq!(tables.move_name(1), "Pound");
        assert_eq!(tables.move_name(165), "Struggle");
        assert_eq!(tables.move_name(354), "Psycho Boost");
        assert_eq!(tables.ability_name(1), "Stench");
        assert_eq!(tables.ability_name(77), "Air Lock");
        assert_eq!(tables.item_name(Generation::Two, 1), "Master Ball");
        assert_eq!(tables.item_name(Generation::Two, 191), "TM01");
        assert_eq!(tables.item_name(Generation::Two, 249), "HM07");
        assert_eq!(tables.item_name(Generation::Three, 13), "Potion");
        assert_eq!(tables.item_name(Generation::Three, 338), "TM50");
        assert_eq!(tables.item_name(Generation::Three, 376), "Old Sea Map");
    }

    #[test]
    fn gen1_index_conversion() {
        let tables = LookupTables::builtin();
        assert_eq!(tables.national_dex(Generation::One, 0x99), Some(1));
        assert_eq!(tables.national_dex(Generation::One, 0x01), Some(112));
        assert_eq!(tables.national_dex(Generation::One, 0x54), Some(25));
        assert_eq!(tables.national_dex(Generation::One, 0x15), Some(151));
        assert_eq!(tables.national_dex(Generation::One, 0x1F), None);
        assert_eq!(tables.national_dex(Generation::One, 0xFF), None);

        let mut seen = tables
            .gen1_species
            .iter()
            .copied()
            .filter(|national| *national != 0)
            .collect::<Vec<_>>();
        seen.sort_unstable();
        assert_eq!(seen, (1..=151).collect::<Vec<_>>());
    }

    #[test]
    fn gen3_index_conversion() {
        let tables = LookupTables::builtin();
        assert_eq!(tables.national_dex(Generation::Three, 25), Some(25));
        assert_eq!(tables.national_dex(Generation::Three, 260), None);
        assert_eq!(tables.national_dex(Generation::Three, 277), Some(252));
        assert_eq!(tables.national_dex(Generation::Three, 283), Some(258));
        assert_eq!(tables.national_dex(Generation::Three, 411), Some(358));
        assert_eq!(tables.national_dex(Generation::Three, 412), None);
        assert_eq!(tables.national_dex(Generation::Two, 251), Some(251));
        assert_eq!(tables.national_dex(Generation::Two, 252), None);
    }

    #[test]
    fn growth_rates() {
        assert_eq!(GrowthRate::MediumFast.experience_for_level(100), 1_000_000);
        assert_eq!(GrowthRate::Erratic.experience_for_level(100), 600_000);
        assert_eq!(GrowthRate::Fluctuating.experience_for_level(100), 1_640_000);
        assert_eq!(GrowthRate::MediumSlow.experience_for_level(100), 1_059_860);
        assert_eq!(GrowthRate::Slow.experience_for_level(100), 1_250_000);
        assert_eq!(GrowthRate::Fast.experience_for_level(100), 800_000);
        assert_eq!(GrowthRate::MediumSlow.experience_for_level(5), 135);

        assert_eq!(GrowthRate::MediumSlow.level_for_experience(0), 1);
        assert_eq!(GrowthRate::MediumSlow.level_for_experience(135), 5);
        assert_eq!(GrowthRate::MediumSlow.level_for_experience(134), 4);
        assert_eq!(GrowthRate::MediumFast.level_for_experience(u32::MAX), 100);
    }

    #[test]
    fn species_info_is_complete() {
        let tables = LookupTables::builtin();
        assert_eq!(tables.species_info.len(), usize::from(NATIONAL_DEX_SIZE));
        let bulbasaur = tables.species_info(1).unwrap();
        assert_eq!(bulbasaur.growth_rate, GrowthRate::MediumSlow);
        assert_eq!(bulbasaur.gender_threshold, 31);
        assert_eq!(tables.ability_name(bulbasaur.ability(false)), "Overgrow");
        // Single-ability species ignore the ability bit
        assert_eq!(tables.ability_name(bulbasaur.ability(true)), "Overgrow");

        let psyduck = tables.species_info(54).unwrap();
        assert_eq!(tables.ability_name(psyduck.ability(true)), "Cloud Nine");
        assert_eq!(
            tables.species_info(132).unwrap().gender_threshold,
            SpeciesInfo::GENDERLESS
        );
    }

    #[test]
    fn natures() {
        assert_eq!(Nature::from_personality(0), Nature::Hardy);
        assert_eq!(Nature::from_personality(24), Nature::Quirky);
        assert_eq!(Nature::from_personality(28), Nature::Adamant);
        assert_eq!(Nature::from_personality(u32::MAX), Nature::Calm);
    }
}
