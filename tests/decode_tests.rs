mod common;

use common::*;
use nuzsave::{
    decode, detect, detect_format,
    format::FormatId,
    pokemon::{Gender, Special},
    save::PlayerGender,
    BoxMapping, ChecksumError, DecodeError, DecodeOptions, GameSelection, Location, RecordError,
    Slot, DEFAULT_STATUS, PARTY_STATUS,
};

fn entry(species_marker: u8, record: Vec<u8>, nickname: &str) -> GbEntry {
    GbEntry {
        species_marker,
        record,
        original_trainer: "RED".to_owned(),
        nickname: nickname.to_owned(),
    }
}

fn gen1_save() -> Vec<u8> {
    let mut save = GbSave::new(FormatId::RedBlueYellow, "RED", 12345);
    save.set_party(&[
        entry(
            0x54,
            gen1_record(0x54, 12, [84, 45, 0, 0], 12345, 1728, true),
            "SPARKY",
        ),
        entry(
            0x99,
            gen1_record(0x99, 5, [33, 45, 0, 0], 12345, 135, true),
            "BULBASAUR",
        ),
    ]);
    save.set_current_box(&[entry(
        0xA5,
        gen1_record(0xA5, 3, [33, 0, 0, 0], 12345, 27, false),
        "RATTATA",
    )]);
    save.set_box(
        1,
        &[entry(
            0x24,
            gen1_record(0x24, 4, [33, 0, 0, 0], 54321, 64, false),
            "PIDGEY",
        )],
    );
    save.raw[0x25F3..0x25F6].copy_from_slice(&[0x01, 0x23, 0x45]);
    save.raw[0x2602] = 0b0000_0111;
    // Box 1 open, boxes initialized
    save.raw[0x284C] = 0x80;
    save.finish()
}

fn occupied(slot: &Slot) -> &nuzsave::DecodedRecord {
    slot.record()
        .unwrap_or_else(|| panic!("{} is unreadable", slot.location()))
}

#[test]
fn test_gen1_end_to_end() {
    init_logging();
    let raw = gen1_save();
    let result = decode(&raw, &DecodeOptions::default()).unwrap();

    assert_eq!(result.detected_format, FormatId::RedBlueYellow);
    assert_eq!(result.trainer.name, "RED");
    assert_eq!(result.trainer.id.public_id, 12345);
    assert_eq!(result.trainer.money, 12345);
    assert_eq!(result.trainer.badges, Some(3));
    assert_eq!(result.trainer.rival_name.as_deref(), Some("BLUE"));

    assert_eq!(result.party.len(), 2);
    let first = occupied(&result.party[0]);
    assert_eq!(first.location, Location::Party { slot: 1 });
    assert_eq!(first.species.name, "Pikachu");
    assert_eq!(first.species.national_dex, Some(25));
    assert_eq!(first.nickname, "SPARKY");
    assert_eq!(first.level, 12);
    assert_eq!(first.experience, 1728);
    let moves = first
        .moves
        .iter()
        .map(|pokemon_move| pokemon_move.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(moves, ["Thunder Shock", "Growl"]);
    assert_eq!(first.status, PARTY_STATUS);
    assert!(first.is_owned_by(&result.trainer.id));
    assert_eq!(occupied(&result.party[1]).species.name, "Bulbasaur");

    assert_eq!(result.boxes.len(), 12);
    let current = occupied(&result.boxes[0].slots[0]);
    assert_eq!(current.species.name, "Rattata");
    assert_eq!(current.level, 3);
    let banked = occupied(&result.boxes[1].slots[0]);
    assert_eq!(banked.species.name, "Pidgey");
    assert_eq!(banked.location, Location::Box { number: 2, slot: 1 });
    assert!(!banked.is_owned_by(&result.trainer.id));
    assert!(result.boxes[2..].iter().all(|stored| stored.slots.is_empty()));
}

#[test]
fn test_gen1_uninitialized_boxes_are_skipped() {
    let mut raw = gen1_save();
    raw[0x284C] = 0x00;
    let checksum = nuzsave::checksum::gen1_checksum(&raw[0x2598..=0x3522]);
    raw[0x3523] = checksum;

    let result = decode(&raw, &DecodeOptions::default()).unwrap();
    assert_eq!(result.boxes[0].slots.len(), 1);
    assert!(result.boxes[1].slots.is_empty());
}

#[test]
fn test_gen2_egg_shiny_gender() {
    init_logging();
    let mut save = GbSave::new(FormatId::GoldSilver, "GOLD", 4321);
    save.set_party(&[
        entry(181, gen2_record(181, 0x12, [0xAA, 0xAA], 30, true), "AMPHAROS"),
        entry(0xFD, gen2_record(175, 0, [0x00, 0x00], 5, true), "EGG"),
        entry(181, gen2_record(181, 0, [0x1A, 0xAA], 30, true), "MAREEP"),
    ]);
    save.set_box(
        3,
        &[entry(81, gen2_record(81, 0, [0x00, 0x00], 10, false), "MAGNEMITE")],
    );
    // Money is plain big-endian in generation 2
    save.raw[0x23DB..0x23DE].copy_from_slice(&[0x00, 0x27, 0x10]);
    save.raw[0x23E4] = 0xFF;
    save.raw[0x23E5] = 0x01;
    let raw = save.finish();

    assert_eq!(detect_format(&raw).unwrap(), FormatId::GoldSilver);
    let result = decode(&raw, &DecodeOptions::default()).unwrap();
    assert_eq!(result.trainer.money, 10_000);
    assert_eq!(result.trainer.badges, Some(9));
    assert_eq!(result.trainer.gender, None);

    let ampharos = occupied(&result.party[0]);
    assert_eq!(ampharos.is_shiny, Some(true));
    assert_eq!(ampharos.gender, Some(Gender::Male));
    assert!(ampharos.held_item.is_some());
    assert_eq!(ampharos.friendship, Some(120));
    assert!(!ampharos.is_egg);

    let egg = occupied(&result.party[1]);
    assert!(egg.is_egg);
    assert_eq!(egg.species.name, "Togepi");

    let mareep = occupied(&result.party[2]);
    assert_eq!(mareep.is_shiny, Some(false));
    assert_eq!(mareep.gender, Some(Gender::Female));

    assert_eq!(result.boxes.len(), 14);
    assert_eq!(result.boxes[3].name, "BOX4");
    let magnemite = occupied(&result.boxes[3].slots[0]);
    assert_eq!(magnemite.gender, Some(Gender::Genderless));
    assert_eq!(magnemite.location, Location::Box { number: 4, slot: 1 });
}

#[test]
fn test_crystal_player_gender() {
    let mut save = GbSave::new(FormatId::Crystal, "KRIS", 1);
    save.set_party(&[entry(
        152,
        gen2_record(152, 0, [0, 0], 5, true),
        "CHIKORITA",
    )]);
    save.raw[0x3E3D] = 1;
    let raw = save.finish();

    let result = decode(&raw, &DecodeOptions::default()).unwrap();
    assert_eq!(result.detected_format, FormatId::Crystal);
    assert_eq!(result.trainer.gender, Some(PlayerGender::Female));
    assert_eq!(occupied(&result.party[0]).species.name, "Chikorita");
}

fn emerald_slot(trainer: &'static str) -> GbaSlot {
    let mut slot = GbaSlot::new(FormatId::Emerald, trainer);
    slot.party = vec![
        pk3_record(&Pk3Spec {
            personality_value: 0x0000_0007,
            species: 277,
            experience: 135,
            moves: [1, 43, 0, 0],
            nickname: "TREECKO",
            met_location: 0x10,
            party_level: Some(5),
            ..Default::default()
        }),
        pk3_record(&Pk3Spec {
            party_level: Some(10),
            ..Default::default()
        }),
        pk3_record(&Pk3Spec {
            personality_value: 0xDEAD_BEEF,
            species: 280,
            experience: 135,
            nickname: "TORCHIC",
            party_level: Some(5),
            ..Default::default()
        }),
    ];
    slot.boxed = vec![(1, 2, pk3_record(&Pk3Spec::default()))];
    slot
}

#[test]
fn test_gen3_end_to_end() {
    init_logging();
    let raw = gba_save(&emerald_slot("Brendan"));
    let options = DecodeOptions {
        selection: GameSelection::Auto,
        box_mappings: vec![BoxMapping {
            index: 2,
            status: "Dead".to_owned(),
            name: "Graveyard".to_owned(),
        }],
    };
    let result = decode(&raw, &options).unwrap();

    assert_eq!(result.detected_format, FormatId::Emerald);
    assert_eq!(result.trainer.name, "Brendan");
    assert_eq!(result.trainer.id.public_id, 1111);
    assert_eq!(result.trainer.id.secret_id, Some(2222));
    assert_eq!(result.trainer.gender, Some(PlayerGender::Female));
    assert_eq!(result.trainer.money, 3000);
    assert_eq!(result.trainer.time_played.hours, 12);
    assert_eq!(result.trainer.time_played.minutes, 34);
    assert_eq!(result.trainer.badges, None);

    assert_eq!(result.party.len(), 3);
    let treecko = occupied(&result.party[0]);
    assert_eq!(treecko.species.name, "Treecko");
    assert_eq!(treecko.species.national_dex, Some(252));
    assert_eq!(treecko.species.index, 277);
    assert_eq!(treecko.level, 5);
    assert_eq!(treecko.nickname, "TREECKO");
    assert_eq!(treecko.original_trainer.name, "May");
    assert_eq!(treecko.ability.as_ref().unwrap().name, "Overgrow");
    assert_eq!(treecko.nature, Some(nuzsave::tables::Nature::Relaxed));
    assert_eq!(treecko.personality_value, Some(7));
    assert_eq!(treecko.ivs.hp, 31);
    assert_eq!(
        treecko.ivs.special,
        Special::Split {
            attack: 31,
            defense: 31
        }
    );
    assert_eq!(treecko.moves[0].name, "Pound");
    assert_eq!(treecko.met_location, Some(0x10));
    assert!(treecko.is_owned_by(&result.trainer.id));
    assert_eq!(treecko.status, PARTY_STATUS);

    let boxed = occupied(&result.boxes[1].slots[0]);
    assert_eq!(boxed.location, Location::Box { number: 2, slot: 3 });
    assert_eq!(boxed.species.name, "Pikachu");
    // Medium Fast: 1000 experience is exactly level 10
    assert_eq!(boxed.level, 10);
    assert_eq!(boxed.met_location, Some(0));
    assert_eq!(boxed.status, "Dead");
    assert_eq!(result.boxes[1].label, "Graveyard");
    assert_eq!(result.boxes[1].name, "BOX 2");
    assert_eq!(result.boxes[0].status, DEFAULT_STATUS);
    assert_eq!(result.bucket("Dead").len(), 1);
}

#[test]
fn test_gen3_box_record_across_sections() {
    let mut slot = emerald_slot("Brendan");
    slot.boxed = vec![
        // Bytes 3924..4004 of the PC buffer, split between sections 5 and 6
        (1, 19, pk3_record(&Pk3Spec::default())),
        // The last slot, beside the box names in section 13
        (13, 29, pk3_record(&Pk3Spec::default())),
    ];
    let mut raw = vec![0u8; 0x20000];
    slot.write(&mut raw, 0x0000, 1, 4);
    let result = decode(&raw, &DecodeOptions::default()).unwrap();

    assert_eq!(result.unreadable_count(), 0);
    let straddling = occupied(&result.boxes[1].slots[0]);
    assert_eq!(straddling.location, Location::Box { number: 2, slot: 20 });
    assert_eq!(straddling.species.name, "Pikachu");
    assert_eq!(straddling.nickname, "PIKACHU");

    let last = occupied(&result.boxes[13].slots[0]);
    assert_eq!(last.location, Location::Box { number: 14, slot: 30 });
    assert_eq!(last.species.name, "Pikachu");
    assert_eq!(result.boxes[13].name, "BOX 14");
}

#[test]
fn test_gen3_graceful_corruption() {
    let mut slot = emerald_slot("Brendan");
    // Inside the encrypted payload of the second party member
    slot.party[1][40] ^= 0x5A;
    let raw = gba_save(&slot);
    let result = decode(&raw, &DecodeOptions::default()).unwrap();

    assert_eq!(result.party.len(), 3);
    assert!(result.party[0].record().is_some());
    match &result.party[1] {
        Slot::Unreadable(unreadable) => {
            assert_eq!(unreadable.location, Location::Party { slot: 2 });
            assert!(matches!(
                unreadable.error,
                RecordError::ChecksumMismatch { .. }
            ));
        }
        Slot::Occupied(_) => panic!("corrupted record decoded"),
    }
    assert_eq!(occupied(&result.party[2]).species.name, "Torchic");
    assert_eq!(result.unreadable_count(), 1);
}

fn two_slot_save(
    first: (&'static str, u32, usize),
    second: (&'static str, u32, usize),
) -> Vec<u8> {
    let mut raw = vec![0u8; 0x20000];
    let (name, counter, rotation) = first;
    emerald_slot(name).write(&mut raw, 0x0000, counter, rotation);
    let (name, counter, rotation) = second;
    emerald_slot(name).write(&mut raw, 0xE000, counter, rotation);
    raw
}

#[test]
fn test_gen3_newest_slot_wins() {
    let raw = two_slot_save(("Old", 5, 0), ("New", 6, 3));
    let result = decode(&raw, &DecodeOptions::default()).unwrap();
    assert_eq!(result.trainer.name, "New");

    let raw = two_slot_save(("New", 9, 11), ("Old", 8, 0));
    let result = decode(&raw, &DecodeOptions::default()).unwrap();
    assert_eq!(result.trainer.name, "New");

    let raw = two_slot_save(("First", 4, 0), ("Second", 4, 0));
    let result = decode(&raw, &DecodeOptions::default()).unwrap();
    assert_eq!(result.trainer.name, "First");
}

#[test]
fn test_gen3_corrupted_newest_slot_falls_back() {
    let mut raw = two_slot_save(("Old", 1, 0), ("New", 2, 5));
    // A byte inside the second slot's section data, without fixing its checksum
    raw[0xE000 + 0x0100] ^= 0xFF;
    let result = decode(&raw, &DecodeOptions::default()).unwrap();
    assert_eq!(result.trainer.name, "Old");
}

fn save_for(format: FormatId) -> Vec<u8> {
    match format {
        FormatId::RedBlueYellow => gen1_save(),
        FormatId::GoldSilver | FormatId::Crystal => {
            let mut save = GbSave::new(format, "GOLD", 7);
            save.set_party(&[entry(152, gen2_record(152, 0, [0, 0], 5, true), "CHIKO")]);
            save.finish()
        }
        _ => {
            let mut slot = GbaSlot::new(format, "Ash");
            slot.party = vec![pk3_record(&Pk3Spec {
                party_level: Some(10),
                ..Default::default()
            })];
            gba_save(&slot)
        }
    }
}

#[test]
fn test_detector_exclusivity() {
    for format in FormatId::ALL {
        let raw = save_for(format);
        assert_eq!(detect_format(&raw).unwrap(), format);

        let section = detect(&raw, GameSelection::Format(format)).unwrap();
        assert!(section.verify().is_ok(), "{format} does not verify");

        for other in FormatId::ALL.into_iter().filter(|other| *other != format) {
            match detect(&raw, GameSelection::Format(other)) {
                Err(DecodeError::Checksum { format, .. }) => assert_eq!(format, other),
                Err(err) => panic!("unexpected error {err}"),
                Ok(_) => panic!("{format} save validated as {other}"),
            }
        }
    }
}

#[test]
fn test_gen3_variant_mismatch() {
    let raw = save_for(FormatId::FireRedLeafGreen);
    match detect(&raw, GameSelection::Format(FormatId::RubySapphire)) {
        Err(DecodeError::Checksum { source, .. }) => assert!(matches!(
            source,
            ChecksumError::VariantMismatch { .. } | ChecksumError::NoValidSlot
        )),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_fire_red_money_uses_security_key() {
    let mut slot = GbaSlot::new(FormatId::FireRedLeafGreen, "Red");
    slot.money = 999_999;
    let result = decode(&gba_save(&slot), &DecodeOptions::default()).unwrap();
    assert_eq!(result.detected_format, FormatId::FireRedLeafGreen);
    assert_eq!(result.trainer.money, 999_999);
    assert!(result.party.is_empty());
}

#[test]
fn test_zero_and_short_buffers() {
    assert!(matches!(
        decode(&vec![0u8; 0x20000], &DecodeOptions::default()),
        Err(DecodeError::FormatNotDetected { .. })
    ));
    assert!(matches!(
        decode(&vec![0u8; 0x1000], &DecodeOptions::default()),
        Err(DecodeError::InvalidSize { .. })
    ));
}

#[test]
fn test_corrupted_gen1_checksum_is_not_detected() {
    let mut raw = gen1_save();
    raw[0x2600] ^= 0x01;
    assert!(matches!(
        detect_format(&raw),
        Err(DecodeError::FormatNotDetected { .. })
    ));
}
