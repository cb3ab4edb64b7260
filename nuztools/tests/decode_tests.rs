#[path = "../../tests/common/mod.rs"]
mod common;

use common::{gba_save, init_logging, pk3_record, GbaSlot, Pk3Spec};
use nuzsave::{format::FormatId, GameSelection};
use nuztools::{decode, mappings::MappingsFile};
use std::{io::Write, path::PathBuf};
use tempfile::NamedTempFile;

fn create_temp_save(save_data: &[u8]) -> NamedTempFile {
    let mut temp_save_file = NamedTempFile::new().unwrap();
    temp_save_file.write_all(save_data).unwrap();
    temp_save_file.flush().unwrap();
    temp_save_file
}

fn ruby_save() -> Vec<u8> {
    let mut slot = GbaSlot::new(FormatId::RubySapphire, "Sapph");
    slot.party = vec![pk3_record(&Pk3Spec {
        party_level: Some(10),
        ..Default::default()
    })];
    slot.boxed = vec![(0, 0, pk3_record(&Pk3Spec::default()))];
    gba_save(&slot)
}

#[test]
fn test_decode_writes_json() {
    init_logging();
    let input_save = create_temp_save(&ruby_save());
    let config_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        config_dir.path().join("box_mappings.json"),
        r#"[{"index": 1, "status": "Dead"}]"#,
    )
    .unwrap();
    let box_mappings = MappingsFile::in_dir(config_dir.path()).load().unwrap();

    let output = NamedTempFile::new().unwrap();
    decode::run(
        decode::Opts {
            sav: PathBuf::from(input_save.path()),
            game: GameSelection::Auto,
            dest: Some(PathBuf::from(output.path())),
            pretty: false,
        },
        box_mappings,
    )
    .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(json["detectedSaveFormat"], "RS");
    assert_eq!(json["detectedGame"]["name"], "Ruby/Sapphire");
    assert_eq!(json["trainer"]["name"], "Sapph");
    assert_eq!(json["party"][0]["species"]["name"], "Pikachu");
    assert_eq!(json["party"][0]["status"], "Team");
    assert_eq!(json["boxes"][0]["status"], "Dead");
    assert_eq!(json["boxes"][0]["slots"][0]["level"], 10);
    assert!(json.get("error").is_none());
}

#[test]
fn test_decode_failure_still_writes_response() {
    let input_save = create_temp_save(&vec![0u8; 0x8000]);
    let output = NamedTempFile::new().unwrap();
    let result = decode::run(
        decode::Opts {
            sav: PathBuf::from(input_save.path()),
            game: GameSelection::Auto,
            dest: Some(PathBuf::from(output.path())),
            pretty: true,
        },
        Vec::new(),
    );
    assert!(result.is_err());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(json["error"]["kind"], "FormatNotDetected");
    assert!(json["trainer"].is_null());
}

#[test]
fn test_missing_save_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = decode::run(
        decode::Opts {
            sav: dir.path().join("missing.sav"),
            game: GameSelection::Auto,
            dest: None,
            pretty: false,
        },
        Vec::new(),
    );
    assert!(result.is_err());
}
