//! Sorting decoded boxes into the caller's status buckets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    format::FormatId,
    pokemon::{DecodedRecord, Slot},
    save::{GameBox, SaveContents, Trainer},
};

/// Status of records in a box with no mapping.
pub const DEFAULT_STATUS: &str = "Boxed";
/// Status of every party record.
pub const PARTY_STATUS: &str = "Team";

/// Sends every record in one in-game box to a status bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxMapping {
    /// Box number as the game shows it, counting from 1.
    pub index: u8,
    pub status: String,
    /// Label for the box. Empty keeps the in-game name.
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoredBox {
    pub number: u8,
    /// The in-game box name.
    pub name: String,
    pub status: String,
    pub label: String,
    pub slots: Vec<Slot>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeResult {
    pub detected_format: FormatId,
    pub trainer: Trainer,
    pub party: Vec<Slot>,
    pub boxes: Vec<StoredBox>,
}

impl DecodeResult {
    /// Every readable record, party included, carrying `status`.
    pub fn bucket(&self, status: &str) -> Vec<&DecodedRecord> {
        self.records()
            .filter(|record| record.status == status)
            .collect()
    }

    /// Readable records grouped by status.
    pub fn buckets(&self) -> BTreeMap<&str, Vec<&DecodedRecord>> {
        let mut buckets: BTreeMap<&str, Vec<&DecodedRecord>> = BTreeMap::new();
        for record in self.records() {
            buckets.entry(record.status.as_str()).or_default().push(record);
        }
        buckets
    }

    pub fn unreadable_count(&self) -> usize {
        self.slots().filter(|slot| slot.is_unreadable()).count()
    }

    fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.party
            .iter()
            .chain(self.boxes.iter().flat_map(|stored| stored.slots.iter()))
    }

    fn records(&self) -> impl Iterator<Item = &DecodedRecord> {
        self.slots().filter_map(Slot::record)
    }
}

fn assign_status(slots: &mut [Slot], status: &str) {
    slots
        .iter_mut()
        .filter_map(|slot| match slot {
            Slot::Occupied(record) => Some(record),
            Slot::Unreadable(_) => None,
        })
        .for_each(|record| record.status = status.to_owned());
}

/// Applies the box mappings to decoded save contents. The first mapping for a
/// box number wins.
pub fn project(format: FormatId, contents: SaveContents, mappings: &[BoxMapping]) -> DecodeResult {
    let SaveContents {
        trainer,
        mut party,
        boxes,
    } = contents;
    assign_status(&mut party, PARTY_STATUS);

    for mapping in mappings {
        if !boxes.iter().any(|game_box| game_box.number == mapping.index) {
            log::warn!(
                "Mapping for box {} does not match any {format} box",
                mapping.index
            );
        }
    }

    let boxes = boxes
        .into_iter()
        .map(|game_box| {
            let GameBox {
                number,
                name,
                mut slots,
            } = game_box;
            let mapping = mappings.iter().find(|mapping| mapping.index == number);
            let status = mapping
                .map(|mapping| mapping.status.clone())
                .unwrap_or_else(|| DEFAULT_STATUS.to_owned());
            let label = match mapping {
                Some(mapping) if !mapping.name.is_empty() => mapping.name.clone(),
                _ => name.clone(),
            };
            assign_status(&mut slots, &status);
            log::trace!("Box {number} ({label}) goes to {status}");
            StoredBox {
                number,
                name,
                status,
                label,
                slots,
            }
        })
        .collect();

    DecodeResult {
        detected_format: format,
        trainer,
        party,
        boxes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::RecordError,
        pokemon::{dv_block, Location, OriginalTrainer, Species, UnreadableRecord},
        save::TimePlayed,
        TrainerId,
    };

    fn record(location: Location) -> Slot {
        Slot::Occupied(DecodedRecord {
            location,
            species: Species {
                national_dex: Some(1),
                index: 1,
                name: "Bulbasaur".to_owned(),
            },
            nickname: "BULBASAUR".to_owned(),
            original_trainer: OriginalTrainer {
                name: "RED".to_owned(),
                id: TrainerId {
                    public_id: 1,
                    secret_id: None,
                },
            },
            held_item: None,
            moves: Vec::new(),
            experience: 0,
            level: 5,
            ivs: dv_block(0),
            evs: dv_block(0),
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

    fn contents() -> SaveContents {
        let boxes = (1..=3)
            .map(|number| GameBox {
                number,
                name: format!("BOX{number}"),
                slots: vec![
                    record(Location::Box { number, slot: 1 }),
                    Slot::Unreadable(UnreadableRecord {
                        location: Location::Box { number, slot: 2 },
                        error: RecordError::BadEgg,
                    }),
                    record(Location::Box { number, slot: 3 }),
                ],
            })
            .collect();
        SaveContents {
            trainer: Trainer {
                name: "RED".to_owned(),
                id: TrainerId {
                    public_id: 1,
                    secret_id: None,
                },
                gender: None,
                money: 0,
                time_played: TimePlayed::default(),
                badges: Some(0),
                rival_name: Some("BLUE".to_owned()),
            },
            party: vec![record(Location::Party { slot: 1 })],
            boxes,
        }
    }

    fn mapping(index: u8, status: &str, name: &str) -> BoxMapping {
        BoxMapping {
            index,
            status: status.to_owned(),
            name: name.to_owned(),
        }
    }

    #[test]
    fn test_every_mapped_record_lands_in_its_bucket() {
        let mappings = vec![mapping(2, "Dead", "Graveyard"), mapping(3, "Released", "")];
        let result = project(FormatId::RedBlueYellow, contents(), &mappings);

        assert_eq!(result.bucket(PARTY_STATUS).len(), 1);
        for mapping in &mappings {
            let bucket = result.bucket(&mapping.status);
            assert_eq!(bucket.len(), 2);
            assert!(bucket
                .iter()
                .all(|record| record.location.box_number() == Some(mapping.index)));
        }
        let boxed = result.bucket(DEFAULT_STATUS);
        assert_eq!(boxed.len(), 2);
        assert!(boxed
            .iter()
            .all(|record| record.location.box_number() == Some(1)));

        assert_eq!(result.boxes[1].label, "Graveyard");
        assert_eq!(result.boxes[2].label, "BOX3");
        assert_eq!(result.boxes[0].status, DEFAULT_STATUS);
        assert_eq!(result.unreadable_count(), 3);
        assert_eq!(result.buckets().len(), 4);
    }

    #[test]
    fn test_first_mapping_wins() {
        let mappings = vec![mapping(1, "Dead", ""), mapping(1, "Released", "")];
        let result = project(FormatId::RedBlueYellow, contents(), &mappings);
        assert_eq!(result.boxes[0].status, "Dead");
        assert!(result.bucket("Released").is_empty());
    }

    #[test]
    fn test_mapping_json_shape() {
        let mappings: Vec<BoxMapping> =
            serde_json::from_str(r#"[{"index": 4, "status": "Dead"}]"#).unwrap();
        assert_eq!(mappings, vec![mapping(4, "Dead", "")]);
    }
}
