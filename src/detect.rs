//! Works out which game wrote a save.
//!
//! Every supported format is tried in a fixed order and the first one whose
//! checksums and structure validate wins. Formats have disjoint checksum
//! locations and structural checks, so at most one of them accepts a real save.

use crate::{
    checksum::gen1_checksum,
    error::{ChecksumError, DecodeError},
    format::{
        FormatId, GameSelection, MIN_SAVE_SIZE, RBY_JP_CHECKSUM_END, RBY_JP_CHECKSUM_OFFSET,
        RBY_JP_CHECKSUM_START,
    },
    save::{self, ValidatedSection},
};

type Validator = for<'a> fn(&'a [u8], FormatId) -> Result<ValidatedSection<'a>, ChecksumError>;

/// Order candidates are tried in during automatic detection.
pub const CANDIDATES: [(FormatId, Validator); 6] = [
    (FormatId::RedBlueYellow, save::validate_game_boy),
    (FormatId::GoldSilver, save::validate_game_boy),
    (FormatId::Crystal, save::validate_game_boy),
    (FormatId::RubySapphire, save::validate_gba),
    (FormatId::Emerald, save::validate_gba),
    (FormatId::FireRedLeafGreen, save::validate_gba),
];

/// A layout that is recognized but not decoded.
struct NearMiss {
    family: &'static str,
    detail: &'static str,
    matches: fn(&[u8]) -> bool,
}

const NEAR_MISSES: [NearMiss; 1] = [NearMiss {
    family: "Red/Green/Blue/Yellow",
    detail: "Japanese release",
    matches: is_japanese_gen1,
}];

const RBY_JP_PARTY: usize = 0x2ED5;

fn is_japanese_gen1(raw: &[u8]) -> bool {
    let Some(data) = raw.get(RBY_JP_CHECKSUM_START..=RBY_JP_CHECKSUM_END) else {
        return false;
    };
    let checksum_matches = raw.get(RBY_JP_CHECKSUM_OFFSET) == Some(&gen1_checksum(data));
    let party_count = raw.get(RBY_JP_PARTY).copied().unwrap_or(u8::MAX);
    checksum_matches
        && party_count <= 6
        && raw.get(RBY_JP_PARTY + 1 + usize::from(party_count)) == Some(&0xFF)
}

/// Validates `raw` as the selected format, or finds the format that validates.
pub fn detect(raw: &[u8], selection: GameSelection) -> Result<ValidatedSection<'_>, DecodeError> {
    if raw.len() < MIN_SAVE_SIZE {
        log::error!(
            "Invalid file length for a game save. Found: {}, Expected at least: {MIN_SAVE_SIZE}",
            raw.len()
        );
        return Err(DecodeError::InvalidSize {
            actual: raw.len(),
            minimum: MIN_SAVE_SIZE,
        });
    }

    if let GameSelection::Format(format) = selection {
        return save::locate_valid_section(raw, format).map_err(|source| {
            log::debug!("Save does not validate as the selected {format}: {source}");
            DecodeError::Checksum { format, source }
        });
    }

    let mut rejected = Vec::with_capacity(CANDIDATES.len());
    for (format, validate) in CANDIDATES {
        match validate(raw, format) {
            Ok(section) => {
                log::info!("Detected {format} save");
                return Ok(section);
            }
            Err(reason) => {
                log::debug!("Not a {format} save: {reason}");
                rejected.push((format, reason));
            }
        }
    }

    if let Some(near_miss) = NEAR_MISSES.iter().find(|near_miss| (near_miss.matches)(raw)) {
        log::warn!(
            "Save looks like {} ({}), which is not supported",
            near_miss.family,
            near_miss.detail
        );
        return Err(DecodeError::UnsupportedRegion {
            family: near_miss.family,
            detail: near_miss.detail,
        });
    }

    Err(DecodeError::FormatNotDetected { rejected })
}

/// Only the detected format.
pub fn detect_format(raw: &[u8]) -> Result<FormatId, DecodeError> {
    detect(raw, GameSelection::Auto).map(|section| section.format())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_buffer() {
        assert!(matches!(
            detect_format(&[0u8; 0x7FFF]),
            Err(DecodeError::InvalidSize {
                actual: 0x7FFF,
                minimum: 0x8000
            })
        ));
    }

    #[test]
    fn test_zero_buffer() {
        for size in [0x8000, 0x20000] {
            match detect_format(&vec![0u8; size]) {
                Err(DecodeError::FormatNotDetected { rejected }) => {
                    let formats = rejected.iter().map(|(format, _)| *format).collect::<Vec<_>>();
                    assert_eq!(formats, FormatId::ALL.to_vec());
                }
                other => panic!("unexpected result {other:?}"),
            }
        }
    }

    #[test]
    fn test_forced_format_reports_checksum() {
        let raw = vec![0u8; 0x8000];
        assert!(matches!(
            detect(&raw, GameSelection::Format(FormatId::Emerald)),
            Err(DecodeError::Checksum {
                format: FormatId::Emerald,
                source: ChecksumError::TooShort { .. }
            })
        ));
        assert!(matches!(
            detect(&raw, GameSelection::Format(FormatId::RedBlueYellow)),
            Err(DecodeError::Checksum {
                format: FormatId::RedBlueYellow,
                source: ChecksumError::Mismatch { .. }
            })
        ));
    }

    #[test]
    fn test_japanese_gen1() {
        let mut raw = vec![0u8; 0x8000];
        raw[RBY_JP_PARTY] = 0;
        raw[RBY_JP_PARTY + 1] = 0xFF;
        raw[RBY_JP_CHECKSUM_OFFSET] =
            gen1_checksum(&raw[RBY_JP_CHECKSUM_START..=RBY_JP_CHECKSUM_END]);
        assert!(is_japanese_gen1(&raw));
        assert!(matches!(
            detect_format(&raw),
            Err(DecodeError::UnsupportedRegion { .. })
        ));
    }
}
