pub mod decode;
pub mod inspect;
pub mod logging;
pub mod mappings;

use std::path::Path;

use anyhow::Context;
use nuzsave::{BoxMapping, DecodeOptions, DecodeResult, GameSelection};

/// Reads a save from disk and decodes it.
pub fn decode_file(
    path: impl AsRef<Path>,
    selection: GameSelection,
    box_mappings: Vec<BoxMapping>,
) -> anyhow::Result<DecodeResult> {
    let path = path.as_ref();
    let raw = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    log::debug!("Read {} bytes from {}", raw.len(), path.display());
    let options = DecodeOptions {
        selection,
        box_mappings,
    };
    nuzsave::decode(&raw, &options).with_context(|| format!("Failed to decode {}", path.display()))
}
