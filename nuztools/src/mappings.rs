use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;
use nuzsave::BoxMapping;

pub const CONFIG_DIR_ENV: &str = "NUZSAVE_CONFIG_DIR";
const FILE_NAME: &str = "box_mappings.json";

/// The `box_mappings.json` the tools read their box statuses from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingsFile {
    path: PathBuf,
}

impl MappingsFile {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        MappingsFile {
            path: dir.as_ref().join(FILE_NAME),
        }
    }

    /// Looks in `--config-dir`, then `$NUZSAVE_CONFIG_DIR`, then the user's
    /// local data directory.
    pub fn locate(config_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let data_dir = directories::BaseDirs::new().map(|dirs| dirs.data_local_dir().to_owned());
        let dir = pick_dir(config_dir, std::env::var_os(CONFIG_DIR_ENV), data_dir)
            .with_context(|| format!("Pass --config-dir or set {CONFIG_DIR_ENV}"))?;
        Ok(Self::in_dir(dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file means no mappings.
    pub fn load(&self) -> anyhow::Result<Vec<BoxMapping>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No box mappings at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read {}", self.path.display()));
            }
        };
        let mappings: Vec<BoxMapping> = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid box mappings in {}", self.path.display()))?;
        log::info!(
            "Loaded {} box mappings from {}",
            mappings.len(),
            self.path.display()
        );
        Ok(mappings)
    }
}

fn pick_dir(
    flag: Option<PathBuf>,
    env: Option<OsString>,
    data_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    flag.or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
        .or_else(|| data_dir.map(|dir| dir.join("nuzsave")))
}
