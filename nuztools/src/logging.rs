use log::LevelFilter;
use std::io;
use std::path::{Path, PathBuf};

const LOG_FILE_NAME: &str = "nuztools.log";
const MAX_LOG_FILE_INDEX: u64 = 2;

fn log_file_path(log_dir: &Path, idx: Option<u64>) -> PathBuf {
    let mut path = log_dir.to_path_buf();
    match idx {
        Some(idx) => path.push(format!("{LOG_FILE_NAME}.{idx}")),
        None => path.push(LOG_FILE_NAME),
    }
    path
}

/// Shifts `nuztools.log.N` up by one, dropping the oldest, and moves the last
/// run's log to `nuztools.log.0`.
fn rotate(log_dir: &Path) -> io::Result<()> {
    let _ = std::fs::remove_file(log_file_path(log_dir, Some(MAX_LOG_FILE_INDEX)));
    for idx in (0..MAX_LOG_FILE_INDEX).rev() {
        let log_file = log_file_path(log_dir, Some(idx));
        if log_file.exists() {
            std::fs::rename(&log_file, log_file_path(log_dir, Some(idx + 1)))?;
        }
    }

    let current_log_file = log_file_path(log_dir, None);
    if current_log_file.exists() {
        std::fs::rename(&current_log_file, log_file_path(log_dir, Some(0)))?;
    }
    Ok(())
}

/// Logs to a fresh `nuztools.log` in `log_dir`.
pub fn initialize_file(enable_debug: bool, log_dir: impl AsRef<Path>) -> io::Result<()> {
    let log_level = if enable_debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir)?;
    rotate(log_dir)?;

    let current_log_file = log_file_path(log_dir, None);
    std::fs::File::create(&current_log_file)?;
    simple_logging::log_to_file(&current_log_file, log_level)
}

/// Logs to stderr, filtered by `RUST_LOG`.
pub fn initialize_stderr(enable_debug: bool) {
    let default_filter = if enable_debug { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().filter_or("RUST_LOG", default_filter));
}
