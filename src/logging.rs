//! Logger setup
//!
//! Log records go to stderr and, when the platform has a local data
//! directory, to a size-rotated file under `<data dir>/item_cell_icon/logs`.

use std::io::Write;
use std::path::PathBuf;

use flexi_logger::{
    Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{Record, info};

/// Directory that receives log files, if any.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("item_cell_icon").join("logs"))
}

/// Starts the global logger with a flexi_logger spec such as `"info"`.
///
/// Keep the returned handle alive for the life of the program; dropping it
/// flushes and stops file logging.
pub fn init(spec: &str) -> Result<LoggerHandle, String> {
    let logger = Logger::try_with_str(spec)
        .map_err(|e| format!("Invalid log spec '{}': {}", spec, e))?
        .format(format_record);

    let dir = log_dir();
    let logger = match &dir {
        Some(dir) => logger
            .log_to_file(
                FileSpec::default()
                    .directory(dir)
                    .basename("item_cell_icon")
                    .suffix("log"),
            )
            .duplicate_to_stderr(Duplicate::All)
            .rotate(
                Criterion::Size(5_000_000),
                Naming::Numbers,
                Cleanup::KeepLogFiles(5),
            )
            .write_mode(WriteMode::BufferAndFlush),
        None => logger.log_to_stderr(),
    };

    let handle = logger
        .start()
        .map_err(|e| format!("Unable to start logger: {}", e))?;

    if let Some(dir) = dir {
        info!("Log dir: {}", dir.display());
    }

    Ok(handle)
}

fn format_record(write: &mut dyn Write, now: &mut DeferredNow, record: &Record) -> std::io::Result<()> {
    write!(
        write,
        "{} {:5} [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unknown>"),
        record.args()
    )
}
