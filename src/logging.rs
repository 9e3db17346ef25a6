use crate::consts;
use anyhow::Context;
use log::LevelFilter;
use simplelog::WriteLogger;
use std::path::{Path, PathBuf};

/// Return the default log file path, if the local data directory can be
/// determined
pub(crate) fn default_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join(consts::APP_DIR_NAME).join("termsnake.log"))
}

/// Send log messages at or above `level` to the file at `path`, replacing any
/// previous contents.  The terminal belongs to the game, so nothing is logged
/// to it.
pub(crate) fn init(path: &Path, level: LevelFilter) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = fs_err::File::create(path).context("failed to create log file")?;
    WriteLogger::init(level, simplelog::Config::default(), file)
        .context("failed to install logger")?;
    Ok(())
}
