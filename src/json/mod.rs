use std::{fs, io::Write, path::Path};

use crate::{domain::summary::CategorySummary, error::Result};

/// Serialize summaries as a pretty-printed JSON array.
pub fn write(summaries: &[CategorySummary], mut writer: impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, summaries)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write the summary document to `path`, creating missing parent
/// directories.
pub fn write_to_path(summaries: &[CategorySummary], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    write(summaries, fs::File::create(path)?)
}
