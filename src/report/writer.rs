use crate::detect::Classification;
use crate::error::{PiperError, Result};
use crate::report::formatter::format_json;
use std::fs;
use std::path::Path;

/// Write the classification as pretty JSON to `path`.
///
/// Missing parent directories are created and existing content is replaced.
/// The same record always produces the same bytes.
pub fn write_report(classification: &Classification, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PiperError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut json = format_json(classification, true)?;
    json.push('\n');

    fs::write(path, json).map_err(|source| PiperError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "Wrote detection report");
    Ok(())
}

/// Read a report previously written by [`write_report`].
pub fn read_report(path: &Path) -> Result<Classification> {
    let contents = fs::read_to_string(path).map_err(|source| PiperError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| PiperError::Report {
        path: path.to_path_buf(),
        source,
    })
}
