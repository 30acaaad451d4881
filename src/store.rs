use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

const REGISTRY_FILE: &str = "imported_files.txt";

pub fn registry_path(data_dir: &Path) -> PathBuf {
    data_dir.join(REGISTRY_FILE)
}

/// Writes the names of all imported files, one per line, replacing any
/// previously saved registry. The registry is only ever written, never read
/// back: it suppresses duplicate imports within a session, not across runs.
pub fn save_registry(data_dir: &Path, files: &BTreeSet<String>) -> Result<()> {
    log::info!("Saving import registry...");

    let mut content = String::new();
    for filename in files {
        content.push_str(filename);
        content.push('\n');
    }

    // First write to a temporary file so a failed write can't truncate the
    // existing registry.
    let path = registry_path(data_dir);
    let tmppath = path.with_file_name(format!("{REGISTRY_FILE}.temp"));
    fs::write(&tmppath, content)?;
    fs::rename(&tmppath, &path)?;

    log::info!("Saving import registry...done");
    Ok(())
}
