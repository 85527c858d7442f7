use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("result payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), SaveError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| SaveError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(SaveError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| SaveError::OutputDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| SaveError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Decodes a wowified result and writes it to `{dir}/{name}.webp` by writing
/// a temp file then renaming.
pub struct ResultWriter {
    dir: PathBuf,
}

impl ResultWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn save(&self, emoji_name: &str, encoded: &str) -> Result<PathBuf, SaveError> {
        let bytes = BASE64.decode(encoded)?;
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(format!("{emoji_name}.webp"));
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&bytes)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace an existing file of the same name.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| SaveError::Io(e.error))?;
        Ok(target)
    }
}
