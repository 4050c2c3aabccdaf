use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::{DEFAULT_QUOTA_BYTES, KeyValueSlot, SlotError, entry_size};

const EXTENSION: &str = "json";

/// Slot backed by one file per key inside a directory.
///
/// The quota is charged like [`super::MemorySlot`]: key length plus value
/// length for every entry in the directory. Writes go to a temporary file first and are renamed into
/// place, so a failed write never truncates the previous value.
#[derive(Debug, Clone)]
pub struct FileSlot {
    dir: PathBuf,
    quota: u64,
}

impl FileSlot {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, SlotError> {
        Self::open_with_quota(dir, DEFAULT_QUOTA_BYTES)
    }

    pub fn open_with_quota(dir: impl Into<PathBuf>, quota: u64) -> Result<Self, SlotError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, quota })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SlotError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(SlotError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.{EXTENSION}")))
    }

    fn used_bytes_except(&self, skip: &Path) -> io::Result<u64> {
        let mut total = 0;
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path == skip || path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let key_len = path.file_stem().map_or(0, |stem| stem.len()) as u64;
            total += key_len + fs::metadata(&path)?.len();
        }
        Ok(total)
    }
}

impl KeyValueSlot for FileSlot {
    fn get(&self, key: &str) -> Result<Option<String>, SlotError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SlotError> {
        let path = self.path_for(key)?;
        let required = self.used_bytes_except(&path)? + entry_size(key, value);
        if required > self.quota {
            return Err(SlotError::QuotaExceeded {
                required,
                quota: self.quota,
            });
        }

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)?;
        if let Err(err) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }
}
