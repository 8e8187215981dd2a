//! Optional on-disk snapshots of normalized records
//!
//! Plain JSON files, one per record. Convenience caching only; nothing in
//! the scoring pipeline depends on these.

use crate::error::Result;
use log::info;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn save<T: Serialize>(&self, name: &str, record: &T) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(name);
        fs::write(&path, serde_json::to_string_pretty(record)?)?;
        info!("Saved snapshot: {}", path.display());
        Ok(path)
    }

    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let content = fs::read_to_string(self.path_for(name))?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}
