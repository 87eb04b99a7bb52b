//! Plan persistence.
//!
//! The calculation core never touches storage; the [`crate::manager::Manager`]
//! loads the plan through a [`ConfigStore`] and hands plain records onward.

use crate::config::Configuration;
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

/// Repository for the plan configuration.
pub trait ConfigStore {
    fn load(&self) -> Result<Configuration>;
    fn save(&self, cfg: &Configuration) -> Result<()>;
}

/// Stores the plan as a single pretty-printed JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ConfigStore for JsonFileStore {
    /// Load and validate the plan.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized, or if the
    /// plan violates an invariant.
    fn load(&self) -> Result<Configuration> {
        let file =
            File::open(&self.path).with_context(|| format!("failed to open {:?}", self.path))?;
        let reader = BufReader::new(file);

        let cfg: Configuration =
            serde_json::from_reader(reader).context("failed to deserialize plan")?;

        cfg.validate().context("failed to validate plan")?;

        Ok(cfg)
    }

    fn save(&self, cfg: &Configuration) -> Result<()> {
        let file =
            File::create(&self.path).with_context(|| format!("failed to create {:?}", self.path))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, cfg).context("failed to serialize plan")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn save_then_load_round_trips() {
        let dir = std::env::temp_dir().join("ipmplan-store-test");
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();

        let store = JsonFileStore::new(dir.join("plan.json"));
        let cfg = Configuration::default_seed();
        store.save(&cfg).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, cfg);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_rejects_invalid_plan() {
        let dir = std::env::temp_dir().join("ipmplan-store-invalid-test");
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).unwrap();

        let path = dir.join("plan.json");
        fs::write(
            &path,
            r#"{ "compartments": [{ "id": "c1", "name": "x", "width": 0, "length": 50, "count": 1 }] }"#,
        )
        .unwrap();

        assert!(JsonFileStore::new(&path).load().is_err());

        fs::remove_dir_all(&dir).ok();
    }
}
