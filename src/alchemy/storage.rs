use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use sled::IVec;

use crate::alchemy::errors::AlchemyError;
use crate::alchemy::world::World;

const TREE_SAVES: &str = "alchemist_saves";

/// Bump when [`World`] changes shape in a way bincode cannot read back.
pub const SAVE_SCHEMA_VERSION: u8 = 1;

/// A stored game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRecord {
    pub schema_version: u8,
    pub slot: String,
    pub saved_at: DateTime<Utc>,
    pub world: World,
}

/// Summary of a save slot for listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub slot: String,
    pub player_name: String,
    pub player_level: u32,
    pub gold: u32,
    pub saved_at: DateTime<Utc>,
}

/// Builder so tests can open throwaway stores under a temp dir.
pub struct AlchemyStoreBuilder {
    path: PathBuf,
}

impl AlchemyStoreBuilder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open(self) -> Result<AlchemyStore, AlchemyError> {
        AlchemyStore::open(self.path)
    }
}

/// Sled-backed save slots.
pub struct AlchemyStore {
    _db: sled::Db,
    saves: sled::Tree,
}

impl AlchemyStore {
    /// Open (or create) the store rooted at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AlchemyError> {
        let path_ref = path.as_ref();
        std::fs::create_dir_all(path_ref)?;
        let db = sled::open(path_ref)?;
        let saves = db.open_tree(TREE_SAVES)?;
        debug!("Opened save store at {}", path_ref.display());
        Ok(Self { _db: db, saves })
    }

    fn save_key(slot: &str) -> Vec<u8> {
        format!("saves:{}", slot.to_lowercase()).into_bytes()
    }

    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>, AlchemyError> {
        Ok(bincode::serialize(value)?)
    }

    fn deserialize<T: serde::de::DeserializeOwned>(bytes: IVec) -> Result<T, AlchemyError> {
        Ok(bincode::deserialize::<T>(&bytes)?)
    }

    fn get_record(&self, slot: &str) -> Result<SaveRecord, AlchemyError> {
        let key = Self::save_key(slot);
        let Some(bytes) = self.saves.get(&key)? else {
            return Err(AlchemyError::NotFound(format!("save: {}", slot)));
        };
        let record: SaveRecord = Self::deserialize(bytes)?;
        if record.schema_version != SAVE_SCHEMA_VERSION {
            return Err(AlchemyError::SchemaMismatch {
                entity: "save",
                expected: SAVE_SCHEMA_VERSION,
                found: record.schema_version,
            });
        }
        Ok(record)
    }

    /// Write `world` into `slot`, replacing whatever was there.
    pub fn put_save(&self, slot: &str, world: &World) -> Result<DateTime<Utc>, AlchemyError> {
        let record = SaveRecord {
            schema_version: SAVE_SCHEMA_VERSION,
            slot: slot.to_string(),
            saved_at: Utc::now(),
            world: world.clone(),
        };
        let bytes = Self::serialize(&record)?;
        self.saves.insert(Self::save_key(slot), bytes)?;
        self.saves.flush()?;
        info!("Saved {} to slot {}", world.player.name, slot);
        Ok(record.saved_at)
    }

    /// Restore the world stored in `slot`. The RNG starts fresh.
    pub fn get_save(&self, slot: &str) -> Result<World, AlchemyError> {
        Ok(self.get_record(slot)?.world)
    }

    /// Every stored slot, sorted by slot name.
    pub fn list_slots(&self) -> Result<Vec<SaveSummary>, AlchemyError> {
        let mut slots = Vec::new();
        for entry in self.saves.scan_prefix(b"saves:") {
            let (_, bytes) = entry?;
            let record: SaveRecord = Self::deserialize(bytes)?;
            if record.schema_version != SAVE_SCHEMA_VERSION {
                debug!(
                    "Skipping slot {} with schema {}",
                    record.slot, record.schema_version
                );
                continue;
            }
            slots.push(SaveSummary {
                slot: record.slot,
                player_name: record.world.player.name,
                player_level: record.world.player.level,
                gold: record.world.player.gold,
                saved_at: record.saved_at,
            });
        }
        Ok(slots)
    }

    /// Remove `slot`. Returns false if it did not exist.
    pub fn delete_save(&self, slot: &str) -> Result<bool, AlchemyError> {
        let removed = self.saves.remove(Self::save_key(slot))?.is_some();
        self.saves.flush()?;
        if removed {
            info!("Deleted save slot {}", slot);
        }
        Ok(removed)
    }

    #[cfg(test)]
    fn put_raw(&self, slot: &str, record: &SaveRecord) -> Result<(), AlchemyError> {
        self.saves
            .insert(Self::save_key(slot), Self::serialize(record)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, QuizConfig};
    use tempfile::TempDir;

    fn world() -> World {
        let game = GameConfig {
            rng_seed: Some(9),
            initial_levels: 2,
            ..GameConfig::default()
        };
        World::new(&game, &QuizConfig::default()).expect("world")
    }

    #[test]
    fn missing_slot_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = AlchemyStoreBuilder::new(dir.path()).open().expect("store");
        assert!(matches!(
            store.get_save("nope"),
            Err(AlchemyError::NotFound(_))
        ));
        assert!(!store.delete_save("nope").unwrap());
    }

    #[test]
    fn slot_names_are_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let store = AlchemyStoreBuilder::new(dir.path()).open().expect("store");
        store.put_save("AutoSave", &world()).unwrap();
        let restored = store.get_save("autosave").unwrap();
        assert_eq!(restored.levels.len(), 2);
    }

    #[test]
    fn schema_mismatch_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = AlchemyStoreBuilder::new(dir.path()).open().expect("store");
        let record = SaveRecord {
            schema_version: SAVE_SCHEMA_VERSION + 1,
            slot: "old".into(),
            saved_at: Utc::now(),
            world: world(),
        };
        store.put_raw("old", &record).unwrap();
        assert!(matches!(
            store.get_save("old"),
            Err(AlchemyError::SchemaMismatch { entity: "save", .. })
        ));
        assert!(store.list_slots().unwrap().is_empty());
    }
}
