//! Battle catalog: case-insensitive lookup of battle templates.
//!
//! Writes are rare administrative operations, so one mutex guards the whole
//! table. The catalog lock is independent of the recruitment store lock.

mod defaults;

pub use defaults::default_battles;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::domain::{Battle, BattleType, MusterError, normalize_battle_id};
use crate::ports::Clock;

pub struct BattleCatalog {
    battles: Mutex<HashMap<String, Battle>>,
    clock: Arc<dyn Clock>,
}

impl BattleCatalog {
    /// Empty catalog.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            battles: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Catalog seeded with the built-in templates.
    pub fn with_defaults(clock: Arc<dyn Clock>) -> Self {
        let catalog = Self::new(clock);
        {
            let now = catalog.clock.now();
            let mut battles = catalog.lock();
            for mut battle in default_battles() {
                battle.id = normalize_battle_id(&battle.id);
                battle.created_at = now;
                battles.insert(battle.id.clone(), battle);
            }
        }
        catalog
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Battle>> {
        self.battles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, id: &str) -> Result<Battle, MusterError> {
        self.lock()
            .get(&normalize_battle_id(id))
            .cloned()
            .ok_or_else(|| MusterError::battle_not_found(id))
    }

    pub fn list_active(&self) -> Vec<Battle> {
        self.lock().values().filter(|b| b.active).cloned().collect()
    }

    pub fn list_by_type(&self, battle_type: BattleType) -> Vec<Battle> {
        self.lock()
            .values()
            .filter(|b| b.battle_type == battle_type)
            .cloned()
            .collect()
    }

    /// Insert or overwrite. The key is normalized and `created_at` stamped.
    pub fn add(&self, mut battle: Battle) -> Result<(), MusterError> {
        if battle.id.is_empty() {
            return Err(MusterError::EmptyId);
        }
        battle.id = normalize_battle_id(&battle.id);
        battle.created_at = self.clock.now();

        info!(battle_id = %battle.id, battle_type = %battle.battle_type, "battle added");
        self.lock().insert(battle.id.clone(), battle);
        Ok(())
    }

    /// Replace an existing template. The stored id is the normalized `id`
    /// argument and the original `created_at` is kept.
    pub fn update(&self, id: &str, mut battle: Battle) -> Result<(), MusterError> {
        let key = normalize_battle_id(id);
        let mut battles = self.lock();
        let Some(existing) = battles.get(&key) else {
            return Err(MusterError::battle_not_found(id));
        };

        battle.id = key.clone();
        battle.created_at = existing.created_at;
        battles.insert(key, battle);
        debug!(battle_id = %id, "battle updated");
        Ok(())
    }

    pub fn remove(&self, id: &str) -> Result<Battle, MusterError> {
        let removed = self
            .lock()
            .remove(&normalize_battle_id(id))
            .ok_or_else(|| MusterError::battle_not_found(id))?;
        info!(battle_id = %removed.id, "battle removed");
        Ok(removed)
    }

    pub fn set_active(&self, id: &str, active: bool) -> Result<(), MusterError> {
        let mut battles = self.lock();
        let battle = battles
            .get_mut(&normalize_battle_id(id))
            .ok_or_else(|| MusterError::battle_not_found(id))?;
        battle.active = active;
        info!(battle_id = %battle.id, active, "battle active flag changed");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
