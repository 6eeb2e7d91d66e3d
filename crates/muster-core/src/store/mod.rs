//! Recruitment registry.
//!
//! Locking discipline:
//! - one `std::sync::Mutex` guards the records and both secondary indexes
//! - every check-then-act sequence (create's duplicate check, join's capacity
//!   check, leave's Full -> Open transition, the sweeper's scan) runs inside
//!   a single critical section
//! - `create` resolves the battle in the catalog before taking the store lock,
//!   so the two locks are never held together
//!
//! No operation awaits or blocks on I/O while holding the lock.

mod lifecycle;
mod request;
mod state;

pub use request::CreateRecruitment;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Duration;
use tracing::{debug, info};

use crate::app::status::RecruitmentCounts;
use crate::catalog::BattleCatalog;
use crate::domain::{MusterError, Participant, Recruitment, RecruitmentStatus};
use crate::ports::Clock;
use state::StoreState;

/// Store-wide defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Lifetime given to recruitments created without `expires_at`.
    pub default_ttl: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            default_ttl: Duration::hours(24),
        }
    }
}

pub struct RecruitmentStore {
    state: Mutex<StoreState>,
    catalog: Arc<BattleCatalog>,
    clock: Arc<dyn Clock>,
    options: StoreOptions,
}

impl RecruitmentStore {
    pub fn new(catalog: Arc<BattleCatalog>, clock: Arc<dyn Clock>) -> Self {
        Self::with_options(catalog, clock, StoreOptions::default())
    }

    pub fn with_options(
        catalog: Arc<BattleCatalog>,
        clock: Arc<dyn Clock>,
        options: StoreOptions,
    ) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            catalog,
            clock,
            options,
        }
    }

    pub fn catalog(&self) -> &BattleCatalog {
        &self.catalog
    }

    // Every mutation leaves StoreState consistent before anything that could
    // panic, so a poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create and register a recruitment.
    ///
    /// Defaults: `expires_at = created_at + default_ttl`, `max_players` /
    /// `min_rank` from the battle when left at zero, and the host (if any)
    /// seeded as the first, confirmed participant.
    ///
    /// `max_players` never ends up below the seeded roster, and the entry
    /// starts Full when the host alone fills it, Open otherwise.
    pub fn create(&self, request: CreateRecruitment) -> Result<Recruitment, MusterError> {
        if request.id.is_empty() {
            return Err(MusterError::EmptyId);
        }

        // Catalog lookup first, outside the store lock.
        let battle = self.catalog.get(&request.battle_id).map_err(|_| {
            debug!(battle_id = %request.battle_id, "create rejected: unknown battle");
            MusterError::InvalidBattleReference(request.battle_id.clone())
        })?;

        let now = self.clock.now();
        let expires_at = request
            .expires_at
            .unwrap_or(now + self.options.default_ttl)
            .max(now);
        let participants = if request.host_user_id.is_empty() {
            Vec::new()
        } else {
            vec![Participant::host(request.host_user_id.clone(), now)]
        };
        let max_players = if request.max_players == 0 {
            battle.max_players
        } else {
            request.max_players
        }
        .max(participants.len());
        let status = if participants.len() >= max_players {
            RecruitmentStatus::Full
        } else {
            RecruitmentStatus::Open
        };

        let recruitment = Recruitment {
            id: request.id,
            battle_id: request.battle_id,
            host_user_id: request.host_user_id,
            title: request.title,
            description: request.description,
            status,
            max_players,
            min_rank: if request.min_rank == 0 {
                battle.min_rank
            } else {
                request.min_rank
            },
            participants,
            message_ref: request.message_ref,
            channel_ref: request.channel_ref,
            guild_ref: request.guild_ref,
            scheduled_time: request.scheduled_time,
            created_at: now,
            updated_at: now,
            expires_at,
        };

        let mut state = self.lock();
        if state.contains(&recruitment.id) {
            return Err(MusterError::AlreadyExists(recruitment.id));
        }
        state.insert(recruitment.clone());
        drop(state);

        info!(
            recruitment_id = %recruitment.id,
            battle_id = %recruitment.battle_id,
            host = %recruitment.host_user_id,
            max_players = recruitment.max_players,
            status = %recruitment.status,
            expires_at = %recruitment.expires_at,
            "recruitment created"
        );
        Ok(recruitment)
    }

    pub fn get(&self, id: &str) -> Result<Recruitment, MusterError> {
        self.lock()
            .get(id)
            .cloned()
            .ok_or_else(|| MusterError::recruitment_not_found(id))
    }

    pub fn get_by_message(&self, message_ref: &str) -> Result<Recruitment, MusterError> {
        self.lock()
            .by_message(message_ref)
            .cloned()
            .ok_or_else(|| MusterError::recruitment_not_found(format!("message={message_ref}")))
    }

    /// Open or Full recruitments. Order is unspecified.
    pub fn list_active(&self) -> Vec<Recruitment> {
        self.lock()
            .values()
            .filter(|r| r.status.is_active())
            .cloned()
            .collect()
    }

    /// All live recruitments posted in `channel_ref`, any status.
    pub fn list_by_channel(&self, channel_ref: &str) -> Vec<Recruitment> {
        self.lock().by_channel(channel_ref).cloned().collect()
    }

    /// Evict without touching the status. Used by the sweeper.
    pub fn remove(&self, id: &str) -> Result<Recruitment, MusterError> {
        let removed = self
            .lock()
            .remove(id)
            .ok_or_else(|| MusterError::recruitment_not_found(id))?;
        debug!(recruitment_id = %id, "recruitment removed");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn counts_by_status(&self) -> RecruitmentCounts {
        RecruitmentCounts::tally(self.lock().values())
    }

    /// Cancel and evict every expired Open/Full recruitment in one critical
    /// section. Returns the cancelled snapshots.
    pub(crate) fn take_expired(&self) -> Vec<Recruitment> {
        let now = self.clock.now();
        self.lock().take_expired(now)
    }
}
