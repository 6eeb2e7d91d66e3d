//! Registry state guarded by the store mutex.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::domain::{MusterError, Recruitment};

/// Recruitments by id plus secondary indexes.
///
/// Invariant: every index entry points at a live record, and every record is
/// reachable from the channel index. Only `insert` / `remove` /
/// `rebind_message` touch the indexes.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    records: HashMap<String, Recruitment>,

    /// message_ref -> recruitment id. Empty refs are not indexed.
    by_message: HashMap<String, String>,

    /// channel_ref -> recruitment ids.
    by_channel: HashMap<String, HashSet<String>>,
}

impl StoreState {
    pub(crate) fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Recruitment> {
        self.records.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Result<&mut Recruitment, MusterError> {
        self.records
            .get_mut(id)
            .ok_or_else(|| MusterError::recruitment_not_found(id))
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &Recruitment> {
        self.records.values()
    }

    pub(crate) fn by_message(&self, message_ref: &str) -> Option<&Recruitment> {
        self.by_message
            .get(message_ref)
            .and_then(|id| self.records.get(id))
    }

    pub(crate) fn by_channel(&self, channel_ref: &str) -> impl Iterator<Item = &Recruitment> {
        self.by_channel
            .get(channel_ref)
            .into_iter()
            .flatten()
            .filter_map(|id| self.records.get(id))
    }

    /// Caller must have checked `contains` under the same lock.
    pub(crate) fn insert(&mut self, recruitment: Recruitment) {
        let id = recruitment.id.clone();
        if !recruitment.message_ref.is_empty() {
            self.by_message
                .insert(recruitment.message_ref.clone(), id.clone());
        }
        self.by_channel
            .entry(recruitment.channel_ref.clone())
            .or_default()
            .insert(id.clone());
        self.records.insert(id, recruitment);
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<Recruitment> {
        let recruitment = self.records.remove(id)?;
        self.unindex_message(&recruitment.message_ref, id);
        if let Some(ids) = self.by_channel.get_mut(&recruitment.channel_ref) {
            ids.remove(id);
            if ids.is_empty() {
                self.by_channel.remove(&recruitment.channel_ref);
            }
        }
        Some(recruitment)
    }

    pub(crate) fn rebind_message(
        &mut self,
        id: &str,
        message_ref: &str,
        now: DateTime<Utc>,
    ) -> Result<(), MusterError> {
        let recruitment = self
            .records
            .get_mut(id)
            .ok_or_else(|| MusterError::recruitment_not_found(id))?;
        let previous = std::mem::replace(&mut recruitment.message_ref, message_ref.to_string());
        recruitment.updated_at = now;

        self.unindex_message(&previous, id);
        if !message_ref.is_empty() {
            self.by_message
                .insert(message_ref.to_string(), id.to_string());
        }
        Ok(())
    }

    /// Drop `message_ref` from the index only if it still points at `id`
    /// (a later recruitment may have taken the same message over).
    fn unindex_message(&mut self, message_ref: &str, id: &str) {
        if self.by_message.get(message_ref).is_some_and(|owner| owner == id) {
            self.by_message.remove(message_ref);
        }
    }

    /// Cancel and evict every active recruitment past its expiry.
    pub(crate) fn take_expired(&mut self, now: DateTime<Utc>) -> Vec<Recruitment> {
        let expired_ids: Vec<String> = self
            .records
            .values()
            .filter(|r| r.status.is_active() && r.is_expired(now))
            .map(|r| r.id.clone())
            .collect();

        expired_ids
            .iter()
            .filter_map(|id| self.remove(id))
            .map(|mut recruitment| {
                recruitment.mark_expired(now);
                recruitment
            })
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}
