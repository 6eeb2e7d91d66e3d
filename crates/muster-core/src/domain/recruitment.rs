//! Recruitment entity and its roster state machine.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MusterError, Participant};

/// Recruitment status.
///
/// State transitions:
/// - Open -> Full -> Open (roster count crosses max_players)
/// - Open | Full -> Closed | Completed | Cancelled (administrative or sweeper)
///
/// Terminal states accept no further joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecruitmentStatus {
    /// Accepting participants.
    Open,
    /// Roster reached max_players.
    Full,
    /// Manually closed.
    Closed,
    /// Battle completed.
    Completed,
    /// Cancelled (manually or by expiry).
    Cancelled,
}

impl RecruitmentStatus {
    /// Open or Full: still live and subject to expiry.
    pub fn is_active(self) -> bool {
        matches!(self, RecruitmentStatus::Open | RecruitmentStatus::Full)
    }

    pub fn is_terminal(self) -> bool {
        !self.is_active()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecruitmentStatus::Open => "open",
            RecruitmentStatus::Full => "full",
            RecruitmentStatus::Closed => "closed",
            RecruitmentStatus::Completed => "completed",
            RecruitmentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RecruitmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One coordination session for one battle attempt.
///
/// Invariants (kept by the methods below, not by field access):
/// - at most one Host, and it is the entry seeded at creation
/// - user ids on the roster are unique
/// - `participants.len() <= max_players`
/// - `expires_at >= created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recruitment {
    pub id: String,
    pub battle_id: String,
    pub host_user_id: String,
    pub title: String,
    pub description: String,
    pub status: RecruitmentStatus,
    pub max_players: usize,
    pub min_rank: u32,

    /// Join order.
    pub participants: Vec<Participant>,

    /// Opaque platform references.
    pub message_ref: String,
    pub channel_ref: String,
    pub guild_ref: String,

    pub scheduled_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Recruitment {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn confirmed_count(&self) -> usize {
        self.participants.iter().filter(|p| p.confirmed).count()
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_players
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }

    pub fn can_join(&self, user_id: &str, now: DateTime<Utc>) -> bool {
        !self.has_participant(user_id)
            && self.status == RecruitmentStatus::Open
            && !self.is_full()
            && !self.is_expired(now)
    }

    pub fn host(&self) -> Option<&Participant> {
        self.participants.iter().find(|p| p.is_host())
    }

    /// Append a member. Checks and insert happen in one call so a caller
    /// holding the store lock gets an atomic check-then-insert.
    pub fn add_member(
        &mut self,
        user_id: &str,
        display_name: &str,
        now: DateTime<Utc>,
    ) -> Result<(), MusterError> {
        // Full is a live status: report it as capacity, not as closed.
        if self.status.is_terminal() {
            return Err(MusterError::NotOpen {
                id: self.id.clone(),
                status: self.status,
            });
        }
        if self.has_participant(user_id) {
            return Err(MusterError::AlreadyParticipant {
                id: self.id.clone(),
                user_id: user_id.to_string(),
            });
        }
        if self.status == RecruitmentStatus::Full || self.is_full() {
            return Err(MusterError::Full {
                id: self.id.clone(),
                max_players: self.max_players,
            });
        }

        self.participants
            .push(Participant::member(user_id, display_name, now));
        self.updated_at = now;
        if self.is_full() {
            self.status = RecruitmentStatus::Full;
        }
        Ok(())
    }

    /// Remove a non-host participant, keeping the order of the rest.
    pub fn remove_participant(
        &mut self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Participant, MusterError> {
        let Some(index) = self.participants.iter().position(|p| p.user_id == user_id) else {
            return Err(MusterError::ParticipantNotFound {
                id: self.id.clone(),
                user_id: user_id.to_string(),
            });
        };
        if self.participants[index].is_host() {
            return Err(MusterError::HostCannotLeave {
                id: self.id.clone(),
            });
        }

        let removed = self.participants.remove(index);
        self.updated_at = now;
        if self.status == RecruitmentStatus::Full && !self.is_full() {
            self.status = RecruitmentStatus::Open;
        }
        Ok(removed)
    }

    /// Administrative override. No guard against the current status.
    pub fn override_status(&mut self, status: RecruitmentStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }

    /// Cancel because `expires_at` has passed.
    pub fn mark_expired(&mut self, now: DateTime<Utc>) {
        self.status = RecruitmentStatus::Cancelled;
        self.updated_at = now;
    }
}
