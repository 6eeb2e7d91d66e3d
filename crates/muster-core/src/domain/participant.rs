//! Roster entries: who joined a recruitment and in which role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    /// Opened the recruitment. Cannot leave.
    Host,
    Member,
    Backup,
}

/// A user on a recruitment roster.
///
/// Owned by `Recruitment::participants`; never shared between recruitments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: String,
    pub display_name: String,
    pub role: ParticipantRole,
    pub joined_at: DateTime<Utc>,
    pub confirmed: bool,
}

impl Participant {
    /// The host entry seeded at creation (always confirmed).
    pub fn host(user_id: impl Into<String>, joined_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: String::new(),
            role: ParticipantRole::Host,
            joined_at,
            confirmed: true,
        }
    }

    /// A member who joined after creation (unconfirmed).
    pub fn member(
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            role: ParticipantRole::Member,
            joined_at,
            confirmed: false,
        }
    }

    pub fn is_host(&self) -> bool {
        self.role == ParticipantRole::Host
    }
}
