//! Creation request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input of `RecruitmentStore::create`.
///
/// Zero `max_players` / `min_rank` and a missing `expires_at` mean
/// "use the default" (battle template / store TTL).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecruitment {
    pub id: String,
    pub battle_id: String,
    pub host_user_id: String,
    pub title: String,
    pub description: String,
    pub max_players: usize,
    pub min_rank: u32,
    pub message_ref: String,
    pub channel_ref: String,
    pub guild_ref: String,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl CreateRecruitment {
    pub fn new(id: impl Into<String>, battle_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            battle_id: battle_id.into(),
            ..Self::default()
        }
    }

    pub fn host(mut self, user_id: impl Into<String>) -> Self {
        self.host_user_id = user_id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    pub fn min_rank(mut self, min_rank: u32) -> Self {
        self.min_rank = min_rank;
        self
    }

    pub fn message(mut self, message_ref: impl Into<String>) -> Self {
        self.message_ref = message_ref.into();
        self
    }

    pub fn channel(mut self, channel_ref: impl Into<String>) -> Self {
        self.channel_ref = channel_ref.into();
        self
    }

    pub fn guild(mut self, guild_ref: impl Into<String>) -> Self {
        self.guild_ref = guild_ref.into();
        self
    }

    pub fn scheduled_at(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_time = Some(at);
        self
    }

    pub fn expires_at(mut self, at: DateTime<Utc>) -> Self {
        self.expires_at = Some(at);
        self
    }
}
