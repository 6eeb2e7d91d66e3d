//! Events - ドメインイベント
//!
//! 外部の通知層（チャンネルへの告知など）へ渡すイベント。

use serde::{Deserialize, Serialize};

use super::Recruitment;

/// DomainEvent はドメインで発生したイベント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Swept by the expiration sweeper. Carries the final snapshot
    /// (status = Cancelled) so the notifier can reach its channel and host.
    RecruitmentExpired(Recruitment),
}

impl DomainEvent {
    pub fn recruitment_id(&self) -> &str {
        match self {
            DomainEvent::RecruitmentExpired(r) => &r.id,
        }
    }
}
