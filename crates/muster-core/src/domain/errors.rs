//! Errors - エラー型と分類
//!
//! すべての操作は `Result<_, MusterError>` で結果を返す（panic しない）。
//! 呼び出し側（コマンド層）は `ErrorKind` を見てユーザー向けメッセージを選ぶ。

use thiserror::Error;

use super::RecruitmentStatus;

/// Which registry a `NotFound` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Battle,
    Recruitment,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Battle => f.write_str("battle"),
            Entity::Recruitment => f.write_str("recruitment"),
        }
    }
}

/// ErrorKind はエラーの運用分類
///
/// - Invalid: 入力そのものが不正
/// - NotFound: 対象が存在しない
/// - Conflict: 現在の状態と衝突（重複・ホスト離脱）
/// - Unavailable: 募集が参加を受け付けていない（締切・満員）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Invalid,
    NotFound,
    Conflict,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MusterError {
    #[error("id cannot be empty")]
    EmptyId,

    #[error("recruitment already exists: {0}")]
    AlreadyExists(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: String },

    #[error("invalid battle reference: {0}")]
    InvalidBattleReference(String),

    #[error("recruitment {id} is not open for new participants (status={status})")]
    NotOpen { id: String, status: RecruitmentStatus },

    #[error("recruitment {id} is full ({max_players} players)")]
    Full { id: String, max_players: usize },

    #[error("user {user_id} is already a participant of {id}")]
    AlreadyParticipant { id: String, user_id: String },

    #[error("participant {user_id} not found in {id}")]
    ParticipantNotFound { id: String, user_id: String },

    #[error("host cannot leave recruitment {id}")]
    HostCannotLeave { id: String },
}

impl MusterError {
    pub fn battle_not_found(id: impl Into<String>) -> Self {
        MusterError::NotFound {
            entity: Entity::Battle,
            id: id.into(),
        }
    }

    pub fn recruitment_not_found(id: impl Into<String>) -> Self {
        MusterError::NotFound {
            entity: Entity::Recruitment,
            id: id.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MusterError::EmptyId | MusterError::InvalidBattleReference(_) => ErrorKind::Invalid,
            MusterError::NotFound { .. } | MusterError::ParticipantNotFound { .. } => {
                ErrorKind::NotFound
            }
            MusterError::AlreadyExists(_)
            | MusterError::AlreadyParticipant { .. }
            | MusterError::HostCannotLeave { .. } => ErrorKind::Conflict,
            MusterError::NotOpen { .. } | MusterError::Full { .. } => ErrorKind::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(MusterError::EmptyId, ErrorKind::Invalid)]
    #[case::bad_battle(MusterError::InvalidBattleReference("x".into()), ErrorKind::Invalid)]
    #[case::missing(MusterError::recruitment_not_found("r1"), ErrorKind::NotFound)]
    #[case::no_participant(
        MusterError::ParticipantNotFound { id: "r1".into(), user_id: "u9".into() },
        ErrorKind::NotFound
    )]
    #[case::dup(MusterError::AlreadyExists("r1".into()), ErrorKind::Conflict)]
    #[case::host(MusterError::HostCannotLeave { id: "r1".into() }, ErrorKind::Conflict)]
    #[case::full(MusterError::Full { id: "r1".into(), max_players: 6 }, ErrorKind::Unavailable)]
    #[case::closed(
        MusterError::NotOpen { id: "r1".into(), status: RecruitmentStatus::Closed },
        ErrorKind::Unavailable
    )]
    fn errors_are_categorised(#[case] err: MusterError, #[case] kind: ErrorKind) {
        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(
            MusterError::battle_not_found("faa_hl").to_string(),
            "battle not found: faa_hl"
        );
        assert_eq!(
            MusterError::recruitment_not_found("r1").to_string(),
            "recruitment not found: r1"
        );
    }
}
