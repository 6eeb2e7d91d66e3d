//! muster-core
//!
//! Recruitment lifecycle for cooperative raid sessions: a battle catalog, a
//! concurrency-safe recruitment registry with roster state machine, and an
//! expiration sweeper.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（Battle, Recruitment, Participant, errors, events）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, EventSink）
//! - **catalog**: バトルテンプレートの一覧
//! - **store**: 募集レジストリと参加・離脱・ステータス遷移
//! - **app**: 期限切れ回収（ExpirationSweeper, SweeperLoop）と集計
//! - **config**: 環境変数からの設定読み込み

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod ports;
pub mod store;

pub use app::{ExpirationSweeper, RecruitmentCounts, SweeperHandle, SweeperLoop};
pub use catalog::BattleCatalog;
pub use config::{ConfigError, MusterConfig};
pub use domain::{
    Battle, BattleType, DomainEvent, ErrorKind, MusterError, Participant, ParticipantRole,
    Recruitment, RecruitmentStatus,
};
pub use store::{CreateRecruitment, RecruitmentStore, StoreOptions};
