//! App - アプリケーション層
//!
//! store と ports を組み合わせたバックグラウンド処理と集計。
//!
//! # 主要コンポーネント
//! - **ExpirationSweeper**: 期限切れ募集の回収（1 回分の走査）
//! - **SweeperLoop**: タイマー駆動の sweep + 通知
//! - **RecruitmentCounts**: ステータス別の件数

pub mod status;
pub mod sweeper;
pub mod sweeper_loop;

pub use self::status::RecruitmentCounts;
pub use self::sweeper::ExpirationSweeper;
pub use self::sweeper_loop::{SweeperHandle, SweeperLoop};
