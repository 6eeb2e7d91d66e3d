//! IdGenerator port - ID 生成の抽象化
//!
//! プラットフォームの ID（メッセージ ID など）を使わない呼び出し側のために、
//! 募集 ID を生成する。
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース（本番用）

use crate::ports::Clock;
use ulid::Ulid;

/// Prefix of generated recruitment ids.
pub const RECRUITMENT_ID_PREFIX: &str = "rec-";

/// IdGenerator は募集 ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数のイベントハンドラから使える）
pub trait IdGenerator: Send + Sync {
    fn generate_recruitment_id(&self) -> String;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// timestamp 部分は Clock から取るので、FixedClock を使えば時刻部分が決定的になる。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_recruitment_id(&self) -> String {
        let timestamp_ms = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        format!("{RECRUITMENT_ID_PREFIX}{ulid}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    fn ulid_of(id: &str) -> Ulid {
        Ulid::from_string(id.strip_prefix(RECRUITMENT_ID_PREFIX).unwrap()).unwrap()
    }

    #[test]
    fn generates_unique_prefixed_ids() {
        let id_gen = UlidGenerator::new(SystemClock);

        let id1 = id_gen.generate_recruitment_id();
        let id2 = id_gen.generate_recruitment_id();

        assert_ne!(id1, id2);
        assert!(id1.starts_with("rec-"));
    }

    #[test]
    fn fixed_clock_pins_the_timestamp_part() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let id_gen = UlidGenerator::new(FixedClock::new(fixed_time));

        let id1 = id_gen.generate_recruitment_id();
        let id2 = id_gen.generate_recruitment_id();

        // ランダム部分があるので ID は異なるが、timestamp 部分は同じ
        assert_ne!(id1, id2);
        assert_eq!(ulid_of(&id1).timestamp_ms(), ulid_of(&id2).timestamp_ms());
        assert_eq!(
            ulid_of(&id1).timestamp_ms(),
            fixed_time.timestamp_millis() as u64
        );
    }
}
