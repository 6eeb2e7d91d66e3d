//! ExpirationSweeper - 期限切れ募集の回収
//!
//! # フロー
//! 1. ストアのロックを取って全件を走査
//! 2. Open/Full かつ `now > expires_at` のものを Cancelled にして削除
//! 3. 削除したスナップショットを返す（通知は呼び出し側）

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::Recruitment;
use crate::store::RecruitmentStore;

#[derive(Clone)]
pub struct ExpirationSweeper {
    store: Arc<RecruitmentStore>,
}

impl ExpirationSweeper {
    pub fn new(store: Arc<RecruitmentStore>) -> Self {
        Self { store }
    }

    /// One scan. Returned order is unspecified. Terminal entries are left alone.
    pub fn sweep(&self) -> Vec<Recruitment> {
        let expired = self.store.take_expired();
        if expired.is_empty() {
            debug!("sweep found nothing to expire");
            return expired;
        }

        for recruitment in &expired {
            debug!(
                recruitment_id = %recruitment.id,
                channel = %recruitment.channel_ref,
                expires_at = %recruitment.expires_at,
                "recruitment expired"
            );
        }
        info!(count = expired.len(), "expired recruitments cancelled and evicted");
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BattleCatalog;
    use crate::domain::{MusterError, RecruitmentStatus};
    use crate::ports::{Clock, FixedClock};
    use crate::store::CreateRecruitment;
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::HashSet;

    fn setup() -> (Arc<RecruitmentStore>, ExpirationSweeper, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        ));
        let catalog = Arc::new(BattleCatalog::with_defaults(clock.clone()));
        let store = Arc::new(RecruitmentStore::new(catalog, clock.clone()));
        let sweeper = ExpirationSweeper::new(Arc::clone(&store));
        (store, sweeper, clock)
    }

    #[test]
    fn nothing_expires_before_deadline() {
        let (store, sweeper, clock) = setup();
        store.create(CreateRecruitment::new("r1", "faa_hl")).unwrap();

        clock.advance(Duration::hours(24));
        assert!(sweeper.sweep().is_empty());
        assert!(store.get("r1").is_ok());
    }

    #[test]
    fn expired_open_and_full_are_cancelled_and_evicted() {
        let (store, sweeper, clock) = setup();
        store.create(CreateRecruitment::new("r1", "faa_hl").host("u1")).unwrap();
        store
            .create(CreateRecruitment::new("r2", "faa_hl").host("u1").max_players(2))
            .unwrap();
        store.join("r2", "u2", "Two").unwrap();
        store
            .create(
                CreateRecruitment::new("r3", "faa_hl").expires_at(clock.now() + Duration::hours(48)),
            )
            .unwrap();

        clock.advance(Duration::hours(25));
        let expired = sweeper.sweep();

        let ids: HashSet<_> = expired.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, HashSet::from(["r1", "r2"]));
        for r in &expired {
            assert_eq!(r.status, RecruitmentStatus::Cancelled);
            assert_eq!(r.updated_at, clock.now());
        }
        assert_eq!(
            store.get("r1").unwrap_err(),
            MusterError::recruitment_not_found("r1")
        );
        assert!(store.get("r3").is_ok());
    }

    #[test]
    fn terminal_entries_are_left_untouched() {
        let (store, sweeper, clock) = setup();
        store.create(CreateRecruitment::new("r1", "faa_hl")).unwrap();
        store.set_status("r1", RecruitmentStatus::Completed).unwrap();
        let before = store.get("r1").unwrap();

        clock.advance(Duration::days(3));
        assert!(sweeper.sweep().is_empty());
        assert_eq!(store.get("r1").unwrap(), before);
    }

    #[test]
    fn second_sweep_is_empty() {
        let (store, sweeper, clock) = setup();
        store.create(CreateRecruitment::new("r1", "faa_hl")).unwrap();
        clock.advance(Duration::hours(25));

        assert_eq!(sweeper.sweep().len(), 1);
        assert!(sweeper.sweep().is_empty());
    }
}
