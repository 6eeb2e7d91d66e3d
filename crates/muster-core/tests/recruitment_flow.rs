use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use muster_core::ports::{Clock, FixedClock};
use muster_core::{
    BattleCatalog, CreateRecruitment, ExpirationSweeper, MusterError, ParticipantRole,
    RecruitmentStatus, RecruitmentStore,
};
use tokio::sync::Barrier;

struct Fixture {
    clock: Arc<FixedClock>,
    store: Arc<RecruitmentStore>,
    sweeper: ExpirationSweeper,
}

fn fixture() -> Fixture {
    let clock = Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
    ));
    let catalog = Arc::new(BattleCatalog::with_defaults(clock.clone()));
    let store = Arc::new(RecruitmentStore::new(catalog, clock.clone()));
    let sweeper = ExpirationSweeper::new(Arc::clone(&store));
    Fixture {
        clock,
        store,
        sweeper,
    }
}

fn open_r1(f: &Fixture) {
    f.store
        .create(CreateRecruitment::new("r1", "faa_hl").host("u1").channel("c1"))
        .unwrap();
}

#[test]
fn scenario_a_create_seeds_host() {
    let f = fixture();
    open_r1(&f);

    let r = f.store.get("r1").unwrap();
    assert_eq!(r.status, RecruitmentStatus::Open);
    assert_eq!(r.max_players, 6);
    assert_eq!(r.participants.len(), 1);
    assert_eq!(r.participants[0].user_id, "u1");
    assert_eq!(r.participants[0].role, ParticipantRole::Host);
    assert!(r.participants[0].confirmed);
}

#[test]
fn scenario_b_sixth_participant_fills_roster() {
    let f = fixture();
    open_r1(&f);

    for user in ["u2", "u3", "u4", "u5", "u6"] {
        f.store.join("r1", user, user).unwrap();
    }

    let r = f.store.get("r1").unwrap();
    assert_eq!(r.status, RecruitmentStatus::Full);
    assert_eq!(r.participant_count(), 6);
    assert!(matches!(
        f.store.join("r1", "u7", "u7"),
        Err(MusterError::Full { max_players: 6, .. })
    ));
    assert_eq!(f.store.get("r1").unwrap().participant_count(), 6);
}

#[test]
fn scenario_c_host_cannot_leave() {
    let f = fixture();
    open_r1(&f);
    f.store.join("r1", "u2", "Two").unwrap();
    let before = f.store.get("r1").unwrap();

    assert_eq!(
        f.store.leave("r1", "u1").unwrap_err(),
        MusterError::HostCannotLeave { id: "r1".into() }
    );
    assert_eq!(f.store.get("r1").unwrap(), before);
}

#[test]
fn scenario_d_sweep_cancels_and_evicts() {
    let f = fixture();
    open_r1(&f);

    f.clock.advance(Duration::hours(24) + Duration::minutes(1));
    let expired = f.sweeper.sweep();

    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].id, "r1");
    assert_eq!(expired[0].status, RecruitmentStatus::Cancelled);
    assert_eq!(expired[0].updated_at, f.clock.now());
    assert!(matches!(f.store.get("r1"), Err(MusterError::NotFound { .. })));
    assert!(f.store.list_by_channel("c1").is_empty());

    assert!(f.sweeper.sweep().is_empty());
}

#[test]
fn scenario_e_join_unknown_recruitment() {
    let f = fixture();
    assert!(matches!(
        f.store.join("missing-id", "u1", "Name"),
        Err(MusterError::NotFound { .. })
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn scenario_f_racing_joins_for_last_slot() {
    for round in 0..20 {
        let f = fixture();
        let id = format!("race-{round}");
        f.store
            .create(CreateRecruitment::new(id.clone(), "faa_hl").host("u1"))
            .unwrap();
        for user in ["u2", "u3", "u4", "u5"] {
            f.store.join(&id, user, user).unwrap();
        }

        // both joins start only once both tasks are running
        let barrier = Arc::new(Barrier::new(2));
        let tasks: Vec<_> = ["a", "b"]
            .into_iter()
            .map(|user| {
                let store = Arc::clone(&f.store);
                let barrier = Arc::clone(&barrier);
                let id = id.clone();
                tokio::spawn(async move {
                    barrier.wait().await;
                    store.join(&id, user, user)
                })
            })
            .collect();

        let mut results = Vec::new();
        for task in tasks {
            results.push(task.await.unwrap());
        }

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results.iter().any(|r| matches!(r, Err(MusterError::Full { .. }))));
        let r = f.store.get(&id).unwrap();
        assert_eq!(r.participant_count(), 6);
        assert_eq!(r.status, RecruitmentStatus::Full);
    }
}

#[test]
fn roster_invariants_hold_through_mixed_traffic() {
    let f = fixture();
    f.store
        .create(CreateRecruitment::new("r1", "faa_hl").host("u1").max_players(4))
        .unwrap();

    let ops: &[(&str, &str)] = &[
        ("join", "u2"),
        ("join", "u3"),
        ("join", "u2"),
        ("join", "u4"),
        ("join", "u5"),
        ("leave", "u3"),
        ("join", "u5"),
        ("leave", "u1"),
        ("leave", "u9"),
        ("join", "u6"),
    ];
    for (op, user) in ops {
        let _ = match *op {
            "join" => f.store.join("r1", user, user),
            _ => f.store.leave("r1", user).map(|_| ()),
        };

        let r = f.store.get("r1").unwrap();
        assert!(r.participant_count() <= r.max_players);
        let mut users: Vec<_> = r.participants.iter().map(|p| &p.user_id).collect();
        users.sort();
        users.dedup();
        assert_eq!(users.len(), r.participant_count());
        assert_eq!(r.status == RecruitmentStatus::Full, r.is_full());
        assert_eq!(
            r.participants.iter().filter(|p| p.role == ParticipantRole::Host).count(),
            1
        );
    }
}
