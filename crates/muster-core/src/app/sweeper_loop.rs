//! SweeperLoop - 定期的に sweep して期限切れを通知する
//!
//! - `shutdown` を送るとループが止まる
//! - 通知 (EventSink) の失敗は 1 件ずつログして続行（削除は取り消さない）

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use super::ExpirationSweeper;
use crate::domain::{DomainEvent, Recruitment};
use crate::ports::EventSink;

pub struct SweeperLoop {
    sweeper: ExpirationSweeper,
    sink: Arc<dyn EventSink>,
    interval: Duration,
}

impl SweeperLoop {
    pub fn new(sweeper: ExpirationSweeper, sink: Arc<dyn EventSink>, interval: Duration) -> Self {
        Self {
            sweeper,
            sink,
            interval,
        }
    }

    /// Sweep once and emit one event per expired recruitment.
    pub async fn run_once(&self) -> Vec<Recruitment> {
        let expired = self.sweeper.sweep();
        for recruitment in &expired {
            let event = DomainEvent::RecruitmentExpired(recruitment.clone());
            if let Err(err) = self.sink.emit(event).await {
                warn!(recruitment_id = %recruitment.id, error = %err, "expiry notification failed");
            }
        }
        expired
    }

    /// Spawn on the current runtime. The first sweep runs immediately.
    pub fn spawn(self) -> SweeperHandle {
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                if *shutdown_rx.borrow() {
                    break;
                }
                tokio::select! {
                    changed = shutdown_rx.changed() => {
                        // sender dropped counts as shutdown
                        if changed.is_err() {
                            break;
                        }
                    }
                    _ = ticker.tick() => {
                        self.run_once().await;
                    }
                }
            }
            debug!("sweeper loop stopped");
        });
        SweeperHandle { shutdown_tx, join }
    }
}

pub struct SweeperHandle {
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl SweeperHandle {
    pub fn request_shutdown(&self) {
        // ignore send error: the loop may already be gone
        let _ = self.shutdown_tx.send(true);
    }

    pub async fn shutdown_and_join(self) {
        self.request_shutdown();
        if let Err(err) = self.join.await {
            warn!(error = %err, "sweeper loop task failed");
        }
    }
}
