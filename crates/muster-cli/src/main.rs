use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use muster_core::domain::DomainEvent;
use muster_core::ports::{EventSink, EventSinkError, IdGenerator, SystemClock, UlidGenerator};
use muster_core::{
    BattleCatalog, CreateRecruitment, ExpirationSweeper, MusterConfig, Recruitment,
    RecruitmentCounts, RecruitmentStore, SweeperLoop,
};

/// 期限切れ通知：本番ではチャンネルへ告知するが、ここではログに出すだけ
struct LogSink;

#[async_trait]
impl EventSink for LogSink {
    async fn emit(&self, event: DomainEvent) -> Result<(), EventSinkError> {
        match &event {
            DomainEvent::RecruitmentExpired(r) => info!(
                recruitment_id = %r.id,
                channel = %r.channel_ref,
                host = %r.host_user_id,
                "recruitment expired"
            ),
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Summary<'a> {
    recruitment: &'a Recruitment,
    counts: RecruitmentCounts,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // (A) 設定とログ
    let config = MusterConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .init();
    info!(?config, "configuration loaded");

    // (B) カタログ・ストア・sweeper を組み立てる
    let clock = Arc::new(SystemClock);
    let catalog = Arc::new(BattleCatalog::with_defaults(clock.clone()));
    let store = Arc::new(RecruitmentStore::with_options(
        catalog,
        clock.clone(),
        config.store_options(),
    ));
    let ids = UlidGenerator::new(SystemClock);
    info!(
        battles = store.catalog().len(),
        active = store.catalog().list_active().len(),
        "battle catalog loaded"
    );

    let sweeper = SweeperLoop::new(
        ExpirationSweeper::new(Arc::clone(&store)),
        Arc::new(LogSink),
        config.sweep_interval,
    )
    .spawn();

    // (C) 募集を 1 件流してみる
    let id = ids.generate_recruitment_id();
    store.create(
        CreateRecruitment::new(id.clone(), "faa_hl")
            .host("host-1")
            .title("Lucilius HL, full auto welcome")
            .channel("demo-channel")
            .guild("demo-guild"),
    )?;
    store.bind_message(&id, "demo-message-1")?;

    for n in 2..=7 {
        let user = format!("user-{n}");
        if let Err(err) = store.join(&id, &user, &format!("Player {n}")) {
            warn!(user_id = %user, error = %err, kind = ?err.kind(), "join refused");
        }
    }
    store.leave(&id, "user-3")?;

    let recruitment = store.get_by_message("demo-message-1")?;
    let summary = Summary {
        recruitment: &recruitment,
        counts: store.counts_by_status(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    // (D) `--serve` のときは Ctrl-C まで sweeper を回し続ける
    if std::env::args().any(|arg| arg == "--serve") {
        info!("serving; press Ctrl-C to stop");
        tokio::signal::ctrl_c().await?;
    }

    sweeper.shutdown_and_join().await;
    info!("shutdown complete");
    Ok(())
}
