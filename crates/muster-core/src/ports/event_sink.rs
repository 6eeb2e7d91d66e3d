//! EventSink port - イベント通知の抽象化
//!
//! SweeperLoop が期限切れの募集ごとに emit する。
//! チャンネルへの告知などの実装はゲートウェイ層が持つ。

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::DomainEvent;

#[derive(Debug, thiserror::Error)]
#[error("event sink failed: {0}")]
pub struct EventSinkError(pub String);

/// EventSink はドメインイベントを外部へ届ける
///
/// 1 件の失敗が他のイベントの配送を止めてはいけない（呼び出し側はログして続行）。
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: DomainEvent) -> Result<(), EventSinkError>;
}

/// NoopEventSink: 何もしない
#[derive(Debug, Default)]
pub struct NoopEventSink;

#[async_trait]
impl EventSink for NoopEventSink {
    async fn emit(&self, _event: DomainEvent) -> Result<(), EventSinkError> {
        Ok(())
    }
}

/// Keeps every emitted event in memory.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<DomainEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl EventSink for RecordingEventSink {
    async fn emit(&self, event: DomainEvent) -> Result<(), EventSinkError> {
        self.events
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(event);
        Ok(())
    }
}
