//! Ports - 抽象化レイヤー
//!
//! コアが外部に依存する箇所（時刻・ID 生成・通知）を trait として定義する。
//! ゲートウェイ層はここを実装して差し込む。

pub mod clock;
pub mod event_sink;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::{EventSink, EventSinkError, NoopEventSink, RecordingEventSink};
pub use self::id_generator::{IdGenerator, RECRUITMENT_ID_PREFIX, UlidGenerator};
