//! Domain model (battles, recruitments, participants, errors, events).

pub mod battle;
pub mod errors;
pub mod events;
pub mod participant;
pub mod recruitment;

pub use battle::{Battle, BattleType, ParseBattleTypeError, normalize_battle_id};
pub use errors::{Entity, ErrorKind, MusterError};
pub use events::DomainEvent;
pub use participant::{Participant, ParticipantRole};
pub use recruitment::{Recruitment, RecruitmentStatus};
