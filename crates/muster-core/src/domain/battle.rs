//! Battle templates: the catalog entries a recruitment is opened against.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Battle category.
///
/// Closed set of tags. Serialized (and parsed) as the snake_case tag,
/// e.g. `faa_hl`, `gw_nm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleType {
    /// Generic high level raid.
    Hl,
    FaaHl,
    BahaHl,
    UbahaHl,
    AkashaHl,
    LuciHl,
    /// Guild War.
    Gw,
    /// Guild War nightmare.
    GwNm,
    Event,
    EventHl,
    Train,
    Custom,
}

impl BattleType {
    pub const ALL: [BattleType; 12] = [
        BattleType::Hl,
        BattleType::FaaHl,
        BattleType::BahaHl,
        BattleType::UbahaHl,
        BattleType::AkashaHl,
        BattleType::LuciHl,
        BattleType::Gw,
        BattleType::GwNm,
        BattleType::Event,
        BattleType::EventHl,
        BattleType::Train,
        BattleType::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BattleType::Hl => "hl",
            BattleType::FaaHl => "faa_hl",
            BattleType::BahaHl => "baha_hl",
            BattleType::UbahaHl => "ubaha_hl",
            BattleType::AkashaHl => "akasha_hl",
            BattleType::LuciHl => "luci_hl",
            BattleType::Gw => "gw",
            BattleType::GwNm => "gw_nm",
            BattleType::Event => "event",
            BattleType::EventHl => "event_hl",
            BattleType::Train => "train",
            BattleType::Custom => "custom",
        }
    }
}

impl fmt::Display for BattleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown battle type: {0}")]
pub struct ParseBattleTypeError(String);

impl FromStr for BattleType {
    type Err = ParseBattleTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        BattleType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == tag)
            .ok_or_else(|| ParseBattleTypeError(s.to_string()))
    }
}

/// A battle template in the catalog.
///
/// Immutable once registered, except for the `active` flag and
/// administrative replacement through `BattleCatalog::update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battle {
    /// Case-insensitive key. The catalog stores it lowercased.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub battle_type: BattleType,
    pub level: u32,
    pub min_rank: u32,
    pub max_players: usize,
    pub description: String,
    pub active: bool,
    /// Stamped by the catalog on insert.
    pub created_at: DateTime<Utc>,
}

impl Battle {
    /// Build a template. `created_at` is a placeholder until the catalog stamps it.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        battle_type: BattleType,
        level: u32,
        min_rank: u32,
        max_players: usize,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            battle_type,
            level,
            min_rank,
            max_players,
            description: String::new(),
            active: true,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Catalog key normalization (case-insensitive ids).
pub fn normalize_battle_id(id: &str) -> String {
    id.to_lowercase()
}
