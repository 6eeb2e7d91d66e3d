//! Built-in battle templates.

use crate::domain::{Battle, BattleType};

pub fn default_battles() -> Vec<Battle> {
    vec![
        Battle::new("faa_hl", "Lucilius (Hard)", BattleType::FaaHl, 200, 150, 6)
            .with_description("Dark Rapture Hard mode raid"),
        Battle::new("baha_hl", "Proto Bahamut (Hard)", BattleType::BahaHl, 150, 101, 18)
            .with_description("Proto Bahamut Hard mode raid"),
        Battle::new("ubaha_hl", "Ultimate Bahamut (Hard)", BattleType::UbahaHl, 200, 120, 30)
            .with_description("Ultimate Bahamut Hard mode raid"),
        Battle::new("akasha_hl", "Akasha (Hard)", BattleType::AkashaHl, 200, 120, 30)
            .with_description("Akasha Hard mode raid"),
        Battle::new("luci_hl", "Lucifer (Hard)", BattleType::EventHl, 200, 120, 30)
            .with_description("Lucifer Hard mode raid"),
        // GW battles are switched on during Guild War periods.
        Battle::new("gw_nm95", "Guild War NM95", BattleType::GwNm, 95, 80, 30)
            .with_description("Guild War Nightmare 95 raid")
            .inactive(),
        Battle::new("gw_nm150", "Guild War NM150", BattleType::GwNm, 150, 120, 30)
            .with_description("Guild War Nightmare 150 raid")
            .inactive(),
    ]
}
