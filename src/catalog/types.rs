//! Catalog entity types.
//!
//! Pure reference data: ids, numbers, strings. Anything visual (icons,
//! colors-as-theme, layout) belongs to the presentation layer and is
//! deliberately absent here.

use serde::{Deserialize, Serialize};

/// Which skill track a quest trains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestKind {
    /// Voice and articulation work (breathing, reading aloud, twisters).
    Physical,
    /// Live interaction with another person.
    Interpersonal,
    /// Journaling, analysis, goal setting.
    Reflective,
}

/// One step of the level table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Level {
    pub level: u32,
    /// XP needed to clear this level and reach the next.
    pub xp_required: u32,
    pub title: String,
}

/// A repeatable-once training quest tied to a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quest {
    pub id: &'static str,
    pub level: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: QuestKind,
    /// Computed at catalog build time from the level's XP pool.
    pub xp: u32,
}

/// A bonus granted once, the first time a specific level is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub level: u32,
    pub title: &'static str,
    pub rewards: &'static [&'static str],
    /// Feature names unioned into the profile's unlocked set.
    pub unlocks: &'static [&'static str],
}

/// A challenge that can be completed once per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyChallenge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub xp: u32,
}

/// A mini-game gated by a per-game cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MiniGame {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub min_level: u32,
    pub xp_reward: u32,
    /// Zero means no cooldown (free practice).
    pub cooldown_hours: u32,
}

/// What a shop item changes when equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopItemKind {
    Background,
}

/// A cosmetic purchasable with coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShopItem {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: u32,
    pub kind: ShopItemKind,
    /// Kind-specific payload; for backgrounds, a hex color.
    pub value: &'static str,
}

/// Flavor of a special event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Emergency,
    Networking,
    Meeting,
    /// Free-form, player-reported.
    Custom,
}

/// A predefined high-stakes event the player can report once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialEvent {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub xp: u32,
    pub kind: EventKind,
}
