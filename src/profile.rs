//! The per-player progression state.
//!
//! One `PlayerProfile` per user, owned by a single session and persisted
//! as one JSON record. Schema evolution is handled by serde defaults:
//! every field added after the first release carries `#[serde(default)]`
//! (or a default fn) so old records merge cleanly over current defaults,
//! and unknown fields in a record are ignored.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::EventKind;
use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_BACKGROUND_ID, DEFAULT_PLAYER_NAME, SKILL_MAX, SKILL_MIN,
    STARTING_COINS,
};

/// The four trained skill tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    Diction,
    Confidence,
    Vocabulary,
    Empathy,
}

impl SkillKind {
    pub fn all() -> [SkillKind; 4] {
        [
            SkillKind::Diction,
            SkillKind::Confidence,
            SkillKind::Vocabulary,
            SkillKind::Empathy,
        ]
    }
}

/// Skill gauges, each clamped to `[SKILL_MIN, SKILL_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default = "base_gauge")]
    pub diction: f64,
    #[serde(default = "base_gauge")]
    pub confidence: f64,
    #[serde(default = "base_gauge")]
    pub vocabulary: f64,
    #[serde(default = "base_gauge")]
    pub empathy: f64,
}

fn base_gauge() -> f64 {
    SKILL_MIN
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            diction: SKILL_MIN,
            confidence: SKILL_MIN,
            vocabulary: SKILL_MIN,
            empathy: SKILL_MIN,
        }
    }
}

impl Skills {
    pub fn get(&self, kind: SkillKind) -> f64 {
        match kind {
            SkillKind::Diction => self.diction,
            SkillKind::Confidence => self.confidence,
            SkillKind::Vocabulary => self.vocabulary,
            SkillKind::Empathy => self.empathy,
        }
    }

    /// Raises a gauge by `amount`, clamped to the gauge ceiling.
    pub fn bump(&mut self, kind: SkillKind, amount: f64) {
        let slot = match kind {
            SkillKind::Diction => &mut self.diction,
            SkillKind::Confidence => &mut self.confidence,
            SkillKind::Vocabulary => &mut self.vocabulary,
            SkillKind::Empathy => &mut self.empathy,
        };
        *slot = (*slot + amount).min(SKILL_MAX);
    }
}

/// One journal entry. Entries are stored newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// One registered event, predefined or free-form. Stored newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub xp: u32,
    pub date: NaiveDate,
    #[serde(default = "custom_event_kind")]
    pub kind: EventKind,
}

fn custom_event_kind() -> EventKind {
    EventKind::Custom
}

/// Cosmetic state applied by equipped shop items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarCustomizations {
    #[serde(default = "default_background")]
    pub background_color: String,
}

fn default_background() -> String {
    DEFAULT_BACKGROUND_COLOR.to_string()
}

impl Default for AvatarCustomizations {
    fn default() -> Self {
        Self {
            background_color: default_background(),
        }
    }
}

/// Full progression state for one player.
///
/// IMPORTANT: when adding new fields, use `#[serde(default)]` to maintain
/// backwards compatibility with existing profile records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default = "default_coins")]
    pub coins: u32,
    /// Reserved: tracked but not yet mutated by any intent.
    #[serde(default = "default_streak")]
    pub streak: u32,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub quests_completed: HashSet<String>,
    /// Predefined catalog events already reported.
    #[serde(default)]
    pub events_completed: HashSet<String>,
    /// Day a free-form event was last registered; at most one per day.
    #[serde(default)]
    pub last_custom_event_date: Option<NaiveDate>,
    /// Mini-game id to the moment it was last played.
    #[serde(default)]
    pub game_cooldowns: HashMap<String, DateTime<Utc>>,
    #[serde(default)]
    pub journal_entries: Vec<JournalEntry>,
    /// Daily-challenge id to the day it was last completed.
    #[serde(default)]
    pub completed_daily_challenges: HashMap<String, NaiveDate>,
    #[serde(default)]
    pub avatar_customizations: AvatarCustomizations,
    #[serde(default = "default_purchases")]
    pub purchased_items: HashSet<String>,
    #[serde(default)]
    pub event_history: Vec<EventRecord>,
    #[serde(default)]
    pub unlocked_features: HashSet<String>,
    /// Levels whose milestone bonus was already granted.
    #[serde(default)]
    pub milestones_reached: HashSet<u32>,
}

fn default_name() -> String {
    DEFAULT_PLAYER_NAME.to_string()
}

fn default_level() -> u32 {
    1
}

fn default_coins() -> u32 {
    STARTING_COINS
}

fn default_streak() -> u32 {
    1
}

fn default_purchases() -> HashSet<String> {
    HashSet::from([DEFAULT_BACKGROUND_ID.to_string()])
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            level: 1,
            xp: 0,
            coins: STARTING_COINS,
            streak: 1,
            skills: Skills::default(),
            quests_completed: HashSet::new(),
            events_completed: HashSet::new(),
            last_custom_event_date: None,
            game_cooldowns: HashMap::new(),
            journal_entries: Vec::new(),
            completed_daily_challenges: HashMap::new(),
            avatar_customizations: AvatarCustomizations::default(),
            purchased_items: default_purchases(),
            event_history: Vec::new(),
            unlocked_features: HashSet::new(),
            milestones_reached: HashSet::new(),
        }
    }
}

impl PlayerProfile {
    pub fn new() -> Self {
        Self::default()
    }
}
