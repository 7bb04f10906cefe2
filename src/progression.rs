//! State transitions for every player intent.
//!
//! Each function takes the current profile plus a catalog and produces the
//! new state in place together with an outcome descriptor, in one pass.
//! Transitions are synchronous and all-or-nothing: a rejected intent
//! leaves the profile untouched. Time-dependent intents take the clock as
//! a parameter; nothing here reads the system clock.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::{Catalog, EventKind, QuestKind, ShopItem, ShopItemKind, SpecialEvent};
use crate::constants::{
    COINS_PER_LEVEL, CUSTOM_EVENT_CONFIDENCE_BUMP, CUSTOM_EVENT_DICTION_BUMP,
    CUSTOM_EVENT_XP_CAP_SHARE, DAILY_CHALLENGE_FALLBACK_XP, GAME_DICTION_BUMP,
    JOURNAL_VOCABULARY_BUMP, QUEST_INTERPERSONAL_CONFIDENCE_BUMP,
    QUEST_INTERPERSONAL_EMPATHY_BUMP, QUEST_PHYSICAL_DICTION_BUMP,
    QUEST_REFLECTIVE_VOCABULARY_BUMP, SPECIAL_EVENT_CONFIDENCE_BUMP, XP_CURVE_BASE,
};
use crate::profile::{EventRecord, JournalEntry, PlayerProfile, SkillKind};

/// Whether an XP grant crossed a level threshold, and where it landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XpAward {
    pub leveled_up: bool,
    /// Final level reached, present only when a level-up occurred.
    pub new_level: Option<u32>,
}

impl XpAward {
    pub fn none() -> Self {
        Self {
            leveled_up: false,
            new_level: None,
        }
    }
}

/// Result of a quest completion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestOutcome {
    Completed(XpAward),
    AlreadyCompleted,
}

/// Result of registering a free-form event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Registered {
        xp_granted: u32,
        message: String,
        award: XpAward,
    },
    OnCooldown {
        message: String,
    },
}

/// Result of a mini-game round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Played(XpAward),
    OnCooldown,
}

/// Result of a daily challenge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeOutcome {
    Completed(XpAward),
    AlreadyCompletedToday,
}

/// Result of a shop purchase attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased,
    AlreadyOwned,
    InsufficientCoins,
}

/// Result of equipping a shop item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipOutcome {
    Equipped,
    NotOwned,
}

/// Adds XP, processing any level-ups and milestone grants.
///
/// Crossing several thresholds in one call yields several level-ups; a
/// threshold the catalog does not define (past the last level) halts the
/// loop. Each level gained pays out coins, and each milestone level is
/// granted at most once over the profile's lifetime. An `amount` of zero
/// or less changes nothing.
pub fn award_xp(profile: &mut PlayerProfile, catalog: &Catalog, amount: i64) -> XpAward {
    if amount <= 0 {
        return XpAward::none();
    }

    let start_level = profile.level;
    profile.xp = profile.xp.saturating_add(amount.min(i64::from(u32::MAX)) as u32);

    while let Some(required) = catalog.xp_required(profile.level) {
        if profile.xp < required {
            break;
        }
        profile.xp -= required;
        profile.level += 1;
        grant_milestone(profile, catalog, profile.level);
    }

    let levels_gained = profile.level - start_level;
    if levels_gained == 0 {
        return XpAward::none();
    }

    profile.coins += COINS_PER_LEVEL * levels_gained;
    XpAward {
        leveled_up: true,
        new_level: Some(profile.level),
    }
}

/// Grants the milestone at `level`, if one exists and was never granted.
fn grant_milestone(profile: &mut PlayerProfile, catalog: &Catalog, level: u32) {
    let Some(milestone) = catalog.milestone(level) else {
        return;
    };
    if !profile.milestones_reached.insert(level) {
        return;
    }
    for feature in milestone.unlocks {
        profile.unlocked_features.insert((*feature).to_string());
    }
}

/// Completes a quest once, bumping the skill its kind trains.
///
/// An id not present in the catalog still becomes a permanent completion,
/// but grants neither skills nor XP (catalog lookup failure is not fatal).
pub fn complete_quest(profile: &mut PlayerProfile, catalog: &Catalog, quest_id: &str) -> QuestOutcome {
    if profile.quests_completed.contains(quest_id) {
        return QuestOutcome::AlreadyCompleted;
    }

    let award = match catalog.quest(quest_id) {
        Some(quest) => {
            match quest.kind {
                QuestKind::Physical => {
                    profile.skills.bump(SkillKind::Diction, QUEST_PHYSICAL_DICTION_BUMP);
                }
                QuestKind::Interpersonal => {
                    profile
                        .skills
                        .bump(SkillKind::Confidence, QUEST_INTERPERSONAL_CONFIDENCE_BUMP);
                    profile
                        .skills
                        .bump(SkillKind::Empathy, QUEST_INTERPERSONAL_EMPATHY_BUMP);
                }
                QuestKind::Reflective => {
                    profile
                        .skills
                        .bump(SkillKind::Vocabulary, QUEST_REFLECTIVE_VOCABULARY_BUMP);
                }
            }
            let xp = quest.xp;
            profile.quests_completed.insert(quest_id.to_string());
            award_xp(profile, catalog, i64::from(xp))
        }
        None => {
            profile.quests_completed.insert(quest_id.to_string());
            XpAward::none()
        }
    };

    QuestOutcome::Completed(award)
}

/// Registers a free-form "rare event", at most one per calendar day.
///
/// Granted XP is capped at `CUSTOM_EVENT_XP_CAP_SHARE` of the current
/// level's XP requirement, so a single report cannot skip most of a level.
pub fn register_custom_event(
    profile: &mut PlayerProfile,
    catalog: &Catalog,
    title: &str,
    description: &str,
    requested_xp: u32,
    today: NaiveDate,
) -> EventOutcome {
    if profile.last_custom_event_date == Some(today) {
        return EventOutcome::OnCooldown {
            message: "A rare event was already logged today.".to_string(),
        };
    }

    let required = catalog.xp_required(profile.level).unwrap_or(XP_CURVE_BASE);
    let max_allowed = (f64::from(required) * CUSTOM_EVENT_XP_CAP_SHARE).floor() as u32;
    let final_xp = requested_xp.min(max_allowed);

    profile.event_history.insert(
        0,
        EventRecord {
            id: format!("custom-{}", Uuid::new_v4()),
            title: title.to_string(),
            description: description.to_string(),
            xp: final_xp,
            date: today,
            kind: EventKind::Custom,
        },
    );
    profile.last_custom_event_date = Some(today);
    profile
        .skills
        .bump(SkillKind::Confidence, CUSTOM_EVENT_CONFIDENCE_BUMP);
    profile.skills.bump(SkillKind::Diction, CUSTOM_EVENT_DICTION_BUMP);

    let award = award_xp(profile, catalog, i64::from(final_xp));
    EventOutcome::Registered {
        xp_granted: final_xp,
        message: format!("Event logged! +{final_xp} XP"),
        award,
    }
}

/// Records a mini-game round, honoring its cooldown.
///
/// A round played before `cooldown_hours` have elapsed since the last one
/// is rejected without touching state. Playing exactly at the threshold is
/// accepted. An `xp_reward` of zero is legal: free practice still records
/// the cooldown and the skill bump.
pub fn complete_game(
    profile: &mut PlayerProfile,
    catalog: &Catalog,
    game_id: &str,
    xp_reward: u32,
    cooldown_hours: u32,
    now: DateTime<Utc>,
) -> GameOutcome {
    if let Some(last_played) = profile.game_cooldowns.get(game_id) {
        if now - *last_played < Duration::hours(i64::from(cooldown_hours)) {
            return GameOutcome::OnCooldown;
        }
    }

    profile.game_cooldowns.insert(game_id.to_string(), now);
    profile.skills.bump(SkillKind::Diction, GAME_DICTION_BUMP);
    GameOutcome::Played(award_xp(profile, catalog, i64::from(xp_reward)))
}

/// Prepends a journal entry. The caller validates that `text` is
/// non-blank before it gets here.
pub fn add_journal_entry(profile: &mut PlayerProfile, text: &str, now: DateTime<Utc>) {
    profile.journal_entries.insert(
        0,
        JournalEntry {
            timestamp: now,
            text: text.to_string(),
        },
    );
    profile
        .skills
        .bump(SkillKind::Vocabulary, JOURNAL_VOCABULARY_BUMP);
}

/// Completes a daily challenge, once per calendar day per challenge.
///
/// Awards the challenge's catalog XP; an id the catalog does not know
/// falls back to a flat grant.
pub fn complete_daily_challenge(
    profile: &mut PlayerProfile,
    catalog: &Catalog,
    challenge_id: &str,
    today: NaiveDate,
) -> ChallengeOutcome {
    if profile.completed_daily_challenges.get(challenge_id) == Some(&today) {
        return ChallengeOutcome::AlreadyCompletedToday;
    }

    profile
        .completed_daily_challenges
        .insert(challenge_id.to_string(), today);
    let xp = catalog
        .daily_challenge(challenge_id)
        .map(|c| c.xp)
        .unwrap_or(DAILY_CHALLENGE_FALLBACK_XP);
    ChallengeOutcome::Completed(award_xp(profile, catalog, i64::from(xp)))
}

/// Completes a predefined catalog event once.
///
/// Returns `None` without touching state when the event was already
/// completed or the id is unknown.
pub fn complete_special_event(
    profile: &mut PlayerProfile,
    catalog: &Catalog,
    event: &SpecialEvent,
) -> Option<XpAward> {
    if profile.events_completed.contains(event.id) {
        return None;
    }

    profile.events_completed.insert(event.id.to_string());
    profile
        .skills
        .bump(SkillKind::Confidence, SPECIAL_EVENT_CONFIDENCE_BUMP);
    Some(award_xp(profile, catalog, i64::from(event.xp)))
}

/// Replaces the display name. Length rules are the caller's job.
pub fn set_player_name(profile: &mut PlayerProfile, name: &str) {
    profile.name = name.to_string();
}

/// Buys a shop item with coins.
pub fn purchase_item(profile: &mut PlayerProfile, item: &ShopItem) -> PurchaseOutcome {
    if profile.purchased_items.contains(item.id) {
        return PurchaseOutcome::AlreadyOwned;
    }
    if profile.coins < item.cost {
        return PurchaseOutcome::InsufficientCoins;
    }

    profile.coins -= item.cost;
    profile.purchased_items.insert(item.id.to_string());
    PurchaseOutcome::Purchased
}

/// Equips an owned shop item into its customization slot.
pub fn equip_item(profile: &mut PlayerProfile, item: &ShopItem) -> EquipOutcome {
    if !profile.purchased_items.contains(item.id) {
        return EquipOutcome::NotOwned;
    }

    match item.kind {
        ShopItemKind::Background => {
            profile.avatar_customizations.background_color = item.value.to_string();
        }
    }
    EquipOutcome::Equipped
}
