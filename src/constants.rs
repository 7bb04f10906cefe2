//! Shared balance constants for the progression engine.
//!
//! All core balance numbers should be defined here.
//! Change once, test everywhere.

// =============================================================================
// XP CURVE & LEVELING
// =============================================================================

/// XP required to clear level 1.
pub const XP_CURVE_BASE: u32 = 100;

/// Additional XP required per level past the first.
pub const XP_CURVE_STEP: u32 = 50;

/// Highest level defined by the catalog. Past this the XP threshold is
/// undefined and no further level-ups occur.
pub const MAX_LEVEL: u32 = 100;

/// Coins granted per level gained.
pub const COINS_PER_LEVEL: u32 = 25;

// =============================================================================
// SKILL GAUGES
// =============================================================================

/// Lower bound of every skill gauge.
pub const SKILL_MIN: f64 = 1.0;

/// Upper bound of every skill gauge.
pub const SKILL_MAX: f64 = 10.0;

/// Diction bump for completing a Physical quest.
pub const QUEST_PHYSICAL_DICTION_BUMP: f64 = 0.1;

/// Confidence bump for completing an Interpersonal quest.
pub const QUEST_INTERPERSONAL_CONFIDENCE_BUMP: f64 = 0.1;

/// Empathy bump for completing an Interpersonal quest.
pub const QUEST_INTERPERSONAL_EMPATHY_BUMP: f64 = 0.05;

/// Vocabulary bump for completing a Reflective quest.
pub const QUEST_REFLECTIVE_VOCABULARY_BUMP: f64 = 0.1;

/// Confidence bump for registering a custom event.
pub const CUSTOM_EVENT_CONFIDENCE_BUMP: f64 = 0.3;

/// Diction bump for registering a custom event.
pub const CUSTOM_EVENT_DICTION_BUMP: f64 = 0.2;

/// Confidence bump for completing a catalog special event.
pub const SPECIAL_EVENT_CONFIDENCE_BUMP: f64 = 0.5;

/// Diction bump for finishing a mini-game round.
pub const GAME_DICTION_BUMP: f64 = 0.05;

/// Vocabulary bump for writing a journal entry.
pub const JOURNAL_VOCABULARY_BUMP: f64 = 0.05;

// =============================================================================
// QUESTS & EVENTS
// =============================================================================

/// Share of a level's XP requirement that is split among its quests.
pub const QUEST_XP_POOL_SHARE: f64 = 0.7;

/// Custom-event XP is capped at this share of the current level's
/// XP requirement.
pub const CUSTOM_EVENT_XP_CAP_SHARE: f64 = 0.75;

/// XP awarded for a daily challenge whose id is not in the catalog.
pub const DAILY_CHALLENGE_FALLBACK_XP: u32 = 5;

// =============================================================================
// PLAYER DEFAULTS
// =============================================================================

/// Display name before the player picks one.
pub const DEFAULT_PLAYER_NAME: &str = "Wayfarer";

/// Coins a fresh profile starts with.
pub const STARTING_COINS: u32 = 50;

/// Shop item every profile owns from the start.
pub const DEFAULT_BACKGROUND_ID: &str = "bg-default";

/// Background color of the default shop item.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#0f172a";

// =============================================================================
// PERSISTENCE
// =============================================================================

/// Quiet period before a dirty profile is written back to the store.
pub const SAVE_DEBOUNCE_SECONDS: u64 = 2;
