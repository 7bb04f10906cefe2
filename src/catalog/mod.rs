//! Static reference tables built once at startup.

mod data;
mod types;

pub use types::{
    DailyChallenge, EventKind, Level, MiniGame, Milestone, Quest, QuestKind, ShopItem,
    ShopItemKind, SpecialEvent,
};

use crate::constants::{MAX_LEVEL, QUEST_XP_POOL_SHARE, XP_CURVE_BASE, XP_CURVE_STEP};

/// XP needed to clear a level, or `None` for levels past the table.
///
/// Pure function of the level so any component can recompute it.
pub fn xp_required_for_level(level: u32) -> Option<u32> {
    if (1..=MAX_LEVEL).contains(&level) {
        Some(XP_CURVE_BASE + XP_CURVE_STEP * (level - 1))
    } else {
        None
    }
}

/// Immutable reference tables for the whole game.
#[derive(Debug, Clone)]
pub struct Catalog {
    levels: Vec<Level>,
    quests: Vec<Quest>,
    milestones: Vec<Milestone>,
    daily_challenges: Vec<DailyChallenge>,
    mini_games: Vec<MiniGame>,
    shop_items: Vec<ShopItem>,
    special_events: Vec<SpecialEvent>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Builds every table. Deterministic: same output on every call.
    pub fn new() -> Self {
        let milestones: Vec<Milestone> = data::MILESTONES.to_vec();

        let levels = (1..=MAX_LEVEL)
            .map(|level| Level {
                level,
                // Levels 1..=MAX_LEVEL are always in range.
                xp_required: xp_required_for_level(level).unwrap_or(u32::MAX),
                title: level_title(level, &milestones),
            })
            .collect();

        Self {
            levels,
            quests: build_quests(),
            milestones,
            daily_challenges: data::DAILY_CHALLENGES.to_vec(),
            mini_games: data::MINI_GAMES.to_vec(),
            shop_items: data::SHOP_ITEMS.to_vec(),
            special_events: data::SPECIAL_EVENTS.to_vec(),
        }
    }

    /// XP needed to clear a level, or `None` past the table's end.
    pub fn xp_required(&self, level: u32) -> Option<u32> {
        xp_required_for_level(level)
    }

    pub fn level(&self, level: u32) -> Option<&Level> {
        self.levels.iter().find(|l| l.level == level)
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn quest(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Quests belonging to one level, in catalog order.
    pub fn quests_for_level(&self, level: u32) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(move |q| q.level == level)
    }

    pub fn milestone(&self, level: u32) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.level == level)
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn daily_challenge(&self, id: &str) -> Option<&DailyChallenge> {
        self.daily_challenges.iter().find(|c| c.id == id)
    }

    pub fn daily_challenges(&self) -> &[DailyChallenge] {
        &self.daily_challenges
    }

    pub fn mini_game(&self, id: &str) -> Option<&MiniGame> {
        self.mini_games.iter().find(|g| g.id == id)
    }

    pub fn mini_games(&self) -> &[MiniGame] {
        &self.mini_games
    }

    pub fn shop_item(&self, id: &str) -> Option<&ShopItem> {
        self.shop_items.iter().find(|i| i.id == id)
    }

    pub fn shop_items(&self) -> &[ShopItem] {
        &self.shop_items
    }

    pub fn special_event(&self, id: &str) -> Option<&SpecialEvent> {
        self.special_events.iter().find(|e| e.id == id)
    }

    pub fn special_events(&self) -> &[SpecialEvent] {
        &self.special_events
    }
}

/// Splits each level's XP pool among its quests.
///
/// The pool is `floor(xp_required * QUEST_XP_POOL_SHARE)`, divided evenly;
/// the remainder goes one point each to the earliest quests of the level.
fn build_quests() -> Vec<Quest> {
    data::RAW_QUESTS
        .iter()
        .map(|raw| {
            let required = xp_required_for_level(raw.level).unwrap_or(XP_CURVE_BASE);
            let pool = (f64::from(required) * QUEST_XP_POOL_SHARE).floor() as u32;

            let peers: Vec<&data::RawQuest> = data::RAW_QUESTS
                .iter()
                .filter(|q| q.level == raw.level)
                .collect();
            let count = peers.len() as u32;
            let base = pool / count;
            let remainder = pool % count;
            let index = peers
                .iter()
                .position(|q| q.id == raw.id)
                .unwrap_or(peers.len()) as u32;
            let xp = base + u32::from(index < remainder);

            Quest {
                id: raw.id,
                level: raw.level,
                title: raw.title,
                description: raw.description,
                kind: raw.kind,
                xp,
            }
        })
        .collect()
}

/// Milestone title at milestone levels, otherwise a tier name for the band.
fn level_title(level: u32, milestones: &[Milestone]) -> String {
    if let Some(milestone) = milestones.iter().find(|m| m.level == level) {
        return milestone.title.to_string();
    }
    let tier = match level {
        l if l > 30 => "Veteran",
        l if l > 25 => "Connector",
        l if l > 20 => "Professional",
        l if l > 15 => "Strategist",
        l if l > 10 => "Orator",
        l if l > 5 => "Practitioner",
        _ => "Novice",
    };
    format!("{tier} Lv. {level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_required_formula() {
        assert_eq!(xp_required_for_level(1), Some(100));
        assert_eq!(xp_required_for_level(2), Some(150));
        assert_eq!(xp_required_for_level(4), Some(250));
        assert_eq!(xp_required_for_level(5), Some(300));
        assert_eq!(xp_required_for_level(100), Some(5050));
        assert_eq!(xp_required_for_level(0), None);
        assert_eq!(xp_required_for_level(101), None);
    }

    #[test]
    fn test_xp_required_strictly_increasing() {
        let catalog = Catalog::new();
        let mut previous = 0;
        for level in catalog.levels() {
            assert!(level.xp_required > previous);
            previous = level.xp_required;
        }
    }

    #[test]
    fn test_level_table_covers_full_range() {
        let catalog = Catalog::new();
        assert_eq!(catalog.levels().len(), 100);
        assert_eq!(catalog.level(1).unwrap().xp_required, 100);
        assert_eq!(catalog.level(100).unwrap().xp_required, 5050);
        assert!(catalog.level(101).is_none());
    }

    #[test]
    fn test_quest_xp_split_with_remainder() {
        let catalog = Catalog::new();

        // Level 1: pool = floor(100 * 0.7) = 70, three quests, remainder 1.
        let level1: Vec<u32> = catalog.quests_for_level(1).map(|q| q.xp).collect();
        assert_eq!(level1, vec![24, 23, 23]);
        assert_eq!(level1.iter().sum::<u32>(), 70);

        // Level 2: pool = 105, divides evenly.
        let level2: Vec<u32> = catalog.quests_for_level(2).map(|q| q.xp).collect();
        assert_eq!(level2, vec![35, 35, 35]);

        // Level 3: pool = 140, remainder 2 goes to the first two quests.
        let level3: Vec<u32> = catalog.quests_for_level(3).map(|q| q.xp).collect();
        assert_eq!(level3, vec![47, 47, 46]);
    }

    #[test]
    fn test_quest_lookup() {
        let catalog = Catalog::new();
        let quest = catalog.quest("q1-2").expect("q1-2 should exist");
        assert_eq!(quest.kind, QuestKind::Interpersonal);
        assert_eq!(quest.level, 1);
        assert!(catalog.quest("q99-1").is_none());
    }

    #[test]
    fn test_milestone_levels_are_sparse() {
        let catalog = Catalog::new();
        assert_eq!(catalog.milestones().len(), 6);
        assert!(catalog.milestone(5).is_some());
        assert!(catalog.milestone(6).is_none());
        assert_eq!(catalog.milestone(10).unwrap().title, "Fearless Speaker");
        assert!(!catalog.milestone(10).unwrap().unlocks.is_empty());
    }

    #[test]
    fn test_level_titles() {
        let catalog = Catalog::new();
        assert_eq!(catalog.level(1).unwrap().title, "Novice Lv. 1");
        assert_eq!(catalog.level(5).unwrap().title, "Consistent Communicator");
        assert_eq!(catalog.level(7).unwrap().title, "Practitioner Lv. 7");
        assert_eq!(catalog.level(12).unwrap().title, "Orator Lv. 12");
        assert_eq!(catalog.level(99).unwrap().title, "Veteran Lv. 99");
    }

    #[test]
    fn test_daily_challenges_and_games() {
        let catalog = Catalog::new();
        assert_eq!(catalog.daily_challenges().len(), 6);
        assert_eq!(catalog.daily_challenge("daily-read").unwrap().xp, 5);
        assert_eq!(catalog.daily_challenge("daily-pen").unwrap().xp, 4);

        let ranked = catalog.mini_game("game-ranked").unwrap();
        assert_eq!(ranked.cooldown_hours, 5);
        let free = catalog.mini_game("game-free").unwrap();
        assert_eq!(free.xp_reward, 0);
        assert_eq!(free.cooldown_hours, 0);
    }

    #[test]
    fn test_shop_and_special_events() {
        let catalog = Catalog::new();
        assert_eq!(catalog.shop_items().len(), 6);
        assert_eq!(catalog.shop_item("bg-default").unwrap().cost, 0);
        assert_eq!(catalog.shop_item("bg-gold").unwrap().cost, 500);

        assert_eq!(catalog.special_events().len(), 3);
        assert_eq!(catalog.special_event("evt-presentation").unwrap().xp, 200);
    }

    #[test]
    fn test_catalog_build_is_deterministic() {
        let a = Catalog::new();
        let b = Catalog::new();
        let a_xp: Vec<u32> = a.quests().iter().map(|q| q.xp).collect();
        let b_xp: Vec<u32> = b.quests().iter().map(|q| q.xp).collect();
        assert_eq!(a_xp, b_xp);
        assert_eq!(a.levels().len(), b.levels().len());
    }
}
