//! Static catalog definitions.

use super::types::{DailyChallenge, EventKind, MiniGame, Milestone, QuestKind, ShopItem, ShopItemKind, SpecialEvent};

/// Quest definition before its XP share is computed.
#[derive(Debug, Clone, Copy)]
pub(super) struct RawQuest {
    pub id: &'static str,
    pub level: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: QuestKind,
}

/// Seed quests, three per level. Order matters: the XP remainder of a
/// level's pool goes to the earliest quests.
pub(super) const RAW_QUESTS: &[RawQuest] = &[
    RawQuest {
        id: "q1-1",
        level: 1,
        title: "Diaphragmatic Breathing",
        description: "Record a one-minute audio practicing diaphragmatic breathing. Focus on expanding the abdomen as you inhale.",
        kind: QuestKind::Physical,
    },
    RawQuest {
        id: "q1-2",
        level: 1,
        title: "Quick Introduction",
        description: "Record a 30-second video introducing yourself to the camera as if you were at a networking event.",
        kind: QuestKind::Interpersonal,
    },
    RawQuest {
        id: "q1-3",
        level: 1,
        title: "Communication Journal",
        description: "Write a journal entry about a recent social interaction. What went well? What could improve?",
        kind: QuestKind::Reflective,
    },
    RawQuest {
        id: "q2-1",
        level: 2,
        title: "Read Aloud",
        description: "Pick a paragraph from a book and read it aloud, focusing on clarity and diction.",
        kind: QuestKind::Physical,
    },
    RawQuest {
        id: "q2-2",
        level: 2,
        title: "Genuine Compliment",
        description: "Give a sincere compliment to a friend or colleague today and note their reaction in your journal.",
        kind: QuestKind::Interpersonal,
    },
    RawQuest {
        id: "q2-3",
        level: 2,
        title: "Speech Analysis",
        description: "Watch a five-minute TED talk and write down three public-speaking techniques you noticed.",
        kind: QuestKind::Reflective,
    },
    RawQuest {
        id: "q3-1",
        level: 3,
        title: "Tongue Twister",
        description: "Record yourself saying \"she sells seashells by the seashore\" three times, faster each time.",
        kind: QuestKind::Physical,
    },
    RawQuest {
        id: "q3-2",
        level: 3,
        title: "Starting a Conversation",
        description: "Start a conversation with a barista, cashier or attendant by asking something beyond the usual.",
        kind: QuestKind::Interpersonal,
    },
    RawQuest {
        id: "q3-3",
        level: 3,
        title: "Setting Goals",
        description: "Write down your biggest communication goal and one small step toward it this week.",
        kind: QuestKind::Reflective,
    },
];

/// Milestones at a sparse subset of levels.
pub(super) const MILESTONES: &[Milestone] = &[
    Milestone {
        level: 5,
        title: "Consistent Communicator",
        rewards: &["+10% XP on Physical quests", "Golden Avatar"],
        unlocks: &["Video Recording", "Basic Analysis"],
    },
    Milestone {
        level: 10,
        title: "Fearless Speaker",
        rewards: &["Skill: Steel Focus", "Silver Mask Avatar"],
        unlocks: &["Group Events", "Mentorships"],
    },
    Milestone {
        level: 15,
        title: "Vocal Strategist",
        rewards: &["+15% XP on Interpersonal quests", "'Persuader' Badge"],
        unlocks: &["Advanced Mini-games", "Detailed Reports"],
    },
    Milestone {
        level: 20,
        title: "Professional Communicator",
        rewards: &["Professional Avatar", "VIP Community Access"],
        unlocks: &["Corporate Challenges", "Premium Networking"],
    },
    Milestone {
        level: 25,
        title: "Master of Connections",
        rewards: &["Skill: Socializer", "+20% Global XP"],
        unlocks: &["Live Events", "Mentoring Sessions"],
    },
    Milestone {
        level: 30,
        title: "Inspiring Leader",
        rewards: &["Leader's Crown Avatar", "'Influencer' Badge"],
        unlocks: &["Exclusive Workshops", "Leadership Mode"],
    },
];

pub(super) const DAILY_CHALLENGES: &[DailyChallenge] = &[
    DailyChallenge {
        id: "daily-read",
        title: "Read Aloud",
        description: "Read two pages of a book aloud with emphasis.",
        xp: 5,
    },
    DailyChallenge {
        id: "daily-pen",
        title: "Pen Between the Teeth",
        description: "Speak for two minutes with a pen between your teeth.",
        xp: 4,
    },
    DailyChallenge {
        id: "daily-breath",
        title: "Diaphragmatic Breathing",
        description: "Five minutes of breathing focused on the abdomen.",
        xp: 3,
    },
    DailyChallenge {
        id: "daily-rewrite",
        title: "Rewrite a Paragraph",
        description: "Rewrite a complex text in plain language.",
        xp: 5,
    },
    DailyChallenge {
        id: "daily-ted",
        title: "Bonus: Analyze a TED Talk",
        description: "Watch one and identify a technique the speaker used.",
        xp: 3,
    },
    DailyChallenge {
        id: "daily-friend",
        title: "Bonus: Voice Note to a Friend",
        description: "Send someone a clear, well-structured voice note.",
        xp: 5,
    },
];

pub(super) const MINI_GAMES: &[MiniGame] = &[
    MiniGame {
        id: "game-ranked",
        title: "Elite Challenge",
        description: "Three hard random tongue twisters to test your limits. Available every five hours.",
        min_level: 1,
        xp_reward: 4,
        cooldown_hours: 5,
    },
    MiniGame {
        id: "game-free",
        title: "Free Practice",
        description: "Practice without limits or pressure. Great for warming up before events.",
        min_level: 1,
        xp_reward: 0,
        cooldown_hours: 0,
    },
];

pub(super) const SHOP_ITEMS: &[ShopItem] = &[
    ShopItem {
        id: "bg-default",
        name: "Midnight Standard",
        cost: 0,
        kind: ShopItemKind::Background,
        value: "#0f172a",
    },
    ShopItem {
        id: "bg-royal",
        name: "Royal Purple",
        cost: 100,
        kind: ShopItemKind::Background,
        value: "#581c87",
    },
    ShopItem {
        id: "bg-forest",
        name: "Forest Green",
        cost: 150,
        kind: ShopItemKind::Background,
        value: "#14532d",
    },
    ShopItem {
        id: "bg-ocean",
        name: "Ocean Blue",
        cost: 200,
        kind: ShopItemKind::Background,
        value: "#1e3a8a",
    },
    ShopItem {
        id: "bg-sunset",
        name: "Sunset Ember",
        cost: 300,
        kind: ShopItemKind::Background,
        value: "#9a3412",
    },
    ShopItem {
        id: "bg-gold",
        name: "Gilded Luxury",
        cost: 500,
        kind: ShopItemKind::Background,
        value: "#854d0e",
    },
];

/// Legacy predefined events; the events screen now centers on free-form
/// reports, but these remain completable.
pub(super) const SPECIAL_EVENTS: &[SpecialEvent] = &[
    SpecialEvent {
        id: "evt-meeting",
        title: "Unexpected Meeting",
        description: "Your boss asked for your opinion on the new project, by surprise, in front of everyone.",
        xp: 150,
        kind: EventKind::Meeting,
    },
    SpecialEvent {
        id: "evt-presentation",
        title: "Emergency Presentation",
        description: "The keynote speaker is missing and you have to cover fifteen minutes of the event right now.",
        xp: 200,
        kind: EventKind::Emergency,
    },
    SpecialEvent {
        id: "evt-networking",
        title: "Networking Session",
        description: "You have one hour to land three valuable contacts at an industry event.",
        xp: 180,
        kind: EventKind::Networking,
    },
];
