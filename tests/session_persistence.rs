//! Session and persistence integration tests
//!
//! Full lifecycle against the real file store in a temp directory:
//! open, mutate, debounced write-back, reopen, and the degraded paths
//! (missing record, corrupt record).

use std::sync::Arc;
use std::time::Duration;

use eloquence::{Catalog, JsonFileStore, PlayerProfile, ProfileSession, ProfileStore};
use tempfile::TempDir;

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::new())
}

fn file_store(dir: &TempDir) -> Arc<JsonFileStore> {
    Arc::new(JsonFileStore::new(dir.path().join("profiles")))
}

#[tokio::test]
async fn test_first_session_creates_and_persists_a_profile() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    let mut session = ProfileSession::open("rae", catalog(), store.clone()).await;
    assert_eq!(session.profile().level, 1);

    session.set_player_name("Rae");
    session.complete_quest("q1-1");
    session.complete_quest("q1-2");
    session.flush().await;

    let saved = store.load("rae").await.unwrap().expect("record written");
    assert_eq!(saved.name, "Rae");
    assert_eq!(saved.quests_completed.len(), 2);
}

#[tokio::test]
async fn test_reopened_session_resumes_where_it_left_off() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    {
        let mut session = ProfileSession::open("rae", catalog(), store.clone()).await;
        session.award_xp(130);
        session.complete_daily_challenge("daily-read");
        session.flush().await;
    }

    let session = ProfileSession::open("rae", catalog(), store).await;
    assert_eq!(session.profile().level, 2);
    assert_eq!(session.profile().xp, 30);
    assert!(session
        .profile()
        .completed_daily_challenges
        .contains_key("daily-read"));
}

#[tokio::test]
async fn test_corrupt_record_degrades_to_fresh_profile() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("profiles");
    tokio::fs::create_dir_all(&root).await.unwrap();
    tokio::fs::write(root.join("rae.json"), "###").await.unwrap();

    let store = Arc::new(JsonFileStore::new(root));
    let session = ProfileSession::open("rae", catalog(), store).await;

    assert_eq!(session.profile().level, 1);
    assert_eq!(session.profile().coins, 50);
}

#[tokio::test]
async fn test_two_users_do_not_share_state() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    let mut a = ProfileSession::open("a", catalog(), store.clone()).await;
    let mut b = ProfileSession::open("b", catalog(), store.clone()).await;

    a.complete_quest("q1-1");
    b.complete_quest("q1-3");
    a.flush().await;
    b.flush().await;

    let a_saved = store.load("a").await.unwrap().unwrap();
    let b_saved = store.load("b").await.unwrap().unwrap();
    assert!(a_saved.quests_completed.contains("q1-1"));
    assert!(!a_saved.quests_completed.contains("q1-3"));
    assert!(b_saved.quests_completed.contains("q1-3"));
}

#[tokio::test]
async fn test_debounce_coalesces_burst_then_timer_fires() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    let mut session = ProfileSession::open_with_debounce(
        "rae",
        catalog(),
        store.clone(),
        Duration::from_millis(30),
    )
    .await;

    // Burst of mutations inside one window.
    for id in ["daily-read", "daily-pen", "daily-breath", "daily-rewrite"] {
        session.complete_daily_challenge(id);
    }

    // Before the quiet period elapses nothing is on disk yet.
    assert!(store.load("rae").await.unwrap().is_none());

    tokio::time::sleep(Duration::from_millis(300)).await;

    let saved = store.load("rae").await.unwrap().expect("debounced write");
    assert_eq!(saved.completed_daily_challenges.len(), 4);
}

#[tokio::test]
async fn test_last_write_wins_across_bursts() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);

    let mut session = ProfileSession::open_with_debounce(
        "rae",
        catalog(),
        store.clone(),
        Duration::from_millis(20),
    )
    .await;

    session.set_player_name("First");
    tokio::time::sleep(Duration::from_millis(200)).await;
    session.set_player_name("Second");
    tokio::time::sleep(Duration::from_millis(200)).await;

    let saved = store.load("rae").await.unwrap().unwrap();
    assert_eq!(saved.name, "Second");
}

#[tokio::test]
async fn test_profile_blob_merges_forward_on_load() {
    // Seed the store with a minimal hand-written record, as an older
    // build would have produced.
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("profiles");
    tokio::fs::create_dir_all(&root).await.unwrap();
    tokio::fs::write(
        root.join("vet.json"),
        r#"{"name":"Old Hand","level":12,"xp":55,"coins":300}"#,
    )
    .await
    .unwrap();

    let store: Arc<dyn ProfileStore> = Arc::new(JsonFileStore::new(root));
    let mut session = ProfileSession::open("vet", catalog(), store).await;

    // Loaded fields survive, new fields default, and the engine keeps
    // working on top of the merged profile.
    assert_eq!(session.profile().name, "Old Hand");
    assert_eq!(session.profile().level, 12);
    assert!(session.profile().purchased_items.contains("bg-default"));
    assert_eq!(session.profile().skills.diction, 1.0);

    let outcome = session.purchase_item("bg-ocean");
    assert_eq!(
        outcome,
        Some(eloquence::progression::PurchaseOutcome::Purchased)
    );
    assert_eq!(session.profile().coins, 100);
}

#[tokio::test]
async fn test_default_profile_matches_documented_lifecycle() {
    let profile = PlayerProfile::new();
    assert_eq!(profile.level, 1);
    assert_eq!(profile.xp, 0);
    assert_eq!(profile.coins, 50);
    assert!(profile.purchased_items.contains("bg-default"));
}
