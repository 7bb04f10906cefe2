//! A loaded profile plus its write-back machinery.
//!
//! `ProfileSession` is the single logical owner of one user's profile:
//! every intent goes through `&mut self`, so two intents can never be
//! computed against the same state snapshot. Mutations are persisted
//! asynchronously by a debounced background task; the in-memory profile
//! is the source of truth for the session and a failed write never rolls
//! it back.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, oneshot};

use crate::catalog::Catalog;
use crate::constants::SAVE_DEBOUNCE_SECONDS;
use crate::profile::PlayerProfile;
use crate::progression::{
    self, ChallengeOutcome, EquipOutcome, EventOutcome, GameOutcome, PurchaseOutcome,
    QuestOutcome, XpAward,
};
use crate::store::ProfileStore;

enum SaveMsg {
    Snapshot(Box<PlayerProfile>),
    Flush(oneshot::Sender<()>),
}

/// One user's live progression state with debounced persistence.
pub struct ProfileSession {
    user_id: String,
    profile: PlayerProfile,
    catalog: Arc<Catalog>,
    saver_tx: mpsc::UnboundedSender<SaveMsg>,
}

impl ProfileSession {
    /// Loads the profile and starts the background saver.
    ///
    /// The await gates every intent behind the initial fetch, so a write
    /// can never clobber a record that was not loaded yet. A missing
    /// record or a failed load both start from defaults; the failure is
    /// logged, not raised.
    pub async fn open(
        user_id: impl Into<String>,
        catalog: Arc<Catalog>,
        store: Arc<dyn ProfileStore>,
    ) -> Self {
        Self::open_with_debounce(
            user_id,
            catalog,
            store,
            Duration::from_secs(SAVE_DEBOUNCE_SECONDS),
        )
        .await
    }

    pub async fn open_with_debounce(
        user_id: impl Into<String>,
        catalog: Arc<Catalog>,
        store: Arc<dyn ProfileStore>,
        debounce: Duration,
    ) -> Self {
        let user_id = user_id.into();
        let profile = match store.load(&user_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => PlayerProfile::new(),
            Err(e) => {
                log::warn!("failed to load profile for {user_id}, starting fresh: {e}");
                PlayerProfile::new()
            }
        };

        let (saver_tx, saver_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_saver(store, user_id.clone(), debounce, saver_rx));

        Self {
            user_id,
            profile,
            catalog,
            saver_tx,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Forces any pending snapshot to disk and waits for the write.
    pub async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.saver_tx.send(SaveMsg::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.await;
        }
    }

    fn schedule_save(&self) {
        let snapshot = Box::new(self.profile.clone());
        let _ = self.saver_tx.send(SaveMsg::Snapshot(snapshot));
    }

    // ------------------------------------------------------------------
    // Intents. Each applies one engine transition and schedules a save
    // when (and only when) state changed.
    // ------------------------------------------------------------------

    pub fn award_xp(&mut self, amount: i64) -> XpAward {
        let award = progression::award_xp(&mut self.profile, &self.catalog, amount);
        if amount > 0 {
            self.schedule_save();
        }
        award
    }

    pub fn complete_quest(&mut self, quest_id: &str) -> QuestOutcome {
        let outcome = progression::complete_quest(&mut self.profile, &self.catalog, quest_id);
        if matches!(outcome, QuestOutcome::Completed(_)) {
            self.schedule_save();
        }
        outcome
    }

    pub fn register_custom_event(
        &mut self,
        title: &str,
        description: &str,
        requested_xp: u32,
    ) -> EventOutcome {
        let outcome = progression::register_custom_event(
            &mut self.profile,
            &self.catalog,
            title,
            description,
            requested_xp,
            Utc::now().date_naive(),
        );
        if matches!(outcome, EventOutcome::Registered { .. }) {
            self.schedule_save();
        }
        outcome
    }

    pub fn complete_game(&mut self, game_id: &str, xp_reward: u32, cooldown_hours: u32) -> GameOutcome {
        let outcome = progression::complete_game(
            &mut self.profile,
            &self.catalog,
            game_id,
            xp_reward,
            cooldown_hours,
            Utc::now(),
        );
        if matches!(outcome, GameOutcome::Played(_)) {
            self.schedule_save();
        }
        outcome
    }

    /// Plays a catalog mini-game by id; `None` for an unknown id.
    pub fn play_mini_game(&mut self, game_id: &str) -> Option<GameOutcome> {
        let game = *self.catalog.mini_game(game_id)?;
        Some(self.complete_game(game.id, game.xp_reward, game.cooldown_hours))
    }

    pub fn add_journal_entry(&mut self, text: &str) {
        progression::add_journal_entry(&mut self.profile, text, Utc::now());
        self.schedule_save();
    }

    pub fn complete_daily_challenge(&mut self, challenge_id: &str) -> ChallengeOutcome {
        let outcome = progression::complete_daily_challenge(
            &mut self.profile,
            &self.catalog,
            challenge_id,
            Utc::now().date_naive(),
        );
        if matches!(outcome, ChallengeOutcome::Completed(_)) {
            self.schedule_save();
        }
        outcome
    }

    /// Completes a catalog special event by id; `None` when the id is
    /// unknown or the event was already completed.
    pub fn complete_special_event(&mut self, event_id: &str) -> Option<XpAward> {
        let event = *self.catalog.special_event(event_id)?;
        let award = progression::complete_special_event(&mut self.profile, &self.catalog, &event)?;
        self.schedule_save();
        Some(award)
    }

    pub fn set_player_name(&mut self, name: &str) {
        progression::set_player_name(&mut self.profile, name);
        self.schedule_save();
    }

    /// Buys a catalog shop item by id; `None` for an unknown id.
    pub fn purchase_item(&mut self, item_id: &str) -> Option<PurchaseOutcome> {
        let item = *self.catalog.shop_item(item_id)?;
        let outcome = progression::purchase_item(&mut self.profile, &item);
        if outcome == PurchaseOutcome::Purchased {
            self.schedule_save();
        }
        Some(outcome)
    }

    /// Equips a catalog shop item by id; `None` for an unknown id.
    pub fn equip_item(&mut self, item_id: &str) -> Option<EquipOutcome> {
        let item = *self.catalog.shop_item(item_id)?;
        let outcome = progression::equip_item(&mut self.profile, &item);
        if outcome == EquipOutcome::Equipped {
            self.schedule_save();
        }
        Some(outcome)
    }
}

/// Debounce loop: coalesces snapshots during the quiet period, keeps only
/// the newest, and writes once per burst. Closing the channel (session
/// drop) triggers a final write.
async fn run_saver(
    store: Arc<dyn ProfileStore>,
    user_id: String,
    debounce: Duration,
    mut rx: mpsc::UnboundedReceiver<SaveMsg>,
) {
    let mut pending: Option<Box<PlayerProfile>> = None;

    loop {
        let msg = if pending.is_some() {
            match tokio::time::timeout(debounce, rx.recv()).await {
                Ok(msg) => msg,
                Err(_) => {
                    write_pending(&*store, &user_id, &mut pending).await;
                    continue;
                }
            }
        } else {
            rx.recv().await
        };

        match msg {
            Some(SaveMsg::Snapshot(profile)) => pending = Some(profile),
            Some(SaveMsg::Flush(ack)) => {
                write_pending(&*store, &user_id, &mut pending).await;
                let _ = ack.send(());
            }
            None => {
                write_pending(&*store, &user_id, &mut pending).await;
                break;
            }
        }
    }
}

async fn write_pending(
    store: &dyn ProfileStore,
    user_id: &str,
    pending: &mut Option<Box<PlayerProfile>>,
) {
    if let Some(profile) = pending.take() {
        if let Err(e) = store.save(user_id, &profile).await {
            log::warn!("failed to persist profile for {user_id}: {e}");
        }
    }
}
