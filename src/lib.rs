//! Eloquence - progression engine for a communication habit game.
//!
//! Players complete quests, daily challenges, mini-games and self-reported
//! events to earn XP, level up, unlock milestones and collect cosmetic
//! coins. This crate owns the rules: the static catalog, the per-player
//! state, the transition functions, and the debounced persistence behind
//! them. Rendering and input collection live elsewhere and talk to this
//! crate through `ProfileSession`.

pub mod catalog;
pub mod constants;
pub mod feedback;
pub mod profile;
pub mod progression;
pub mod session;
pub mod store;

pub use catalog::Catalog;
pub use profile::PlayerProfile;
pub use session::ProfileSession;
pub use store::{JsonFileStore, ProfileStore, StoreError};
