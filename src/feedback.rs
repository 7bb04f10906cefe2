//! Coaching feedback with a canned fallback.
//!
//! The real generator is an external text service the presentation layer
//! wires in. It is decorative: it never touches a profile and must never
//! gate an intent, so any failure degrades to a deterministic canned text
//! picked by topic keywords.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("feedback service unavailable: {0}")]
    Unavailable(String),
}

/// External service producing feedback on a practice submission.
#[async_trait]
pub trait FeedbackGenerator: Send + Sync {
    async fn feedback(&self, topic: &str, submission: &str) -> Result<String, FeedbackError>;
}

/// Deterministic canned text for a topic.
pub fn fallback_feedback(topic: &str) -> &'static str {
    let topic = topic.to_lowercase();
    if topic.contains("breath") {
        "Great start! Your breathing sounded calm. Try making the exhale a \
         little longer than the inhale for an even more relaxing effect."
    } else if topic.contains("introduc") || topic.contains("presentation") {
        "Excellent energy! You smiled and spoke clearly. Next time, try \
         adding a hand gesture to emphasize one of your strengths."
    } else if topic.contains("tongue") || topic.contains("twister") {
        "Well done! The speed increased steadily. I noticed a small \
         hesitation on the last repetition. One more run for a perfect take!"
    } else {
        "Good work completing this mission! Keep practicing to sharpen your \
         skills further. Consistency is the key to success."
    }
}

/// Asks the generator, falling back to canned text on any failure.
pub async fn feedback_or_fallback(
    generator: &dyn FeedbackGenerator,
    topic: &str,
    submission: &str,
) -> String {
    match generator.feedback(topic, submission).await {
        Ok(text) => text,
        Err(e) => {
            log::debug!("feedback service failed, using canned text: {e}");
            fallback_feedback(topic).to_string()
        }
    }
}

/// Generator that always answers with the canned texts. Useful offline
/// and as the default wiring in tests.
pub struct CannedFeedback;

#[async_trait]
impl FeedbackGenerator for CannedFeedback {
    async fn feedback(&self, topic: &str, _submission: &str) -> Result<String, FeedbackError> {
        Ok(fallback_feedback(topic).to_string())
    }
}
