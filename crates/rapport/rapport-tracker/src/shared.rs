//! Cloneable, lock-guarded handle over one [`ConversationTracker`].
//!
//! A single coarse mutex makes each call an atomic read-modify-write, so concurrent messages for
//! the same customer cannot lose updates. Nothing awaits while the lock is held.

use std::sync::Arc;

use rapport_core::{ConversationContext, InteractionQuality, Mood};
use tokio::sync::Mutex;

use crate::report::{ConsultationReport, ResponseModifier};
use crate::tracker::ConversationTracker;

#[derive(Debug, Clone)]
pub struct SharedTracker {
    inner: Arc<Mutex<ConversationTracker>>,
}

impl Default for SharedTracker {
    fn default() -> Self {
        Self::new(ConversationTracker::new())
    }
}

impl SharedTracker {
    pub fn new(tracker: ConversationTracker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Runs `f` with exclusive access; use for multi-step updates that must not interleave.
    pub async fn with<R>(&self, f: impl FnOnce(&mut ConversationTracker) -> R) -> R {
        let mut tracker = self.inner.lock().await;
        f(&mut *tracker)
    }

    /// Copy of the customer's context, created on first use.
    pub async fn get_or_create(&self, customer_id: &str) -> ConversationContext {
        self.with(|t| t.get_or_create(customer_id).clone()).await
    }

    pub async fn context(&self, customer_id: &str) -> Option<ConversationContext> {
        self.with(|t| t.context(customer_id).cloned()).await
    }

    pub async fn record_interaction(&self, customer_id: &str, message: &str) {
        self.with(|t| t.record_interaction(customer_id, message)).await
    }

    pub async fn update_mood(
        &self,
        customer_id: &str,
        inferred_mood: Mood,
        quality: InteractionQuality,
    ) -> Mood {
        self.with(|t| t.update_mood(customer_id, inferred_mood, quality))
            .await
    }

    pub async fn personalize(&self, customer_id: &str, base_response: &str, mood: Mood) -> String {
        self.with(|t| t.personalize(customer_id, base_response, mood))
            .await
    }

    pub async fn infer_salutation(&self, customer_id: &str, customer_text: &str) -> bool {
        self.with(|t| t.infer_salutation(customer_id, customer_text))
            .await
    }

    pub async fn greeting(&self, customer_id: &str) -> String {
        self.with(|t| t.greeting(customer_id)).await
    }

    pub async fn response_modifier(&self, customer_id: &str) -> ResponseModifier {
        self.with(|t| t.response_modifier(customer_id)).await
    }

    pub async fn enhance_response(
        &self,
        customer_id: &str,
        message: &str,
        base_response: &str,
        mood: Mood,
    ) -> String {
        self.with(|t| t.enhance_response(customer_id, message, base_response, mood))
            .await
    }

    pub async fn report(&self, customer_id: &str) -> ConsultationReport {
        self.with(|t| t.report(customer_id)).await
    }

    pub async fn snapshot(&self) -> Vec<ConversationContext> {
        self.with(|t| t.snapshot()).await
    }

    pub async fn restore(&self, contexts: Vec<ConversationContext>) {
        self.with(|t| t.restore(contexts)).await
    }

    pub async fn len(&self) -> usize {
        self.with(|t| t.len()).await
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
