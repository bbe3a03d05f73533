//! Write path of the conversation context: before() records the inbound message and learns the
//! customer's salutation; after() moves mood and rapport depending on whether a reply went out.

use async_trait::async_trait;
use cbot_core::{Handler, HandlerError, HandlerResponse, Message, Result};
use emotion::analyze_emotion;
use rapport_core::InteractionQuality;
use rapport_tracker::SharedTracker;
use tracing::{info, instrument};

pub struct ContextHandler {
    pub(crate) tracker: SharedTracker,
}

impl ContextHandler {
    pub fn new(tracker: SharedTracker) -> Self {
        Self { tracker }
    }

    /// A reply counts as a positive interaction; anything else as negative.
    pub(crate) fn quality_of(response: &HandlerResponse) -> InteractionQuality {
        match response {
            HandlerResponse::Reply(_) => InteractionQuality::Positive,
            _ => InteractionQuality::Negative,
        }
    }
}

#[async_trait]
impl Handler for ContextHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        if message.content.trim().is_empty() {
            return Err(HandlerError::EmptyContent.into());
        }

        let customer_id = message.customer_id();
        let learned = self
            .tracker
            .with(|t| {
                t.record_interaction(customer_id, &message.content);
                t.infer_salutation(customer_id, &message.content)
            })
            .await;

        info!(
            customer_id = %customer_id,
            salutation_learned = learned,
            "step: ContextHandler before done, interaction recorded"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let customer_id = message.customer_id();
        let inferred = analyze_emotion(&message.content).primary;
        let quality = Self::quality_of(response);

        let mood = self
            .tracker
            .update_mood(customer_id, inferred, quality)
            .await;

        info!(
            customer_id = %customer_id,
            inferred = %inferred,
            quality = ?quality,
            mood = %mood,
            "step: ContextHandler after done, mood updated"
        );
        Ok(())
    }
}
