//! Read path: asks a [`ReplySource`] for a base reply and personalizes it for the customer.

use std::sync::Arc;

use async_trait::async_trait;
use cbot_core::{Handler, HandlerResponse, Message, Result};
use emotion::generate_insights;
use rapport_tracker::SharedTracker;
use tracing::{info, instrument};

use crate::reply_source::ReplySource;

pub struct PersonalizedReplyHandler {
    source: Arc<dyn ReplySource>,
    tracker: SharedTracker,
}

impl PersonalizedReplyHandler {
    pub fn new(source: Arc<dyn ReplySource>, tracker: SharedTracker) -> Self {
        Self { source, tracker }
    }
}

#[async_trait]
impl Handler for PersonalizedReplyHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let customer_id = message.customer_id();
        let insights = generate_insights(&message.content);
        let mood = insights.emotion.primary;

        let base = self.source.base_reply(message, &insights).await?;
        let reply = self.tracker.personalize(customer_id, &base, mood).await;

        info!(
            customer_id = %customer_id,
            mood = %mood,
            intent = ?insights.intent.primary,
            base_len = base.chars().count(),
            reply_len = reply.chars().count(),
            "step: PersonalizedReplyHandler reply ready"
        );

        Ok(HandlerResponse::Reply(reply))
    }
}
