//! The conversation context tracker.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rapport_core::tables::{
    mood_emoji, mood_transition, tone_adjustment, AFFIRMING_PHRASES, AFFIRMING_RAPPORT,
    CASUAL_REQUEST_MARKERS, DEFAULT_SALUTATION, DOUBLE_EMOJI_RAPPORT, FAMILIAR_PARTICLE,
    FORMALITY_REQUEST_MARKERS, GREETINGS, GREETING_LOYAL_SUFFIX, GREETING_RETURNING_SUFFIX,
    HONORIFIC_PARTICLE, RECENT_TOPIC_WINDOW, TOPIC_CALLBACK_PREFIX, TOPIC_CALLBACK_SUFFIX,
};
use rapport_core::{ConversationContext, ConversationStyle, InteractionQuality, Mood};
use tracing::{debug, info};

use crate::cues::{extract_topics, infer_style};
use crate::report::{ConsultationReport, ResponseModifier};

/// Owns every customer's [`ConversationContext`] plus the RNG used for phrase selection.
///
/// All operations are total: unknown customers are created on first touch.
#[derive(Debug)]
pub struct ConversationTracker {
    contexts: HashMap<String, ConversationContext>,
    rng: StdRng,
}

impl Default for ConversationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationTracker {
    /// Creates an empty tracker with an OS-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an empty tracker whose phrase selection is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            contexts: HashMap::new(),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    fn entry<'a>(
        contexts: &'a mut HashMap<String, ConversationContext>,
        customer_id: &str,
    ) -> &'a mut ConversationContext {
        contexts
            .entry(customer_id.to_string())
            .or_insert_with(|| {
                info!(customer_id = %customer_id, "step: conversation context created");
                ConversationContext::new(customer_id)
            })
    }

    /// Returns the customer's context, creating it with defaults on first use.
    pub fn get_or_create(&mut self, customer_id: &str) -> &mut ConversationContext {
        Self::entry(&mut self.contexts, customer_id)
    }

    /// Looks up a context without creating one.
    pub fn context(&self, customer_id: &str) -> Option<&ConversationContext> {
        self.contexts.get(customer_id)
    }

    /// Adds a topic label (deduplicated, capped to the most recent five).
    pub fn add_topic(&mut self, customer_id: &str, topic: &str) {
        let ctx = self.get_or_create(customer_id);
        if ctx.push_topic(topic) {
            debug!(
                customer_id = %customer_id,
                topic = %topic,
                topic_count = ctx.topics_mentioned().len(),
                "step: topic added"
            );
        }
    }

    /// Write path for an inbound message: counter, last message, style, topics.
    pub fn record_interaction(&mut self, customer_id: &str, message: &str) {
        let ctx = self.get_or_create(customer_id);
        ctx.note_message(message);
        ctx.conversation_style = infer_style(message);

        for topic in extract_topics(message) {
            ctx.push_topic(topic);
        }

        debug!(
            customer_id = %customer_id,
            total_interactions = ctx.total_interactions(),
            style = %ctx.conversation_style,
            topics = ?ctx.topics_mentioned(),
            "step: interaction recorded"
        );
    }

    /// Moves the mood along the transition table when the current mood has an entry for
    /// `quality`, otherwise adopts `inferred_mood`. Rapport moves one step either way.
    pub fn update_mood(
        &mut self,
        customer_id: &str,
        inferred_mood: Mood,
        quality: InteractionQuality,
    ) -> Mood {
        let ctx = self.get_or_create(customer_id);
        let previous = ctx.current_mood;

        ctx.current_mood = mood_transition(previous, quality).unwrap_or(inferred_mood);
        ctx.adjust_rapport(quality);

        debug!(
            customer_id = %customer_id,
            previous = %previous,
            inferred = %inferred_mood,
            quality = ?quality,
            mood = %ctx.current_mood,
            rapport_level = ctx.rapport_level(),
            "step: mood updated"
        );

        ctx.current_mood
    }

    /// Rewrites a base reply for this customer: learned salutation, topic callback, affirming
    /// prefix at high rapport, and trailing emoji for `mood`.
    pub fn personalize(&mut self, customer_id: &str, base_response: &str, mood: Mood) -> String {
        let ctx = Self::entry(&mut self.contexts, customer_id);

        let mut response = base_response.replace(DEFAULT_SALUTATION, &ctx.preferred_salutation);

        let callback_topic = ctx
            .recent_topics(RECENT_TOPIC_WINDOW)
            .iter()
            .rev()
            .find(|topic| ctx.last_message.contains(topic.as_str()));
        if let Some(topic) = callback_topic {
            response = format!("{TOPIC_CALLBACK_PREFIX}{topic}{TOPIC_CALLBACK_SUFFIX}{response}");
        }

        let rapport = ctx.rapport_level();
        if rapport >= AFFIRMING_RAPPORT {
            if let Some(phrase) = AFFIRMING_PHRASES.choose(&mut self.rng) {
                response = format!("{phrase}{response}");
            }
        }

        let emoji_count = if rapport >= DOUBLE_EMOJI_RAPPORT { 2 } else { 1 };
        let emoji: String = mood_emoji(mood).iter().take(emoji_count).copied().collect();

        debug!(
            customer_id = %customer_id,
            mood = %mood,
            rapport_level = rapport,
            topic_callback = callback_topic.is_some(),
            "step: response personalized"
        );

        format!("{response} {emoji}")
    }

    /// Learns salutation and style from how the customer talks. Returns whether anything changed.
    pub fn infer_salutation(&mut self, customer_id: &str, customer_text: &str) -> bool {
        let learned = if customer_text.contains(HONORIFIC_PARTICLE)
            && !customer_text.contains(DEFAULT_SALUTATION)
        {
            Some((HONORIFIC_PARTICLE, ConversationStyle::Friendly))
        } else if FORMALITY_REQUEST_MARKERS
            .iter()
            .any(|m| customer_text.contains(m))
        {
            Some((DEFAULT_SALUTATION, ConversationStyle::Formal))
        } else if CASUAL_REQUEST_MARKERS.iter().any(|m| customer_text.contains(m)) {
            let salutation = if customer_text.contains(FAMILIAR_PARTICLE) {
                FAMILIAR_PARTICLE
            } else {
                HONORIFIC_PARTICLE
            };
            Some((salutation, ConversationStyle::Casual))
        } else {
            None
        };

        let ctx = self.get_or_create(customer_id);
        match learned {
            Some((salutation, style)) => {
                ctx.preferred_salutation = salutation.to_string();
                ctx.conversation_style = style;
                debug!(
                    customer_id = %customer_id,
                    salutation = %salutation,
                    style = %style,
                    "step: salutation learned"
                );
                true
            }
            None => false,
        }
    }

    /// Greeting in the customer's style, warmer as rapport grows.
    pub fn greeting(&mut self, customer_id: &str) -> String {
        let ctx = self.get_or_create(customer_id);

        let template = GREETINGS
            .iter()
            .find(|(style, _)| *style == ctx.conversation_style)
            .or_else(|| {
                GREETINGS
                    .iter()
                    .find(|(style, _)| *style == ConversationStyle::Friendly)
            })
            .map(|(_, template)| *template)
            .unwrap_or("안녕하세요!");
        let mut greeting = template.replace("{salutation}", &ctx.preferred_salutation);

        let rapport = ctx.rapport_level();
        if rapport >= 8 {
            greeting.push_str(GREETING_LOYAL_SUFFIX);
        } else if rapport >= 6 {
            greeting.push_str(GREETING_RETURNING_SUFFIX);
        }
        greeting
    }

    pub fn response_modifier(&mut self, customer_id: &str) -> ResponseModifier {
        let ctx = self.get_or_create(customer_id);
        ResponseModifier {
            tone_adjustment: tone_adjustment(ctx.current_mood).to_string(),
            formality_level: ctx.conversation_style,
            rapport_bonus: ctx.rapport_level() >= AFFIRMING_RAPPORT,
            mood_consideration: ctx.current_mood,
            recent_topics: ctx.recent_topics(RECENT_TOPIC_WINDOW).to_vec(),
            preferred_salutation: ctx.preferred_salutation.clone(),
        }
    }

    /// Records the inbound message, then personalizes the base reply against the updated context.
    pub fn enhance_response(
        &mut self,
        customer_id: &str,
        message: &str,
        base_response: &str,
        mood: Mood,
    ) -> String {
        self.record_interaction(customer_id, message);
        self.personalize(customer_id, base_response, mood)
    }

    pub fn report(&mut self, customer_id: &str) -> ConsultationReport {
        ConsultationReport::from_context(self.get_or_create(customer_id))
    }

    /// All contexts, sorted by customer id.
    pub fn snapshot(&self) -> Vec<ConversationContext> {
        let mut all: Vec<ConversationContext> = self.contexts.values().cloned().collect();
        all.sort_by(|a, b| a.customer_id().cmp(b.customer_id()));
        all
    }

    /// Loads contexts (replacing any with the same customer id), repairing invariants.
    pub fn restore(&mut self, contexts: Vec<ConversationContext>) {
        let count = contexts.len();
        for mut ctx in contexts {
            ctx.normalize();
            self.contexts.insert(ctx.customer_id().to_string(), ctx);
        }
        info!(restored = count, total = self.contexts.len(), "step: contexts restored");
    }
}
