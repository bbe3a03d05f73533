//! # Emotion
//!
//! Keyword-based reading of a customer message: which [`Mood`](rapport_core::Mood) it expresses,
//! what the customer wants ([`IntentKind`]), and how to answer ([`ResponseStrategy`],
//! [`ResponseType`], conversation flow). [`generate_insights`] bundles all of it.
//!
//! Affective words live in this crate's emotion table; subject nouns live in the topic table of
//! `rapport-core`. The two never share a keyword.

mod analyzer;
mod insights;
mod intent;
mod strategy;

pub use analyzer::{analyze_emotion, EmotionAnalysis, EMOTION_KEYWORDS};
pub use insights::{generate_insights, ConversationInsights, POLITENESS_KEYWORDS, URGENCY_KEYWORDS};
pub use intent::{analyze_intent, IntentAnalysis, IntentKind, INTENT_KEYWORDS};
pub use strategy::{conversation_flow, response_strategy, response_type, ResponseStrategy, ResponseType};
