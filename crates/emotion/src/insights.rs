use serde::Serialize;
use tracing::debug;

use crate::analyzer::{analyze_emotion, EmotionAnalysis};
use crate::intent::{analyze_intent, IntentAnalysis};
use crate::strategy::{
    conversation_flow, response_strategy, response_type, ResponseStrategy, ResponseType,
};

pub const URGENCY_KEYWORDS: &[&str] = &["급해", "빨리", "지금", "당장", "오늘"];
pub const POLITENESS_KEYWORDS: &[&str] = &["부탁", "죄송", "실례", "괜찮다면"];

/// Everything the reply side wants to know about one inbound message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationInsights {
    pub emotion: EmotionAnalysis,
    pub intent: IntentAnalysis,
    pub strategy: ResponseStrategy,
    pub urgent: bool,
    pub polite: bool,
    pub recommended_response_type: ResponseType,
    pub conversation_flow: Vec<&'static str>,
}

pub fn generate_insights(message: &str) -> ConversationInsights {
    let emotion = analyze_emotion(message);
    let intent = analyze_intent(message);
    let (mood, kind) = (emotion.primary, intent.primary);

    let insights = ConversationInsights {
        strategy: response_strategy(mood, kind),
        urgent: URGENCY_KEYWORDS.iter().any(|k| message.contains(k)),
        polite: POLITENESS_KEYWORDS.iter().any(|k| message.contains(k)),
        recommended_response_type: response_type(mood, kind),
        conversation_flow: conversation_flow(mood, kind),
        emotion,
        intent,
    };

    debug!(
        mood = %mood,
        intent = ?kind,
        urgent = insights.urgent,
        polite = insights.polite,
        "step: message insights generated"
    );

    insights
}
