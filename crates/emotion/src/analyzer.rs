use rapport_core::Mood;
use serde::Serialize;

/// Mood → trigger words, in priority order (the first match is the primary mood).
pub const EMOTION_KEYWORDS: &[(Mood, &[&str])] = &[
    (Mood::Tired, &["질만", "피곤", "지쳐", "힘들어", "스트레스"]),
    (Mood::Curious, &["연동", "어떻게", "시스템", "방법"]),
    (Mood::Dissatisfied, &["별루", "아쉬워", "기계적", "로봇"]),
    (Mood::Happy, &["좋아", "만족", "감사", "최고"]),
    (Mood::Worried, &["걱정", "괜찮나", "안전한가"]),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionAnalysis {
    pub primary: Mood,
    pub all: Vec<Mood>,
    /// Share of emotion categories that matched, 0.0 to 1.0
    pub confidence: f32,
}

/// Detects moods by keyword membership. No match yields `Neutral` with zero confidence.
pub fn analyze_emotion(message: &str) -> EmotionAnalysis {
    let all: Vec<Mood> = EMOTION_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| message.contains(k)))
        .map(|(mood, _)| *mood)
        .collect();

    EmotionAnalysis {
        primary: all.first().copied().unwrap_or(Mood::Neutral),
        confidence: all.len() as f32 / EMOTION_KEYWORDS.len() as f32,
        all,
    }
}
