//! Static lookup tables. Everything keyword- or phrase-driven lives here as data so the tracker
//! and analyzers stay free of hard-coded branching.

use crate::types::{ConversationStyle, InteractionQuality, Mood};

pub const MIN_RAPPORT: u8 = 1;
pub const MAX_RAPPORT: u8 = 10;
pub const INITIAL_RAPPORT: u8 = 5;

/// Rapport at or above which personalization prepends an affirming phrase.
pub const AFFIRMING_RAPPORT: u8 = 7;
/// Rapport at or above which two emoji are appended instead of one.
pub const DOUBLE_EMOJI_RAPPORT: u8 = 6;

pub const MAX_TOPICS: usize = 5;
/// How many of the most recent topics are considered for a callback phrase.
pub const RECENT_TOPIC_WINDOW: usize = 3;

/// Generic honorific; also the placeholder replaced in base replies.
pub const DEFAULT_SALUTATION: &str = "고객님";
pub const HONORIFIC_PARTICLE: &str = "님";
pub const FAMILIAR_PARTICLE: &str = "씨";

/// (current mood, target on positive, target on negative)
pub const MOOD_TRANSITIONS: &[(Mood, Mood, Mood)] = &[
    (Mood::Tired, Mood::Relaxed, Mood::Frustrated),
    (Mood::Curious, Mood::Satisfied, Mood::Confused),
    (Mood::Dissatisfied, Mood::Neutral, Mood::Frustrated),
    (Mood::Worried, Mood::Relieved, Mood::Anxious),
    (Mood::Happy, Mood::Delighted, Mood::Disappointed),
];

/// Configured transition for `(current, quality)`, if any.
pub fn mood_transition(current: Mood, quality: InteractionQuality) -> Option<Mood> {
    MOOD_TRANSITIONS
        .iter()
        .find(|(from, _, _)| *from == current)
        .map(|(_, positive, negative)| match quality {
            InteractionQuality::Positive => *positive,
            InteractionQuality::Negative => *negative,
        })
}

/// Topic label → keywords. Subject nouns only; affective words belong to the emotion table.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("피부관리", &["피부", "관리", "케어", "스킨"]),
    ("주름", &["주름", "라인", "노화"]),
    ("시술", &["시술", "치료", "트리트먼트"]),
    ("예약", &["예약", "스케줄", "시간"]),
    ("가격", &["가격", "비용", "할인", "프로모션"]),
    ("부작용", &["부작용", "위험", "안전"]),
    ("효과", &["효과", "결과", "변화"]),
];

/// Emoji per mood; personalization uses a prefix of the list.
pub const MOOD_EMOJI: &[(Mood, &[&str])] = &[
    (Mood::Neutral, &["😊", "✨"]),
    (Mood::Tired, &["😅", "💤", "🌙"]),
    (Mood::Curious, &["🤔", "💡", "🔍"]),
    (Mood::Dissatisfied, &["😔", "💙", "🙏"]),
    (Mood::Worried, &["😌", "💕", "🤗"]),
    (Mood::Happy, &["😊", "✨", "🌟", "💕"]),
    (Mood::Relaxed, &["😊", "🌸", "☺️"]),
    (Mood::Frustrated, &["🙏", "💙"]),
    (Mood::Satisfied, &["😊", "👍"]),
    (Mood::Confused, &["🤔", "💡"]),
    (Mood::Relieved, &["😌", "🌿"]),
    (Mood::Anxious, &["🤗", "💕"]),
    (Mood::Delighted, &["🎉", "✨", "😄"]),
    (Mood::Disappointed, &["😔", "🙏"]),
];

/// Emoji set for `mood`; moods missing from the table use the neutral set.
pub fn mood_emoji(mood: Mood) -> &'static [&'static str] {
    MOOD_EMOJI
        .iter()
        .find(|(m, _)| *m == mood)
        .or_else(|| MOOD_EMOJI.iter().find(|(m, _)| *m == Mood::Neutral))
        .map(|(_, set)| *set)
        .unwrap_or(&["😊"])
}

pub const AFFIRMING_PHRASES: &[&str] = &[
    "항상 좋은 질문 해주시네요! ",
    "역시 센스가 좋으시네요! ",
    "정말 꼼꼼하게 생각해주시는군요! ",
];

pub const TOPIC_CALLBACK_PREFIX: &str = "아, 전에 말씀하신 ";
pub const TOPIC_CALLBACK_SUFFIX: &str = " 관련해서 더 궁금한 점이 있으신가요? ";

/// Apology / politeness markers in a message ⇒ formal style.
pub const FORMAL_STYLE_MARKERS: &[&str] = &["죄송", "부탁", "실례"];
/// Laughter / filler markers in a message ⇒ casual style.
pub const CASUAL_STYLE_MARKERS: &[&str] = &["ㅋㅋ", "ㅎㅎ", "그냥", "막"];

/// Explicit requests for polite speech.
pub const FORMALITY_REQUEST_MARKERS: &[&str] = &["존댓말", "정중", "공손"];
/// Explicit requests to speak casually.
pub const CASUAL_REQUEST_MARKERS: &[&str] = &["편하게", "자연스럽게", "친근"];

pub const DEFAULT_TONE: &str = "따뜻하고 전문적인 톤";

pub const TONE_ADJUSTMENTS: &[(Mood, &str)] = &[
    (Mood::Tired, "더욱 부드럽고 위로하는 톤"),
    (Mood::Frustrated, "차분하고 해결 중심적인 톤"),
    (Mood::Happy, "밝고 에너지 넘치는 톤"),
    (Mood::Worried, "안심시키고 신뢰감 주는 톤"),
    (Mood::Curious, "친근하고 설명적인 톤"),
    (Mood::Relaxed, "편안하고 자연스러운 톤"),
];

pub fn tone_adjustment(mood: Mood) -> &'static str {
    TONE_ADJUSTMENTS
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|(_, tone)| *tone)
        .unwrap_or(DEFAULT_TONE)
}

/// Greeting opener per style. `{salutation}` is replaced for the formal variant.
pub const GREETINGS: &[(ConversationStyle, &str)] = &[
    (ConversationStyle::Formal, "안녕하세요, {salutation}! 😊"),
    (ConversationStyle::Friendly, "안녕하세요! 😊 오늘도 좋은 하루 보내고 계신가요?"),
    (ConversationStyle::Casual, "안녕하세요! 😄 어떻게 지내세요?"),
];

pub const GREETING_LOYAL_SUFFIX: &str = " 항상 저희를 찾아주셔서 감사해요! ✨";
pub const GREETING_RETURNING_SUFFIX: &str = " 다시 만나뵙게 되어 반가워요!";
