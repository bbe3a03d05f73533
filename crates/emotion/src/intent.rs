use serde::Serialize;

/// What the customer is after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Greeting,
    TechnicalInquiry,
    Complaint,
    BeautyConcern,
    BookingIntent,
    PriceInquiry,
    CasualChat,
    General,
}

/// Intent → trigger words, in priority order.
pub const INTENT_KEYWORDS: &[(IntentKind, &[&str])] = &[
    (IntentKind::Greeting, &["안녕", "처음", "반가워", "hello", "hi"]),
    (IntentKind::TechnicalInquiry, &["연동", "시스템", "어떻게", "작동", "기능"]),
    (IntentKind::Complaint, &["불만", "별루", "아쉬워", "문제", "이상해"]),
    (IntentKind::BeautyConcern, &["주름", "피부", "시술", "관리", "뷰티"]),
    (IntentKind::BookingIntent, &["예약", "언제", "시간", "가능", "스케줄"]),
    (IntentKind::PriceInquiry, &["가격", "비용", "얼마", "할인", "프로모션"]),
    (IntentKind::CasualChat, &["질만", "피곤", "오늘", "날씨", "그냥"]),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentAnalysis {
    pub primary: IntentKind,
    pub all: Vec<IntentKind>,
    pub is_beauty_related: bool,
}

pub fn analyze_intent(message: &str) -> IntentAnalysis {
    let lowered = message.to_lowercase();
    let all: Vec<IntentKind> = INTENT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(intent, _)| *intent)
        .collect();

    IntentAnalysis {
        primary: all.first().copied().unwrap_or(IntentKind::General),
        is_beauty_related: all
            .iter()
            .any(|i| matches!(i, IntentKind::BeautyConcern | IntentKind::BookingIntent)),
        all,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_is_beauty_related() {
        let a = analyze_intent("예약 가능한 시간 있나요?");
        assert_eq!(a.primary, IntentKind::BookingIntent);
        assert!(a.is_beauty_related);
    }

    #[test]
    fn multiple_intents_keep_table_order() {
        let a = analyze_intent("이마 주름 시술 가격이 얼마예요?");
        assert_eq!(a.all, vec![IntentKind::BeautyConcern, IntentKind::PriceInquiry]);
    }

    #[test]
    fn english_greeting_is_case_insensitive() {
        assert_eq!(analyze_intent("Hello!").primary, IntentKind::Greeting);
    }

    #[test]
    fn unknown_is_general() {
        let a = analyze_intent("음...");
        assert_eq!(a.primary, IntentKind::General);
        assert!(!a.is_beauty_related);
    }
}
