//! How to answer, given the customer's mood and intent.

use rapport_core::Mood;
use serde::Serialize;

use crate::intent::IntentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseStrategy {
    pub approach: &'static str,
    pub tone: &'static str,
    pub suggestion: &'static str,
}

const DEFAULT_STRATEGY: ResponseStrategy = ResponseStrategy {
    approach: "friendly_adaptive",
    tone: "warm_professional",
    suggestion: "고객 상황에 맞춰 자연스럽게 대응",
};

const STRATEGIES: &[(Mood, IntentKind, ResponseStrategy)] = &[
    (
        Mood::Tired,
        IntentKind::CasualChat,
        ResponseStrategy {
            approach: "empathy_first",
            tone: "warm_caring",
            suggestion: "힐링 서비스 자연스럽게 제안",
        },
    ),
    (
        Mood::Curious,
        IntentKind::TechnicalInquiry,
        ResponseStrategy {
            approach: "informative_friendly",
            tone: "helpful_professional",
            suggestion: "기술 설명 후 서비스 소개",
        },
    ),
    (
        Mood::Dissatisfied,
        IntentKind::Complaint,
        ResponseStrategy {
            approach: "apologetic_solution",
            tone: "understanding_proactive",
            suggestion: "문제 해결 후 개선된 서비스 제안",
        },
    ),
    (
        Mood::Happy,
        IntentKind::BeautyConcern,
        ResponseStrategy {
            approach: "enthusiastic_supportive",
            tone: "positive_encouraging",
            suggestion: "맞춤 시술 적극 추천",
        },
    ),
    (
        Mood::Worried,
        IntentKind::BeautyConcern,
        ResponseStrategy {
            approach: "reassuring_detailed",
            tone: "calm_professional",
            suggestion: "안전성 설명 후 단계별 안내",
        },
    ),
];

pub fn response_strategy(mood: Mood, intent: IntentKind) -> ResponseStrategy {
    STRATEGIES
        .iter()
        .find(|(m, i, _)| *m == mood && *i == intent)
        .map(|(_, _, strategy)| *strategy)
        .unwrap_or(DEFAULT_STRATEGY)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    EmpatheticTransition,
    InformativeEngaging,
    ProblemSolving,
    ProfessionalConsultation,
    ServiceFacilitation,
    AdaptiveFriendly,
}

pub fn response_type(mood: Mood, intent: IntentKind) -> ResponseType {
    match (mood, intent) {
        (Mood::Tired, IntentKind::CasualChat) => ResponseType::EmpatheticTransition,
        (Mood::Curious, IntentKind::TechnicalInquiry) => ResponseType::InformativeEngaging,
        (Mood::Dissatisfied, _) => ResponseType::ProblemSolving,
        (_, IntentKind::BeautyConcern) => ResponseType::ProfessionalConsultation,
        (_, IntentKind::BookingIntent) => ResponseType::ServiceFacilitation,
        _ => ResponseType::AdaptiveFriendly,
    }
}

const DEFAULT_FLOW: &[&str] = &["친근한 인사", "상황 파악", "적절한 서비스 제안", "후속 지원"];

const FLOWS: &[(Mood, IntentKind, &[&str])] = &[
    (
        Mood::Tired,
        IntentKind::CasualChat,
        &["공감 표현", "위로 메시지", "힐링 서비스 자연스럽게 제안", "구체적 혜택 안내"],
    ),
    (
        Mood::Curious,
        IntentKind::TechnicalInquiry,
        &["질문 확인", "친근한 설명", "서비스 연결", "추가 도움 제안"],
    ),
    (
        Mood::Dissatisfied,
        IntentKind::Complaint,
        &["사과 및 공감", "문제 파악", "해결책 제시", "개선된 경험 제안"],
    ),
];

/// Suggested sequence of conversational steps.
pub fn conversation_flow(mood: Mood, intent: IntentKind) -> Vec<&'static str> {
    FLOWS
        .iter()
        .find(|(m, i, _)| *m == mood && *i == intent)
        .map(|(_, _, flow)| *flow)
        .unwrap_or(DEFAULT_FLOW)
        .to_vec()
}
