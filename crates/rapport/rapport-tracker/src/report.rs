//! Read-only views derived from a context: response modifier and end-of-consultation report.

use std::fmt;

use rapport_core::{ConversationContext, ConversationStyle, Mood};
use serde::Serialize;

/// Hints for whoever writes the base reply (tone, register, topics to refer back to).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseModifier {
    pub tone_adjustment: String,
    pub formality_level: ConversationStyle,
    pub rapport_bonus: bool,
    pub mood_consideration: Mood,
    pub recent_topics: Vec<String>,
    pub preferred_salutation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationGrade {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ConsultationGrade {
    pub fn from_rapport(rapport_level: u8) -> Self {
        if rapport_level >= 8 {
            ConsultationGrade::Excellent
        } else if rapport_level >= 6 {
            ConsultationGrade::Good
        } else {
            ConsultationGrade::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsultationGrade::Excellent => "🌟 우수 - 고객 만족도 매우 높음",
            ConsultationGrade::Good => "😊 양호 - 긍정적 관계 형성",
            ConsultationGrade::NeedsImprovement => "😐 보통 - 개선 필요",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            ConsultationGrade::Excellent => "추가 서비스 제안 및 VIP 혜택 안내",
            ConsultationGrade::Good => "지속적 관계 유지 및 맞춤 서비스 제공",
            ConsultationGrade::NeedsImprovement => "고객 니즈 재파악 및 서비스 개선",
        }
    }
}

/// Summary of a customer's session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsultationReport {
    pub customer_id: String,
    pub total_interactions: u64,
    pub final_mood: Mood,
    pub rapport_level: u8,
    pub conversation_style: ConversationStyle,
    pub topics_mentioned: Vec<String>,
    pub grade: ConsultationGrade,
}

impl ConsultationReport {
    pub fn from_context(ctx: &ConversationContext) -> Self {
        Self {
            customer_id: ctx.customer_id().to_string(),
            total_interactions: ctx.total_interactions(),
            final_mood: ctx.current_mood,
            rapport_level: ctx.rapport_level(),
            conversation_style: ctx.conversation_style,
            topics_mentioned: ctx.topics_mentioned().to_vec(),
            grade: ConsultationGrade::from_rapport(ctx.rapport_level()),
        }
    }
}

impl fmt::Display for ConsultationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📋 상담 결과 리포트 ({})", self.customer_id)?;
        writeln!(f, "   총 상호작용: {}회", self.total_interactions)?;
        writeln!(f, "   최종 기분: {}", self.final_mood)?;
        writeln!(f, "   라포 레벨: {}/10", self.rapport_level)?;
        writeln!(f, "   대화 스타일: {}", self.conversation_style)?;
        writeln!(f, "   언급된 주제: {}", self.topics_mentioned.join(", "))?;
        writeln!(f, "📈 상담 성과: {}", self.grade.label())?;
        write!(f, "💡 추천 사항: {}", self.grade.recommendation())
    }
}
