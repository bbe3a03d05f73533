//! Where base replies come from. A language model would sit behind [`ReplySource`]; the
//! bundled [`TemplateReplySource`] answers from fixed clinic templates.

use async_trait::async_trait;
use cbot_core::{Message, Result};
use emotion::{ConversationInsights, IntentKind, ResponseType};
use rapport_core::Mood;

/// Produces an unpersonalized reply. Replies may use the generic `고객님` placeholder; the
/// tracker swaps in the customer's learned salutation.
#[async_trait]
pub trait ReplySource: Send + Sync {
    async fn base_reply(&self, message: &Message, insights: &ConversationInsights)
        -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateReplySource;

impl TemplateReplySource {
    pub fn new() -> Self {
        Self
    }

    pub(crate) fn template_for(insights: &ConversationInsights) -> &'static str {
        match (insights.intent.primary, insights.recommended_response_type) {
            (IntentKind::Greeting, _) => {
                "안녕하세요 고객님! 저희 클리닉을 찾아주셔서 감사해요. 무엇을 도와드릴까요?"
            }
            (_, ResponseType::EmpatheticTransition) => {
                "많이 지치셨나 봐요! 저희 클리닉에서 힐링 시간 가져보시는 건 어떨까요?"
            }
            (_, ResponseType::InformativeEngaging) => {
                "네, 고객님! 상담 창구는 예약과 시술 정보에 바로 연결되어 있어요. 궁금한 점을 물어봐 주세요."
            }
            (_, ResponseType::ProblemSolving) => {
                "불편을 드려 죄송해요, 고객님. 말씀해주신 부분을 바로 확인해서 더 나은 상담으로 도와드릴게요."
            }
            (_, ResponseType::ProfessionalConsultation) if insights.emotion.primary == Mood::Worried => {
                "걱정되시는 마음 충분히 이해해요. 시술 전 전문의 상담으로 안전성을 꼼꼼히 안내해드릴게요."
            }
            (_, ResponseType::ProfessionalConsultation) => {
                "고객님 고민에 맞는 관리 방법을 전문 상담사와 함께 찾아드릴게요."
            }
            (_, ResponseType::ServiceFacilitation) => {
                "예약 도와드릴게요! 원하시는 날짜와 시간을 알려주시면 바로 확인해드릴게요."
            }
            (IntentKind::PriceInquiry, _) => {
                "지금 진행 중인 프로모션으로 부담 없이 시작하실 수 있어요. 시술별 비용을 안내해드릴게요."
            }
            _ => "말씀 감사해요, 고객님! 조금 더 자세히 알려주시면 꼭 맞는 안내를 드릴게요.",
        }
    }
}

#[async_trait]
impl ReplySource for TemplateReplySource {
    async fn base_reply(
        &self,
        _message: &Message,
        insights: &ConversationInsights,
    ) -> Result<String> {
        Ok(Self::template_for(insights).to_string())
    }
}
