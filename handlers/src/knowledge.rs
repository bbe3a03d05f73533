//! Clinic knowledge search.
//!
//! Documents are ranked by how many treatment keywords they share with the query; the best match
//! is folded into the reply produced by a wrapped [`ReplySource`].

use std::collections::BTreeSet;

use async_trait::async_trait;
use cbot_core::{Message, Result};
use emotion::ConversationInsights;
use tracing::{debug, info};

use crate::reply_source::ReplySource;

/// Vocabulary shared by queries and documents. Matching is substring membership.
pub const TREATMENT_KEYWORDS: &[&str] = &[
    "보톡스", "필러", "레이저", "피코", "IPL", "하이드라", "아쿠아", "이마", "눈가", "볼", "턱", "주름",
    "색소", "모공", "여드름", "20대", "30대", "40대", "50대", "지성", "건성", "복합성", "민감성",
];

/// Number of documents returned by [`search_knowledge`] in the reply path.
pub const KNOWLEDGE_TOP_K: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeDoc {
    pub title: &'static str,
    pub points: &'static [&'static str],
}

impl KnowledgeDoc {
    /// Treatment keywords found in the title or any point.
    fn keywords(&self) -> BTreeSet<&'static str> {
        TREATMENT_KEYWORDS
            .iter()
            .copied()
            .filter(|k| self.title.contains(k) || self.points.iter().any(|p| p.contains(k)))
            .collect()
    }
}

pub const KNOWLEDGE_BASE: &[KnowledgeDoc] = &[
    KnowledgeDoc {
        title: "보톡스 시술 가이드",
        points: &[
            "이마 주름: 15-20 유닛, 15만원",
            "눈가 주름: 12-16 유닛, 20만원",
            "사각근: 40-60 유닛, 25만원",
            "시술 후 4시간 눕지 말기",
            "효과는 3-5일 후부터 나타남",
            "지속기간 4-6개월",
        ],
    },
    KnowledgeDoc {
        title: "필러 시술 가이드",
        points: &[
            "히알루론산 필러가 가장 안전",
            "볼: 1-2cc, 40만원",
            "법령선: 0.5-1cc, 30만원",
            "입술: 0.5cc, 35만원",
            "시술 후 2-3일 붓기 정상",
            "마사지 금지, 얼음찜질 권장",
        ],
    },
    KnowledgeDoc {
        title: "피부 타입별 맞춤 관리",
        points: &[
            "지성 피부: IPL + 피코레이저 조합",
            "건성 피부: 하이드라페이셜 + 수분케어",
            "민감성 피부: 아쿠아필 + 진정케어",
            "복합성 피부: 부위별 차별 관리",
        ],
    },
    KnowledgeDoc {
        title: "연령대별 추천 시술",
        points: &[
            "20대: 스킨케어 위주, 예방 보톡스",
            "30대: 보톡스 + 필러 시작",
            "40대: 리프팅 + 레이저 조합",
            "50대 이상: 종합적 안티에이징",
        ],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeMatch {
    pub doc: &'static KnowledgeDoc,
    /// Position in [`KNOWLEDGE_BASE`]
    pub index: usize,
    /// Shared keywords divided by the query's keyword count
    pub similarity: f32,
}

/// Top `top_k` documents sharing at least one keyword with `query`, best first. Ties keep table
/// order.
pub fn search_knowledge(query: &str, top_k: usize) -> Vec<KnowledgeMatch> {
    let query_keywords: BTreeSet<&str> = TREATMENT_KEYWORDS
        .iter()
        .copied()
        .filter(|k| query.contains(k))
        .collect();

    let mut scored: Vec<(usize, usize)> = KNOWLEDGE_BASE
        .iter()
        .enumerate()
        .map(|(i, doc)| (i, doc.keywords().intersection(&query_keywords).count()))
        .filter(|(_, score)| *score > 0)
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let denominator = query_keywords.len().max(1) as f32;
    scored
        .into_iter()
        .take(top_k)
        .map(|(index, score)| KnowledgeMatch {
            doc: &KNOWLEDGE_BASE[index],
            index,
            similarity: score as f32 / denominator,
        })
        .collect()
}

/// Wraps another source and appends the best-matching clinic document to its reply.
pub struct KnowledgeReplySource<S> {
    inner: S,
}

impl<S: ReplySource> KnowledgeReplySource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub(crate) fn fold(base: &str, best: &KnowledgeMatch) -> String {
        format!("{base}\n📚 {}: {}", best.doc.title, best.doc.points.join(" / "))
    }
}

#[async_trait]
impl<S: ReplySource> ReplySource for KnowledgeReplySource<S> {
    async fn base_reply(
        &self,
        message: &Message,
        insights: &ConversationInsights,
    ) -> Result<String> {
        let base = self.inner.base_reply(message, insights).await?;
        let matches = search_knowledge(&message.content, KNOWLEDGE_TOP_K);

        let Some(best) = matches.first() else {
            debug!(customer_id = %message.customer_id(), "step: no knowledge match");
            return Ok(base);
        };

        info!(
            customer_id = %message.customer_id(),
            document = %best.doc.title,
            similarity = best.similarity,
            matches = matches.len(),
            "step: knowledge folded into reply"
        );
        Ok(Self::fold(&base, best))
    }
}
