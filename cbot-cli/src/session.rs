//! Session wiring: tracker, handler chain, and the turn loop shared by `chat` and `demo`.

use std::sync::Arc;

use anyhow::Result;
use cbot_core::{Customer, HandlerResponse, Message};
use handler_chain::HandlerChain;
use handlers::{
    ContextHandler, KnowledgeReplySource, LoggingHandler, PersonalizedReplyHandler,
    TemplateReplySource,
};
use rapport_tracker::{ConsultationReport, ConversationTracker, SharedTracker};
use tracing::info;

use crate::config::AppConfig;
use crate::snapshot::{load_snapshot, save_snapshot};

/// Scripted consultation used by `cbot demo`.
pub const DEMO_SCRIPT: &[&str] = &[
    "안녕하세요, 처음 상담 받아봐요",
    "아우 질만 들었네",
    "피부 관리는 어떤 게 좋을까요?",
    "이마 주름 시술은 부작용이 걱정돼요",
    "가격이랑 할인 프로모션도 궁금해요",
    "좋아요, 다음 주 예약 부탁드려요",
];

/// Tracker seeded per config, restored from the snapshot when one is configured.
pub fn build_tracker(config: &AppConfig) -> Result<SharedTracker> {
    let mut tracker = match config.rng_seed() {
        Some(seed) => ConversationTracker::with_seed(seed),
        None => ConversationTracker::new(),
    };
    if let Some(path) = config.snapshot_path() {
        tracker.restore(load_snapshot(path)?);
    }
    Ok(SharedTracker::new(tracker))
}

/// Logging → Context → PersonalizedReply (templates plus clinic knowledge), all sharing `tracker`.
pub fn build_chain(tracker: &SharedTracker) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(ContextHandler::new(tracker.clone())))
        .add_handler(Arc::new(PersonalizedReplyHandler::new(
            Arc::new(KnowledgeReplySource::new(TemplateReplySource::new())),
            tracker.clone(),
        )))
}

/// Sends one customer message through the chain; returns the reply text, if any.
pub async fn run_turn(chain: &HandlerChain, customer_id: &str, text: &str) -> Result<Option<String>> {
    let message = Message::incoming(Customer::new(customer_id), text);
    match chain.handle(&message).await? {
        HandlerResponse::Reply(reply) => Ok(Some(reply)),
        _ => Ok(None),
    }
}

/// One exchange of the scripted demo.
#[derive(Debug, Clone)]
pub struct Turn {
    pub customer: String,
    pub assistant: Option<String>,
}

/// Plays [`DEMO_SCRIPT`] for `customer_id` and returns the transcript and final report.
pub async fn run_demo(
    chain: &HandlerChain,
    tracker: &SharedTracker,
    customer_id: &str,
) -> Result<(Vec<Turn>, ConsultationReport)> {
    let mut transcript = Vec::with_capacity(DEMO_SCRIPT.len());
    for text in DEMO_SCRIPT {
        let assistant = run_turn(chain, customer_id, text).await?;
        transcript.push(Turn {
            customer: text.to_string(),
            assistant,
        });
    }

    let report = tracker.report(customer_id).await;
    info!(
        customer_id = %customer_id,
        turns = transcript.len(),
        rapport_level = report.rapport_level,
        "step: demo finished"
    );
    Ok((transcript, report))
}

/// Saves the tracker to the configured snapshot path; no-op without one.
pub async fn persist(config: &AppConfig, tracker: &SharedTracker) -> Result<()> {
    if let Some(path) = config.snapshot_path() {
        save_snapshot(path, &tracker.snapshot().await)?;
    }
    Ok(())
}
