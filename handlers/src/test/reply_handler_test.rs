//! Unit tests for TemplateReplySource and PersonalizedReplyHandler, plus the full
//! Logging → Context → PersonalizedReply chain.

use std::sync::Arc;

use async_trait::async_trait;
use cbot_core::{CbotError, Customer, Handler, HandlerError, HandlerResponse, Message, Result};
use emotion::{generate_insights, ConversationInsights};
use handler_chain::HandlerChain;
use rapport_core::Mood;
use rapport_tracker::{ConversationTracker, SharedTracker};

use crate::context_handler::ContextHandler;
use crate::logging::LoggingHandler;
use crate::reply_handler::PersonalizedReplyHandler;
use crate::reply_source::{ReplySource, TemplateReplySource};

fn message(customer_id: &str, content: &str) -> Message {
    Message::incoming(Customer::new(customer_id), content)
}

fn tracker() -> SharedTracker {
    SharedTracker::new(ConversationTracker::with_seed(42))
}

struct FixedSource(&'static str);

#[async_trait]
impl ReplySource for FixedSource {
    async fn base_reply(&self, _: &Message, _: &ConversationInsights) -> Result<String> {
        Ok(self.0.to_string())
    }
}

struct FailingSource;

#[async_trait]
impl ReplySource for FailingSource {
    async fn base_reply(&self, _: &Message, _: &ConversationInsights) -> Result<String> {
        Err(HandlerError::Reply("upstream unavailable".into()).into())
    }
}

fn full_chain(tracker: &SharedTracker) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(ContextHandler::new(tracker.clone())))
        .add_handler(Arc::new(PersonalizedReplyHandler::new(
            Arc::new(TemplateReplySource::new()),
            tracker.clone(),
        )))
}

/// **Test: templates follow intent and recommended response type.**
#[test]
fn test_template_selection() {
    let tired = TemplateReplySource::template_for(&generate_insights("아우 질만 들었네"));
    assert!(tired.contains("힐링"));

    let worried = TemplateReplySource::template_for(&generate_insights("시술 부작용이 걱정돼요"));
    assert!(worried.contains("안전성"));

    let price = TemplateReplySource::template_for(&generate_insights("가격이 얼마예요?"));
    assert!(price.contains("프로모션"));

    let greeting = TemplateReplySource::template_for(&generate_insights("안녕하세요"));
    assert!(greeting.contains("고객님"));
}

/// **Test: the base reply's placeholder is replaced and a mood emoji is appended.**
#[tokio::test]
async fn test_reply_is_personalized() {
    let tracker = tracker();
    tracker.infer_salutation("c1", "민지님으로 불러주세요").await;
    let handler = PersonalizedReplyHandler::new(
        Arc::new(FixedSource("고객님, 예약 도와드릴게요")),
        tracker.clone(),
    );

    let response = handler.handle(&message("c1", "예약하고 싶어요")).await.unwrap();

    // rapport 5: one emoji of the neutral set
    assert_eq!(
        response,
        HandlerResponse::Reply("님, 예약 도와드릴게요 😊".to_string())
    );
}

/// **Test: a failing reply source surfaces as a handler error.**
#[tokio::test]
async fn test_reply_source_error_propagates() {
    let handler = PersonalizedReplyHandler::new(Arc::new(FailingSource), tracker());
    let err = handler.handle(&message("c1", "안녕하세요")).await.unwrap_err();
    assert!(matches!(err, CbotError::Handler(HandlerError::Reply(_))));
}

/// **Test: one turn through the full chain replies and moves the context forward.**
#[tokio::test]
async fn test_full_chain_single_turn() {
    let tracker = tracker();
    let chain = full_chain(&tracker);

    let response = chain.handle(&message("c1", "정말 피곤해요")).await.unwrap();

    match response {
        HandlerResponse::Reply(text) => {
            assert!(text.contains("힐링"));
            assert!(text.ends_with("😅"));
        }
        other => panic!("expected Reply, got {other:?}"),
    }

    let ctx = tracker.context("c1").await.unwrap();
    assert_eq!(ctx.total_interactions(), 1);
    assert_eq!(ctx.current_mood, Mood::Tired);
    assert_eq!(ctx.rapport_level(), 6);
}

/// **Test: repeated positive turns walk the transition table and raise rapport.**
#[tokio::test]
async fn test_full_chain_second_turn_relaxes() {
    let tracker = tracker();
    let chain = full_chain(&tracker);

    chain.handle(&message("c1", "정말 피곤해요")).await.unwrap();
    let response = chain.handle(&message("c1", "정말 피곤해요")).await.unwrap();

    // rapport 6 during the second reply: two tired emoji
    assert!(matches!(response, HandlerResponse::Reply(ref text) if text.ends_with("😅💤")));

    let ctx = tracker.context("c1").await.unwrap();
    assert_eq!(ctx.total_interactions(), 2);
    assert_eq!(ctx.current_mood, Mood::Relaxed);
    assert_eq!(ctx.rapport_level(), 7);
}

/// **Test: an empty message fails in before() and leaves the tracker untouched.**
#[tokio::test]
async fn test_full_chain_rejects_empty_message() {
    let tracker = tracker();
    let chain = full_chain(&tracker);

    assert!(chain.handle(&message("c1", "")).await.is_err());
    assert!(tracker.is_empty().await);
}

/// **Test: customers sharing one tracker do not see each other's context.**
#[tokio::test]
async fn test_full_chain_isolates_customers() {
    let tracker = tracker();
    let chain = full_chain(&tracker);

    chain.handle(&message("a", "정말 피곤해요")).await.unwrap();
    chain.handle(&message("b", "피부 관리 어떻게 해요?")).await.unwrap();

    let a = tracker.context("a").await.unwrap();
    let b = tracker.context("b").await.unwrap();
    assert_eq!(a.current_mood, Mood::Tired);
    assert!(a.topics_mentioned().is_empty());
    assert_eq!(b.current_mood, Mood::Curious);
    assert_eq!(b.topics_mentioned(), ["피부관리"]);
}
