//! Integration tests for [`SharedTracker`]: concurrent writers for one customer lose no updates,
//! customers stay isolated, and clones share state.

use rapport_core::{InteractionQuality, Mood};
use rapport_tracker::{ConversationTracker, SharedTracker};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_messages_for_one_customer_are_all_counted() {
    let tracker = SharedTracker::new(ConversationTracker::with_seed(3));

    let mut tasks = Vec::new();
    for i in 0..64 {
        let tracker = tracker.clone();
        tasks.push(tokio::spawn(async move {
            tracker
                .record_interaction("vip", &format!("메시지 {i}"))
                .await;
            tracker
                .update_mood("vip", Mood::Happy, InteractionQuality::Positive)
                .await;
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let ctx = tracker.context("vip").await.unwrap();
    assert_eq!(ctx.total_interactions(), 64);
    assert_eq!(ctx.rapport_level(), 10);
}

#[tokio::test]
async fn customers_are_isolated() {
    let tracker = SharedTracker::new(ConversationTracker::with_seed(3));

    tracker.record_interaction("a", "주름 관리 궁금해요").await;
    tracker
        .update_mood("b", Mood::Dissatisfied, InteractionQuality::Negative)
        .await;

    let a = tracker.context("a").await.unwrap();
    let b = tracker.context("b").await.unwrap();
    assert_eq!(a.rapport_level(), 5);
    assert_eq!(a.topics_mentioned(), ["피부관리", "주름"]);
    assert_eq!(b.rapport_level(), 4);
    assert!(b.topics_mentioned().is_empty());
    assert_eq!(tracker.len().await, 2);
}

#[tokio::test]
async fn clones_share_one_tracker() {
    let tracker = SharedTracker::new(ConversationTracker::with_seed(3));
    let other = tracker.clone();

    other.infer_salutation("c", "민지님으로 불러주세요").await;
    let out = tracker.personalize("c", "고객님 반가워요", Mood::Happy).await;

    assert!(out.starts_with("님 반가워요"), "{out}");
    assert!(out.ends_with("😊"), "{out}");
}

#[tokio::test]
async fn with_runs_multi_step_update_atomically() {
    let tracker = SharedTracker::default();
    let (mood, rapport) = tracker
        .with(|t| {
            t.record_interaction("d", "정말 피곤해요");
            let mood = t.update_mood("d", Mood::Tired, InteractionQuality::Positive);
            (mood, t.get_or_create("d").rapport_level())
        })
        .await;

    assert_eq!(mood, Mood::Tired);
    assert_eq!(rapport, 6);
    assert!(!tracker.is_empty().await);
}

#[tokio::test]
async fn snapshot_restore_through_shared_handle() {
    let source = SharedTracker::new(ConversationTracker::with_seed(1));
    source.record_interaction("x", "예약하고 싶어요").await;
    let report = source.report("x").await;
    assert_eq!(report.total_interactions, 1);

    let target = SharedTracker::new(ConversationTracker::with_seed(1));
    target.restore(source.snapshot().await).await;
    assert_eq!(target.get_or_create("x").await, source.get_or_create("x").await);
}
