//! # Rapport Tracker
//!
//! Keeps one [`ConversationContext`](rapport_core::ConversationContext) per customer and exposes
//! the write path (`record_interaction`, `update_mood`, `infer_salutation`) and the read path
//! (`personalize`, `greeting`, `response_modifier`, `report`) used while answering a message.
//!
//! - [`ConversationTracker`]: owned, synchronous; inject a seeded RNG for deterministic output.
//! - [`SharedTracker`]: cloneable handle guarding one tracker with a single async mutex, for
//!   handlers serving messages concurrently.
//!
//! ## Logging
//!
//! Context creation is logged at `info`; every mutation emits a `debug` event with
//! `customer_id` so a session can be replayed from logs.

mod cues;
mod report;
mod shared;
mod tracker;

pub use cues::{extract_topics, infer_style};
pub use report::{ConsultationGrade, ConsultationReport, ResponseModifier};
pub use shared::SharedTracker;
pub use tracker::ConversationTracker;
