//! # Rapport Core
//!
//! Data model for per-customer conversation context and the static tables that drive it.
//! Used by `rapport-tracker` (mutation and personalization) and `emotion` (mood inference).
//!
//! ## Modules
//!
//! - [`types`] - Mood, InteractionQuality, ConversationStyle, ConversationContext
//! - [`tables`] - mood transitions, topic keywords, emoji sets, affirming phrases, markers

pub mod tables;
pub mod types;

pub use types::*;
