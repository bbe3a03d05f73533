//! # Core Types
//!
//! ## Mood
//!
//! Closed set of customer moods. Parsing an unknown label either fails ([`std::str::FromStr`])
//! or degrades to [`Mood::Neutral`] ([`Mood::parse_lossy`]).
//!
//! ## ConversationContext
//!
//! One record per customer. Fields that carry invariants (customer id, rapport bounds, topic
//! cap, interaction counter, session start) are private and only change through methods.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tables::{DEFAULT_SALUTATION, MAX_TOPICS, MAX_RAPPORT, MIN_RAPPORT, INITIAL_RAPPORT};

/// Customer mood as tracked across a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    #[default]
    Neutral,
    Tired,
    Curious,
    Dissatisfied,
    Worried,
    Happy,
    Relaxed,
    Frustrated,
    Satisfied,
    Confused,
    Relieved,
    Anxious,
    Delighted,
    Disappointed,
}

impl Mood {
    pub const ALL: [Mood; 14] = [
        Mood::Neutral,
        Mood::Tired,
        Mood::Curious,
        Mood::Dissatisfied,
        Mood::Worried,
        Mood::Happy,
        Mood::Relaxed,
        Mood::Frustrated,
        Mood::Satisfied,
        Mood::Confused,
        Mood::Relieved,
        Mood::Anxious,
        Mood::Delighted,
        Mood::Disappointed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Tired => "tired",
            Mood::Curious => "curious",
            Mood::Dissatisfied => "dissatisfied",
            Mood::Worried => "worried",
            Mood::Happy => "happy",
            Mood::Relaxed => "relaxed",
            Mood::Frustrated => "frustrated",
            Mood::Satisfied => "satisfied",
            Mood::Confused => "confused",
            Mood::Relieved => "relieved",
            Mood::Anxious => "anxious",
            Mood::Delighted => "delighted",
            Mood::Disappointed => "disappointed",
        }
    }

    /// Parses a mood label, falling back to `Neutral` for anything unknown.
    pub fn parse_lossy(label: &str) -> Mood {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood: {0}")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Mood::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// How the last exchange landed with the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionQuality {
    Positive,
    Negative,
}

/// Register the assistant should use with a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStyle {
    #[default]
    Formal,
    Friendly,
    Casual,
}

impl ConversationStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationStyle::Formal => "formal",
            ConversationStyle::Friendly => "friendly",
            ConversationStyle::Casual => "casual",
        }
    }
}

impl fmt::Display for ConversationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-customer conversation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationContext {
    customer_id: String,
    /// Mood after the most recent update
    pub current_mood: Mood,
    topics_mentioned: Vec<String>,
    rapport_level: u8,
    /// Honorific substituted for the generic placeholder in replies
    pub preferred_salutation: String,
    pub conversation_style: ConversationStyle,
    /// Most recent inbound text
    pub last_message: String,
    total_interactions: u64,
    session_start: DateTime<Utc>,
}

impl ConversationContext {
    /// Creates a context with defaults; `session_start` is now.
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            current_mood: Mood::Neutral,
            topics_mentioned: Vec::new(),
            rapport_level: INITIAL_RAPPORT,
            preferred_salutation: DEFAULT_SALUTATION.to_string(),
            conversation_style: ConversationStyle::default(),
            last_message: String::new(),
            total_interactions: 0,
            session_start: Utc::now(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Topics, oldest first.
    pub fn topics_mentioned(&self) -> &[String] {
        &self.topics_mentioned
    }

    /// Up to `n` most recent topics, oldest first.
    pub fn recent_topics(&self, n: usize) -> &[String] {
        let start = self.topics_mentioned.len().saturating_sub(n);
        &self.topics_mentioned[start..]
    }

    pub fn rapport_level(&self) -> u8 {
        self.rapport_level
    }

    pub fn total_interactions(&self) -> u64 {
        self.total_interactions
    }

    pub fn session_start(&self) -> DateTime<Utc> {
        self.session_start
    }

    /// Sets rapport, clamped to the valid range.
    pub fn set_rapport_level(&mut self, level: u8) {
        self.rapport_level = level.clamp(MIN_RAPPORT, MAX_RAPPORT);
    }

    /// Moves rapport one step in the direction of `quality`, clamped.
    pub fn adjust_rapport(&mut self, quality: InteractionQuality) {
        self.rapport_level = match quality {
            InteractionQuality::Positive => (self.rapport_level + 1).min(MAX_RAPPORT),
            InteractionQuality::Negative => self.rapport_level.saturating_sub(1).max(MIN_RAPPORT),
        };
    }

    /// Stores an inbound message and bumps the interaction counter.
    pub fn note_message(&mut self, text: &str) {
        self.last_message = text.to_string();
        self.total_interactions += 1;
    }

    /// Appends `topic` if not already present, evicting the oldest past the cap.
    /// Returns whether the topic was new.
    pub fn push_topic(&mut self, topic: &str) -> bool {
        if self.topics_mentioned.iter().any(|t| t == topic) {
            return false;
        }
        self.topics_mentioned.push(topic.to_string());
        if self.topics_mentioned.len() > MAX_TOPICS {
            let excess = self.topics_mentioned.len() - MAX_TOPICS;
            self.topics_mentioned.drain(..excess);
        }
        true
    }

    /// Re-establishes invariants on a record loaded from outside (e.g. a JSON snapshot).
    pub fn normalize(&mut self) {
        self.rapport_level = self.rapport_level.clamp(MIN_RAPPORT, MAX_RAPPORT);
        if self.topics_mentioned.len() > MAX_TOPICS {
            let excess = self.topics_mentioned.len() - MAX_TOPICS;
            self.topics_mentioned.drain(..excess);
        }
    }
}
