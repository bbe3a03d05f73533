//! # Handlers for the clinic chat bot
//!
//! Handler implementations that drive the conversation context tracker for each message:
//! logging, context bookkeeping (write path), personalized replies (read path), and clinic
//! knowledge search folded into replies.

mod context_handler;
mod knowledge;
mod logging;
mod reply_handler;
mod reply_source;

#[cfg(test)]
mod test;

pub use context_handler::ContextHandler;
pub use knowledge::{
    search_knowledge, KnowledgeDoc, KnowledgeMatch, KnowledgeReplySource, KNOWLEDGE_BASE,
    TREATMENT_KEYWORDS,
};
pub use logging::LoggingHandler;
pub use reply_handler::PersonalizedReplyHandler;
pub use reply_source::{ReplySource, TemplateReplySource};
