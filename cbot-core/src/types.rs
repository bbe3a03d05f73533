//! Core types: customer, message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer identity. `id` is the opaque key every per-customer record is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub display_name: Option<String>,
}

impl Customer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
        }
    }
}

/// A single chat message between a customer and the clinic assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub customer: Customer,
    pub content: String,
    pub direction: MessageDirection,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Builds an incoming message with a fresh id and the current time.
    pub fn incoming(customer: Customer, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            customer,
            content: content.into(),
            direction: MessageDirection::Incoming,
            created_at: Utc::now(),
        }
    }

    pub fn customer_id(&self) -> &str {
        &self.customer.id
    }
}

/// Direction of the message (from customer or from assistant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach reply text.
    Reply(String),
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoming_message_gets_unique_id() {
        let a = Message::incoming(Customer::new("c1"), "안녕하세요");
        let b = Message::incoming(Customer::new("c1"), "안녕하세요");
        assert_ne!(a.id, b.id);
        assert_eq!(a.direction, MessageDirection::Incoming);
        assert_eq!(a.customer_id(), "c1");
    }

    #[tokio::test]
    async fn default_handler_methods_continue() {
        struct Noop;
        impl Handler for Noop {}

        let message = Message::incoming(Customer::new("c1"), "hi");
        assert!(Noop.before(&message).await.unwrap());
        assert_eq!(Noop.handle(&message).await.unwrap(), HandlerResponse::Continue);
        assert!(Noop.after(&message, &HandlerResponse::Stop).await.is_ok());
    }
}
