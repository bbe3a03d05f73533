//! # cbot-core
//!
//! Core types and traits for the clinic chat bot: [`Handler`], [`Message`], [`Customer`],
//! [`HandlerResponse`], the error types, and tracing initialization. Transport-agnostic; used by
//! handler-chain, handlers and cbot-cli.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{CbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{Customer, Handler, HandlerResponse, Message, MessageDirection};
