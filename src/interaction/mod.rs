//! Event handling and user interactions for crayfish-bot.
//!
//! This module provides functionality for handling chat events:
//! - Selecting a reply from message keywords
//! - Routing @-mentions and messages to the right reply
//! - Emitting replies through the chat client

pub mod chat_event;
pub mod responder;
pub mod router;
