//! Service integrations for external APIs and clients.
//!
//! This module contains the chat service used by the crayfish-bot. The service
//! module defines both a generic trait and a concrete Slack implementation,
//! allowing for extensibility and easy testing.

pub mod chat;
