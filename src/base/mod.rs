//! Core components, types, and utilities for the crayfish-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Fixed reply texts sent back to chat users.
//! - Event, reply, and result types.

pub mod config;
pub mod replies;
pub mod types;
