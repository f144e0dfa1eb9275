//! Maps inbound chat events to the reply (if any) the bot should send.
//!
//! Everything here is pure: sending the reply is left to the caller.

use crate::base::{
    config::Config,
    replies,
    types::{ChatEvent, InboundEvent, OutboundReply},
};

use super::responder;

/// Routes an event to its handler by kind.
pub fn route_event(event: &ChatEvent, config: &Config) -> Option<OutboundReply> {
    match event {
        ChatEvent::Mention(event) => Some(handle_mention(event, &config.target_user_id)),
        ChatEvent::Message(event) => handle_message(event, &config.target_user_id),
    }
}

/// Every mention gets a greeting; the target user gets a friendlier one.
pub fn handle_mention(event: &InboundEvent, target_user_id: &str) -> OutboundReply {
    let text = if event.user_id == target_user_id {
        replies::target_mention_greeting(&event.user_id)
    } else {
        replies::mention_greeting(&event.user_id)
    };

    OutboundReply::threaded(&event.channel_id, event.reply_thread_ts(), text)
}

/// Only messages the target user wrote get a reply; bot posts and system notices never do.
pub fn handle_message(event: &InboundEvent, target_user_id: &str) -> Option<OutboundReply> {
    if event.is_bot_message() || !event.is_user_message() || event.user_id != target_user_id {
        return None;
    }

    let response = responder::generate_response(&event.text);
    let text = format!("{} {}", replies::mention(&event.user_id), response);

    Some(OutboundReply::threaded(&event.channel_id, event.reply_thread_ts(), text))
}
