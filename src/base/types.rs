//! Event, reply, and result types shared across the bot.

/// Error type used throughout the crate.
pub type Err = anyhow::Error;
/// Result with the crate error type.
pub type Res<T> = Result<T, Err>;
/// Result carrying no value.
pub type Void = Res<()>;

/// Message subtype Slack attaches to messages posted by bots and integrations.
pub const BOT_MESSAGE_SUBTYPE: &str = "bot_message";

/// Message subtypes that carry something a user wrote.
///
/// Every other subtype (`channel_join`, `channel_topic`, `pinned_item`, ...) is
/// a system notice.
pub const USER_MESSAGE_SUBTYPES: &[&str] = &["file_share", "me_message", "thread_broadcast"];

/// A single inbound chat event, flattened out of the transport's payload.
///
/// Fields the transport omits are left empty rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundEvent {
    /// The sender's user ID (may be empty for system or bot messages).
    pub user_id: String,
    /// Raw message text, including any `<@U...>` mentions.
    pub text: String,
    /// The channel the event was posted in.
    pub channel_id: String,
    /// Timestamp of the event's own message.
    pub ts: String,
    /// Timestamp of the parent message, when the event was posted inside a thread.
    pub thread_ts: Option<String>,
    /// Wire name of the message subtype (e.g. `bot_message`), if any.
    pub subtype: Option<String>,
}

impl InboundEvent {
    /// The thread a reply to this event belongs in.
    ///
    /// Replies stay in the existing thread, or open a new one under the event itself.
    pub fn reply_thread_ts(&self) -> &str {
        self.thread_ts.as_deref().unwrap_or(&self.ts)
    }

    /// Whether this event was posted by a bot.
    pub fn is_bot_message(&self) -> bool {
        self.subtype.as_deref() == Some(BOT_MESSAGE_SUBTYPE)
    }

    /// Whether this event is a message a user wrote, as opposed to a system notice.
    pub fn is_user_message(&self) -> bool {
        match self.subtype.as_deref() {
            None => true,
            Some(subtype) => USER_MESSAGE_SUBTYPES.iter().any(|allowed| *allowed == subtype),
        }
    }
}

/// The event kinds the bot subscribes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// The bot was @-mentioned.
    Mention(InboundEvent),
    /// Any message visible to the bot.
    Message(InboundEvent),
}

impl ChatEvent {
    /// Short label for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            ChatEvent::Mention(_) => "app_mention",
            ChatEvent::Message(_) => "message",
        }
    }

    /// The event payload, regardless of kind.
    pub fn inner(&self) -> &InboundEvent {
        match self {
            ChatEvent::Mention(event) | ChatEvent::Message(event) => event,
        }
    }
}

/// A reply ready to be handed to the chat client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    /// Channel to post into.
    pub channel_id: String,
    /// Message text, Slack mrkdwn.
    pub text: String,
    /// Thread to post into; `None` posts at the channel's top level.
    pub thread_ts: Option<String>,
}

impl OutboundReply {
    /// Creates a reply threaded under `thread_ts`.
    pub fn threaded(channel_id: impl Into<String>, thread_ts: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel_id: channel_id.into(),
            text: text.into(),
            thread_ts: Some(thread_ts.into()),
        }
    }
}
